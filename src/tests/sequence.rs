extern crate rand;
use crate::{Cursor, Sequence};
use rand::random;

/// A vector of random values in `[0, 1000)` to iterate over.
pub fn rand_vec(n: usize) -> Vec<u32> {
    (0..n).map(|_| random::<u32>() % 1000).collect()
}

/// Elements of `s` collected by driving the positional protocol by hand:
/// the begin cursor is dereferenced and advanced until it compares equal
/// to the end sentinel.
pub fn collect<S: Sequence>(s: &S) -> Vec<<S::Cursor as Cursor>::Item> {
    let mut out = Vec::new();
    let end = s.end();
    let mut cursor = s.begin();
    while cursor != end {
        out.push(unsafe { cursor.get() });
        cursor.advance();
    }
    out
}

/// Protocol consistency checks holding for any well formed sequence,
/// i.e any sequence whose end sentinel is reachable from its begin
/// cursor.
pub fn test_sequence<S: Sequence>(s: &S) {
    let len = s.len();
    assert_eq!(s.is_empty(), len == 0);
    assert_eq!(s.begin() == s.end(), len == 0);

    // Driving begin to end one step at a time takes exactly len() steps.
    let mut cursor = s.begin();
    let mut steps = 0;
    while cursor != s.end() {
        cursor.advance();
        steps += 1;
    }
    assert_eq!(steps, len);

    // Offset advance reaches the sentinel in a single move.
    let mut cursor = s.begin();
    cursor.advance_by(len);
    assert!(cursor == s.end());

    // The std driver agrees with the hand driven loop.
    assert_eq!(crate::Iter::over(s).count(), len);

    // A copy of a cursor denotes the same position.
    let cursor = s.begin();
    assert!(cursor.clone() == cursor);
}
