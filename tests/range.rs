use lockstep::{iter_range, range, range_step, BidirCursor, Cursor, Sequence};

fn test_forward(r: lockstep::Range<i64>, expected: Vec<i64>) {
    // Through the for-loop driver.
    let values: Vec<i64> = r.into_iter().collect();
    assert_eq!(values, expected);

    // Through the raw positional protocol.
    let mut values = Vec::new();
    let mut cursor = r.begin();
    while cursor != r.end() {
        values.push(unsafe { cursor.get() });
        cursor.advance();
    }
    assert_eq!(values, expected);

    assert_eq!(r.len(), expected.len());
}

#[test]
fn range_test_unit_pace() {
    test_forward(range(5i64), vec![0, 1, 2, 3, 4]);
    test_forward(range_step(-3i64, 3, 1), vec![-3, -2, -1, 0, 1, 2]);
    test_forward(range(0i64), Vec::<i64>::new());
}

#[test]
fn range_test_pace() {
    test_forward(range_step(0i64, 10, 2), vec![0, 2, 4, 6, 8]);
    test_forward(range_step(1i64, 10, 3), vec![1, 4, 7]);
    test_forward(range_step(0i64, 5, 2), vec![0, 2, 4]);
    test_forward(range_step(10i64, 0, -2), vec![10, 8, 6, 4, 2]);
    test_forward(range_step(9i64, 0, -4), vec![9, 5, 1]);
    test_forward(range_step(0i64, 10, -1), Vec::<i64>::new());
}

#[test]
fn range_test_large() {
    let n: usize = range(1_000_000usize).into_iter().count();
    assert_eq!(n, 1_000_000);
}

#[test]
fn iter_range_test() {
    let v = vec!["a", "b", "c", "d", "e"];
    let indices: Vec<usize> = iter_range(&v).into_iter().collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);

    // Index ranges compose with the indexed sequence.
    for i in iter_range(&v) {
        assert!(!v[i].is_empty());
    }
}

#[test]
fn reverse_driving_test() {
    let r = range_step(2i32, 14, 4);
    let mut forward: Vec<i32> = r.into_iter().collect();

    let mut backward = Vec::new();
    let mut cursor = r.rbegin();
    while cursor != r.rend() {
        backward.push(cursor.value());
        cursor.retreat();
    }

    forward.reverse();
    assert_eq!(backward, forward);

    // The std reverse driver agrees.
    let rev: Vec<i32> = r.into_iter().rev().collect();
    assert_eq!(rev, backward);
}

#[test]
fn cursor_offset_test() {
    let r = range_step(0i32, 100, 5);
    let mut cursor = r.begin();
    cursor.advance_by(7);
    assert_eq!(cursor.value(), 35);
    assert_eq!((r.begin() + 7).value(), 35);
    assert_eq!((r.end() - 1).value(), 95);
    cursor.retreat_by(7);
    assert_eq!(cursor, r.begin());
}
