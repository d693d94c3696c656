use crate::{Cursor, Sequence};

/// Driving loop over a [`Cursor`](trait.Cursor.html) and its end sentinel.
///
/// `Iter` adapts the positional protocol to `std::iter::Iterator` so that
/// sequences and views can drive Rust `for` loops: on each step the cursor
/// is compared against the sentinel, dereferenced, then advanced.
///
/// Because termination is the protocol equality test, a cursor with a
/// custom equality keeps its own termination rule when driven by `Iter`.
/// This is how [`Zip`](struct.Zip.html) views stop with their shortest
/// wrapped sequence: a [zip cursor](struct.ZipCursor.html) compares equal
/// to the sentinel as soon as any of its sub-cursors reaches its own end.
///
/// The sentinel must be reachable from the starting cursor by repeated
/// [`advance()`](trait.Cursor.html#tymethod.advance): the driver only
/// tests positions for equality and never checks bounds, like the
/// endpoints it was built from.
#[derive(Clone)]
pub struct Iter<C: Cursor> {
    cursor: C,
    sentinel: C,
}

impl<C: Cursor> Iter<C> {
    /// Build a driving loop walking from `cursor` to the `sentinel`
    /// position, excluded.
    pub fn new(cursor: C, sentinel: C) -> Self {
        Iter { cursor, sentinel }
    }

    /// Build a driving loop over the whole of `sequence`, i.e from
    /// [`begin()`](trait.Sequence.html#tymethod.begin) to
    /// [`end()`](trait.Sequence.html#tymethod.end).
    pub fn over<S: Sequence<Cursor = C>>(sequence: &S) -> Self {
        Iter::new(sequence.begin(), sequence.end())
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.sentinel {
            return None;
        }
        // SAFETY:
        // The cursor is not equal to the sentinel, hence, by the
        // reachability contract of the endpoints this loop was built from,
        // it denotes a valid position that has not been yielded yet.
        let item = unsafe { self.cursor.get() };
        self.cursor.advance();
        Some(item)
    }
}
