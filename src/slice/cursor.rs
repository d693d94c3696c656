use crate::{BidirCursor, Cursor};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// Read-only cursor over a borrowed in-memory sequence.
///
/// The cursor pairs the borrowed storage with a position index.
/// Dereferencing yields a shared reference living as long as the borrow
/// the cursor was obtained from, and inherits the bound checking of slice
/// indexing: dereferencing an out-of-range position panics.
///
/// Equality compares the position only, like pointer comparison between
/// iterators of a same container.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor over `slice` at position `index`.
    pub fn new(slice: &'a [T], index: usize) -> Self {
        SliceCursor { slice, index }
    }

    /// The position this cursor denotes.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<'a, T> Clone for SliceCursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceCursor<'a, T> {}

/// The uninitialized cursor: an empty sequence at position `0`.
/// Scratch state only meant to be overwritten by assignment.
impl<'a, T> Default for SliceCursor<'a, T> {
    fn default() -> Self {
        SliceCursor {
            slice: &[],
            index: 0,
        }
    }
}

impl<'a, T> PartialEq for SliceCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<'a, T> Eq for SliceCursor<'a, T> {}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    // Position moves wrap around so that the one-before-begin reverse
    // sentinel is representable; such positions compare fine and are out
    // of the dereference contract.
    fn advance(&mut self) {
        self.index = self.index.wrapping_add(1);
    }

    fn advance_by(&mut self, n: usize) {
        self.index = self.index.wrapping_add(n);
    }

    unsafe fn get(&self) -> &'a T {
        &self.slice[self.index]
    }
}

impl<'a, T> BidirCursor for SliceCursor<'a, T> {
    fn retreat(&mut self) {
        self.index = self.index.wrapping_sub(1);
    }

    fn retreat_by(&mut self, n: usize) {
        self.index = self.index.wrapping_sub(n);
    }
}

/// Read-write cursor over a mutably borrowed in-memory sequence.
///
/// The cursor holds the base address of the borrowed storage and a
/// position index, in the fashion of a raw element pointer. Dereferencing
/// yields a mutable reference living as long as the mutable borrow the
/// cursor was obtained from.
///
/// ## Safety
///
/// [`get()`](trait.Cursor.html#tymethod.get) performs no bound check at
/// all on this cursor: by contract, the user is responsible for ensuring
/// that the position lies inside the borrowed sequence, that the sequence
/// outlives the returned reference, and that no two references to the same
/// position are alive at once. The [`Iter`](struct.Iter.html) driver and
/// the [zip views](struct.Zip.html) built on top of it uphold this
/// contract by dereferencing each position exactly once before the
/// sentinel.
#[derive(Debug)]
pub struct SliceCursorMut<'a, T> {
    base: NonNull<T>,
    index: usize,
    marker: PhantomData<&'a mut [T]>,
}

impl<'a, T> SliceCursorMut<'a, T> {
    pub(crate) fn new(base: NonNull<T>, index: usize) -> Self {
        SliceCursorMut {
            base,
            index,
            marker: PhantomData,
        }
    }

    /// The position this cursor denotes.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<'a, T> Clone for SliceCursorMut<'a, T> {
    fn clone(&self) -> Self {
        SliceCursorMut {
            base: self.base,
            index: self.index,
            marker: PhantomData,
        }
    }
}

/// The uninitialized cursor: a dangling base at position `0`.
/// Scratch state only meant to be overwritten by assignment.
impl<'a, T> Default for SliceCursorMut<'a, T> {
    fn default() -> Self {
        SliceCursorMut {
            base: NonNull::dangling(),
            index: 0,
            marker: PhantomData,
        }
    }
}

impl<'a, T> PartialEq for SliceCursorMut<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<'a, T> Eq for SliceCursorMut<'a, T> {}

impl<'a, T> Cursor for SliceCursorMut<'a, T> {
    type Item = &'a mut T;

    fn advance(&mut self) {
        self.index = self.index.wrapping_add(1);
    }

    fn advance_by(&mut self, n: usize) {
        self.index = self.index.wrapping_add(n);
    }

    unsafe fn get(&self) -> &'a mut T {
        // SAFETY:
        // By the contract of this method, the position lies inside the
        // sequence mutably borrowed for 'a and no other reference to it
        // is alive.
        &mut *self.base.as_ptr().add(self.index)
    }
}

impl<'a, T> BidirCursor for SliceCursorMut<'a, T> {
    fn retreat(&mut self) {
        self.index = self.index.wrapping_sub(1);
    }

    fn retreat_by(&mut self, n: usize) {
        self.index = self.index.wrapping_sub(n);
    }
}

#[cfg(test)]
mod tests {
    use crate::{BidirCursor, Cursor, Sequence, SliceMut};

    #[test]
    fn shared_cursor() {
        let v = [10u32, 20, 30];
        let s = &v[..];
        let mut cur = s.begin();
        assert_eq!(unsafe { cur.get() }, &10);
        cur.advance();
        assert_eq!(unsafe { cur.get() }, &20);
        cur.advance_by(1);
        assert_eq!(unsafe { cur.get() }, &30);
        cur.advance();
        assert_eq!(cur, s.end());
        cur.retreat_by(3);
        assert_eq!(cur, s.begin());
    }

    #[test]
    fn mut_cursor_writes_through() {
        let mut v = vec![1i32, 2, 3];
        let s = SliceMut::from(&mut v);
        let mut cur = s.begin();
        let end = s.end();
        while cur != end {
            let element = unsafe { cur.get() };
            *element *= 10;
            cur.advance();
        }
        assert_eq!(v, vec![10, 20, 30]);
    }

    #[test]
    fn positional_equality() {
        let a = [1u8, 2, 3];
        let b = [4u8, 5, 6];
        // Cursors compare by position, whatever they point into.
        assert_eq!((&a[..]).begin(), (&b[..]).begin());
        let mut cur = (&a[..]).begin();
        cur.advance();
        assert_ne!(cur, (&a[..]).begin());
    }

    #[test]
    #[should_panic]
    fn shared_cursor_out_of_range() {
        let v = [1u8; 2];
        let end = (&v[..]).end();
        let _ = unsafe { end.get() };
    }
}
