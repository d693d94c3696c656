use super::{SliceCursor, SliceCursorMut};
use crate::{IntoSequence, Sequence};
use std::marker::PhantomData;
use std::ptr::NonNull;

impl<'a, T> Sequence for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new(*self, 0)
    }

    fn end(&self) -> Self::Cursor {
        SliceCursor::new(*self, <[T]>::len(self))
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new((*self).as_slice(), 0)
    }

    fn end(&self) -> Self::Cursor {
        let slice = (*self).as_slice();
        SliceCursor::new(slice, slice.len())
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursor::new(*self, 0)
    }

    fn end(&self) -> Self::Cursor {
        SliceCursor::new(*self, N)
    }

    fn len(&self) -> usize {
        N
    }
}

/// Mutably borrowed contiguous storage presented as a
/// [`Sequence`](trait.Sequence.html).
///
/// The wrapper consumes a mutable borrow of a slice, array or
/// `std::vec::Vec` and captures the storage base address from that borrow,
/// so the [`SliceCursorMut`](struct.SliceCursorMut.html) cursors it hands
/// out write through a pointer carrying mutable provenance. It is built
/// with `From` on the mutable borrow, or implicitly by the
/// [`zip!`](macro.zip.html) macro through
/// [`IntoSequence`](trait.IntoSequence.html).
///
/// ## Examples
///
/// ```
/// use lockstep::{zip, Sequence, SliceMut};
///
/// let mut v = vec![1u32, 2, 3];
/// let s = SliceMut::from(&mut v);
/// assert_eq!(s.len(), 3);
/// for (x,) in zip!(s) {
///     *x += 1;
/// }
/// assert_eq!(v, vec![2, 3, 4]);
/// ```
#[derive(Debug)]
pub struct SliceMut<'a, T> {
    base: NonNull<T>,
    len: usize,
    marker: PhantomData<&'a mut [T]>,
}

impl<'a, T> From<&'a mut [T]> for SliceMut<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        let len = slice.len();
        // Slice base pointers are never null, including for empty slices.
        let base = match NonNull::new(slice.as_mut_ptr()) {
            Some(base) => base,
            None => NonNull::dangling(),
        };
        SliceMut {
            base,
            len,
            marker: PhantomData,
        }
    }
}

impl<'a, T> From<&'a mut Vec<T>> for SliceMut<'a, T> {
    fn from(vec: &'a mut Vec<T>) -> Self {
        SliceMut::from(vec.as_mut_slice())
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for SliceMut<'a, T> {
    fn from(array: &'a mut [T; N]) -> Self {
        SliceMut::from(&mut array[..])
    }
}

impl<'a, T> Sequence for SliceMut<'a, T> {
    type Cursor = SliceCursorMut<'a, T>;

    fn begin(&self) -> Self::Cursor {
        SliceCursorMut::new(self.base, 0)
    }

    fn end(&self) -> Self::Cursor {
        SliceCursorMut::new(self.base, self.len)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> IntoSequence for &'a mut [T] {
    type Sequence = SliceMut<'a, T>;

    fn into_sequence(self) -> Self::Sequence {
        SliceMut::from(self)
    }
}

impl<'a, T> IntoSequence for &'a mut Vec<T> {
    type Sequence = SliceMut<'a, T>;

    fn into_sequence(self) -> Self::Sequence {
        SliceMut::from(self)
    }
}

impl<'a, T, const N: usize> IntoSequence for &'a mut [T; N] {
    type Sequence = SliceMut<'a, T>;

    fn into_sequence(self) -> Self::Sequence {
        SliceMut::from(self)
    }
}
