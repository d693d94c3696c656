/// Position inside a [`Sequence`](trait.Sequence.html).
///
/// `Cursor` is the iteration protocol shared by every adapter of this
/// library: a freely copyable value denoting a position inside a sequence.
/// A cursor is moved forward with
/// [`advance()`](trait.Cursor.html#tymethod.advance), dereferenced with
/// [`get()`](trait.Cursor.html#tymethod.get) and compared against the
/// sequence [end sentinel](trait.Sequence.html#tymethod.end) to detect loop
/// termination. The [`Iter`](struct.Iter.html) driver packages these three
/// operations into a `std::iter::Iterator` usable in `for` loops.
///
/// Equality between cursors is positional: it compares positions, never the
/// elements pointed to. Comparing cursors obtained from different sequences
/// is meaningless but harmless.
///
/// A default constructed cursor denotes an uninitialized position. It is
/// only meant as scratch storage before being assigned from another cursor
/// and must not be advanced or dereferenced.
pub trait Cursor: Clone + Default + PartialEq {
    /// Element obtained when dereferencing the cursor.
    /// Cursors over in-memory sequences yield references, with the
    /// mutability of the sequence borrow they were obtained from.
    /// Cursors over generated sequences yield values.
    type Item;

    /// Move the cursor one position forward.
    fn advance(&mut self);

    /// Move the cursor `n` positions forward.
    ///
    /// The default implementation performs `n` repeated
    /// [`advance()`](trait.Cursor.html#tymethod.advance). Cursors with a
    /// cheaper stepping operation override it.
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Dereference the cursor into the element it points to.
    ///
    /// ## Safety
    ///
    /// The cursor must denote a valid position of the sequence it was
    /// obtained from, i.e a position in `[begin(), end())`, and the
    /// sequence must outlive the returned element. Dereferencing a
    /// sentinel, a cursor outliving its sequence, or two overlapping
    /// mutable dereferences of the same position are undefined behavior
    /// bounded by the underlying storage contract. No runtime check is
    /// performed beyond what the underlying storage itself does.
    unsafe fn get(&self) -> Self::Item;
}

/// [`Cursor`](trait.Cursor.html) that can also step backward.
///
/// Sequences whose cursor implements this trait support reverse endpoints
/// and offset decrement. A [zip view](struct.Zip.html) cursor steps
/// backward only when every wrapped sequence's cursor implements
/// `BidirCursor`: composing in a single forward-only sequence removes the
/// capability from the whole view at compile time, there is no runtime
/// failure.
pub trait BidirCursor: Cursor {
    /// Move the cursor one position backward.
    fn retreat(&mut self);

    /// Move the cursor `n` positions backward with `n` repeated
    /// [`retreat()`](trait.BidirCursor.html#tymethod.retreat).
    fn retreat_by(&mut self, n: usize) {
        for _ in 0..n {
            self.retreat();
        }
    }
}

/// Ordered collection of elements exposing positional iteration.
///
/// A sequence hands out a [`begin()`](trait.Sequence.html#tymethod.begin)
/// cursor denoting its first element and an
/// [`end()`](trait.Sequence.html#tymethod.end) cursor denoting the
/// one-past-the-last position, the sentinel detecting loop termination.
/// The sequence is traversed by advancing the begin cursor until it
/// compares equal to the sentinel.
///
/// This trait is implemented for shared borrows of in-memory sequences
/// (slices, arrays, `std::vec::Vec`), for mutable borrows of the same
/// storage wrapped in [`SliceMut`](struct.SliceMut.html), for
/// [`Range`](struct.Range.html) integer sequences and for
/// [`Zip`](struct.Zip.html) views, so that all of them can be composed
/// with one another.
///
/// Sequences do not own resources and hand out cursors borrowing from
/// their creator: the storage wrapped by a sequence must outlive every
/// cursor derived from it, which the borrow checker enforces for the
/// implementations of this crate.
pub trait Sequence {
    /// The cursor type walking this sequence.
    type Cursor: Cursor;

    /// Cursor at the first position of the sequence.
    fn begin(&self) -> Self::Cursor;

    /// Sentinel cursor one past the last position of the sequence.
    fn end(&self) -> Self::Cursor;

    /// Number of positions between
    /// [`begin()`](trait.Sequence.html#tymethod.begin) and
    /// [`end()`](trait.Sequence.html#tymethod.end).
    fn len(&self) -> usize;

    /// Check whether the sequence holds no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Conversion of a borrowed collection into a
/// [`Sequence`](trait.Sequence.html).
///
/// This is the entry point of the [`zip!`](macro.zip.html) macro: anything
/// that already is a sequence converts to itself, while mutable borrows of
/// contiguous storage convert into [`SliceMut`](struct.SliceMut.html),
/// capturing their base address while the mutable borrow is directly at
/// hand. The conversion exists so that pointers derived later by the
/// cursors carry the provenance of the original mutable borrow.
pub trait IntoSequence {
    /// The sequence this collection converts into.
    type Sequence: Sequence;

    /// Wrap the collection into a sequence.
    fn into_sequence(self) -> Self::Sequence;
}

impl<S: Sequence> IntoSequence for S {
    type Sequence = S;

    fn into_sequence(self) -> S {
        self
    }
}

/// Driving loop adapting the [`Cursor`](trait.Cursor.html) protocol to
/// `std::iter::Iterator`.
mod iter;

/// Lazy integer sequences with a configurable pace.
///
/// A [`Range`](struct.Range.html) generates integers from a start value to
/// an end value without materializing storage. It is built from the
/// [`range()`](fn.range.html), [`range_step()`](fn.range_step.html) and
/// [`iter_range()`](fn.iter_range.html) factories.
pub mod range;

/// [`Sequence`](trait.Sequence.html) implementations for borrowed
/// in-memory storage: slices, arrays and `std::vec::Vec`, with the
/// [`SliceMut`](struct.SliceMut.html) wrapper for mutable borrows.
pub mod slice;

/// Lockstep traversal of several sequences at once.
///
/// A [`Zip`](struct.Zip.html) view wraps N borrowed sequences and walks
/// them jointly, yielding N-tuples of references. Iteration stops with the
/// shortest wrapped sequence. Views are built with the
/// [`zip!`](macro.zip.html) macro.
pub mod zip;

pub use crate::iter::Iter;
pub use crate::range::{iter_range, range, range_step, Range, RangeIterator};
pub use crate::slice::{SliceCursor, SliceCursorMut, SliceMut};
pub use crate::zip::{Zip, ZipCursor};

/// Public test module available at test time.
/// This module provides generic checks of the
/// [`Sequence`](../trait.Sequence.html) and [`Cursor`](../trait.Cursor.html)
/// protocol contract used by the unit tests of every adapter.
#[cfg(test)]
mod tests;
