use crate::{BidirCursor, Cursor};
use num_traits::PrimInt;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Deref, DerefMut, Sub, SubAssign};

// Position offsets are counted in `usize` positions and converted to the
// range integer type before scaling by the pace.
fn offset<T: PrimInt>(n: usize) -> T {
    match T::from(n) {
        Some(n) => n,
        None => panic!("position offset overflows the range integer type"),
    }
}

/// Integer cursor of a [`Range`](struct.Range.html).
///
/// The cursor state is the current integer `value`; the `pace` is fixed at
/// construction, copied into every cursor derived from the same range, and
/// never compared. Stepping the cursor forward adds the pace to the value,
/// stepping backward subtracts it, and offset moves of `n` positions scale
/// the pace by `n` in a single operation.
///
/// Equality and ordering compare the current value only.
///
/// Dereferencing yields the current value: by copy through
/// [`value()`](struct.RangeIterator.html#method.value) or
/// [`Cursor::get()`](trait.Cursor.html#tymethod.get), by reference through
/// `Deref`/`DerefMut` on a mutable binding.
///
/// ## Examples
///
/// ```
/// use lockstep::{Cursor, RangeIterator};
///
/// let mut it = RangeIterator::new(0i64, 3i64);
/// it.advance();
/// assert_eq!(it.value(), 3);
/// it += 2; // Two positions forward: 2 * pace.
/// assert_eq!(it.value(), 9);
///
/// // Cursors at the same value compare equal whatever their pace.
/// assert_eq!(it, RangeIterator::new(9i64, 1i64));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RangeIterator<T> {
    value: T,
    pace: T,
}

impl<T: PrimInt> RangeIterator<T> {
    /// Cursor at `value` stepping by `pace`.
    pub fn new(value: T, pace: T) -> Self {
        debug_assert!(pace != T::zero());
        RangeIterator { value, pace }
    }

    /// The integer this cursor currently points to.
    pub fn value(&self) -> T {
        self.value
    }

    /// The fixed step applied by one position move.
    pub fn pace(&self) -> T {
        self.pace
    }
}

/// The uninitialized cursor: value `0`, pace `1`.
/// Scratch state only meant to be overwritten by assignment.
impl<T: PrimInt> Default for RangeIterator<T> {
    fn default() -> Self {
        RangeIterator {
            value: T::zero(),
            pace: T::one(),
        }
    }
}

impl<T: PrimInt> Cursor for RangeIterator<T> {
    type Item = T;

    fn advance(&mut self) {
        self.value = self.value + self.pace;
    }

    fn advance_by(&mut self, n: usize) {
        self.value = self.value + self.pace * offset::<T>(n);
    }

    unsafe fn get(&self) -> T {
        self.value
    }
}

impl<T: PrimInt> BidirCursor for RangeIterator<T> {
    fn retreat(&mut self) {
        self.value = self.value - self.pace;
    }

    fn retreat_by(&mut self, n: usize) {
        self.value = self.value - self.pace * offset::<T>(n);
    }
}

impl<T: PrimInt> PartialEq for RangeIterator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: PrimInt> Eq for RangeIterator<T> {}

impl<T: PrimInt> PartialOrd for RangeIterator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PrimInt> Ord for RangeIterator<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: PrimInt> Deref for RangeIterator<T> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: PrimInt> DerefMut for RangeIterator<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: PrimInt> AddAssign<usize> for RangeIterator<T> {
    fn add_assign(&mut self, n: usize) {
        self.advance_by(n)
    }
}

impl<T: PrimInt> Add<usize> for RangeIterator<T> {
    type Output = Self;
    fn add(mut self, n: usize) -> Self {
        self += n;
        self
    }
}

impl<T: PrimInt> SubAssign<usize> for RangeIterator<T> {
    fn sub_assign(&mut self, n: usize) {
        self.retreat_by(n)
    }
}

impl<T: PrimInt> Sub<usize> for RangeIterator<T> {
    type Output = Self;
    fn sub(mut self, n: usize) -> Self {
        self -= n;
        self
    }
}
