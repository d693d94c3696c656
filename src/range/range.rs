use super::RangeIterator;
use crate::{BidirCursor, Cursor, Sequence};
use num_traits::PrimInt;

/// Lazy integer sequence from `start` to `end` stepping by `pace`.
///
/// A `Range` is a dummy sequence generating its integers on the fly, it
/// materializes no storage. Like every [`Sequence`](trait.Sequence.html)
/// of this library it hands out a begin cursor and an end sentinel, and it
/// additionally implements `IntoIterator` so it can drive a `for` loop
/// directly.
///
/// Iteration stops once the current value has reached or passed `end` in
/// the direction of `pace`: a pace that does not evenly divide
/// `end - start` truncates, and a pace whose sign disagrees with the
/// `start` to `end` direction yields an empty sequence. The
/// [`end()`](struct.Range.html#method.end) sentinel is clamped to the
/// first value at or past `end` actually reached from `start` (`start`
/// itself for an empty range), so the exact-value cursor equality of
/// [`RangeIterator`](struct.RangeIterator.html) agrees with this rule and
/// a range wrapped in a [zip view](struct.Zip.html) terminates like any
/// other member. The clamped sentinel of a truncating pace lies less than
/// one pace past `end` and must be representable in the integer type.
///
/// ## Examples
///
/// ```
/// use lockstep::{range, range_step};
///
/// let mut values = Vec::new();
/// for i in range(5u32) {
///     values.push(i);
/// }
/// assert_eq!(values, vec![0, 1, 2, 3, 4]);
///
/// // Truncating pace and backward ranges.
/// let odd: Vec<i32> = range_step(1, 8, 2).into_iter().collect();
/// assert_eq!(odd, vec![1, 3, 5, 7]);
/// let down: Vec<i32> = range_step(5, 0, -1).into_iter().collect();
/// assert_eq!(down, vec![5, 4, 3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Range<T> {
    start: T,
    end: T,
    pace: T,
}

// Unsigned image of a primitive integer: its value for unsigned types,
// its two's complement for negative signed values, so that wrapping
// subtraction below yields exact distances. Every primitive integer fits
// one of the two conversions.
fn widen<T: PrimInt>(x: T) -> u128 {
    match x.to_u128() {
        Some(x) => x,
        None => x.to_i128().unwrap() as u128,
    }
}

// Unsigned distance from `lo` to `hi`, exact for any primitive integer
// span. Requires `lo <= hi`.
fn wide_diff<T: PrimInt>(hi: T, lo: T) -> u128 {
    widen(hi).wrapping_sub(widen(lo))
}

// Walked distance and pace magnitude of the range, in a domain wide
// enough for any primitive span, or `None` when the pace points away
// from the end.
fn span_and_magnitude<T: PrimInt>(
    start: T,
    end: T,
    pace: T,
) -> Option<(u128, u128)> {
    let zero = T::zero();
    if pace > zero && start < end {
        Some((wide_diff(end, start), wide_diff(pace, zero)))
    } else if pace < zero && start > end {
        Some((wide_diff(start, end), wide_diff(zero, pace)))
    } else {
        None
    }
}

// Number of values yielded from `start` to `end`: zero when the pace
// points away from the end, the truncating step count otherwise.
fn steps<T: PrimInt>(start: T, end: T, pace: T) -> usize {
    let (span, magnitude) = match span_and_magnitude(start, end, pace) {
        Some(sm) => sm,
        None => return 0,
    };
    let count = if span % magnitude == 0 {
        span / magnitude
    } else {
        span / magnitude + 1
    };
    match usize::try_from(count) {
        Ok(n) => n,
        Err(_) => panic!("range length overflows usize"),
    }
}

impl<T: PrimInt> Range<T> {
    /// Integer sequence over `[start, end)` stepping by `pace`.
    /// `pace` must not be zero.
    pub fn new(start: T, end: T, pace: T) -> Self {
        debug_assert!(pace != T::zero());
        Range { start, end, pace }
    }

    // The sentinel value: `end` when the pace divides the span exactly,
    // the first value past `end` in the direction of the pace when it
    // truncates, `start` when the range is empty.
    fn sentinel(&self) -> T {
        let (span, magnitude) =
            match span_and_magnitude(self.start, self.end, self.pace) {
                Some(sm) => sm,
                None => return self.start,
            };
        let rem = span % magnitude;
        if rem == 0 {
            return self.end;
        }
        // The adjustment is smaller than the pace magnitude and always
        // fits the positive side of the integer type.
        let adjust = match T::from(magnitude - rem) {
            Some(a) => a,
            None => panic!("range sentinel overflows the integer type"),
        };
        if self.pace > T::zero() {
            self.end + adjust
        } else {
            self.end - adjust
        }
    }

    /// Cursor at the first value of the range.
    pub fn begin(&self) -> RangeIterator<T> {
        RangeIterator::new(self.start, self.pace)
    }

    /// Sentinel cursor one past the last value of the range: the first
    /// value at or past `end` reached from `start`, or `start` itself
    /// when the pace points away from `end`.
    pub fn end(&self) -> RangeIterator<T> {
        RangeIterator::new(self.sentinel(), self.pace)
    }

    /// Reverse beginning, computed as `--end()`: one position before the
    /// sentinel, i.e the last value of the range. Driving it backward
    /// until [`rend()`](#method.rend) replays the range values in
    /// reverse order.
    pub fn rbegin(&self) -> RangeIterator<T> {
        let mut it = self.end();
        it.retreat();
        it
    }

    /// Reverse sentinel, computed as `--begin()`: one position before the
    /// first value.
    pub fn rend(&self) -> RangeIterator<T> {
        let mut it = self.begin();
        it.retreat();
        it
    }
}

impl<T: PrimInt> Sequence for Range<T> {
    type Cursor = RangeIterator<T>;

    fn begin(&self) -> Self::Cursor {
        Range::begin(self)
    }

    fn end(&self) -> Self::Cursor {
        Range::end(self)
    }

    fn len(&self) -> usize {
        steps(self.start, self.end, self.pace)
    }
}

impl<'a, T: PrimInt> Sequence for &'a Range<T> {
    type Cursor = RangeIterator<T>;

    fn begin(&self) -> Self::Cursor {
        Range::begin(*self)
    }

    fn end(&self) -> Self::Cursor {
        Range::end(*self)
    }

    fn len(&self) -> usize {
        steps(self.start, self.end, self.pace)
    }
}

/// Driving iterator of a [`Range`](struct.Range.html) `for` loop.
///
/// Yields the range values front to back, counting the remaining steps so
/// that front and back enumerate the same truncated set: the back end
/// yields the last value actually reached from the front, matching
/// [`rbegin()`](struct.Range.html#method.rbegin).
#[derive(Clone, Copy, Debug)]
pub struct RangeIter<T> {
    value: T,
    pace: T,
    remaining: usize,
}

impl<T: PrimInt> Iterator for RangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.value;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.value = self.value + self.pace;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: PrimInt> DoubleEndedIterator for RangeIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let mut last = RangeIterator::new(self.value, self.pace);
        last.advance_by(self.remaining);
        Some(last.value())
    }
}

impl<T: PrimInt> ExactSizeIterator for RangeIter<T> {}

impl<T: PrimInt> IntoIterator for Range<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        RangeIter {
            value: self.start,
            pace: self.pace,
            remaining: steps(self.start, self.end, self.pace),
        }
    }
}

impl<'a, T: PrimInt> IntoIterator for &'a Range<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        (*self).into_iter()
    }
}

/// Integer sequence over `[0, end)` stepping by one.
///
/// ## Examples
///
/// ```
/// use lockstep::range;
///
/// let squares: Vec<usize> = range(4usize).into_iter().map(|i| i * i).collect();
/// assert_eq!(squares, vec![0, 1, 4, 9]);
/// ```
pub fn range<T: PrimInt>(end: T) -> Range<T> {
    Range::new(T::zero(), end, T::one())
}

/// Integer sequence over `[start, end)` stepping by `pace`.
/// `pace` must not be zero; a negative pace walks downward.
///
/// ## Examples
///
/// ```
/// use lockstep::range_step;
///
/// let evens: Vec<u32> = range_step(0u32, 10u32, 2u32).into_iter().collect();
/// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
/// ```
pub fn range_step<T: PrimInt>(start: T, end: T, pace: T) -> Range<T> {
    Range::new(start, end, pace)
}

/// Index sequence over an existing sequence: `[0, sequence.len())`.
///
/// ## Examples
///
/// ```
/// use lockstep::iter_range;
///
/// let v = vec!['a', 'b', 'c'];
/// let indices: Vec<usize> = iter_range(&v).into_iter().collect();
/// assert_eq!(indices, vec![0, 1, 2]);
/// ```
pub fn iter_range<S: Sequence>(sequence: S) -> Range<usize> {
    Range::new(0, sequence.len(), 1)
}
