mod iterator;
pub use iterator::RangeIterator;
mod range;
pub use range::{iter_range, range, range_step, Range, RangeIter};
