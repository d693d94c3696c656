mod cursor;
pub use cursor::{SliceCursor, SliceCursorMut};
mod sequence;
pub use sequence::SliceMut;
