mod iterator;
pub use iterator::ZipCursor;
mod zip;
pub use zip::Zip;
