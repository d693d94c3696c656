mod sequence;
pub use sequence::{collect, rand_vec, test_sequence};
