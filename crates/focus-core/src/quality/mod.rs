pub mod batch;
pub mod laplacian;
pub mod verdict;

pub use verdict::{score, Verdict};
