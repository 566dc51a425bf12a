pub mod decode;

pub use decode::{decode, ImageSource};
