pub mod consts;
pub mod error;
pub mod grid;
pub mod io;
pub mod job;
pub mod quality;
