//! Folder-level batch conversion: discovery, per-file conversion, output.

mod driver;
mod scanner;
mod writer;

pub use driver::*;
pub use scanner::*;
pub use writer::*;
