//! HTML extraction for exported call-flow pages

pub mod dom;
mod extractor;

pub use extractor::*;
