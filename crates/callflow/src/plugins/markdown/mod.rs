//! Markdown output

mod formatter;

pub use formatter::*;
