//! Core abstractions for call-flow conversion
//!
//! Shared types, the traits each pipeline stage implements, errors,
//! configuration and logging.

pub mod chumsky_utils;
mod config;
mod detector;
mod error;
mod extractor;
mod formatter;
pub mod logging;
mod text;
mod types;

pub use config::*;
pub use detector::*;
pub use error::*;
pub use extractor::*;
pub use formatter::*;
pub use logging::*;
pub use text::*;
pub use types::*;
