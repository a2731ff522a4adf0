//! Plugin implementations for each pipeline stage
//!
//! `html` extracts sections from exported pages, `mermaid` understands the
//! embedded diagram source, `markdown` formats the result, and the
//! orchestrator runs one document through all of them.

pub mod html;
pub mod markdown;
pub mod mermaid;
pub mod orchestrator;

pub use html::*;
pub use markdown::*;
pub use orchestrator::*;
