//! Mermaid diagram support
//!
//! Kind detection for embedded diagram source, flowchart node/edge
//! extraction, and the call-queue summary built on top of it.

pub mod call_queue;
mod detector;
mod graph;

pub use call_queue::{is_call_queue, summarize};
pub use detector::*;
pub use graph::*;

/// Language tag used by Mermaid containers
pub const MERMAID_LANGUAGE: &str = "mermaid";
