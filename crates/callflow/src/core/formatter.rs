//! Core formatter trait for turning sections into output blocks

use super::{FormattedDocument, Sections};

/// Core trait for document formatters
///
/// Formatting is deterministic and depends only on the sections given.
pub trait Formatter: Send + Sync {
    /// Map extracted sections onto a formatted document
    fn format(&self, sections: &Sections) -> FormattedDocument;

    /// Get the name of this formatter
    fn name(&self) -> &'static str;

    /// Get the output format produced
    fn format_name(&self) -> &'static str;
}
