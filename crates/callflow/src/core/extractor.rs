//! Core extractor trait for locating sections in markup

use super::{ConvertError, Sections};

/// Core trait for document extractors
///
/// An extractor walks raw markup and returns the title, description and
/// diagram sections it recognises. Unrecognised structure is skipped; an
/// error is returned only when the markup cannot be traversed at all.
pub trait Extractor: Send + Sync {
    /// Extract sections from raw markup
    fn extract(&self, input: &str) -> Result<Sections, ConvertError>;

    /// Get the name of this extractor
    fn name(&self) -> &'static str;
}
