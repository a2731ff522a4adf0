//! Output persistence

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::{ConvertError, FormattedDocument};

/// Writes formatted documents to disk, overwriting existing files.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownWriter;

impl MarkdownWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serialize `document` to `dest`, creating the parent directory when
    /// missing. Returns the number of bytes written.
    pub fn write(&self, document: &FormattedDocument, dest: &Path) -> Result<usize, ConvertError> {
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                fs::create_dir_all(parent).map_err(|e| ConvertError::io_error(parent, e))?;
            }
        }

        let markdown = document.to_markdown();
        fs::write(dest, &markdown).map_err(|e| ConvertError::io_error(dest, e))?;
        debug!(path = %dest.display(), bytes = markdown.len(), "Document written");
        Ok(markdown.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Block;
    use tempfile::tempdir;

    fn sample() -> FormattedDocument {
        let mut doc = FormattedDocument::new();
        doc.push(Block::heading(1, "Queue"));
        doc
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("call1.md");
        let bytes = MarkdownWriter::new().write(&sample(), &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "# Queue\n");
        assert_eq!(bytes, 8);
    }

    #[test]
    fn test_write_overwrites_silently() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("call1.md");
        fs::write(&dest, "stale content that is longer").unwrap();
        MarkdownWriter::new().write(&sample(), &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "# Queue\n");
    }

    #[test]
    fn test_write_creates_output_directory() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("out/nested/call1.md");
        MarkdownWriter::new().write(&sample(), &dest).unwrap();
        assert!(dest.exists());
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let dir = tempdir().unwrap();
        // A directory sits where the file should go
        let dest = dir.path().join("taken.md");
        fs::create_dir(&dest).unwrap();
        let result = MarkdownWriter::new().write(&sample(), &dest);
        assert!(matches!(result, Err(ConvertError::IoError { .. })));
    }
}
