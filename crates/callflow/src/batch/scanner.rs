//! Input discovery for a batch run.
//!
//! The scanner checks the folder up front but reads it only when iterated,
//! and every iteration re-reads it, so the same scanner can be walked again.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, span, warn, Level};

use crate::core::{ConvertConfig, ConvertError};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Discovers convertible files directly inside one folder.
#[derive(Debug, Clone)]
pub struct Scanner {
    folder: PathBuf,
    patterns: Vec<Pattern>,
    limit: Option<usize>,
}

impl Scanner {
    /// Create a scanner for `folder` using the extensions and limit in `config`.
    ///
    /// Fails with [`ConvertError::NotFound`] when `folder` is missing or is
    /// not a directory.
    pub fn new(folder: impl Into<PathBuf>, config: &ConvertConfig) -> Result<Self, ConvertError> {
        let folder = folder.into();
        if !folder.is_dir() {
            return Err(ConvertError::not_found(folder));
        }

        let patterns = config
            .extensions
            .iter()
            .filter_map(|ext| {
                let ext = ext.trim_start_matches('.');
                Pattern::new(&format!("*.{}", Pattern::escape(ext))).ok()
            })
            .collect();

        Ok(Self {
            folder,
            patterns,
            limit: config.limit,
        })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// True when the file name matches one of the configured extensions.
    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_with(file_name, MATCH_OPTIONS))
    }

    /// Matching files in lexicographic file-name order, bounded by the limit.
    ///
    /// An unreadable folder yields no files.
    pub fn iter(&self) -> std::vec::IntoIter<PathBuf> {
        let scan_span = span!(Level::DEBUG, "scan_folder", folder = %self.folder.display());
        let _enter = scan_span.enter();

        let entries = match fs::read_dir(&self.folder) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Failed to read input folder");
                return Vec::new().into_iter();
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter(|entry| self.matches(&entry.file_name().to_string_lossy()))
            .map(|entry| entry.path())
            .collect();

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        let found = files.len();
        if let Some(limit) = self.limit {
            files.truncate(limit);
        }

        debug!(found, selected = files.len(), "Folder scanned");
        files.into_iter()
    }
}

impl<'a> IntoIterator for &'a Scanner {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "<html></html>").unwrap();
    }

    #[test]
    fn test_missing_folder_is_not_found() {
        let dir = tempdir().unwrap();
        let result = Scanner::new(dir.path().join("missing"), &ConvertConfig::default());
        assert!(matches!(result, Err(ConvertError::NotFound { .. })));
    }

    #[test]
    fn test_file_path_is_not_found() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.htm");
        let result = Scanner::new(dir.path().join("a.htm"), &ConvertConfig::default());
        assert!(matches!(result, Err(ConvertError::NotFound { .. })));
    }

    #[test]
    fn test_matches_extensions_case_insensitively() {
        let dir = tempdir().unwrap();
        let scanner = Scanner::new(dir.path(), &ConvertConfig::default()).unwrap();
        assert!(scanner.matches("call.htm"));
        assert!(scanner.matches("CALL.HTML"));
        assert!(!scanner.matches("call.md"));
        assert!(!scanner.matches("call.htm.bak"));
        assert!(!scanner.matches(".hidden.htm"));
    }

    #[test]
    fn test_sorted_filtered_and_restartable() {
        let dir = tempdir().unwrap();
        for name in ["c.html", "a.htm", "b.txt", "b.htm", ".x.htm"] {
            touch(dir.path(), name);
        }
        fs::create_dir(dir.path().join("d.htm")).unwrap();

        let scanner = Scanner::new(dir.path(), &ConvertConfig::default()).unwrap();
        let names = |scanner: &Scanner| -> Vec<String> {
            scanner
                .iter()
                .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
                .collect()
        };
        assert_eq!(names(&scanner), vec!["a.htm", "b.htm", "c.html"]);
        assert_eq!(names(&scanner), names(&scanner));
    }

    #[test]
    fn test_limit_keeps_first_in_order() {
        let dir = tempdir().unwrap();
        for name in ["3.htm", "1.htm", "2.htm"] {
            touch(dir.path(), name);
        }
        let config = ConvertConfig::default().with_limit(Some(2));
        let scanner = Scanner::new(dir.path(), &config).unwrap();
        let files: Vec<PathBuf> = scanner.into_iter().collect();
        assert_eq!(files, vec![dir.path().join("1.htm"), dir.path().join("2.htm")]);
    }

    #[test]
    fn test_empty_folder_yields_nothing() {
        let dir = tempdir().unwrap();
        let scanner = Scanner::new(dir.path(), &ConvertConfig::default()).unwrap();
        assert_eq!(scanner.iter().count(), 0);
    }
}
