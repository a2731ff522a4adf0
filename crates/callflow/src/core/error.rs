//! Core error types for call-flow conversion
//!
//! This module defines the error taxonomy shared by the scanner, extractor,
//! formatter and writer.

use std::path::PathBuf;
use thiserror::Error;

/// Core error types for call-flow conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input folder is missing or is not a directory. Fatal for a batch.
    #[error("Input folder not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A single document could not be traversed. The file is skipped.
    #[error("Parse error: {message}")]
    ParseError { message: String },

    /// Reading or writing a single file failed. The file is skipped.
    #[error("IO error on {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Create a new not-found error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Create a new IO error bound to the path that failed
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Short, stable name of the error class, used in batch reports
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::ParseError { .. } => "parse",
            Self::IoError { .. } => "io",
        }
    }
}
