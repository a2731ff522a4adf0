//! Conversion configuration
//!
//! A single value built once (usually by the CLI) and handed to every stage,
//! so nothing reads process-wide state.

use std::path::{Path, PathBuf};

/// File extensions picked up by the directory scanner by default
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["htm", "html"];

/// Extension given to every written document
pub const OUTPUT_EXTENSION: &str = "md";

/// Configuration for a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Maximum number of files to process, in lexicographic order
    pub limit: Option<usize>,
    /// Emit per-file diagnostics
    pub debug: bool,
    /// Where to write `.md` files; `None` writes next to each input
    pub output_dir: Option<PathBuf>,
    /// Input extensions, without the leading dot, matched case-insensitively
    pub extensions: Vec<String>,
    /// Append a call-queue summary when a diagram describes one
    pub summaries: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            limit: None,
            debug: false,
            output_dir: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            summaries: true,
        }
    }
}

impl ConvertConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_summaries(mut self, summaries: bool) -> Self {
        self.summaries = summaries;
        self
    }

    /// Destination for the Markdown produced from `input`.
    ///
    /// Same base name with the `.md` extension, in the configured output
    /// directory or alongside the input.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let file_name = input
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("output"))
            .with_extension(OUTPUT_EXTENSION);

        match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => input
                .parent()
                .map(|parent| parent.join(&file_name))
                .unwrap_or(file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConvertConfig::default();
        assert_eq!(config.limit, None);
        assert!(!config.debug);
        assert!(config.summaries);
        assert_eq!(config.extensions, vec!["htm", "html"]);
    }

    #[test]
    fn test_output_path_next_to_input() {
        let config = ConvertConfig::new();
        let out = config.output_path_for(Path::new("exports/call1.htm"));
        assert_eq!(out, PathBuf::from("exports/call1.md"));
    }

    #[test]
    fn test_output_path_in_output_dir() {
        let config = ConvertConfig::new().with_output_dir(Some(PathBuf::from("md")));
        let out = config.output_path_for(Path::new("exports/Front Desk.html"));
        assert_eq!(out, PathBuf::from("md/Front Desk.md"));
    }

    #[test]
    fn test_output_path_keeps_inner_dots() {
        let config = ConvertConfig::new();
        let out = config.output_path_for(Path::new("q.v2.htm"));
        assert_eq!(out, PathBuf::from("q.v2.md"));
    }
}
