//! Batch driver
//!
//! Walks the scanner's files in order and converts each one independently.
//! A failing file is recorded in the report and the run moves on; only a
//! missing input folder stops the whole batch.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, error, info, span, Level};

use super::{MarkdownWriter, Scanner};
use crate::core::{ConvertConfig, ConvertError, InputDocument};
use crate::plugins::Orchestrator;

const UTF8_BOM: char = '\u{feff}';

/// A file that could not be converted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    /// Stable error category: `parse` or `io`
    pub kind: String,
    pub message: String,
}

impl FileFailure {
    fn new(path: &Path, error: &ConvertError) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: error.kind().to_string(),
            message: error.to_string(),
        }
    }
}

/// Summary of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub folder: PathBuf,
    /// Files selected for processing (after the limit)
    pub discovered: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Output paths, in processing order
    pub written: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    fn new(folder: &Path) -> Self {
        Self {
            folder: folder.to_path_buf(),
            ..Self::default()
        }
    }

    /// True when every selected file converted
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    fn record_success(&mut self, output: PathBuf) {
        self.succeeded += 1;
        self.written.push(output);
    }

    fn record_failure(&mut self, failure: FileFailure) {
        self.failed += 1;
        self.failures.push(failure);
    }
}

/// Convert every matching file in `folder`.
///
/// Returns [`ConvertError::NotFound`] when the folder does not exist; every
/// other problem is per file and ends up in [`BatchReport::failures`].
pub fn run_batch(folder: impl AsRef<Path>, config: &ConvertConfig) -> Result<BatchReport, ConvertError> {
    let folder = folder.as_ref();
    let batch_span = span!(Level::INFO, "run_batch", folder = %folder.display());
    let _enter = batch_span.enter();

    let scanner = Scanner::new(folder, config)?;
    let orchestrator = Orchestrator::with_all_plugins(config);
    let writer = MarkdownWriter::new();

    let mut report = BatchReport::new(folder);
    for input in &scanner {
        report.discovered += 1;
        match convert_file(&input, config, &orchestrator, &writer) {
            Ok(output) => {
                info!(input = %input.display(), output = %output.display(), "Converted");
                report.record_success(output);
            }
            Err(e) => {
                error!(input = %input.display(), kind = e.kind(), error = %e, "Conversion failed");
                report.record_failure(FileFailure::new(&input, &e));
            }
        }
    }

    info!(
        discovered = report.discovered,
        succeeded = report.succeeded,
        failed = report.failed,
        "Batch completed"
    );
    Ok(report)
}

/// Read, convert and write one input, returning the output path
fn convert_file(
    input: &Path,
    config: &ConvertConfig,
    orchestrator: &Orchestrator,
    writer: &MarkdownWriter,
) -> Result<PathBuf, ConvertError> {
    let file_span = span!(Level::DEBUG, "convert_file", input = %input.display());
    let _enter = file_span.enter();

    let document = read_input(input)?;
    let conversion = orchestrator.convert(&document.markup)?;

    if config.debug {
        for (section, kind) in conversion
            .sections
            .diagrams()
            .iter()
            .zip(&conversion.diagram_kinds)
        {
            debug!(
                position = section.position,
                language = section.language.as_deref().unwrap_or(""),
                kind = kind.as_deref().unwrap_or("unknown"),
                "Diagram"
            );
        }
    }

    let output = config.output_path_for(document.path());
    writer.write(&conversion.document, &output)?;
    Ok(output)
}

/// Load an input as text; bytes that are not UTF-8 make it unparseable
fn read_input(input: &Path) -> Result<InputDocument, ConvertError> {
    let bytes = fs::read(input).map_err(|e| ConvertError::io_error(input, e))?;
    let text = String::from_utf8(bytes).map_err(|e| {
        ConvertError::parse_error(format!(
            "input is not valid UTF-8 (at byte {})",
            e.utf8_error().valid_up_to()
        ))
    })?;
    let markup = match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    };
    Ok(InputDocument::new(input, markup))
}
