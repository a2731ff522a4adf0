//! Callflow - Convert exported call-flow HTML documents into Markdown
//!
//! A library for pulling the title, description and embedded Mermaid source
//! out of exported call-flow pages and writing them back as Markdown.
//!
//! # Quick Start
//!
//! ```rust
//! use callflow::convert_html;
//!
//! let html = r#"<html><head><title>Front Desk Transfer</title></head>
//! <body><p>Routes the main line.</p>
//! <pre><code class="language-mermaid">graph TD; A--&gt;B;</code></pre></body></html>"#;
//!
//! let markdown = convert_html(html).unwrap();
//! assert!(markdown.starts_with("# Front Desk Transfer\n"));
//! assert!(markdown.contains("```mermaid\ngraph TD; A-->B;\n```"));
//! ```
//!
//! # Batch Conversion
//!
//! ```rust,no_run
//! use callflow::{run_batch, ConvertConfig};
//!
//! let config = ConvertConfig::default().with_limit(Some(10));
//! let report = run_batch("exports/", &config).unwrap();
//! println!("{} converted, {} failed", report.succeeded, report.failed);
//! ```

pub mod batch;
pub mod core;
pub mod plugins;

pub use batch::{run_batch, BatchReport, FileFailure, MarkdownWriter, Scanner};
pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::batch::{run_batch, BatchReport, Scanner};
    pub use crate::core::{
        Block, ConvertConfig, ConvertError, Detector, Extractor, FormattedDocument, Formatter,
        SectionKind, Sections,
    };
    pub use crate::plugins::mermaid::{FlowGraph, FlowchartDetector};
    pub use crate::plugins::{HtmlExtractor, MarkdownFormatter, Orchestrator};
}

/// Convert one HTML document to Markdown with the default configuration
///
/// # Example
/// ```rust
/// use callflow::{convert_html, ConvertError};
///
/// let err = convert_html("").unwrap_err();
/// assert!(matches!(err, ConvertError::ParseError { .. }));
/// ```
pub fn convert_html(markup: &str) -> Result<String, ConvertError> {
    convert_html_with_config(markup, &ConvertConfig::default())
}

/// Convert one HTML document to Markdown, honouring `config`
///
/// Only the settings that affect a single document apply here; folder
/// scanning and output paths belong to [`run_batch`].
pub fn convert_html_with_config(markup: &str, config: &ConvertConfig) -> Result<String, ConvertError> {
    use crate::plugins::orchestrator::Orchestrator;

    Orchestrator::with_all_plugins(config).convert_to_markdown(markup)
}

/// Extract sections from one HTML document without formatting them
///
/// # Example
/// ```rust
/// use callflow::parse_sections;
///
/// let sections = parse_sections("<title>Night Mode</title><p>After hours.</p>").unwrap();
/// assert_eq!(sections.title(), Some("Night Mode"));
/// assert_eq!(sections.descriptions().len(), 1);
/// ```
pub fn parse_sections(markup: &str) -> Result<Sections, ConvertError> {
    use crate::plugins::html::HtmlExtractor;

    HtmlExtractor::new().extract(markup)
}
