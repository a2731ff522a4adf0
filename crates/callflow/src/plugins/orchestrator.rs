//! Plugin orchestrator for converting one document
//!
//! The orchestrator runs a single document through the pipeline:
//! Extractor → Formatter, with detectors reporting each diagram's kind.

use tracing::{debug, info, span, trace, Level};

use crate::core::{
    ConvertConfig, ConvertError, Detector, Extractor, FormattedDocument, Formatter, Sections,
};
use crate::plugins::html::HtmlExtractor;
use crate::plugins::markdown::MarkdownFormatter;
use crate::plugins::mermaid::default_detectors;

/// Outcome of converting one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub sections: Sections,
    pub document: FormattedDocument,
    /// Detected kind per diagram, in document order (`None` when unknown)
    pub diagram_kinds: Vec<Option<String>>,
}

impl Conversion {
    pub fn to_markdown(&self) -> String {
        self.document.to_markdown()
    }
}

/// Plugin orchestrator that coordinates the single-document pipeline
pub struct Orchestrator {
    detectors: Vec<(String, Box<dyn Detector>)>,
    extractor: Box<dyn Extractor>,
    formatter: Box<dyn Formatter>,
    debug: bool,
}

impl Orchestrator {
    /// Create an orchestrator with the HTML extractor, the Markdown formatter
    /// and no detectors
    pub fn new() -> Self {
        Self::with_config(&ConvertConfig::default())
    }

    /// Create an orchestrator whose formatter and diagnostics follow `config`
    pub fn with_config(config: &ConvertConfig) -> Self {
        Self {
            detectors: Vec::new(),
            extractor: Box::new(HtmlExtractor::new()),
            formatter: Box::new(MarkdownFormatter::with_summaries(config.summaries)),
            debug: config.debug,
        }
    }

    /// Create an orchestrator with every Mermaid detector registered
    pub fn with_all_plugins(config: &ConvertConfig) -> Self {
        let mut orchestrator = Self::with_config(config);
        orchestrator.register_default_detectors();
        orchestrator
    }

    /// Replace the extractor stage
    pub fn with_extractor(mut self, extractor: Box<dyn Extractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Replace the formatter stage
    pub fn with_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Register a detector plugin; a detector with the same name is replaced
    pub fn register_detector(&mut self, name: String, detector: Box<dyn Detector>) {
        self.detectors.retain(|(existing, _)| *existing != name);
        self.detectors.push((name, detector));
    }

    /// Register every built-in Mermaid detector
    pub fn register_default_detectors(&mut self) {
        for detector in default_detectors() {
            let name = detector.diagram_type().to_string();
            trace!(detector = %name, patterns = ?detector.patterns(), "Registering detector");
            self.register_detector(name, detector);
        }
    }

    /// Get registered detector names, in registration order
    pub fn get_detectors(&self) -> Vec<String> {
        self.detectors.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Detect the diagram kind of embedded source.
    ///
    /// Among detectors that accept the input, the highest confidence wins;
    /// ties go to the earliest registered.
    pub fn detect_diagram_kind(&self, source: &str) -> Option<String> {
        let mut best: Option<(&str, f64)> = None;
        for (name, detector) in &self.detectors {
            let confidence = detector.confidence(source);
            trace!(detector = %name, confidence, "Checking detector");
            if !detector.detect(source) {
                continue;
            }
            if best.map_or(true, |(_, top)| confidence > top) {
                best = Some((name.as_str(), confidence));
            }
        }
        best.map(|(name, _)| name.to_string())
    }

    /// Extract sections from markup
    pub fn extract(&self, markup: &str) -> Result<Sections, ConvertError> {
        self.extractor.extract(markup)
    }

    /// Run markup through extraction and formatting
    pub fn convert(&self, markup: &str) -> Result<Conversion, ConvertError> {
        let convert_span = span!(Level::INFO, "convert_document", input_len = markup.len());
        let _enter = convert_span.enter();

        let sections = self.extractor.extract(markup)?;

        let diagram_kinds: Vec<Option<String>> = sections
            .diagrams()
            .iter()
            .map(|d| self.detect_diagram_kind(&d.text))
            .collect();

        let document = self.formatter.format(&sections);

        if self.debug {
            debug!(
                extractor = self.extractor.name(),
                formatter = self.formatter.name(),
                format = self.formatter.format_name(),
                title = sections.title().unwrap_or("<none>"),
                descriptions = sections.descriptions().len(),
                diagrams = sections.diagrams().len(),
                kinds = ?diagram_kinds,
                blocks = document.blocks().len(),
                "Document converted"
            );
        }
        info!(blocks = document.blocks().len(), "Conversion completed");

        Ok(Conversion {
            sections,
            document,
            diagram_kinds,
        })
    }

    /// Convert markup straight to Markdown text
    pub fn convert_to_markdown(&self, markup: &str) -> Result<String, ConvertError> {
        self.convert(markup).map(|c| c.to_markdown())
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
