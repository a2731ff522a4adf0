//! Markdown formatter
//!
//! Fixed template: title heading, prose paragraphs, one fenced block per
//! diagram, and a call-queue summary after any diagram that describes one.

use tracing::{debug, span, Level};

use crate::core::{Block, Detector, Formatter, FormattedDocument, Sections};
use crate::plugins::mermaid::{self, FlowGraph, FlowchartDetector, MERMAID_LANGUAGE};

/// Formatter producing Markdown blocks
pub struct MarkdownFormatter {
    summaries: bool,
    flowchart: FlowchartDetector,
}

impl MarkdownFormatter {
    /// Create a formatter with call-queue summaries enabled
    pub fn new() -> Self {
        Self::with_summaries(true)
    }

    pub fn with_summaries(summaries: bool) -> Self {
        Self {
            summaries,
            flowchart: FlowchartDetector::new(),
        }
    }

    pub fn summaries_enabled(&self) -> bool {
        self.summaries
    }

    fn summary_for(&self, language: &str, source: &str) -> Option<Vec<Block>> {
        if !self.summaries || language != MERMAID_LANGUAGE || !self.flowchart.detect(source) {
            return None;
        }
        mermaid::summarize(&FlowGraph::parse(source))
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for MarkdownFormatter {
    fn format(&self, sections: &Sections) -> FormattedDocument {
        let format_span = span!(
            Level::DEBUG,
            "format_document",
            sections = sections.len(),
            summaries = self.summaries_enabled()
        );
        let _enter = format_span.enter();

        let mut doc = FormattedDocument::new();

        if let Some(title) = sections.title() {
            doc.push(Block::heading(1, title));
        }

        for description in sections.descriptions() {
            doc.push(Block::Paragraph(description.text.clone()));
        }

        for diagram in sections.diagrams() {
            let language = diagram.language.as_deref().unwrap_or(MERMAID_LANGUAGE);
            doc.push(Block::CodeBlock {
                language: language.to_string(),
                body: diagram.text.clone(),
            });

            if let Some(summary) = self.summary_for(language, &diagram.text) {
                debug!(position = diagram.position, "Appending call queue summary");
                doc.extend(summary);
            }
        }

        doc
    }

    fn name(&self) -> &'static str {
        "markdown"
    }

    fn format_name(&self) -> &'static str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SectionKind;

    fn sections(title: Option<&str>, descriptions: &[&str], diagram: Option<&str>) -> Sections {
        let mut sections = Sections::new();
        if let Some(title) = title {
            sections.push(SectionKind::Title, title, None);
        }
        for d in descriptions {
            sections.push(SectionKind::Description, *d, None);
        }
        if let Some(diagram) = diagram {
            sections.push(SectionKind::Diagram, diagram, Some("mermaid".to_string()));
        }
        sections
    }

    #[test]
    fn test_template() {
        let doc = MarkdownFormatter::new().format(&sections(
            Some("Front Desk Transfer"),
            &["Main line routing."],
            Some("graph TD; A-->B;"),
        ));
        assert_eq!(
            doc.to_markdown(),
            "# Front Desk Transfer\n\nMain line routing.\n\n```mermaid\ngraph TD; A-->B;\n```\n"
        );
    }

    #[test]
    fn test_markdown_like_description_stays_prose() {
        let doc = MarkdownFormatter::new().format(&sections(
            Some("Front Desk Transfer"),
            &["# Internal note", "```"],
            Some("graph TD; A-->B;"),
        ));
        assert_eq!(
            doc.to_markdown(),
            "# Front Desk Transfer\n\n\\# Internal note\n\n\\`\\`\\`\n\n```mermaid\ngraph TD; A-->B;\n```\n"
        );
    }

    #[test]
    fn test_missing_description_omits_prose() {
        let doc = MarkdownFormatter::new().format(&sections(Some("T"), &[], Some("graph TD")));
        assert_eq!(doc.blocks().len(), 2);
        assert!(!doc.blocks().iter().any(|b| matches!(b, Block::Paragraph(_))));
    }

    #[test]
    fn test_empty_sections() {
        let doc = MarkdownFormatter::new().format(&Sections::new());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_call_queue_summary_follows_diagram() {
        let source = "graph TD\n  CQ[Main Call Queue] --> R[Routing Method: Longest Idle]";
        let doc = MarkdownFormatter::new().format(&sections(Some("Q"), &[], Some(source)));
        let md = doc.to_markdown();
        assert!(md.contains("## Main Call Queue"));
        assert!(md.contains("### Routing Method\n\n- Routing Method: Longest Idle"));
        assert!(md.find("```mermaid").unwrap() < md.find("## Main Call Queue").unwrap());
    }

    #[test]
    fn test_summaries_can_be_disabled() {
        let source = "graph TD\n  CQ[Main Call Queue]";
        let formatter = MarkdownFormatter::with_summaries(false);
        assert!(!formatter.summaries_enabled());
        assert!(MarkdownFormatter::default().summaries_enabled());

        let doc = formatter.format(&sections(None, &[], Some(source)));
        assert_eq!(doc.blocks().len(), 1);
    }

    #[test]
    fn test_summary_needs_flowchart() {
        let source = "sequenceDiagram\n  Caller->>Call Queue: ring";
        let doc = MarkdownFormatter::new().format(&sections(None, &[], Some(source)));
        assert_eq!(doc.blocks().len(), 1);
    }
}
