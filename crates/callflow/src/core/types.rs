//! Core type definitions for call-flow conversion
//!
//! Sections extracted from an input document, and the block-structured
//! document the formatter produces from them.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::text::{escape_paragraph, fence_for};

/// Raw markup read from disk, paired with the path it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    pub path: PathBuf,
    pub markup: String,
}

impl InputDocument {
    pub fn new(path: impl Into<PathBuf>, markup: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            markup: markup.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Kind of content an extracted section holds
///
/// Ordered so that maps keyed by kind iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Title,
    Description,
    Diagram,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Title => write!(f, "title"),
            SectionKind::Description => write!(f, "description"),
            SectionKind::Diagram => write!(f, "diagram"),
        }
    }
}

/// A labeled span of content, positioned by its appearance in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSection {
    pub kind: SectionKind,
    /// Document-order index across all sections of one input
    pub position: usize,
    pub text: String,
    /// Diagram language (e.g. `mermaid`); `None` for prose sections
    pub language: Option<String>,
}

/// Sections of one document, grouped by kind, each group in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    by_kind: BTreeMap<SectionKind, Vec<ExtractedSection>>,
    next_position: usize,
}

impl Sections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section, assigning it the next document position
    pub fn push(&mut self, kind: SectionKind, text: impl Into<String>, language: Option<String>) {
        let section = ExtractedSection {
            kind,
            position: self.next_position,
            text: text.into(),
            language,
        };
        self.next_position += 1;
        self.by_kind.entry(kind).or_default().push(section);
    }

    /// All sections of one kind, in source order
    pub fn get(&self, kind: SectionKind) -> &[ExtractedSection] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn title(&self) -> Option<&str> {
        self.get(SectionKind::Title).first().map(|s| s.text.as_str())
    }

    pub fn descriptions(&self) -> &[ExtractedSection] {
        self.get(SectionKind::Description)
    }

    pub fn diagrams(&self) -> &[ExtractedSection] {
        self.get(SectionKind::Diagram)
    }

    pub fn count(&self, kind: SectionKind) -> usize {
        self.get(kind).len()
    }

    pub fn len(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every section regardless of kind, in document order
    pub fn in_document_order(&self) -> Vec<&ExtractedSection> {
        let mut all: Vec<&ExtractedSection> = self.by_kind.values().flatten().collect();
        all.sort_by_key(|s| s.position);
        all
    }
}

/// One entry of a bullet list; `depth` 0 is top level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub depth: usize,
    pub text: String,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            depth: 0,
            text: text.into(),
        }
    }

    pub fn nested(text: impl Into<String>) -> Self {
        Self {
            depth: 1,
            text: text.into(),
        }
    }
}

/// A block of formatted output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: usize, text: String },
    Paragraph(String),
    BulletList(Vec<ListItem>),
    CodeBlock { language: String, body: String },
}

impl Block {
    pub fn heading(level: usize, text: impl Into<String>) -> Self {
        Block::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    fn write_markdown(&self, out: &mut String) {
        match self {
            Block::Heading { level, text } => {
                out.push_str(&"#".repeat(*level));
                out.push(' ');
                out.push_str(text);
            }
            Block::Paragraph(text) => out.push_str(&escape_paragraph(text)),
            Block::BulletList(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    out.push_str(&"  ".repeat(item.depth));
                    out.push_str("- ");
                    out.push_str(&item.text);
                }
            }
            Block::CodeBlock { language, body } => {
                let fence = fence_for(body);
                out.push_str(&fence);
                out.push_str(language);
                out.push('\n');
                out.push_str(body);
                if !body.is_empty() && !body.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str(&fence);
            }
        }
    }
}

/// Ordered blocks ready to be serialized
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedDocument {
    blocks: Vec<Block>,
}

impl FormattedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Serialize to Markdown: blocks separated by a blank line, with a
    /// trailing newline. An empty document serializes to an empty string.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            block.write_markdown(&mut out);
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for FormattedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markdown())
    }
}
