//! HTML section extractor
//!
//! Walks the tolerant html5ever tree of an exported call-flow page and picks
//! out the title, descriptive prose and embedded diagram source.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::{debug, span, trace, warn, Level};

use super::dom::{attribute, classes, content_element_count, has_class, local_name, text_content};
use crate::core::{collapse_whitespace, trim_line_breaks, ConvertError, Extractor, SectionKind, Sections};
use crate::plugins::mermaid::MERMAID_LANGUAGE;

/// `language-<x>` values treated as diagram source
const DIAGRAM_LANGUAGES: [&str; 5] = ["mermaid", "plantuml", "dot", "graphviz", "d2"];

/// Elements whose content is never prose or diagram source
const OPAQUE_ELEMENTS: [&str; 4] = ["script", "style", "template", "noscript"];

/// A recognised region, in document order, before title selection
#[derive(Debug)]
enum Found {
    Title(String),
    Heading(String),
    Description(String),
    Diagram { language: String, text: String },
}

/// Extractor for HTML pages produced by the exporting tool
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for HtmlExtractor {
    fn extract(&self, input: &str) -> Result<Sections, ConvertError> {
        let extract_span = span!(Level::INFO, "extract_sections", input_len = input.len());
        let _enter = extract_span.enter();

        check_traversable(input)?;

        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(input);
        if content_element_count(&dom.document) == 0 {
            warn!("Document contains no markup elements");
            return Err(ConvertError::parse_error("document contains no markup"));
        }

        let mut found = Vec::new();
        visit(&dom.document, &mut found);
        trace!(regions = found.len(), "Tree walk completed");

        let sections = assemble(found);
        debug!(
            title = sections.title().unwrap_or(""),
            descriptions = sections.count(SectionKind::Description),
            diagrams = sections.count(SectionKind::Diagram),
            "Sections extracted"
        );
        if sections.diagrams().is_empty() {
            warn!("No diagram container found");
        }
        Ok(sections)
    }

    fn name(&self) -> &'static str {
        "html"
    }
}

/// Reject input that cannot be traversed as markup at all.
///
/// Everything else, however sloppy, is left to the tolerant parser.
fn check_traversable(input: &str) -> Result<(), ConvertError> {
    if input.trim().is_empty() {
        return Err(ConvertError::parse_error("document is empty"));
    }
    if input.contains('\0') {
        return Err(ConvertError::parse_error("document contains binary data"));
    }
    if let Some(open) = input.rfind("<!--") {
        if !input[open + 4..].contains("-->") {
            return Err(ConvertError::parse_error(
                "document ends inside a comment",
            ));
        }
    }
    if ends_inside_tag(input) {
        return Err(ConvertError::parse_error("document ends inside a tag"));
    }
    Ok(())
}

/// True when the text after the last `>` is an unfinished tag rather than
/// prose. Text after `</html>` is never a tag; elsewhere a `<name` counts
/// when it directly follows markup or has an attribute in progress.
fn ends_inside_tag(input: &str) -> bool {
    let tail_start = input.rfind('>').map_or(0, |i| i + 1);
    let tail = &input[tail_start..];
    let Some(open) = tail.rfind('<') else {
        return false;
    };
    let fragment = &tail[open + 1..];
    let starts_tag = fragment
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!');
    if !starts_tag || input[..tail_start].to_ascii_lowercase().contains("</html>") {
        return false;
    }
    fragment.contains(['=', '"', '\'']) || tail[..open].trim().is_empty()
}

/// Language of a diagram container, if `handle` is one
fn diagram_language(handle: &Handle) -> Option<String> {
    match local_name(handle)? {
        "code" => classes(handle).iter().find_map(|class| {
            let language = class.strip_prefix("language-")?.to_ascii_lowercase();
            DIAGRAM_LANGUAGES
                .contains(&language.as_str())
                .then_some(language)
        }),
        "pre" | "div" if has_class(handle, MERMAID_LANGUAGE) => {
            Some(MERMAID_LANGUAGE.to_string())
        }
        _ => None,
    }
}

fn contains_diagram(handle: &Handle) -> bool {
    handle
        .children
        .borrow()
        .iter()
        .any(|child| diagram_language(child).is_some() || contains_diagram(child))
}

fn visit(handle: &Handle, found: &mut Vec<Found>) {
    if let NodeData::Element { .. } = &handle.data {
        if let Some(language) = diagram_language(handle) {
            let text = trim_line_breaks(&text_content(handle)).to_string();
            trace!(%language, len = text.len(), "Diagram container");
            found.push(Found::Diagram { language, text });
            return;
        }

        match local_name(handle) {
            Some(tag) if OPAQUE_ELEMENTS.contains(&tag) => return,
            Some("title") => {
                found.push(Found::Title(collapse_whitespace(&text_content(handle))));
                return;
            }
            Some("h1") if !contains_diagram(handle) => {
                found.push(Found::Heading(collapse_whitespace(&text_content(handle))));
                return;
            }
            Some("meta") => {
                let is_description = attribute(handle, "name")
                    .is_some_and(|name| name.eq_ignore_ascii_case("description"));
                if is_description {
                    if let Some(content) = attribute(handle, "content") {
                        found.push(Found::Description(collapse_whitespace(&content)));
                    }
                }
                return;
            }
            Some("p") if !contains_diagram(handle) => {
                found.push(Found::Description(collapse_whitespace(&text_content(handle))));
                return;
            }
            _ => {}
        }
    }

    for child in handle.children.borrow().iter() {
        visit(child, found);
    }
}

/// Choose the title and build positioned sections.
///
/// The first non-empty `<title>` wins; without one, the first non-empty
/// `<h1>` stands in. Empty prose is dropped.
fn assemble(found: Vec<Found>) -> Sections {
    let has_title_element = found
        .iter()
        .any(|f| matches!(f, Found::Title(text) if !text.is_empty()));

    let mut sections = Sections::new();
    let mut title_taken = false;

    for region in found {
        match region {
            Found::Title(text) if has_title_element && !title_taken && !text.is_empty() => {
                sections.push(SectionKind::Title, text, None);
                title_taken = true;
            }
            Found::Heading(text) if !has_title_element && !title_taken && !text.is_empty() => {
                sections.push(SectionKind::Title, text, None);
                title_taken = true;
            }
            Found::Description(text) if !text.is_empty() => {
                sections.push(SectionKind::Description, text, None);
            }
            Found::Diagram { language, text } => {
                sections.push(SectionKind::Diagram, text, Some(language));
            }
            _ => {}
        }
    }

    sections
}
