//! Node and edge extraction from Mermaid flowchart source
//!
//! Tolerant: statements that do not parse are skipped. Only the pieces the
//! call-queue summary needs are kept (node labels, and edges with their
//! optional `|label|`).

use chumsky::prelude::*;
use tracing::{debug, trace};

use crate::core::chumsky_utils::{edge_source_id, inline_whitespace, label_until, node_id, rest};
use crate::core::clean_label;

const EDGE_MARKERS: [&str; 3] = ["-->", "-.->", "---"];

/// A node declaration: identifier and its cleaned label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNode {
    pub id: String,
    pub label: String,
}

/// An edge between two node identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    pub source: String,
    pub label: Option<String>,
    pub target: String,
}

/// A node reference inside a statement: id plus optional inline shape label
type NodeRef = (String, Option<String>);

/// Nodes (first-seen order) and edges parsed from flowchart source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowGraph {
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse flowchart source. Never fails; unknown statements are skipped.
    pub fn parse(text: &str) -> Self {
        let mut graph = Self::new();
        let mut skipped = 0usize;

        for statement in statements(text) {
            if EDGE_MARKERS.iter().any(|m| statement.contains(m)) {
                if let Some((source, label, target)) = parse_edge(statement) {
                    trace!(source = %source.0, target = %target.0, "Parsed edge");
                    graph.record_ref(&source);
                    graph.record_ref(&target);
                    graph.edges.push(FlowEdge {
                        source: source.0,
                        label: label.map(|l| l.trim().to_string()),
                        target: target.0,
                    });
                    continue;
                }
            }

            match parse_node(statement) {
                Some((id, label)) => graph.set_label(id, &label),
                None => skipped += 1,
            }
        }

        debug!(
            node_count = graph.nodes.len(),
            edge_count = graph.edges.len(),
            skipped,
            "Flow graph extracted"
        );
        graph
    }

    /// Record a label; a later declaration of the same id replaces the label
    /// but keeps the node's original position.
    pub fn set_label(&mut self, id: impl Into<String>, label: &str) {
        let id = id.into();
        let label = clean_label(label);
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => node.label = label,
            None => self.nodes.push(FlowNode { id, label }),
        }
    }

    fn record_ref(&mut self, node: &NodeRef) {
        if let Some(label) = &node.1 {
            self.set_label(node.0.clone(), label);
        }
    }

    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn label(&self, id: &str) -> Option<&str> {
        self.nodes
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.label.as_str())
    }

    /// Labels in node order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.label.as_str())
    }

    /// First node whose label contains `needle`
    pub fn find_label_containing(&self, needle: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.label.contains(needle))
    }

    /// First edge leaving `source` whose label equals `label` (case-insensitive)
    pub fn edge_from(&self, source: &str, label: &str) -> Option<&FlowEdge> {
        self.edges.iter().find(|e| {
            e.source == source
                && e
                    .label
                    .as_deref()
                    .is_some_and(|l| l.eq_ignore_ascii_case(label))
        })
    }

    /// Label of an edge's target, falling back to the raw target id
    pub fn target_label(&self, edge: &FlowEdge) -> String {
        self.label(&edge.target)
            .unwrap_or(edge.target.as_str())
            .to_string()
    }
}

/// Split source into trimmed statements (one per line, `;`-separated),
/// dropping blanks and `%%` comments.
fn statements(source: &str) -> impl Iterator<Item = &str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("%%"))
        .flat_map(split_terminators)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Split a line on `;` terminators. A `;` inside a shape bracket or a quoted
/// label belongs to the label.
fn split_terminators(line: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quoted = false;
    let mut start = 0;

    for (i, c) in line.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '[' | '(' | '{' if !quoted => depth += 1,
            ']' | ')' | '}' if !quoted => depth = depth.saturating_sub(1),
            ';' if !quoted && depth == 0 => {
                parts.push(&line[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&line[start..]);
    parts
}

/// Parse a node shape and return its label
fn shape_parser<'src>() -> impl Parser<'src, &'src str, String> + Clone {
    let double_circle = just("(((")
        .ignore_then(label_until(')'))
        .then_ignore(just(")))"));
    let circle = just("((")
        .ignore_then(label_until(')'))
        .then_ignore(just("))"));
    let stadium = just("([")
        .ignore_then(label_until(']'))
        .then_ignore(just("])"));
    let subroutine = just("[[")
        .ignore_then(label_until(']'))
        .then_ignore(just("]]"));
    let cylinder = just("[(")
        .ignore_then(label_until(')'))
        .then_ignore(just(")]"));
    let hexagon = just("{{")
        .ignore_then(label_until('}'))
        .then_ignore(just("}}"));
    let rectangle = just('[')
        .ignore_then(label_until(']'))
        .then_ignore(just(']'));
    let diamond = just('{')
        .ignore_then(label_until('}'))
        .then_ignore(just('}'));
    let rounded = just('(')
        .ignore_then(label_until(')'))
        .then_ignore(just(')'));

    double_circle
        .or(circle)
        .or(stadium)
        .or(subroutine)
        .or(cylinder)
        .or(hexagon)
        .or(rectangle)
        .or(diamond)
        .or(rounded)
}

/// `id<shape>` at the start of a statement; trailing text is ignored
fn node_parser<'src>() -> impl Parser<'src, &'src str, (String, String)> + Clone {
    node_id().then(shape_parser()).then_ignore(rest())
}

fn arrow_parser<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    just("--->")
        .or(just("-->"))
        .or(just("-.->"))
        .or(just("==>"))
        .or(just("---"))
        .ignored()
}

/// `source[shape] --> |label| target[shape] ...`
fn edge_parser<'src>(
) -> impl Parser<'src, &'src str, (NodeRef, Option<String>, NodeRef)> + Clone {
    let source = edge_source_id().then(shape_parser().or_not());
    let target = edge_source_id().then(shape_parser().or_not());
    let edge_label = just('|')
        .ignore_then(label_until('|'))
        .then_ignore(just('|'));

    source
        .then_ignore(inline_whitespace())
        .then_ignore(arrow_parser())
        .then_ignore(inline_whitespace())
        .then(edge_label.or_not())
        .then_ignore(inline_whitespace())
        .then(target)
        .then_ignore(rest())
        .map(|((source, label), target)| (source, label, target))
}

fn parse_node(statement: &str) -> Option<(String, String)> {
    node_parser().parse(statement).into_result().ok()
}

fn parse_edge(statement: &str) -> Option<(NodeRef, Option<String>, NodeRef)> {
    edge_parser().parse(statement).into_result().ok()
}
