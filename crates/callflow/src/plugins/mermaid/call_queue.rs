//! Call-queue summary
//!
//! Telephony exports describe a call queue as a flowchart whose node labels
//! carry the queue settings. When such a queue is present, the settings are
//! restated as Markdown sections after the diagram.

use tracing::debug;

use super::FlowGraph;
use crate::core::{starts_with_two_words, Block, ListItem};

const QUEUE_MARKER: &str = "Call Queue";
const OVERFLOW_MARKER: &str = "Active Calls?";
const ROUTING_MARKER: &str = "Routing Method";
const TIMEOUT_MARKER: &str = "Timeout";
const SETTINGS_MARKER: &str = "Music On Hold";
const AGENT_LIST_MARKER: &str = "Agent List Type";
const ANSWERED_MARKER: &str = "Agent Answered?";
const AVAILABLE_MARKER: &str = "Agent Available?";

/// True when the graph has a node naming a call queue
pub fn is_call_queue(graph: &FlowGraph) -> bool {
    graph.find_label_containing(QUEUE_MARKER).is_some()
}

/// Summary blocks for a call-queue graph, or `None` when it is not one.
///
/// The queue name becomes a level-2 heading; each detected setting gets a
/// level-3 section. Sections with nothing to report are left out, except the
/// agent result logic heading which is always present.
pub fn summarize(graph: &FlowGraph) -> Option<Vec<Block>> {
    let queue = graph.find_label_containing(QUEUE_MARKER)?;
    let mut blocks = vec![Block::heading(2, queue.label.clone())];

    if let Some(check) = graph.find_label_containing(OVERFLOW_MARKER) {
        let mut items = vec![ListItem::new(format!("**Check**: {}", check.label))];
        if let Some(yes) = graph.edge_from(&check.id, "Yes") {
            items.push(ListItem::new(format!(
                "**Yes** → {}",
                graph.target_label(yes)
            )));
        }
        if graph.edge_from(&check.id, "No").is_some() {
            items.push(ListItem::new("**No** → Routing continues"));
        }
        blocks.push(Block::heading(3, "Overflow Condition"));
        blocks.push(Block::BulletList(items));
    }

    for (marker, title) in [
        (ROUTING_MARKER, "Routing Method"),
        (TIMEOUT_MARKER, "Timeout"),
        (SETTINGS_MARKER, "Queue Settings"),
    ] {
        if let Some(node) = graph.find_label_containing(marker) {
            blocks.push(Block::heading(3, title));
            blocks.push(Block::BulletList(vec![ListItem::new(node.label.clone())]));
        }
    }

    if let Some(list_type) = graph.find_label_containing(AGENT_LIST_MARKER) {
        let mut items = vec![ListItem::new(list_type.label.clone())];
        items.extend(
            graph
                .labels()
                .filter(|label| starts_with_two_words(label) && !label.contains("Voicemail"))
                .map(ListItem::nested),
        );
        blocks.push(Block::heading(3, "Agent List"));
        blocks.push(Block::BulletList(items));
    }

    blocks.push(Block::heading(3, "Agent Result Logic"));
    let mut outcomes = Vec::new();
    if graph.labels().any(|l| l.contains(ANSWERED_MARKER)) {
        outcomes.push(ListItem::new("If agent answers → Call connected"));
        outcomes.push(ListItem::new(
            "If not answered → Timeout transfer to voicemail",
        ));
    }
    if graph.labels().any(|l| l.contains(AVAILABLE_MARKER)) {
        outcomes.push(ListItem::new(
            "If no agent available → Transfer to voicemail",
        ));
    }
    if !outcomes.is_empty() {
        blocks.push(Block::BulletList(outcomes));
    }

    debug!(queue = %queue.label, block_count = blocks.len(), "Call queue summarized");
    Some(blocks)
}
