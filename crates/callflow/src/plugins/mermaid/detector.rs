//! Mermaid diagram kind detectors
//!
//! Each detector scores how likely the diagram source belongs to its family.

use crate::core::Detector;
use tracing::{debug, trace};

// Mermaid flowchart connectors we recognise
const CONNECTORS: [&str; 7] = ["-.->", "==>", "===", "-->", "---", "-.-", "~~~"];

const DIRECTIONS: [&str; 5] = ["TD", "TB", "BT", "LR", "RL"];

/// First line that is neither blank nor a `%%` comment, lowercased
fn header_line(input: &str) -> Option<String> {
    input
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("%%"))
        .map(str::to_lowercase)
}

fn header_starts_with(input: &str, keyword: &str) -> bool {
    header_line(input).is_some_and(|line| line.starts_with(keyword))
}

/// Flowchart detector (`graph` / `flowchart` headers, arrow connectors)
pub struct FlowchartDetector;

impl FlowchartDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FlowchartDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for FlowchartDetector {
    fn detect(&self, input: &str) -> bool {
        let confidence = self.confidence(input);
        trace!(confidence, "FlowchartDetector::detect called");
        confidence >= 0.5
    }

    fn confidence(&self, input: &str) -> f64 {
        let Some(header) = header_line(input) else {
            return 0.0;
        };

        // Competing diagram families are never flowcharts
        if ["sequencediagram", "classdiagram", "statediagram", "gitgraph", "gantt", "pie"]
            .iter()
            .any(|kw| header.starts_with(kw))
        {
            return 0.0;
        }

        let keyword = header
            .split(|c: char| c.is_whitespace() || c == ';')
            .next()
            .unwrap_or("");
        if keyword == "graph" || keyword == "flowchart" {
            let upper = header.to_uppercase();
            let has_direction = upper
                .split(|c: char| c.is_whitespace() || c == ';')
                .nth(1)
                .is_some_and(|dir| DIRECTIONS.contains(&dir));
            debug!(has_direction, "Flowchart header found");
            return if has_direction { 1.0 } else { 0.8 };
        }

        let arrow_count: usize = CONNECTORS.iter().map(|c| input.matches(c).count()).sum();
        if arrow_count == 0 {
            return 0.0;
        }

        let mut score: f64 = 0.5;
        if input.contains('[') || input.contains('{') || input.contains('(') {
            score += 0.1;
        }
        score.min(1.0)
    }

    fn diagram_type(&self) -> &'static str {
        "flowchart"
    }

    fn patterns(&self) -> Vec<&'static str> {
        vec!["graph", "flowchart", "-->", "---"]
    }
}

/// Sequence diagram detector
pub struct SequenceDetector;

impl SequenceDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequenceDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for SequenceDetector {
    fn detect(&self, input: &str) -> bool {
        self.confidence(input) > 0.5
    }

    fn confidence(&self, input: &str) -> f64 {
        if header_starts_with(input, "sequencediagram") {
            return 1.0;
        }

        let lower = input.to_lowercase();
        let has_sequence_arrows = input.contains("->>") || input.contains("-->>");
        let has_participant = lower.contains("participant ") || lower.contains("actor ");

        match (has_sequence_arrows, has_participant) {
            (true, true) => 0.8,
            (true, false) => 0.6,
            _ => 0.0,
        }
    }

    fn diagram_type(&self) -> &'static str {
        "sequence"
    }

    fn patterns(&self) -> Vec<&'static str> {
        vec!["sequenceDiagram", "->>", "-->>", "participant"]
    }
}

/// Class diagram detector
pub struct ClassDetector;

impl ClassDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for ClassDetector {
    fn detect(&self, input: &str) -> bool {
        self.confidence(input) > 0.5
    }

    fn confidence(&self, input: &str) -> f64 {
        if header_starts_with(input, "classdiagram") {
            1.0
        } else {
            0.0
        }
    }

    fn diagram_type(&self) -> &'static str {
        "class"
    }

    fn patterns(&self) -> Vec<&'static str> {
        vec!["classDiagram"]
    }
}

/// State diagram detector
pub struct StateDetector;

impl StateDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StateDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for StateDetector {
    fn detect(&self, input: &str) -> bool {
        self.confidence(input) > 0.5
    }

    fn confidence(&self, input: &str) -> f64 {
        if header_starts_with(input, "statediagram") {
            1.0
        } else if input.contains("[*]") {
            0.6
        } else {
            0.0
        }
    }

    fn diagram_type(&self) -> &'static str {
        "state"
    }

    fn patterns(&self) -> Vec<&'static str> {
        vec!["stateDiagram", "stateDiagram-v2", "[*]"]
    }
}

/// Git graph detector
pub struct GitGraphDetector;

impl GitGraphDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GitGraphDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for GitGraphDetector {
    fn detect(&self, input: &str) -> bool {
        self.confidence(input) > 0.5
    }

    fn confidence(&self, input: &str) -> f64 {
        if header_starts_with(input, "gitgraph") {
            1.0
        } else {
            0.0
        }
    }

    fn diagram_type(&self) -> &'static str {
        "gitgraph"
    }

    fn patterns(&self) -> Vec<&'static str> {
        vec!["gitGraph", "commit", "branch", "checkout"]
    }
}

/// Every Mermaid detector, in registration order
pub fn default_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(FlowchartDetector::new()),
        Box::new(SequenceDetector::new()),
        Box::new(ClassDetector::new()),
        Box::new(StateDetector::new()),
        Box::new(GitGraphDetector::new()),
    ]
}
