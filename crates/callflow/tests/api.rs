//! Integration tests for the public API

use callflow::prelude::*;
use callflow::{convert_html, convert_html_with_config, parse_sections};

const FRONT_DESK: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Front Desk Transfer</title>
</head>
<body>
  <h1>Front Desk Transfer</h1>
  <p>Calls to the main number ring the front desk first.</p>
  <pre class="mermaid"><code class="language-mermaid">graph TD; A-->B;</code></pre>
</body>
</html>"#;

#[test]
fn test_front_desk_example() {
    let markdown = convert_html(FRONT_DESK).unwrap();
    assert!(markdown.lines().any(|line| line == "# Front Desk Transfer"));
    assert!(markdown.contains("```mermaid\ngraph TD; A-->B;\n```"));
}

#[test]
fn test_front_desk_layout() {
    let markdown = convert_html(FRONT_DESK).unwrap();
    assert_eq!(
        markdown,
        "# Front Desk Transfer\n\n\
         Calls to the main number ring the front desk first.\n\n\
         ```mermaid\ngraph TD; A-->B;\n```\n"
    );
}

#[test]
fn test_single_title_heading() {
    let markdown = convert_html(FRONT_DESK).unwrap();
    let h1 = markdown.lines().filter(|l| l.starts_with("# ")).count();
    assert_eq!(h1, 1);
}

#[test]
fn test_markdown_in_prose_is_escaped() {
    let html = "<title>Front Desk Transfer</title><p># Internal note</p><p>```</p>\
                <code class=\"language-mermaid\">graph TD; A-->B;</code>";
    let markdown = convert_html(html).unwrap();
    assert_eq!(markdown.lines().filter(|l| l.starts_with('#')).count(), 1);
    assert_eq!(markdown.lines().filter(|l| l.starts_with("```")).count(), 2);
    assert!(markdown.contains("\\# Internal note\n\n\\`\\`\\`\n\n```mermaid\ngraph TD; A-->B;\n```\n"));
}

#[test]
fn test_missing_description_still_converts() {
    let html = r#"<html><head><title>Night Mode</title></head>
<body><div class="mermaid">graph LR
  N[After Hours] --> V[Voicemail]</div></body></html>"#;
    let markdown = convert_html(html).unwrap();
    assert_eq!(
        markdown,
        "# Night Mode\n\n```mermaid\ngraph LR\n  N[After Hours] --> V[Voicemail]\n```\n"
    );
}

#[test]
fn test_missing_diagram_still_converts() {
    let markdown = convert_html("<title>Draft</title><p>No flow yet.</p>").unwrap();
    assert_eq!(markdown, "# Draft\n\nNo flow yet.\n");
}

#[test]
fn test_other_diagram_languages_keep_their_tag() {
    let html = r#"<title>Legacy</title><pre><code class="language-plantuml">@startuml
A -> B
@enduml</code></pre>"#;
    let markdown = convert_html(html).unwrap();
    assert!(markdown.contains("```plantuml\n@startuml\nA -> B\n@enduml\n```"));
}

#[test]
fn test_diagram_containing_backticks_gets_longer_fence() {
    let html = "<title>T</title><code class=\"language-mermaid\">graph TD\n  A[```] --> B</code>";
    let markdown = convert_html(html).unwrap();
    assert!(markdown.contains("````mermaid\ngraph TD\n  A[```] --> B\n````"));
}

#[test]
fn test_call_queue_summary() {
    let html = r#"<title>Sales</title>
<pre><code class="language-mermaid">flowchart TD
  CQ[Sales Call Queue] --> OF{Active Calls? &gt; 5}
  OF -->|Yes| VM[Sales Voicemail]
  OF -->|No| RM[Routing Method: Longest Idle]
  RM --> TO[Timeout: 45 seconds]
</code></pre>"#;
    let markdown = convert_html(html).unwrap();
    let fence_end = markdown.rfind("```").unwrap();
    let summary = &markdown[fence_end..];
    assert!(summary.contains("## Sales Call Queue"));
    assert!(summary.contains("### Overflow Condition"));
    assert!(summary.contains("- **Yes** → Sales Voicemail"));
    assert!(summary.contains("- **No** → Routing continues"));
    assert!(summary.contains("### Timeout\n\n- Timeout: 45 seconds"));
    assert!(summary.contains("### Agent Result Logic"));
}

#[test]
fn test_call_queue_labels_with_semicolons() {
    let html = r#"<title>Sales</title>
<pre><code class="language-mermaid">graph TD
  CQ[Sales Call Queue] --> MOH[Music On Hold; Default]
  MOH --> TO[Timeout: 30s; then voicemail]
</code></pre>"#;
    let markdown = convert_html(html).unwrap();
    let fence_end = markdown.rfind("```").unwrap();
    let summary = &markdown[fence_end..];
    assert!(summary.contains("### Timeout\n\n- Timeout: 30s; then voicemail"));
    assert!(summary.contains("### Queue Settings\n\n- Music On Hold; Default"));
}

#[test]
fn test_summary_disabled_by_config() {
    let html = "<title>S</title><code class=\"language-mermaid\">graph TD\n  CQ[Sales Call Queue]</code>";
    let config = ConvertConfig::default().with_summaries(false);
    let markdown = convert_html_with_config(html, &config).unwrap();
    assert!(!markdown.contains("## "));
}

#[test]
fn test_parse_sections_positions() {
    let sections = parse_sections(FRONT_DESK).unwrap();
    assert_eq!(sections.title(), Some("Front Desk Transfer"));
    assert_eq!(sections.count(SectionKind::Title), 1);
    assert_eq!(sections.descriptions().len(), 1);
    assert_eq!(sections.diagrams().len(), 1);

    let order: Vec<usize> = sections.in_document_order().iter().map(|s| s.position).collect();
    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(order, sorted);
}

#[test]
fn test_orchestrator_reports_diagram_kind() {
    let orchestrator = Orchestrator::with_all_plugins(&ConvertConfig::default());
    let conversion = orchestrator.convert(FRONT_DESK).unwrap();
    assert_eq!(conversion.diagram_kinds, vec![Some("flowchart".to_string())]);
}

#[test]
fn test_flow_graph_from_diagram() {
    let sections = parse_sections(
        "<title>Night</title><div class=\"mermaid\">graph LR\n  N[After Hours] --&gt; V[Voicemail]</div>",
    )
    .unwrap();
    let graph = FlowGraph::parse(&sections.diagrams()[0].text);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.label("V"), Some("Voicemail"));
}

#[test]
fn test_idempotent() {
    let first = convert_html(FRONT_DESK).unwrap();
    let second = convert_html(FRONT_DESK).unwrap();
    assert_eq!(first, second);
}
