//! Integration tests for tracing spans and events
//!
//! A scoped subscriber captures formatted output so the tests can check that
//! per-file outcomes are actually logged.

use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use callflow::{convert_html, run_batch, ConvertConfig};
use tempfile::tempdir;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(level: tracing::Level) -> (Captured, tracing::subscriber::DefaultGuard) {
    let captured = Captured::default();
    let writer = captured.clone();
    let guard = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(level)
        .set_default();
    (captured, guard)
}

#[test]
fn test_batch_logs_success_and_failure() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("good.htm"),
        "<title>Good</title><code class=\"language-mermaid\">graph TD; A--&gt;B;</code>",
    )
    .unwrap();
    fs::write(dir.path().join("bad.htm"), "").unwrap();

    let (captured, _guard) = capture(tracing::Level::INFO);
    let report = run_batch(dir.path(), &ConvertConfig::default()).unwrap();
    assert_eq!(report.failed, 1);

    let logs = captured.contents();
    assert!(logs.contains("Converted"));
    assert!(logs.contains("Conversion failed"));
    assert!(logs.contains("bad.htm"));
    assert!(logs.contains("Batch completed"));
}

#[test]
fn test_debug_flag_emits_diagram_diagnostics() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("call.htm"),
        "<title>Call</title><code class=\"language-mermaid\">graph TD; A--&gt;B;</code>",
    )
    .unwrap();

    let (captured, _guard) = capture(tracing::Level::DEBUG);
    run_batch(dir.path(), &ConvertConfig::default().with_debug(true)).unwrap();

    let logs = captured.contents();
    assert!(logs.contains("Document converted"));
    assert!(logs.contains("flowchart"));
}

#[test]
fn test_missing_diagram_is_warned() {
    let (captured, _guard) = capture(tracing::Level::WARN);
    convert_html("<title>Draft</title><p>Nothing yet.</p>").unwrap();
    assert!(captured.contents().contains("No diagram container found"));
}
