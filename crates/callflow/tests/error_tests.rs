//! Tests for core error types

use std::io;

use callflow::core::ConvertError;
use callflow::{convert_html, parse_sections};

#[test]
fn test_not_found_error() {
    let error = ConvertError::not_found("exports/queues");
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Input folder not found"));
    assert!(error_msg.contains("exports/queues"));
}

#[test]
fn test_parse_error() {
    let error = ConvertError::parse_error("document is empty");
    assert_eq!(format!("{}", error), "Parse error: document is empty");
}

#[test]
fn test_io_error() {
    let error = ConvertError::io_error(
        "call1.md",
        io::Error::new(io::ErrorKind::Other, "disk full"),
    );
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("call1.md"));
    assert!(error_msg.contains("disk full"));
}

#[test]
fn test_error_kinds_are_distinct() {
    let kinds = [
        ConvertError::not_found("x").kind(),
        ConvertError::parse_error("x").kind(),
        ConvertError::io_error("x", io::Error::new(io::ErrorKind::Other, "x")).kind(),
    ];
    assert_eq!(kinds, ["not_found", "parse", "io"]);
}

#[test]
fn test_structural_corruption_is_parse_error() {
    for input in ["", "\0\0\0", "<html><body><div class=", "just words"] {
        let err = convert_html(input).unwrap_err();
        assert_eq!(err.kind(), "parse", "input {:?}", input);
    }
}

#[test]
fn test_sloppy_markup_is_not_an_error() {
    let sections = parse_sections("<title>Loose</title><p>unclosed <b>bold<p>next").unwrap();
    assert_eq!(sections.title(), Some("Loose"));
    assert_eq!(sections.descriptions().len(), 2);
}
