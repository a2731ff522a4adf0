//! Shared chumsky parser utilities for Mermaid statement parsing

use chumsky::prelude::*;

const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Parse inline whitespace only (spaces and tabs, no newlines).
pub fn inline_whitespace<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    just(' ').or(just('\t')).repeated().ignored()
}

/// Parse a Mermaid node identifier: letters, digits, `_`, `-` and `+`.
pub fn node_id<'src>() -> impl Parser<'src, &'src str, String> + Clone {
    one_of(ALPHANUMERIC)
        .or(one_of("_-+"))
        .repeated()
        .at_least(1)
        .collect::<String>()
        .labelled("node identifier")
}

/// Parse an edge source identifier.
///
/// Narrower than [`node_id`]: `-` would swallow the arrow in `A-->B`.
pub fn edge_source_id<'src>() -> impl Parser<'src, &'src str, String> + Clone {
    one_of(ALPHANUMERIC)
        .or(just('_'))
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// Parse label text up to (not including) `close`.
pub fn label_until<'src>(close: char) -> impl Parser<'src, &'src str, String> + Clone {
    none_of(close).repeated().collect::<String>()
}

/// Consume whatever input remains.
pub fn rest<'src>() -> impl Parser<'src, &'src str, String> + Clone {
    any().repeated().collect::<String>()
}
