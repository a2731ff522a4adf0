//! Shared text utilities
//!
//! Small string helpers used by the extractor, the Mermaid support and the
//! Markdown serializer.

/// Collapse every run of whitespace into a single space and trim the ends.
///
/// # Example
/// ```
/// use callflow::core::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Front\n   Desk  "), "Front Desk");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip leading and trailing line breaks, leaving all other characters
/// (including indentation on the first line) untouched.
pub fn trim_line_breaks(text: &str) -> &str {
    text.trim_matches(|c| c == '\n' || c == '\r')
}

/// Backtick fence long enough to enclose `body` without altering it.
///
/// At least three backticks, and one more than the longest backtick run
/// inside `body`.
pub fn fence_for(body: &str) -> String {
    let mut longest = 0;
    let mut current = 0;
    for c in body.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

/// Escape prose so it stays a plain paragraph in Markdown.
///
/// Backticks are backslash-escaped everywhere. At the start of each line,
/// heading, quote, list, rule and fence markers are escaped too.
///
/// # Example
/// ```
/// use callflow::core::escape_paragraph;
///
/// assert_eq!(escape_paragraph("# Internal note"), "\\# Internal note");
/// assert_eq!(escape_paragraph("1. Dial out"), "1\\. Dial out");
/// ```
pub fn escape_paragraph(text: &str) -> String {
    text.lines()
        .map(escape_paragraph_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_paragraph_line(line: &str) -> String {
    let body = line.trim_start();
    let mut out = String::with_capacity(body.len() + 2);

    let digits = body.len() - body.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let rest = if digits > 0 && body[digits..].starts_with(['.', ')']) {
        out.push_str(&body[..digits]);
        out.push('\\');
        &body[digits..]
    } else {
        if body.starts_with(['#', '>', '-', '+', '*', '=', '~']) {
            out.push('\\');
        }
        body
    };

    for c in rest.chars() {
        if c == '`' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Normalize a Mermaid node label for prose: `<br>` variants become spaces,
/// surrounding quotes are removed and whitespace is trimmed.
pub fn clean_label(label: &str) -> String {
    let mut text = label.to_string();
    for br in ["<br/>", "<br />", "<br>", "<BR>", "<BR/>", "<BR />"] {
        text = text.replace(br, " ");
    }
    let trimmed = text.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    unquoted.trim().to_string()
}

/// True when `text` begins with two alphabetic words separated by whitespace.
pub fn starts_with_two_words(text: &str) -> bool {
    let first_len = text
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    if first_len == 0 {
        return false;
    }
    let rest = &text[first_len..];
    let after_space = rest.trim_start();
    if after_space.len() == rest.len() {
        return false;
    }
    after_space
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
}
