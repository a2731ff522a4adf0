//! Small query helpers over an `RcDom` tree

use markup5ever_rcdom::{Handle, NodeData};

/// Lowercase local tag name of an element node
pub fn local_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

/// Value of the attribute named `attr` (local name, case-sensitive)
pub fn attribute(handle: &Handle, attr: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == attr)
            .map(|a| String::from(&*a.value)),
        _ => None,
    }
}

/// Whitespace-separated entries of the `class` attribute
pub fn classes(handle: &Handle) -> Vec<String> {
    attribute(handle, "class")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn has_class(handle: &Handle, class: &str) -> bool {
    classes(handle).iter().any(|c| c.eq_ignore_ascii_case(class))
}

/// Concatenated text of every descendant text node, entities already decoded
pub fn text_content(handle: &Handle) -> String {
    let mut out = String::new();
    collect_text(handle, &mut out);
    out
}

fn collect_text(handle: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &handle.data {
        out.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// Number of elements below `handle`, not counting the `html`, `head` and
/// `body` elements the parser inserts on its own.
pub fn content_element_count(handle: &Handle) -> usize {
    let own = match local_name(handle) {
        Some("html" | "head" | "body") | None => 0,
        Some(_) => 1,
    };
    own + handle
        .children
        .borrow()
        .iter()
        .map(content_element_count)
        .sum::<usize>()
}
