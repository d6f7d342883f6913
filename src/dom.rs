//! DOM Operations Adapter
//!
//! The extraction pipeline only needs a handful of tree operations: find the
//! first or all matches under a node, read text and attributes, and drop
//! subtrees before reading text. They are collected here on top of
//! `dom_query` so extractors never touch its API directly.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Whitespace-separated tokens of the `class` attribute.
#[must_use]
pub fn class_list(sel: &Selection) -> Vec<String> {
    sel.attr("class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Tag name (lowercase) of the first node in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// All text content of the node and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with surrounding whitespace removed.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

// === Querying ===

/// First descendant matching a CSS selector, if any.
#[must_use]
pub fn find<'a>(sel: &Selection<'a>, css: &str) -> Option<Selection<'a>> {
    let found = sel.select(css);
    found.nodes().first().map(|node| Selection::from(*node))
}

/// Every descendant matching a CSS selector, one selection per node, in
/// document order.
#[must_use]
pub fn find_all<'a>(sel: &Selection<'a>, css: &str) -> Vec<Selection<'a>> {
    sel.select(css)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Tree Manipulation ===

/// Remove every descendant matching `css` (with its subtree).
///
/// Returns the number of removed elements.
pub fn remove_all(sel: &Selection, css: &str) -> usize {
    let found = sel.select(css);
    let count = found.length();
    if count > 0 {
        found.remove();
    }
    count
}
