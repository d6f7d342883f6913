//! Warnings and tips.
//!
//! Both sections share one layout: a container holding a `<ul>` whose items
//! wrap their text in a `<div>`. Some pages hold a single paragraph instead
//! of a list; that paragraph becomes the only entry.

use dom_query::Document;
use tracing::warn;

use crate::dom;
use crate::selector::markup;

use super::root;

/// Extract the warnings section. Empty when absent.
#[must_use]
pub fn extract_warnings(doc: &Document) -> Vec<String> {
    collect_entries(doc, markup::WARNINGS, "warnings")
}

/// Extract the tips section. Empty when absent.
#[must_use]
pub fn extract_tips(doc: &Document) -> Vec<String> {
    collect_entries(doc, markup::TIPS, "tips")
}

/// Collect the entries under `container_css`.
///
/// A list item without its `<div>` discards the whole section: nothing
/// collected before it is kept.
fn collect_entries(doc: &Document, container_css: &str, field: &'static str) -> Vec<String> {
    let Some(container) = dom::find(&root(doc), container_css) else {
        return Vec::new();
    };

    let Some(list) = dom::find(&container, "ul") else {
        return dom::find(&container, "p")
            .map(|p| dom::trimmed_text(&p))
            .filter(|text| !text.is_empty())
            .into_iter()
            .collect();
    };

    let mut entries = Vec::new();
    for (index, item) in dom::find_all(&list, "li").iter().enumerate() {
        let Some(body) = dom::find(item, "div") else {
            warn!(field, item = index, "list item without body, discarding section");
            return Vec::new();
        };
        entries.push(dom::trimmed_text(&body));
    }
    entries
}
