//! Utility functions for selector rules
//!
//! Attribute access that treats a missing attribute as empty, so rules can
//! be written as plain boolean expressions.

use crate::dom;
use dom_query::Selection;

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Check if element has a specific tag name
#[inline]
#[must_use]
pub fn is_tag(sel: &Selection, expected: &str) -> bool {
    tag(sel) == expected
}

/// Check if the class attribute contains `class` as a whole token
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    dom::class_list(sel).iter().any(|c| c == class)
}

/// Check if the class tokens are exactly `expected`, in any order
///
/// # Example
///
/// ```rust
/// use wikihow_extract::selector::utils;
/// use wikihow_extract::dom;
///
/// let doc = dom::parse(r#"<div class="steps section sticky">x</div>"#);
/// let div = doc.select("div");
///
/// assert!(utils::has_class_set(&div, &["section", "steps", "sticky"]));
/// assert!(!utils::has_class_set(&div, &["section", "steps"]));
/// ```
#[must_use]
pub fn has_class_set(sel: &Selection, expected: &[&str]) -> bool {
    let mut actual = dom::class_list(sel);
    actual.sort_unstable();
    actual.dedup();

    let mut wanted: Vec<&str> = expected.to_vec();
    wanted.sort_unstable();
    wanted.dedup();

    actual.len() == wanted.len() && actual.iter().zip(&wanted).all(|(a, w)| a == w)
}

/// Check if an attribute starts with `prefix` and has at least one more
/// character after it
#[must_use]
pub fn attr_has_prefix(sel: &Selection, name: &str, prefix: &str) -> bool {
    dom::get_attribute(sel, name)
        .is_some_and(|value| value.len() > prefix.len() && value.starts_with(prefix))
}
