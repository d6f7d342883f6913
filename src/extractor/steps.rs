//! Method and step extraction.
//!
//! Each step group on the page becomes a [`Method`]. Inside a group the
//! `div.step` elements become [`Step`]s, and step pictures come from a
//! separate pass over the group's numbered list items so that picture `i`
//! always belongs to step `i`.

use dom_query::{Document, Selection};

use crate::dom;
use crate::error::ParseError;
use crate::result::{Method, Step};
use crate::selector::{self, markup};

use super::root;

/// Extract every step group as a method, numbered from 1.
///
/// Fatal if the page has no step group at all.
pub fn extract_methods(doc: &Document) -> Result<Vec<Method>, ParseError> {
    let groups = selector::query_all(&root(doc), markup::step_group);
    if groups.is_empty() {
        return Err(ParseError::MissingElement("step groups"));
    }

    Ok(groups
        .iter()
        .enumerate()
        .map(|(i, group)| extract_method(i + 1, group))
        .collect())
}

/// Build one method from a step group.
///
/// A group without a headline gets an empty title.
fn extract_method(number: usize, group: &Selection) -> Method {
    let title = dom::find(group, markup::METHOD_HEADLINE)
        .map(|headline| dom::trimmed_text(&headline))
        .unwrap_or_default();

    let elements = dom::find_all(group, markup::STEP);
    let pictures = step_pictures(group, elements.len());

    let steps = elements
        .iter()
        .zip(pictures)
        .enumerate()
        .map(|(i, (element, picture))| extract_step(i + 1, element, picture))
        .collect();

    Method {
        number,
        title,
        steps,
    }
}

/// Split one step element into lead-in title and description.
///
/// Scripts and footnote markers are removed first so neither leaks into the
/// title. A step without a bold lead-in gets an empty title.
fn extract_step(number: usize, element: &Selection, picture: Option<String>) -> Step {
    dom::remove_all(element, markup::SCRIPT);
    dom::remove_all(element, markup::FOOTNOTE_MARKER);

    let title = dom::find(element, "b").map(|bold| lead_in_text(&bold)).unwrap_or_default();

    dom::remove_all(element, "b");
    let description = dom::trimmed_text(element);

    Step {
        number,
        title,
        description,
        picture,
    }
}

/// Bold lead-in text minus any nested `<div>` blocks (tooltips, badges).
fn lead_in_text(bold: &Selection) -> String {
    let mut text = dom::text_content(bold).to_string();
    for nested in dom::find_all(bold, "div") {
        let nested_text = dom::text_content(&nested);
        if !nested_text.is_empty() {
            text = text.replace(&*nested_text, "");
        }
    }
    text.trim().to_string()
}

/// Picture URL for each of the group's `count` steps, position-aligned.
///
/// The list always has exactly `count` entries. A numbered item without an
/// image anchor, or whose image has no lazy-load source, leaves its slot
/// `None`; items past `count` are ignored.
#[must_use]
pub fn step_pictures(group: &Selection, count: usize) -> Vec<Option<String>> {
    let mut pictures = vec![None; count];

    let items = selector::query_all(group, markup::step_list_item)
        .into_iter()
        .filter(|item| dom::tag_name(&item.parent()).as_deref() == Some("ol"));

    for (slot, item) in pictures.iter_mut().zip(items) {
        *slot = item_picture(&item);
    }

    pictures
}

fn item_picture(item: &Selection) -> Option<String> {
    let anchor = selector::query(item, markup::image_anchor)?;
    let image = dom::find(&anchor, "img")?;
    dom::get_attribute(&image, "data-src")
        .map(|src| src.trim().to_string())
        .filter(|src| !src.is_empty())
}
