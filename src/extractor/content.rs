//! Title, intro and summary extraction.

use dom_query::Document;
use url::Url;

use crate::dom;
use crate::error::ParseError;
use crate::selector::{self, markup};
use crate::url_utils::{complete_scheme, resolve_link, title_from_url};

use super::root;

/// Characters of boilerplate ("... read the full article") closing the
/// summary paragraph.
pub const SUMMARY_SUFFIX_LEN: usize = 35;

// ============================================================
// TITLE EXTRACTION
// ============================================================

/// Extract the title and canonical URL from the primary heading.
///
/// The heading's link carries both: its text is the title and its `href`
/// the canonical URL. An empty link text falls back to the URL slug.
///
/// Returns `(canonical_url, title)`. Fatal if the heading or its link is
/// missing.
pub fn extract_title(doc: &Document, page_url: &str) -> Result<(String, String), ParseError> {
    let heading = selector::query(&root(doc), markup::title_heading)
        .ok_or(ParseError::MissingElement("title heading"))?;
    let link = dom::find(&heading, "a").ok_or(ParseError::MissingElement("title heading link"))?;

    let canonical = dom::get_attribute(&link, "href")
        .and_then(|href| match Url::parse(page_url) {
            Ok(base) => resolve_link(&href, &base),
            Err(_) if !href.trim().is_empty() => Some(complete_scheme(&href)),
            Err(_) => None,
        })
        .unwrap_or_else(|| page_url.to_string());

    let text = dom::trimmed_text(&link);
    let title = if text.is_empty() {
        title_from_url(&canonical)
    } else {
        text
    };

    if title.is_empty() {
        return Err(ParseError::Malformed {
            field: "title",
            detail: "heading link has no text and the URL has no slug".to_string(),
        });
    }

    Ok((canonical, title))
}

// ============================================================
// INTRO EXTRACTION
// ============================================================

/// Extract the lead paragraph, with footnote markers removed.
///
/// Fatal if the lead block is missing.
pub fn extract_intro(doc: &Document) -> Result<String, ParseError> {
    let intro = dom::find(&root(doc), markup::INTRO).ok_or(ParseError::MissingElement("intro section"))?;
    dom::remove_all(&intro, markup::FOOTNOTE_MARKER);
    Ok(dom::trimmed_text(&intro))
}

// ============================================================
// SUMMARY EXTRACTION
// ============================================================

/// Extract the quick summary with its boilerplate suffix cut off.
///
/// `None` when the wrapper or its paragraph is missing, or when nothing is
/// left after the cut.
#[must_use]
pub fn extract_summary(doc: &Document) -> Option<String> {
    let wrapper = dom::find(&root(doc), markup::SUMMARY_WRAPPER)?;
    let paragraph = dom::find(&wrapper, markup::SUMMARY_TEXT)?;
    let text = dom::text_content(&paragraph);

    let keep = text.chars().count().saturating_sub(SUMMARY_SUFFIX_LEN);
    let summary: String = text.chars().take(keep).collect();

    if summary.is_empty() {
        None
    } else {
        Some(summary)
    }
}
