//! Byline fields: expert flag and last-updated date.

use chrono::NaiveDate;
use dom_query::Document;

use crate::dom;
use crate::error::ParseError;
use crate::selector::markup;

use super::root;

/// Date format of the byline ("March 3, 2021").
const DATE_FORMAT: &str = "%B %d, %Y";

/// Whether the article is expert-authored.
///
/// Expert bylines carry a bolded fragment. Fatal if the byline is missing.
pub fn extract_is_expert(doc: &Document) -> Result<bool, ParseError> {
    let byline = dom::find(&root(doc), markup::BYLINE).ok_or(ParseError::MissingElement("byline"))?;
    Ok(dom::find(&byline, "b").is_some())
}

/// Last-updated date from the byline's first `<span>`.
///
/// The span reads `"Updated: March 3, 2021"`; the text after the first
/// `": "` is parsed. Any inconsistency leaves the date absent.
#[must_use]
pub fn extract_last_updated(doc: &Document) -> Option<NaiveDate> {
    let byline = dom::find(&root(doc), markup::BYLINE)?;
    let span = dom::find(&byline, "span")?;
    parse_byline_date(&dom::text_content(&span))
}

fn parse_byline_date(text: &str) -> Option<NaiveDate> {
    let date = text.split_once(": ").map_or(text, |(_, rest)| rest);
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}
