//! Reader statistics: votes, helpful percentage, co-authors, views and
//! reference count.
//!
//! All of these are optional except the view count under
//! [`Options::require_stats`](crate::Options::require_stats).

use std::sync::LazyLock;

use dom_query::Document;
use regex::Regex;

use crate::dom;
use crate::error::ParseError;
use crate::selector::{self, markup};

use super::root;

/// Digits (with separators, spaces included) before the literal " votes"
#[allow(clippy::expect_used)]
static VOTES_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d[\d,.\x{20}\x{a0}\x{202f}]*)\s+votes").expect("valid regex")
});

/// Whole number before a percent sign; a decimal fraction does not match
#[allow(clippy::expect_used)]
static PERCENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^\d.])(\d{1,3})\s*%").expect("valid regex"));

/// Parse a count, dropping thousands separators.
///
/// # Example
///
/// ```rust
/// use wikihow_extract::extractor::stats::parse_count;
///
/// assert_eq!(parse_count("12,345"), Some(12345));
/// assert_eq!(parse_count(" 1.204.566 "), Some(1_204_566));
/// assert_eq!(parse_count("n/a"), None);
/// ```
#[must_use]
pub fn parse_count(text: &str) -> Option<u64> {
    let digits: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(*c, ',' | '.' | ' ' | '\u{a0}' | '\u{202f}'))
        .collect();

    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

// ============================================================
// VOTES / HELPFUL
// ============================================================

/// Extract `(num_votes, percent_helpful)` from the rating block.
///
/// Both are `None` when the block is missing or empty ("no votes yet").
/// Each value is `None` on its own when its marker cannot be found.
#[must_use]
pub fn extract_rating(doc: &Document) -> (Option<u64>, Option<u8>) {
    let Some(block) = dom::find(&root(doc), markup::RATING_COUNT) else {
        return (None, None);
    };

    let text = dom::text_content(&block);
    if text.trim().is_empty() {
        return (None, None);
    }

    let votes = VOTES_PATTERN
        .captures(&text)
        .and_then(|c| c.get(1))
        .and_then(|m| parse_count(m.as_str()));

    let percent = PERCENT_PATTERN
        .captures(&text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u8>().ok())
        .filter(|p| *p <= 100);

    (votes, percent)
}

// ============================================================
// CO-AUTHORS / VIEWS
// ============================================================

/// Extract `(co_authors, views)` from the statistics box.
///
/// The values sit at fixed positions among the box's text blocks. A missing
/// box leaves both absent, unless `required` is set, in which case a
/// missing box or an unreadable view count fails the parse.
pub fn extract_stats_box(
    doc: &Document,
    required: bool,
) -> Result<(Option<u64>, Option<u64>), ParseError> {
    let Some(stats) = selector::query(&root(doc), markup::stats_box) else {
        if required {
            return Err(ParseError::MissingElement("statistics box"));
        }
        return Ok((None, None));
    };

    let blocks = dom::find_all(&stats, markup::STATS_TEXT);
    let value_at = |index: usize| {
        blocks
            .get(index)
            .and_then(|block| dom::find(block, markup::STATS_VALUE))
            .and_then(|value| parse_count(&dom::text_content(&value)))
    };

    let co_authors = value_at(markup::STATS_CO_AUTHORS_INDEX);
    let views = value_at(markup::STATS_VIEWS_INDEX);

    if required && views.is_none() {
        return Err(ParseError::Malformed {
            field: "views",
            detail: format!("no readable count among {} statistics blocks", blocks.len()),
        });
    }

    Ok((co_authors, views))
}

// ============================================================
// REFERENCES
// ============================================================

/// Number of external reference links. Zero when there are none.
#[must_use]
pub fn count_references(doc: &Document) -> usize {
    selector::query_all(&root(doc), markup::reference_link).len()
}
