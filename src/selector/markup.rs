//! wikiHow Markup Selectors
//!
//! Selector rules and CSS selectors for the article, byline, statistics and
//! search-listing markup of wikiHow pages. These target one site's layout and
//! change when the site does.

use dom_query::Selection;

use crate::selector::utils::{attr_has_prefix, has_class, has_class_set, is_tag};

// ============================================================
// CSS SELECTORS
// ============================================================

/// Lead content block holding the intro.
pub const INTRO: &str = "div.mf-section-0";

/// One step inside a step group.
pub const STEP: &str = "div.step";

/// Method headline inside a step group.
pub const METHOD_HEADLINE: &str = "span.mw-headline";

/// Joint votes / helpful-percentage block.
pub const RATING_COUNT: &str = "div.sp_helpful_rating_count";

/// Byline block with expert marker and last-updated date.
pub const BYLINE: &str = "div#byline_info";

/// Sibling text blocks of the statistics box.
pub const STATS_TEXT: &str = "div.sp_text";

/// Value span inside one statistics text block.
pub const STATS_VALUE: &str = "span.sp_text_data";

/// Quick-summary wrapper.
pub const SUMMARY_WRAPPER: &str = "div#summary_wrapper";

/// Quick-summary paragraph inside the wrapper.
pub const SUMMARY_TEXT: &str = "p#summary_text";

/// Warnings container.
pub const WARNINGS: &str = "div#warnings";

/// Tips container.
pub const TIPS: &str = "div#tips";

/// Elements stripped from text before it is read.
pub const FOOTNOTE_MARKER: &str = "sup";

/// Embedded scripts stripped from steps before their text is read.
pub const SCRIPT: &str = "script";

/// Position of the co-author count among the statistics text blocks.
pub const STATS_CO_AUTHORS_INDEX: usize = 0;

/// Position of the view count among the statistics text blocks.
pub const STATS_VIEWS_INDEX: usize = 2;

// ============================================================
// RULES
// ============================================================

/// Size variants of the primary heading class.
const TITLE_CLASSES: &[&str] = &["title_lg", "title_md", "title_sm"];

/// Class signatures of step-group containers: the first group, then the rest.
pub static STEP_GROUP_SIGNATURES: &[&[&str]] = &[
    &["section", "steps", "steps_first", "sticky"],
    &["section", "steps", "sticky"],
];

/// Primary heading: `<h1>` in one of three size variants.
#[must_use]
pub fn title_heading(sel: &Selection) -> bool {
    is_tag(sel, "h1") && TITLE_CLASSES.iter().any(|c| has_class(sel, c))
}

/// Step-group container, either signature.
#[must_use]
pub fn step_group(sel: &Selection) -> bool {
    is_tag(sel, "div")
        && STEP_GROUP_SIGNATURES
            .iter()
            .any(|signature| has_class_set(sel, signature))
}

/// Numbered list item of a step (`<li id="step...">`).
#[must_use]
pub fn step_list_item(sel: &Selection) -> bool {
    is_tag(sel, "li") && attr_has_prefix(sel, "id", "step")
}

/// Anchor wrapping a step illustration.
#[must_use]
pub fn image_anchor(sel: &Selection) -> bool {
    is_tag(sel, "a") && has_class(sel, "image")
}

/// Statistics box holding co-author and view counts.
#[must_use]
pub fn stats_box(sel: &Selection) -> bool {
    is_tag(sel, "div") && has_class_set(sel, &["sp_box", "sp_stats_box"])
}

/// External reference link.
#[must_use]
pub fn reference_link(sel: &Selection) -> bool {
    is_tag(sel, "a") && has_class(sel, "external") && has_class(sel, "free")
}

/// Result link on the search listing page.
#[must_use]
pub fn result_link(sel: &Selection) -> bool {
    is_tag(sel, "a") && has_class(sel, "result_link")
}
