//! Field extraction from a parsed wikiHow page.
//!
//! # Module Structure
//!
//! - `content`: title, canonical URL, intro and summary
//! - `steps`: methods, steps and step pictures
//! - `stats`: votes, helpful percentage, co-authors, views, references
//! - `byline`: expert flag and last-updated date
//! - `lists`: warnings and tips
//!
//! Each extractor is a function of the document. Required fields return
//! `Result<_, ParseError>`; optional ones return `Option`, an empty `Vec`
//! or zero and never fail. [`extract_record`] runs them all in a fixed order
//! and assembles an [`ArticleRecord`].
//!
//! Some extractors strip footnote markers and scripts from the subtrees
//! they read, so the document is consumed by one pass.

pub mod byline;
pub mod content;
pub mod lists;
pub mod stats;
pub mod steps;

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom;
use crate::error::ParseError;
use crate::options::{Options, StepLayout};
use crate::result::{ArticleRecord, StepsView};

/// Document root every extractor searches from.
pub(crate) fn root(doc: &Document) -> Selection<'_> {
    doc.select("html")
}

/// Run every field extractor over `doc` and assemble the record.
///
/// Any required field that is missing aborts the whole pass; no partial
/// record is returned.
pub fn extract_record(
    doc: &Document,
    page_url: &str,
    options: &Options,
) -> Result<ArticleRecord, ParseError> {
    let (url, title) = content::extract_title(doc, page_url)?;
    let intro = content::extract_intro(doc)?;
    let methods = steps::extract_methods(doc)?;
    let (num_votes, percent_helpful) = stats::extract_rating(doc);
    let is_expert = byline::extract_is_expert(doc)?;
    let last_updated = byline::extract_last_updated(doc);
    let (co_authors, views) = stats::extract_stats_box(doc, options.require_stats)?;
    let references = stats::count_references(doc);
    let summary = content::extract_summary(doc);
    let warnings = lists::extract_warnings(doc);
    let tips = lists::extract_tips(doc);

    log_absent(&url, "num_votes", num_votes.is_none());
    log_absent(&url, "percent_helpful", percent_helpful.is_none());
    log_absent(&url, "last_updated", last_updated.is_none());
    log_absent(&url, "views", views.is_none());
    log_absent(&url, "co_authors", co_authors.is_none());
    log_absent(&url, "summary", summary.is_none());

    let grouped = StepsView::Grouped(methods);
    let steps = match options.layout {
        StepLayout::Grouped => grouped,
        StepLayout::Flat => grouped.into_flat(),
    };

    Ok(ArticleRecord {
        url,
        title,
        intro,
        summary,
        steps,
        num_votes,
        percent_helpful,
        is_expert,
        last_updated,
        views,
        co_authors,
        references,
        warnings,
        tips,
    })
}

fn log_absent(url: &str, field: &'static str, absent: bool) {
    if absent {
        debug!(url, field, "optional field absent");
    }
}

/// Parse an HTML page fetched from `page_url` into a record.
///
/// # Example
///
/// ```rust
/// use wikihow_extract::{parse_html, Options};
///
/// let html = r#"<html><body>
///   <h1 class="title_lg"><a href="https://www.wikihow.com/Boil-an-Egg">How to Boil an Egg</a></h1>
///   <div class="mf-section-0"><p>Eggs are easy.</p></div>
///   <div id="byline_info"><span>Updated: May 1, 2022</span></div>
///   <div class="section steps steps_first sticky">
///     <ol><li id="step-id-00"><div class="step"><b>Boil water.</b> Use a pot.</div></li></ol>
///   </div>
/// </body></html>"#;
///
/// let record = parse_html(html, "https://www.wikihow.com/Boil-an-Egg", &Options::default())?;
/// assert_eq!(record.title, "How to Boil an Egg");
/// assert_eq!(record.steps.n_steps(), 1);
/// # Ok::<(), wikihow_extract::ParseError>(())
/// ```
pub fn parse_html(html: &str, page_url: &str, options: &Options) -> Result<ArticleRecord, ParseError> {
    let doc = dom::parse(html);
    extract_record(&doc, page_url, options)
}
