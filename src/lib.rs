//! # wikihow-extract
//!
//! Structured records from wikiHow article pages.
//!
//! Each article page is fetched once and run through a fixed sequence of
//! field extractors (title, intro, methods and steps, ratings, byline,
//! statistics, summary, warnings, tips). The result is an
//! [`ArticleRecord`], served through the lazily parsed [`Article`] handle.
//! Site search and random-article selection work across the 18 language
//! editions in the [`Language`] registry.
//!
//! ## Quick Start
//!
//! ```rust
//! use wikihow_extract::{parse_html, Options};
//!
//! let html = r#"<html><body>
//!   <h1 class="title_lg"><a href="https://www.wikihow.com/Make-Tea">How to Make Tea</a></h1>
//!   <div class="mf-section-0"><p>Tea is simple.</p></div>
//!   <div id="byline_info"><span>Updated: January 5, 2024</span></div>
//!   <div class="section steps steps_first sticky">
//!     <span class="mw-headline">Brewing</span>
//!     <ol><li id="step-id-00"><div class="step"><b>Boil water.</b> Let it cool a little.</div></li></ol>
//!   </div>
//! </body></html>"#;
//!
//! let record = parse_html(html, "https://www.wikihow.com/Make-Tea", &Options::default())?;
//! assert_eq!(record.title, "How to Make Tea");
//! assert_eq!(record.n_methods(), Some(1));
//! # Ok::<(), wikihow_extract::ParseError>(())
//! ```
//!
//! ## Fetching
//!
//! [`Article::new`] fetches with a blocking [`HttpFetcher`]. Anything
//! implementing [`Fetch`] (including a plain closure) can stand in for it,
//! see [`Article::with_options`].

mod error;
mod options;
mod result;

/// Lazily parsed article handle.
pub mod article;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Per-field extractors and record assembly.
pub mod extractor;

/// Page fetching and body decoding.
pub mod fetch;

/// Language code to site mapping.
pub mod language;

/// Site search and random articles.
pub mod search;

/// Selector rules for wikiHow markup.
pub mod selector;

/// URL resolution and slug helpers.
pub mod url_utils;

// Public API - re-exports
pub use article::Article;
pub use error::{Error, ParseError, Result};
pub use extractor::{extract_record, parse_html};
pub use fetch::{decode_html, Fetch, HttpFetcher, SharedFetcher};
pub use language::Language;
pub use options::{Options, StepLayout, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use result::{ArticleRecord, Method, Step, StepsView};
pub use search::{
    random_article, random_article_with, search, search_all, search_with, Search, DEFAULT_MAX_RESULTS,
};
