//! Lazily parsed wikiHow article.
//!
//! An [`Article`] is a URL plus at most one parse pass. The pass runs on
//! construction when eager, otherwise on first field access, and its
//! outcome is kept: later accessors never re-fetch. A failed pass stays
//! failed until [`Article::reset`].

use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, ParseError, Result};
use crate::extractor::parse_html;
use crate::fetch::{decode_html, default_fetcher, SharedFetcher};
use crate::options::Options;
use crate::result::{ArticleRecord, Method, StepsView};

/// A wikiHow article addressed by URL.
///
/// A failed parse is kept: every accessor keeps returning the same error
/// without fetching again. Call [`Article::reset`] to retry.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use wikihow_extract::{Article, Options, ParseError};
///
/// let offline = Arc::new(|url: &str| -> Result<Vec<u8>, ParseError> {
///     Err(ParseError::Fetch { url: url.to_string(), message: "offline".to_string() })
/// });
/// let article = Article::with_options("https://www.wikihow.com/Tie-a-Tie", Options::default(), offline, true);
///
/// assert_eq!(article.url(), "https://www.wikihow.com/Tie-a-Tie");
/// assert!(!article.is_parsed());
/// assert!(article.title().is_err());
/// assert!(article.is_failed());
///
/// let mut article = article;
/// article.reset();
/// assert!(!article.is_failed());
/// ```
pub struct Article {
    url: String,
    options: Options,
    fetcher: SharedFetcher,
    state: OnceLock<std::result::Result<ArticleRecord, ParseError>>,
}

impl Article {
    /// Lazy article fetched with the default HTTP fetcher and
    /// environment-derived options.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_options(url, Options::from_env(), default_fetcher(), true)
    }

    /// Like [`Article::new`], parsed immediately.
    #[must_use]
    pub fn eager(url: impl Into<String>) -> Self {
        Self::with_options(url, Options::from_env(), default_fetcher(), false)
    }

    /// Lazy article using `fetcher` and default options.
    #[must_use]
    pub fn with_fetcher(url: impl Into<String>, fetcher: SharedFetcher) -> Self {
        Self::with_options(url, Options::default(), fetcher, true)
    }

    /// Article with explicit options and fetcher. When `lazy` is false the
    /// parse pass runs before returning; its failure is reported by the
    /// accessors.
    #[must_use]
    pub fn with_options(
        url: impl Into<String>,
        options: Options,
        fetcher: SharedFetcher,
        lazy: bool,
    ) -> Self {
        let article = Self {
            url: url.into(),
            options,
            fetcher,
            state: OnceLock::new(),
        };
        if !lazy {
            let _ = article.state();
        }
        article
    }

    /// The URL this article was created with. Never triggers a fetch.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Options used by the parse pass.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// True once a parse pass has succeeded.
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        matches!(self.state.get(), Some(Ok(_)))
    }

    /// True once a parse pass has failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.state.get(), Some(Err(_)))
    }

    /// Forget the outcome of the last parse pass, failed or not.
    pub fn reset(&mut self) {
        self.state = OnceLock::new();
    }

    fn state(&self) -> &std::result::Result<ArticleRecord, ParseError> {
        self.state.get_or_init(|| self.parse())
    }

    fn parse(&self) -> std::result::Result<ArticleRecord, ParseError> {
        let body = self.fetcher.fetch(&self.url)?;
        let html = decode_html(&body);
        let result = parse_html(&html, &self.url, &self.options);

        match &result {
            Ok(record) => debug!(url = %self.url, steps = record.steps.n_steps(), "article parsed"),
            Err(err) => debug!(url = %self.url, error = %err, "article parse failed"),
        }
        result
    }

    /// The whole record, parsing first if needed.
    pub fn record(&self) -> Result<&ArticleRecord> {
        self.state().as_ref().map_err(|err| Error::Parse(err.clone()))
    }

    /// Consume the article, returning its record.
    pub fn into_record(mut self) -> Result<ArticleRecord> {
        let result = match self.state.take() {
            Some(result) => result,
            None => self.parse(),
        };
        result.map_err(Error::from)
    }

    /// Canonical URL from the title heading link.
    pub fn canonical_url(&self) -> Result<&str> {
        Ok(&self.record()?.url)
    }

    pub fn title(&self) -> Result<&str> {
        Ok(&self.record()?.title)
    }

    pub fn intro(&self) -> Result<&str> {
        Ok(&self.record()?.intro)
    }

    pub fn summary(&self) -> Result<Option<&str>> {
        Ok(self.record()?.summary.as_deref())
    }

    /// Steps in whichever shape the options selected.
    pub fn steps(&self) -> Result<&StepsView> {
        Ok(&self.record()?.steps)
    }

    /// Methods; empty when the steps were assembled flat.
    pub fn methods(&self) -> Result<&[Method]> {
        Ok(self.record()?.steps.methods())
    }

    pub fn n_methods(&self) -> Result<Option<usize>> {
        Ok(self.record()?.n_methods())
    }

    pub fn num_votes(&self) -> Result<Option<u64>> {
        Ok(self.record()?.num_votes)
    }

    pub fn percent_helpful(&self) -> Result<Option<u8>> {
        Ok(self.record()?.percent_helpful)
    }

    pub fn is_expert(&self) -> Result<bool> {
        Ok(self.record()?.is_expert)
    }

    pub fn last_updated(&self) -> Result<Option<NaiveDate>> {
        Ok(self.record()?.last_updated)
    }

    pub fn views(&self) -> Result<Option<u64>> {
        Ok(self.record()?.views)
    }

    pub fn co_authors(&self) -> Result<Option<u64>> {
        Ok(self.record()?.co_authors)
    }

    pub fn references(&self) -> Result<usize> {
        Ok(self.record()?.references)
    }

    pub fn warnings(&self) -> Result<&[String]> {
        Ok(&self.record()?.warnings)
    }

    pub fn tips(&self) -> Result<&[String]> {
        Ok(&self.record()?.tips)
    }

    /// Export the record as a JSON object.
    ///
    /// Keys: `url`, `title`, `intro`, `n_methods`, `steps`, `num_votes`,
    /// `percent_helpful`, `is_expert`, `last_updated` (`YYYY-MM-DD`),
    /// `views`, `co_authors`, `references`, `summary`, `warnings`, `tips`.
    /// Absent values are `null`.
    pub fn get(&self) -> Result<Map<String, Value>> {
        let record = self.record()?;
        let mut map = Map::new();

        map.insert("url".into(), Value::from(record.url.as_str()));
        map.insert("title".into(), Value::from(record.title.as_str()));
        map.insert("intro".into(), Value::from(record.intro.as_str()));
        map.insert("n_methods".into(), serde_json::to_value(record.n_methods())?);
        map.insert("steps".into(), serde_json::to_value(&record.steps)?);
        map.insert("num_votes".into(), serde_json::to_value(record.num_votes)?);
        map.insert("percent_helpful".into(), serde_json::to_value(record.percent_helpful)?);
        map.insert("is_expert".into(), Value::Bool(record.is_expert));
        map.insert("last_updated".into(), serde_json::to_value(record.last_updated)?);
        map.insert("views".into(), serde_json::to_value(record.views)?);
        map.insert("co_authors".into(), serde_json::to_value(record.co_authors)?);
        map.insert("references".into(), Value::from(record.references));
        map.insert("summary".into(), serde_json::to_value(&record.summary)?);
        map.insert("warnings".into(), serde_json::to_value(&record.warnings)?);
        map.insert("tips".into(), serde_json::to_value(&record.tips)?);

        Ok(map)
    }
}

impl fmt::Debug for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state.get() {
            None => "unparsed",
            Some(Ok(_)) => "parsed",
            Some(Err(_)) => "failed",
        };
        f.debug_struct("Article")
            .field("url", &self.url)
            .field("options", &self.options)
            .field("state", &state)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Article({})", self.url)
    }
}
