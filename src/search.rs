//! Site search and random-article selection.
//!
//! [`search`] fetches one result listing up front and then yields parsed
//! [`Article`]s lazily: each candidate is fetched only when the iterator
//! reaches it, and candidates whose parse fails are skipped.

use std::fmt;

use tracing::{debug, info, warn};
use url::Url;

use crate::article::Article;
use crate::dom;
use crate::error::Result;
use crate::fetch::{decode_html, default_fetcher, SharedFetcher};
use crate::language::Language;
use crate::options::Options;
use crate::selector::{self, markup};
use crate::url_utils::{resolve_link, search_url, RANDOMIZER_PATH};

/// Result cap used by callers that don't pick one.
pub const DEFAULT_MAX_RESULTS: i64 = 10;

/// Lazy sequence of parsed search results.
///
/// Single pass: once exhausted it stays exhausted.
pub struct Search {
    links: std::vec::IntoIter<String>,
    remaining: Option<usize>,
    options: Options,
    fetcher: SharedFetcher,
}

impl Search {
    /// Candidate links not yet visited.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.links.len()
    }
}

impl Iterator for Search {
    type Item = Article;

    fn next(&mut self) -> Option<Article> {
        if self.remaining == Some(0) {
            return None;
        }

        for link in self.links.by_ref() {
            let article = Article::with_options(
                link,
                self.options.clone(),
                SharedFetcher::clone(&self.fetcher),
                false,
            );

            if let Err(err) = article.record() {
                warn!(url = article.url(), error = %err, "skipping search result");
                continue;
            }

            if let Some(remaining) = self.remaining.as_mut() {
                *remaining -= 1;
            }
            return Some(article);
        }

        None
    }
}

impl fmt::Debug for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("pending", &self.links.len())
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// Search the site in `lang` for `term`.
///
/// At most `max_results` successfully parsed articles are produced; zero or
/// a negative value means no cap. Fails with
/// [`Error::UnsupportedLanguage`](crate::Error::UnsupportedLanguage) for an
/// unknown code and with [`Error::Parse`](crate::Error::Parse) when the
/// listing page itself cannot be fetched.
pub fn search(term: &str, max_results: i64, lang: &str) -> Result<Search> {
    search_with(term, max_results, lang, Options::from_env(), default_fetcher())
}

/// [`search`] with explicit options and fetcher.
pub fn search_with(
    term: &str,
    max_results: i64,
    lang: &str,
    options: Options,
    fetcher: SharedFetcher,
) -> Result<Search> {
    let language = Language::lookup(lang)?;
    let listing_url = search_url(language.base_url(), term);

    let body = fetcher.fetch(&listing_url)?;
    let links = result_links(&decode_html(&body), language);
    info!(term, lang = %language, candidates = links.len(), "search listing fetched");

    Ok(Search {
        links: links.into_iter(),
        remaining: usize::try_from(max_results).ok().filter(|n| *n > 0),
        options,
        fetcher,
    })
}

/// Eagerly collect up to `max_results` parsed results.
pub fn search_all(term: &str, max_results: i64, lang: &str) -> Result<Vec<Article>> {
    Ok(search(term, max_results, lang)?.collect())
}

/// Absolute URLs of the result anchors on a listing page, in listing order.
fn result_links(html: &str, language: Language) -> Vec<String> {
    let Ok(base) = Url::parse(language.base_url()) else {
        return Vec::new();
    };

    let doc = dom::parse(html);
    selector::query_all(&doc.select("html"), markup::result_link)
        .iter()
        .filter_map(|anchor| dom::get_attribute(anchor, "href"))
        .filter_map(|href| {
            let resolved = resolve_link(&href, &base);
            if resolved.is_none() {
                debug!(href = %href, "unresolvable result link");
            }
            resolved
        })
        .collect()
}

/// Unparsed article pointing at the random-article page of `lang`.
pub fn random_article(lang: &str) -> Result<Article> {
    random_article_with(lang, Options::from_env(), default_fetcher())
}

/// [`random_article`] with explicit options and fetcher.
pub fn random_article_with(lang: &str, options: Options, fetcher: SharedFetcher) -> Result<Article> {
    let language = Language::lookup(lang)?;
    let url = format!("{}{RANDOMIZER_PATH}", language.base_url());
    Ok(Article::with_options(url, options, fetcher, true))
}
