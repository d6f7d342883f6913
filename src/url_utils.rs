//! URL Utility Functions
//!
//! Link resolution for article and search-result URLs, search query
//! construction, and the slug-to-title fallback.

use percent_encoding::percent_decode_str;
use url::{form_urlencoded, Url};

/// Search path appended to a language base URL.
const SEARCH_PATH: &str = "wikiHowTo?search=";

/// Random-article path appended to a language base URL.
pub const RANDOMIZER_PATH: &str = "Special:Randomizer";

/// Resolve an `href` found on a page into an absolute URL.
///
/// - `//host/path` takes the base URL's scheme.
/// - `http(s)://...` is returned unchanged.
/// - `host.tld/path` (no scheme) gets `http://`.
/// - Anything else is joined against `base`.
///
/// Returns `None` for empty or unresolvable input.
///
/// # Example
///
/// ```rust
/// use url::Url;
/// use wikihow_extract::url_utils::resolve_link;
///
/// let base = Url::parse("http://ru.wikihow.com/").ok();
/// let base = base.as_ref();
/// assert_eq!(
///     base.and_then(|b| resolve_link("//ru.wikihow.com/Foo", b)).as_deref(),
///     Some("http://ru.wikihow.com/Foo")
/// );
/// ```
#[must_use]
pub fn resolve_link(href: &str, base: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if let Some(rest) = href.strip_prefix("//") {
        return Some(format!("{}://{rest}", base.scheme()));
    }

    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }

    if looks_like_bare_host(href) {
        return Some(format!("http://{href}"));
    }

    base.join(href).ok().map(|u| u.to_string())
}

/// Complete a link without a base: `//x` and `x` both become `http://x`.
#[must_use]
pub fn complete_scheme(href: &str) -> String {
    let href = href.trim();
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("http://{}", href.trim_start_matches('/'))
    }
}

/// `www.wikihow.com/Foo` style: first path segment looks like a host name.
fn looks_like_bare_host(href: &str) -> bool {
    if href.starts_with('/') || href.starts_with('.') || href.contains("://") {
        return false;
    }
    let host = href.split('/').next().unwrap_or_default();
    host.contains('.') && href.contains('/') && !host.contains(':')
}

/// Build the search listing URL for `term` under a language base URL.
///
/// The term is form-encoded: spaces become `+`, non-ASCII is percent-encoded.
#[must_use]
pub fn search_url(base_url: &str, term: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();
    format!("{base_url}{SEARCH_PATH}{encoded}")
}

/// Derive a title from an article URL's last path segment.
///
/// `https://www.wikihow.com/Train-a-Dog` becomes `Train a Dog`.
#[must_use]
pub fn title_from_url(url: &str) -> String {
    let segment = match Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|mut segments| segments.rfind(|s| !s.is_empty()).map(str::to_string))
            .unwrap_or_default(),
        Err(_) => url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    // `+`, `&` and `=` are literal in a path segment
    let decoded = percent_decode_str(&segment).decode_utf8_lossy();

    decoded.replace('-', " ").trim().to_string()
}
