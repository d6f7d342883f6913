//! Page fetching.
//!
//! The extraction pipeline only needs `url -> raw bytes`. [`Fetch`] is that
//! seam; [`HttpFetcher`] is the blocking reqwest implementation used by
//! default, and any `Fn(&str) -> Result<Vec<u8>, ParseError>` closure works
//! as a stand-in (tests, caches, alternative clients).

use std::sync::{Arc, LazyLock, OnceLock};

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::ParseError;
use crate::options::Options;

/// Source of raw page bytes.
///
/// Implementations report every transport problem (DNS, TLS, timeout,
/// non-2xx status) as [`ParseError::Fetch`].
pub trait Fetch: Send + Sync {
    /// Fetch the body at `url`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ParseError>;
}

impl<F> Fetch for F
where
    F: Fn(&str) -> Result<Vec<u8>, ParseError> + Send + Sync,
{
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ParseError> {
        self(url)
    }
}

/// Shared handle to a fetcher.
pub type SharedFetcher = Arc<dyn Fetch>;

/// Blocking HTTP fetcher backed by `reqwest`.
///
/// The client is built on first use, so constructing a fetcher never fails;
/// a client that cannot be built surfaces as a fetch error.
#[derive(Debug)]
pub struct HttpFetcher {
    user_agent: String,
    timeout: std::time::Duration,
    client: OnceLock<Result<Client, String>>,
}

impl HttpFetcher {
    /// Fetcher using the user agent and timeout from `options`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            user_agent: options.user_agent.clone(),
            timeout: options.timeout,
            client: OnceLock::new(),
        }
    }

    fn client(&self) -> Result<&Client, String> {
        self.client
            .get_or_init(|| {
                Client::builder()
                    .user_agent(self.user_agent.clone())
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(10))
                    .build()
                    .map_err(|e| format!("failed to build HTTP client: {e}"))
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ParseError> {
        let fail = |message: String| ParseError::Fetch {
            url: url.to_string(),
            message,
        };

        let client = self.client().map_err(fail)?;
        debug!(url, "fetching page");

        let response = client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| fail(e.to_string()))?;
        let body = response.bytes().map_err(|e| fail(e.to_string()))?;

        debug!(url, bytes = body.len(), "fetched page");
        Ok(body.to_vec())
    }
}

/// Process-wide default fetcher built from [`Options::from_env`].
#[must_use]
pub fn default_fetcher() -> SharedFetcher {
    static DEFAULT: LazyLock<SharedFetcher> =
        LazyLock::new(|| Arc::new(HttpFetcher::new(&Options::from_env())));
    Arc::clone(&DEFAULT)
}

// ============================================================
// BODY DECODING
// ============================================================

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([A-Za-z0-9_:.\-]+)"#).expect("valid regex")
});

/// Bytes of the document head searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Decode a fetched body to UTF-8.
///
/// A byte-order mark wins; otherwise a charset declared in a `<meta>` tag
/// within the first 1024 bytes (this also covers `http-equiv` content
/// types); otherwise UTF-8. Invalid sequences become U+FFFD.
///
/// # Example
///
/// ```rust
/// use wikihow_extract::fetch::decode_html;
///
/// let html = b"<html><head><meta charset=\"windows-1251\"></head><body>\xF2\xE5\xF1\xF2</body></html>";
/// assert!(decode_html(html).contains("тест"));
/// ```
#[must_use]
pub fn decode_html(bytes: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return decoded.into_owned();
    }

    let encoding = declared_charset(bytes).unwrap_or(UTF_8);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

fn declared_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LEN)]);
    META_CHARSET
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}
