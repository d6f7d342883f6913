//! Configuration options for article extraction and fetching.
//!
//! The `Options` struct controls which shape the step list is assembled in,
//! how strict the parse pass is about the statistics box, and how the
//! default HTTP fetcher talks to the site.

use std::time::Duration;

/// Default `User-Agent` sent by [`HttpFetcher`](crate::HttpFetcher).
pub const DEFAULT_USER_AGENT: &str = concat!("wikihow-extract/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout for [`HttpFetcher`](crate::HttpFetcher).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shape in which an article's steps are assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StepLayout {
    /// Ordered methods, each owning steps numbered from 1.
    #[default]
    Grouped,
    /// One list of steps across all methods, numbered from 1.
    Flat,
}

impl StepLayout {
    fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "grouped" | "methods" => Some(Self::Grouped),
            "flat" | "steps" => Some(Self::Flat),
            _ => None,
        }
    }
}

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use wikihow_extract::{Options, StepLayout};
///
/// let options = Options {
///     layout: StepLayout::Flat,
///     require_stats: true,
///     ..Options::default()
/// };
/// assert_eq!(options.layout, StepLayout::Flat);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Assemble steps grouped under methods, or as one flat list.
    ///
    /// Default: `StepLayout::Grouped`
    pub layout: StepLayout,

    /// Treat a missing statistics box as a parse failure.
    ///
    /// When `false`, a missing box leaves views and co-authors absent.
    ///
    /// Default: `false`
    pub require_stats: bool,

    /// `User-Agent` header for the default fetcher.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Per-request timeout for the default fetcher.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            layout: StepLayout::Grouped,
            require_stats: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Options {
    /// Defaults overridden by `WIKIHOW_*` environment variables.
    ///
    /// Recognised: `WIKIHOW_USER_AGENT`, `WIKIHOW_TIMEOUT_MS`,
    /// `WIKIHOW_LAYOUT` (`flat` or `grouped`), `WIKIHOW_REQUIRE_STATS`.
    /// Unparseable values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Options::from_env`], reading variables through `lookup`.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(agent) = lookup("WIKIHOW_USER_AGENT").filter(|s| !s.trim().is_empty()) {
            opts.user_agent = agent.trim().to_string();
        }
        if let Some(ms) = lookup("WIKIHOW_TIMEOUT_MS").and_then(|s| s.trim().parse::<u64>().ok()) {
            opts.timeout = Duration::from_millis(ms);
        }
        if let Some(layout) = lookup("WIKIHOW_LAYOUT").and_then(|s| StepLayout::from_label(&s)) {
            opts.layout = layout;
        }
        if let Some(flag) = lookup("WIKIHOW_REQUIRE_STATS") {
            opts.require_stats = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        opts
    }
}
