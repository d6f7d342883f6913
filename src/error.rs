//! Error types for wikihow-extract.
//!
//! Two kinds of failure reach callers: a [`ParseError`] (the page could not
//! be fetched, or required markup was missing) and an unsupported language
//! code. Everything else is folded into one of those or reported through
//! the remaining [`Error`] variants.

/// Why an article parse pass failed.
///
/// Cloneable so a failed [`Article`](crate::Article) can hand the same error
/// back from every accessor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The page fetcher failed (DNS, TLS, timeout, non-2xx status, ...).
    #[error("failed to fetch {url}: {message}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Transport error description.
        message: String,
    },

    /// A structural element required by the parse pass was not found.
    #[error("required markup not found: {0}")]
    MissingElement(&'static str),

    /// A required field was present but could not be interpreted.
    #[error("malformed {field}: {detail}")]
    Malformed {
        /// Field being extracted.
        field: &'static str,
        /// What was wrong with it.
        detail: String,
    },
}

/// Error type for all public operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Article fetch or parse failed.
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),

    /// Language code is not in the registry.
    #[error("unsupported language: {0:?}")]
    UnsupportedLanguage(String),

    /// Record export failed.
    #[error("export failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when this error came from a parse pass (including fetch failures).
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Result type alias for wikihow-extract operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_converts_into_error() {
        let err: Error = ParseError::MissingElement("title heading").into();
        assert!(err.is_parse());
        assert_eq!(
            err.to_string(),
            "parse failed: required markup not found: title heading"
        );
    }

    #[test]
    fn unsupported_language_is_not_a_parse_error() {
        let err = Error::UnsupportedLanguage("xx".to_string());
        assert!(!err.is_parse());
        assert_eq!(err.to_string(), "unsupported language: \"xx\"");
    }
}
