//! Language Registry
//!
//! Fixed mapping from wikiHow language code to the site base URL. The table
//! is compiled in and never changes at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A wikiHow language edition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Pt,
    It,
    Fr,
    Ru,
    De,
    Zh,
    Nl,
    Cz,
    Id,
    Jp,
    Hi,
    Th,
    Ar,
    Ko,
    Tr,
    Vn,
}

/// Code and base URL of every supported edition, in registry order.
static REGISTRY: &[(Language, &str, &str)] = &[
    (Language::En, "en", "http://www.wikihow.com/"),
    (Language::Es, "es", "http://es.wikihow.com/"),
    (Language::Pt, "pt", "http://pt.wikihow.com/"),
    (Language::It, "it", "http://www.wikihow.it/"),
    (Language::Fr, "fr", "http://fr.wikihow.com/"),
    (Language::Ru, "ru", "http://ru.wikihow.com/"),
    (Language::De, "de", "http://de.wikihow.com/"),
    (Language::Zh, "zh", "http://zh.wikihow.com/"),
    (Language::Nl, "nl", "http://nl.wikihow.com/"),
    (Language::Cz, "cz", "http://www.wikihow.cz/"),
    (Language::Id, "id", "http://id.wikihow.com/"),
    (Language::Jp, "jp", "http://www.wikihow.jp/"),
    (Language::Hi, "hi", "http://hi.wikihow.com/"),
    (Language::Th, "th", "http://th.wikihow.com/"),
    (Language::Ar, "ar", "http://ar.wikihow.com/"),
    (Language::Ko, "ko", "http://ko.wikihow.com/"),
    (Language::Tr, "tr", "http://www.wikihow.com.tr/"),
    (Language::Vn, "vn", "http://www.wikihow.vn/"),
];

impl Language {
    /// Every supported language, in registry order.
    pub fn all() -> impl Iterator<Item = Self> {
        REGISTRY.iter().map(|(lang, _, _)| *lang)
    }

    fn entry(self) -> &'static (Language, &'static str, &'static str) {
        // REGISTRY rows are in declaration order
        &REGISTRY[self as usize]
    }

    /// Two-letter registry code.
    #[must_use]
    pub fn code(self) -> &'static str {
        self.entry().1
    }

    /// Site base URL, with trailing slash.
    #[must_use]
    pub fn base_url(self) -> &'static str {
        self.entry().2
    }

    /// Look up a code: case-insensitive, region suffix after `-` ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wikihow_extract::Language;
    ///
    /// assert_eq!(Language::lookup("pt-BR").ok(), Some(Language::Pt));
    /// assert!(Language::lookup("xx").is_err());
    /// ```
    pub fn lookup(code: &str) -> Result<Self, Error> {
        let normalized = code
            .trim()
            .split('-')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        REGISTRY
            .iter()
            .find(|(_, c, _)| *c == normalized)
            .map(|(lang, _, _)| *lang)
            .ok_or_else(|| Error::UnsupportedLanguage(code.to_string()))
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_eighteen_unique_entries() {
        let codes: Vec<&str> = Language::all().map(Language::code).collect();
        let mut unique = codes.clone();
        unique.sort_unstable();
        unique.dedup();

        assert_eq!(codes.len(), 18);
        assert_eq!(unique.len(), 18);
    }

    #[test]
    fn test_registry_rows_follow_declaration_order() {
        for (index, (lang, _, _)) in REGISTRY.iter().enumerate() {
            assert_eq!(*lang as usize, index);
        }
    }

    #[test]
    fn test_every_variant_round_trips_through_its_code() {
        for lang in Language::all() {
            assert_eq!(Language::lookup(lang.code()).ok(), Some(lang));
            assert!(lang.base_url().ends_with('/'));
        }
    }

    #[test]
    fn test_lookup_normalizes_case_and_region() {
        assert_eq!(Language::lookup("RU").ok(), Some(Language::Ru));
        assert_eq!(Language::lookup("en-GB").ok(), Some(Language::En));
        assert_eq!(Language::lookup(" zh-Hant-TW ").ok(), Some(Language::Zh));
        assert_eq!("it".parse::<Language>().ok(), Some(Language::It));
    }

    #[test]
    fn test_lookup_rejects_unknown_codes() {
        for code in ["xx", "", "eng", "-en"] {
            match Language::lookup(code) {
                Err(Error::UnsupportedLanguage(c)) => assert_eq!(c, code),
                other => panic!("expected UnsupportedLanguage for {code:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_base_urls() {
        assert_eq!(Language::Ru.base_url(), "http://ru.wikihow.com/");
        assert_eq!(Language::It.base_url(), "http://www.wikihow.it/");
        assert_eq!(Language::default().base_url(), "http://www.wikihow.com/");
        assert_eq!(Language::Vn.to_string(), "vn");
    }
}
