//! Result types for extraction output.
//!
//! This module defines the structured record produced by one parse pass over
//! a wikiHow article page, including the step list in either of its two
//! shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One instruction unit of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based position within the owning method (or article, when flat).
    pub number: usize,

    /// Bold lead-in text. Empty when the markup has none.
    pub title: String,

    /// Remaining step text after the lead-in is removed.
    pub description: String,

    /// Lazy-load source of the step illustration, if it has an image.
    pub picture: Option<String>,
}

/// A named alternative approach within an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// 1-based position within the article.
    pub number: usize,

    /// Section headline.
    pub title: String,

    /// Steps owned by this method, numbered from 1.
    pub steps: Vec<Step>,
}

/// The two shapes an article's steps can be assembled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layout", content = "items", rename_all = "snake_case")]
pub enum StepsView {
    /// One level of steps, numbered 1..=N across the whole article.
    Flat(Vec<Step>),
    /// Methods, each owning steps numbered from 1.
    Grouped(Vec<Method>),
}

impl Default for StepsView {
    fn default() -> Self {
        Self::Grouped(Vec::new())
    }
}

impl StepsView {
    /// Methods, when grouped. Empty for the flat shape.
    #[must_use]
    pub fn methods(&self) -> &[Method] {
        match self {
            Self::Grouped(methods) => methods,
            Self::Flat(_) => &[],
        }
    }

    /// Number of methods, or `None` for the flat shape.
    #[must_use]
    pub fn n_methods(&self) -> Option<usize> {
        match self {
            Self::Grouped(methods) => Some(methods.len()),
            Self::Flat(_) => None,
        }
    }

    /// All steps in document order, whatever the shape.
    pub fn steps(&self) -> Box<dyn Iterator<Item = &Step> + '_> {
        match self {
            Self::Flat(steps) => Box::new(steps.iter()),
            Self::Grouped(methods) => Box::new(methods.iter().flat_map(|m| m.steps.iter())),
        }
    }

    /// Total number of steps.
    #[must_use]
    pub fn n_steps(&self) -> usize {
        match self {
            Self::Flat(steps) => steps.len(),
            Self::Grouped(methods) => methods.iter().map(|m| m.steps.len()).sum(),
        }
    }

    /// Collapse into the flat shape, renumbering steps from 1.
    #[must_use]
    pub fn into_flat(self) -> Self {
        match self {
            Self::Flat(_) => self,
            Self::Grouped(methods) => Self::Flat(
                methods
                    .into_iter()
                    .flat_map(|m| m.steps)
                    .enumerate()
                    .map(|(i, step)| Step { number: i + 1, ..step })
                    .collect(),
            ),
        }
    }
}

/// Everything one parse pass extracts from an article page.
///
/// Optional fields are `None` when the page does not carry them;
/// `references` is zero and `warnings`/`tips` empty in the same case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Canonical article URL (from the title heading link).
    pub url: String,

    /// Article title.
    pub title: String,

    /// Lead paragraph text, footnote markers removed.
    pub intro: String,

    /// Quick summary with the boilerplate suffix removed.
    pub summary: Option<String>,

    /// Steps, flat or grouped under methods.
    pub steps: StepsView,

    /// Reader votes.
    pub num_votes: Option<u64>,

    /// Share of readers who found the article helpful (0-100).
    pub percent_helpful: Option<u8>,

    /// Whether the byline marks the article as expert co-authored.
    pub is_expert: bool,

    /// Date of the last update.
    pub last_updated: Option<NaiveDate>,

    /// Page views.
    pub views: Option<u64>,

    /// Number of co-authors.
    pub co_authors: Option<u64>,

    /// Number of external references.
    pub references: usize,

    /// Warning entries, in page order.
    pub warnings: Vec<String>,

    /// Tip entries, in page order.
    pub tips: Vec<String>,
}

impl ArticleRecord {
    /// Number of methods, or `None` when steps are flat.
    #[must_use]
    pub fn n_methods(&self) -> Option<usize> {
        self.steps.n_methods()
    }
}
