//! Shared fixtures: wikiHow-shaped pages and an in-memory fetcher.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use wikihow_extract::{Fetch, ParseError, SharedFetcher};

/// One step of a fixture method: (lead-in, description, picture).
pub type FixtureStep = (&'static str, &'static str, Option<&'static str>);

/// Builder for a synthetic article page.
#[derive(Debug, Clone)]
pub struct PageBuilder {
    url: String,
    title: String,
    intro: String,
    methods: Vec<(String, Vec<FixtureStep>)>,
    rating: Option<String>,
    byline: Option<String>,
    stats: Option<(String, String)>,
    references: usize,
    summary: Option<String>,
    warnings: Option<String>,
    tips: Option<String>,
}

impl PageBuilder {
    pub fn new(url: &str, title: &str) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
            intro: "An introduction.".to_string(),
            methods: Vec::new(),
            rating: None,
            byline: Some(r#"<span>Updated: March 3, 2021</span>"#.to_string()),
            stats: None,
            references: 0,
            summary: None,
            warnings: None,
            tips: None,
        }
    }

    pub fn intro(mut self, intro: &str) -> Self {
        self.intro = intro.to_string();
        self
    }

    pub fn method(mut self, headline: &str, steps: Vec<FixtureStep>) -> Self {
        self.methods.push((headline.to_string(), steps));
        self
    }

    pub fn rating(mut self, text: &str) -> Self {
        self.rating = Some(text.to_string());
        self
    }

    pub fn byline(mut self, inner: Option<&str>) -> Self {
        self.byline = inner.map(str::to_string);
        self
    }

    pub fn stats(mut self, co_authors: &str, views: &str) -> Self {
        self.stats = Some((co_authors.to_string(), views.to_string()));
        self
    }

    pub fn references(mut self, count: usize) -> Self {
        self.references = count;
        self
    }

    pub fn summary(mut self, text: &str) -> Self {
        self.summary = Some(text.to_string());
        self
    }

    /// Raw inner HTML of the warnings container.
    pub fn warnings(mut self, inner: &str) -> Self {
        self.warnings = Some(inner.to_string());
        self
    }

    /// Raw inner HTML of the tips container.
    pub fn tips(mut self, inner: &str) -> Self {
        self.tips = Some(inner.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut html = String::from("<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body>");

        html.push_str(&format!(
            r#"<h1 class="title_lg"><a href="{}">{}</a></h1>"#,
            self.url, self.title
        ));
        html.push_str(&format!(r#"<div class="mf-section-0"><p>{}</p></div>"#, self.intro));

        if let Some(rating) = &self.rating {
            html.push_str(&format!(r#"<div class="sp_helpful_rating_count">{rating}</div>"#));
        }
        if let Some(byline) = &self.byline {
            html.push_str(&format!(r#"<div id="byline_info">{byline}</div>"#));
        }
        if let Some((co_authors, views)) = &self.stats {
            html.push_str(&format!(
                r#"<div class="sp_box sp_stats_box">
                  <div class="sp_text"><span class="sp_text_data">{co_authors}</span> co-authors</div>
                  <div class="sp_text"><span class="sp_text_data">8</span> updated</div>
                  <div class="sp_text"><span class="sp_text_data">{views}</span> views</div>
                </div>"#
            ));
        }

        for (m, (headline, steps)) in self.methods.iter().enumerate() {
            let class = if m == 0 {
                "section steps steps_first sticky"
            } else {
                "section steps sticky"
            };
            html.push_str(&format!(
                r#"<div class="{class}"><h3><span class="mw-headline">{headline}</span></h3><ol>"#
            ));
            for (s, (lead, description, picture)) in steps.iter().enumerate() {
                html.push_str(&format!(r#"<li id="step-id-{m}{s}">"#));
                if let Some(src) = picture {
                    html.push_str(&format!(
                        r#"<a class="image" href="/Image:{m}{s}.jpg"><img src="data:," data-src="{src}"></a>"#
                    ));
                }
                html.push_str(&format!(
                    r#"<div class="step"><b>{lead}</b> {description}<sup>[{s}]</sup></div></li>"#
                ));
            }
            html.push_str("</ol></div>");
        }

        if let Some(summary) = &self.summary {
            html.push_str(&format!(
                r#"<div id="summary_wrapper"><p id="summary_text">{summary}</p></div>"#
            ));
        }
        if let Some(warnings) = &self.warnings {
            html.push_str(&format!(r#"<div id="warnings">{warnings}</div>"#));
        }
        if let Some(tips) = &self.tips {
            html.push_str(&format!(r#"<div id="tips">{tips}</div>"#));
        }
        if self.references > 0 {
            html.push_str(r#"<div id="references"><ol>"#);
            for r in 0..self.references {
                html.push_str(&format!(
                    r#"<li><a class="external free" href="https://source.example/{r}">https://source.example/{r}</a></li>"#
                ));
            }
            html.push_str("</ol></div>");
        }

        html.push_str("</body></html>");
        html
    }
}

/// A typical single-method article.
pub fn basic_page(url: &str, title: &str) -> String {
    PageBuilder::new(url, title)
        .method(
            "Getting Started",
            vec![
                ("Gather supplies.", "You need a few things.", Some("https://img.example/1.jpg")),
                ("Begin.", "Take it slow.", None),
            ],
        )
        .build()
}

/// In-memory fetcher serving canned bodies by exact URL, counting calls.
#[derive(Debug, Default)]
pub struct MapFetcher {
    pages: HashMap<String, Vec<u8>>,
    calls: AtomicUsize,
}

impl MapFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Fetch for MapFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ParseError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages.get(url).cloned().ok_or_else(|| ParseError::Fetch {
            url: url.to_string(),
            message: "404 Not Found".to_string(),
        })
    }
}

/// Coerce a concrete fetcher into the shared trait object.
pub fn as_shared(fetcher: &Arc<MapFetcher>) -> SharedFetcher {
    Arc::clone(fetcher) as SharedFetcher
}
