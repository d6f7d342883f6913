mod common;

use common::{as_shared, basic_page, MapFetcher, PageBuilder};
use wikihow_extract::{Article, Error, Options, ParseError, StepLayout};

const URL: &str = "https://www.wikihow.com/Train-a-Dog";

#[test]
fn lazy_article_parses_on_first_access_only() {
    let fetcher = MapFetcher::new().page(URL, basic_page(URL, "How to Train a Dog")).shared();
    let article = Article::with_fetcher(URL, as_shared(&fetcher));

    assert_eq!(fetcher.calls(), 0);
    assert_eq!(article.title().ok(), Some("How to Train a Dog"));
    assert_eq!(article.intro().ok(), Some("An introduction."));
    assert_eq!(article.n_methods().ok(), Some(Some(1)));
    assert_eq!(article.canonical_url().ok(), Some(URL));
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn title_is_deterministic_across_parses() {
    let fetcher = MapFetcher::new().page(URL, basic_page(URL, "How to Train a Dog")).shared();

    let first = Article::with_fetcher(URL, as_shared(&fetcher));
    let second = Article::with_fetcher(URL, as_shared(&fetcher));

    let a = first.title().map(str::to_string).ok();
    let b = second.title().map(str::to_string).ok();
    assert!(a.is_some());
    assert_eq!(a, b);
}

#[test]
fn fetch_failure_fails_every_accessor_and_sticks() {
    let fetcher = MapFetcher::new().shared();
    let article = Article::with_fetcher("https://www.wikihow.com/Nowhere", as_shared(&fetcher));

    let expected = ParseError::Fetch {
        url: "https://www.wikihow.com/Nowhere".to_string(),
        message: "404 Not Found".to_string(),
    };
    match article.title() {
        Err(Error::Parse(err)) => assert_eq!(err, expected),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(matches!(article.intro(), Err(Error::Parse(_))));
    assert!(matches!(article.steps(), Err(Error::Parse(_))));
    assert!(matches!(article.views(), Err(Error::Parse(_))));
    assert!(matches!(article.references(), Err(Error::Parse(_))));
    assert!(matches!(article.get(), Err(Error::Parse(_))));
    assert!(article.is_failed());
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn reset_allows_a_fresh_attempt() {
    let fetcher = MapFetcher::new().shared();
    let mut article = Article::with_fetcher("https://www.wikihow.com/Nowhere", as_shared(&fetcher));

    assert!(article.title().is_err());
    article.reset();
    assert!(!article.is_failed());
    assert!(article.title().is_err());
    assert_eq!(fetcher.calls(), 2);
}

#[test]
fn missing_required_markup_exposes_nothing() {
    let html = PageBuilder::new(URL, "How to Train a Dog")
        .method("One", vec![("Step.", "Do it.", None)])
        .byline(None)
        .stats("3", "100")
        .build();
    let fetcher = MapFetcher::new().page(URL, html).shared();
    let article = Article::with_fetcher(URL, as_shared(&fetcher));

    match article.views() {
        Err(Error::Parse(err)) => assert_eq!(err, ParseError::MissingElement("byline")),
        other => panic!("expected missing byline, got {other:?}"),
    }
    assert!(article.title().is_err());
}

#[test]
fn flat_layout_through_article() {
    let html = PageBuilder::new(URL, "How to Train a Dog")
        .method("Basics", vec![("Sit.", "a", None), ("Stay.", "b", None)])
        .method("Advanced", vec![("Roll over.", "c", None)])
        .build();
    let fetcher = MapFetcher::new().page(URL, html).shared();
    let options = Options {
        layout: StepLayout::Flat,
        ..Options::default()
    };
    let article = Article::with_options(URL, options, as_shared(&fetcher), false);

    assert_eq!(fetcher.calls(), 1);
    assert_eq!(article.n_methods().ok(), Some(None));
    assert!(article.methods().is_ok_and(<[_]>::is_empty));

    let steps = match article.steps() {
        Ok(steps) => steps,
        Err(err) => panic!("expected steps, got {err}"),
    };
    let numbered: Vec<(usize, &str)> = steps.steps().map(|s| (s.number, s.title.as_str())).collect();
    assert_eq!(numbered, vec![(1, "Sit."), (2, "Stay."), (3, "Roll over.")]);
}

#[test]
fn export_matches_record() {
    let html = PageBuilder::new(URL, "How to Train a Dog")
        .method("Basics", vec![("Sit.", "Say sit.", Some("https://img.example/sit.jpg"))])
        .rating("52 votes - 91%")
        .stats("14", "1,204,566")
        .references(3)
        .tips("<ul><li><div>Be patient.</div></li></ul>")
        .build();
    let fetcher = MapFetcher::new().page(URL, html).shared();
    let article = Article::with_fetcher(URL, as_shared(&fetcher));

    let map = match article.get() {
        Ok(map) => map,
        Err(err) => panic!("expected export, got {err}"),
    };

    assert_eq!(map["title"], "How to Train a Dog");
    assert_eq!(map["num_votes"], 52);
    assert_eq!(map["percent_helpful"], 91);
    assert_eq!(map["views"], 1_204_566);
    assert_eq!(map["co_authors"], 14);
    assert_eq!(map["references"], 3);
    assert_eq!(map["is_expert"], false);
    assert_eq!(map["last_updated"], "2021-03-03");
    assert_eq!(map["summary"], serde_json::Value::Null);
    assert_eq!(map["tips"][0], "Be patient.");
    assert_eq!(map["steps"]["items"][0]["steps"][0]["picture"], "https://img.example/sit.jpg");
}
