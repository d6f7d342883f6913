//! Command-line front end: fetch articles, search, or pick a random one and
//! print the records as JSON.
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use wikihow_extract::{
    random_article_with, search_with, Article, HttpFetcher, Options, SharedFetcher, StepLayout,
    DEFAULT_MAX_RESULTS,
};

#[derive(Parser)]
#[command(name = "wikihow", version, about = "Extract structured records from wikiHow articles")]
struct Cli {
    /// Assemble steps as one flat list instead of grouped by method
    #[arg(long, global = true)]
    flat: bool,

    /// Fail when the statistics box (views) is missing
    #[arg(long, global = true)]
    require_stats: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse one article by URL
    Article {
        url: String,
    },
    /// Search a language edition and parse the results
    Search {
        term: String,

        /// Maximum number of parsed results (0 for no limit)
        #[arg(short = 'n', long = "max", default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: i64,

        /// Language code, e.g. en, ru, pt-BR
        #[arg(short, long, default_value = "en")]
        lang: String,
    },
    /// Parse a random article
    Random {
        #[arg(short, long, default_value = "en")]
        lang: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: {err}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> wikihow_extract::Result<Value> {
    let mut options = Options::from_env();
    if cli.flat {
        options.layout = StepLayout::Flat;
    }
    if cli.require_stats {
        options.require_stats = true;
    }
    let fetcher: SharedFetcher = Arc::new(HttpFetcher::new(&options));

    match &cli.command {
        Command::Article { url } => {
            let article = Article::with_options(url.as_str(), options, fetcher, false);
            Ok(Value::Object(article.get()?))
        }
        Command::Search {
            term,
            max_results,
            lang,
        } => {
            let mut records = Vec::new();
            for article in search_with(term, *max_results, lang, options, fetcher)? {
                records.push(Value::Object(article.get()?));
            }
            Ok(Value::Array(records))
        }
        Command::Random { lang } => {
            let article = random_article_with(lang, options, fetcher)?;
            Ok(Value::Object(article.get()?))
        }
    }
}
