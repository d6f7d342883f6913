//! Parse-pass benchmarks.
//!
//! Run with: `cargo bench`

use std::fmt::Write as _;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wikihow_extract::{parse_html, Options, StepLayout};

const URL: &str = "https://www.wikihow.com/Train-a-Dog";

/// Article page with `methods` methods of `steps` steps each.
fn article_html(methods: usize, steps: usize) -> String {
    let mut html = String::from(
        r#"<html><body>
        <h1 class="title_lg"><a href="https://www.wikihow.com/Train-a-Dog">How to Train a Dog</a></h1>
        <div class="mf-section-0"><p>Training takes patience.<sup>[1]</sup></p></div>
        <div class="sp_helpful_rating_count">1,234 votes - 92%</div>
        <div id="byline_info"><span>Updated: March 3, 2021</span> <b>Expert</b></div>
        <div class="sp_box sp_stats_box">
          <div class="sp_text"><span class="sp_text_data">37</span></div>
          <div class="sp_text"><span class="sp_text_data">14</span></div>
          <div class="sp_text"><span class="sp_text_data">1,204,566</span></div>
        </div>"#,
    );

    for m in 0..methods {
        let class = if m == 0 { "section steps steps_first sticky" } else { "section steps sticky" };
        let _ = write!(html, r#"<div class="{class}"><span class="mw-headline">Method {m}</span><ol>"#);
        for s in 0..steps {
            let _ = write!(
                html,
                r#"<li id="step-id-{m}{s}"><a class="image"><img data-src="https://img.example/{m}/{s}.jpg"></a>
                <div class="step"><b>Step {s} lead-in.</b> Longer description of step {s}.<sup>[{s}]</sup>
                <script>track({s});</script></div></li>"#
            );
        }
        html.push_str("</ol></div>");
    }

    html.push_str(
        r#"<div id="summary_wrapper"><p id="summary_text">Use rewards and keep sessions short and regular. Read the full article.</p></div>
        <div id="tips"><ul><li><div>Be patient.</div></li><li><div>Be consistent.</div></li></ul></div>
        <div id="warnings"><ul><li><div>Never punish.</div></li></ul></div>
        </body></html>"#,
    );
    html
}

fn bench_parse_default(c: &mut Criterion) {
    let html = article_html(3, 8);
    let options = Options::default();

    c.bench_function("parse_html_default", |b| {
        b.iter(|| parse_html(black_box(&html), URL, &options));
    });
}

fn bench_parse_flat(c: &mut Criterion) {
    let html = article_html(3, 8);
    let options = Options {
        layout: StepLayout::Flat,
        ..Options::default()
    };

    c.bench_function("parse_html_flat", |b| {
        b.iter(|| parse_html(black_box(&html), URL, &options));
    });
}

fn bench_parse_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_html_by_steps");
    let options = Options::default();

    for steps in [5, 20, 80] {
        let html = article_html(2, steps);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &html, |b, html| {
            b.iter(|| parse_html(black_box(html), URL, &options));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_default, bench_parse_flat, bench_parse_by_size);
criterion_main!(benches);
