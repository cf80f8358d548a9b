//! Latency benchmarks for the bundled models
//!
//! Measures the vectorizer alone and the full dispatch path for each model
//! family over short and long articles.
//!
//! Run with: cargo bench -p newscat-classifiers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::Path;

use newscat_classifiers::{load_vectorizer, FeatureTransformer, InferenceDispatcher};

fn artifacts_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../artifacts"))
}

fn test_cases() -> Vec<(&'static str, String)> {
    let short = "Stocks rally as the market cheers strong bank earnings".to_string();
    let long = [
        "The football championship match ended with a late goal.",
        "Meanwhile a smartphone startup announced new software for students and teachers.",
        "Critics praised the film and its music, while the bank reported record earnings.",
    ]
    .join(" ")
    .repeat(40);

    vec![("short_article", short), ("long_article", long)]
}

/// Benchmark feature extraction on its own
fn benchmark_vectorizer(c: &mut Criterion) {
    let vectorizer = load_vectorizer(artifacts_dir().join("vectorizer.json"))
        .expect("Failed to load vectorizer");

    let mut group = c.benchmark_group("Vectorizer");
    group.sample_size(100);

    for (name, text) in test_cases() {
        group.bench_with_input(BenchmarkId::new("transform", name), &text, |b, text| {
            b.iter(|| vectorizer.transform(black_box(text)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark transform + predict + label lookup per model
fn benchmark_dispatch(c: &mut Criterion) {
    let dispatcher = InferenceDispatcher::from_file(artifacts_dir().join("classifiers.yaml"))
        .expect("Failed to load classifiers");

    let mut group = c.benchmark_group("Dispatch");
    group.sample_size(100);

    for model in dispatcher.model_names() {
        for (name, text) in test_cases() {
            let id = BenchmarkId::new(model.as_str(), name);
            group.bench_with_input(id, &text, |b, text| {
                b.iter(|| dispatcher.classify_text(black_box(text), model).unwrap());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_vectorizer, benchmark_dispatch);
criterion_main!(benches);
