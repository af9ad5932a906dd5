//! Criterion benchmarks for the idea validator.
//!
//! Covers the stages of a request:
//! - Text normalization
//! - Vectorization
//! - Model training at startup
//! - End-to-end classification and report assembly

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use idea_validator::analysis::normalize;
use idea_validator::ml::sector_classifier::{NaiveBayesModel, Vocabulary, reference_corpus};
use idea_validator::validator::{classify_and_report, initialize};

/// Generate idea texts of varying length from a fixed word list.
fn generate_ideas(count: usize) -> Vec<String> {
    let words = [
        "AI-based", "chatbot", "for", "the", "customer", "service", "mobile", "wallet",
        "seamless", "transactions", "online", "learning", "platform", "with", "interactive",
        "features", "blockchain", "supply", "chain", "health", "monitoring", "app", "real-time",
        "alerts", "personalized", "recommendations", "marketplace", "drones", "quantum",
    ];

    (0..count)
        .map(|i| {
            let len = 4 + (i % 24);
            (0..len)
                .map(|j| words[(i * 7 + j * 13) % words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let ideas = generate_ideas(100);
    let bytes: usize = ideas.iter().map(String::len).sum();

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(bytes as u64));
    group.bench_function("normalize_100_ideas", |b| {
        b.iter(|| {
            for idea in &ideas {
                black_box(normalize(black_box(idea)));
            }
        })
    });
    group.finish();
}

fn bench_vectorize(c: &mut Criterion) {
    let (vocabulary, _, _) = initialize().expect("initialize");
    let normalized: Vec<String> = generate_ideas(100).iter().map(|i| normalize(i)).collect();

    c.bench_function("vectorize_100_ideas", |b| {
        b.iter(|| {
            for text in &normalized {
                black_box(vocabulary.vectorize(black_box(text)));
            }
        })
    });
}

fn bench_train(c: &mut Criterion) {
    let corpus = reference_corpus();
    let vocabulary = Vocabulary::build(corpus.iter().map(|e| normalize(&e.text)));

    c.bench_function("train_reference_corpus", |b| {
        b.iter(|| black_box(NaiveBayesModel::train(black_box(&corpus), &vocabulary)))
    });
}

fn bench_classify_and_report(c: &mut Criterion) {
    let (vocabulary, model, kb) = initialize().expect("initialize");
    let ideas = generate_ideas(100);

    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Elements(ideas.len() as u64));
    group.bench_function("classify_and_report_100_ideas", |b| {
        b.iter(|| {
            for idea in &ideas {
                let _ = black_box(classify_and_report(idea, &vocabulary, &model, &kb));
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_vectorize,
    bench_train,
    bench_classify_and_report
);
criterion_main!(benches);
