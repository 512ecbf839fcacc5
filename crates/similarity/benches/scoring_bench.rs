use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::{TimeZone, Utc};
use similarity::{CorpusDocument, SimilarityConfig, SimilarityScorer};

fn synthetic_text(doc: usize, words: usize) -> String {
    // Overlapping vocabulary across documents so the scorer does real
    // intersection work instead of short-circuiting on disjoint sets.
    (0..words)
        .map(|i| format!("mot{}", (i * 7 + doc * 13) % 500))
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_corpus(docs: usize, words: usize) -> Vec<CorpusDocument> {
    (0..docs)
        .map(|i| CorpusDocument {
            id: format!("doc-{i}"),
            title: format!("Mémoire {i}"),
            author: "Bench Author".to_string(),
            submitted_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            text: synthetic_text(i, words),
        })
        .collect()
}

fn bench_corpus_scoring(c: &mut Criterion) {
    let candidate = synthetic_text(0, 2_000);
    let mut group = c.benchmark_group("corpus_scoring");

    for corpus_size in [10usize, 50, 200] {
        let corpus = build_corpus(corpus_size, 2_000);

        let sequential = SimilarityScorer::new(
            SimilarityConfig::default(),
            normalize::NormalizeConfig::default(),
        );
        group.bench_with_input(
            BenchmarkId::new("sequential", corpus_size),
            &corpus,
            |b, corpus| b.iter(|| sequential.score(&candidate, corpus).unwrap()),
        );

        let parallel = SimilarityScorer::new(
            SimilarityConfig {
                use_parallel: true,
                ..Default::default()
            },
            normalize::NormalizeConfig::default(),
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", corpus_size),
            &corpus,
            |b, corpus| b.iter(|| parallel.score(&candidate, corpus).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_corpus_scoring);
criterion_main!(benches);
