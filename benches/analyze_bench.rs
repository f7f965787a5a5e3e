//! Performance benchmarks for emotion analysis

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use afecto::{AnalysisConfig, TextEmotionService};

fn bench_service_fit(c: &mut Criterion) {
    c.bench_function("service_fit_builtin", |b| {
        b.iter(|| {
            let _ = TextEmotionService::new(black_box(AnalysisConfig::default()));
        });
    });
}

fn bench_analyze(c: &mut Criterion) {
    let service = TextEmotionService::new(AnalysisConfig::default()).unwrap();

    c.bench_function("analyze_short_circuit", |b| {
        b.iter(|| {
            let _ = service.analyze(black_box("a"));
        });
    });

    c.bench_function("analyze_corpus_text", |b| {
        b.iter(|| {
            let _ = service.analyze(black_box("estoy muy feliz hoy"));
        });
    });
}

criterion_group!(benches, bench_service_fit, bench_analyze);
criterion_main!(benches);
