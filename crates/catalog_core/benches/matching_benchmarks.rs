//! Benchmarks for catalog_core matching scans.

use catalog_core::{find_exact, suggest, ProductRecord, DEFAULT_SUGGESTION_LIMIT};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn price_list(size: usize) -> Vec<ProductRecord> {
    (0..size)
        .map(|i| ProductRecord::new(format!("Product {i:05}"), format!("{}", i % 500), "1"))
        .collect()
}

fn benchmark_suggest(c: &mut Criterion) {
    let records = price_list(10_000);

    c.bench_function("suggest_10k_sparse", |b| {
        b.iter(|| suggest(black_box(&records), black_box("09999"), DEFAULT_SUGGESTION_LIMIT))
    });

    c.bench_function("suggest_10k_dense", |b| {
        b.iter(|| suggest(black_box(&records), black_box("product"), DEFAULT_SUGGESTION_LIMIT))
    });
}

fn benchmark_find_exact(c: &mut Criterion) {
    let records = price_list(10_000);

    c.bench_function("find_exact_10k_last", |b| {
        b.iter(|| find_exact(black_box(&records), black_box("PRODUCT 09999")))
    });
}

criterion_group!(benches, benchmark_suggest, benchmark_find_exact);
criterion_main!(benches);
