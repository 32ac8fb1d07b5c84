//! Seed derivation benchmarks using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seed_core::generate_seed;

fn bench_generate_seed(c: &mut Criterion) {
    let inputs = vec![
        ("short", "origin".to_string()),
        ("medium", "r".repeat(256)),
        ("long", "r".repeat(64 * 1024)),
    ];

    let mut group = c.benchmark_group("generate_seed");
    for (name, remote) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), &remote, |b, remote| {
            b.iter(|| black_box(generate_seed(black_box(remote), "1700000000", "abc")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate_seed);
criterion_main!(benches);
