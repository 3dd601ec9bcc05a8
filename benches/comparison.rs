use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use modhash_proof::{Comparator, Prover, SecretDigest};
use rand::RngCore;

fn random_digest() -> SecretDigest {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    SecretDigest::new(bytes).unwrap()
}

fn bench_single_comparison(c: &mut Criterion) {
    let prover = Prover::from_global().unwrap();
    let comparator = Comparator::from_global().unwrap();
    let secret = random_digest();
    let matching = prover.generate(&secret);
    let other = prover.generate(&random_digest());

    c.bench_function("compare_matching", |b| {
        b.iter(|| comparator.compare(black_box(&secret), black_box(&matching)).unwrap())
    });

    c.bench_function("compare_not_matching", |b| {
        b.iter(|| comparator.compare(black_box(&secret), black_box(&other)).unwrap())
    });
}

fn bench_batch_comparison(c: &mut Criterion) {
    let prover = Prover::from_global().unwrap();
    let comparator = Comparator::from_global().unwrap();
    let secret = random_digest();

    let mut group = c.benchmark_group("compare_batch");
    for size in [1usize, 10, 100] {
        let remotes: Vec<_> = (0..size)
            .map(|_| prover.generate(&random_digest()))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &remotes, |b, remotes| {
            b.iter(|| comparator.compare_batch(black_box(&secret), remotes).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_comparison, bench_batch_comparison);
criterion_main!(benches);
