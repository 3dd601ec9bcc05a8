use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use modhash_proof::{codec, Proof, Prover, SecretDigest};
use rand::RngCore;

fn random_digest() -> SecretDigest {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    SecretDigest::new(bytes).unwrap()
}

fn bench_proof_generation(c: &mut Criterion) {
    let prover = Prover::from_global().unwrap();
    let secret = random_digest();

    c.bench_function("modp3072_proof_generation", |b| {
        b.iter(|| prover.generate(black_box(&secret)))
    });
}

fn bench_proof_encoding(c: &mut Criterion) {
    let proof = Prover::from_global().unwrap().generate(&random_digest());

    c.bench_function("proof_encoding", |b| {
        b.iter(|| black_box(&proof).to_json().unwrap())
    });
}

fn bench_proof_decoding(c: &mut Criterion) {
    let proof = Prover::from_global().unwrap().generate(&random_digest());
    let json = proof.to_json().unwrap();
    let record = codec::encode(&proof);

    c.bench_function("proof_decoding_json", |b| {
        b.iter(|| Proof::from_json(black_box(&json)).unwrap())
    });

    c.bench_function("proof_decoding_record", |b| {
        b.iter(|| codec::decode(black_box(&record)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_proof_generation,
    bench_proof_encoding,
    bench_proof_decoding
);
criterion_main!(benches);
