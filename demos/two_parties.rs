//! Several organisations check which of them hold the same report.
//!
//! Each party publishes a proof for its report. One analyst then compares their own report
//! against every published proof in a single batch, including one proof that was produced
//! with the wrong group parameters.

use modhash_proof::digest::sha256_bytes;
use modhash_proof::{codec, Comparator, Proof, ProofRecord, Prover};

fn publish(report: &str) -> String {
    let secret = sha256_bytes(report.as_bytes());
    Prover::from_global()
        .and_then(|prover| prover.generate(&secret).to_json())
        .expect("Proof generation should succeed")
}

fn main() {
    let published = vec![
        ("north", publish("campaign nightjar, stage two")),
        ("south", publish("campaign nightjar, stage one")),
        ("east", publish("campaign nightjar, stage two")),
        (
            "west",
            serde_json::to_string(&ProofRecord {
                generator: "5".to_string(),
                prime: "17".to_string(),
                modular_hash: "1".to_string(),
            })
            .expect("Record should serialize"),
        ),
    ];

    let proofs: Vec<Proof> = published
        .iter()
        .map(|(_, wire)| Proof::from_json(wire).expect("Published proofs should decode"))
        .collect();

    let ours = sha256_bytes(b"campaign nightjar, stage two");
    let results = Comparator::from_global()
        .and_then(|comparator| comparator.compare_batch(&ours, &proofs))
        .expect("Batch should be accepted");

    for ((party, _), result) in published.iter().zip(results) {
        match result {
            Ok(true) => println!("{party:>6}: holds the same report"),
            Ok(false) => println!("{party:>6}: holds a different report"),
            Err(e) => println!("{party:>6}: cannot compare ({e})"),
        }
    }

    let record = codec::encode(&proofs[0]);
    println!(
        "\nA published modular hash is {} hex digits long.",
        record.modular_hash.len()
    );
}
