//! Basic usage of modhash proofs.
//!
//! This example demonstrates:
//! - Deriving a secret digest from a document
//! - Generating a proof from the digest
//! - Serializing the proof for transmission
//! - Comparing another digest against the received proof

use modhash_proof::digest::sha256_bytes;
use modhash_proof::{Comparator, GroupParameters, Proof, Prover};

fn main() {
    println!("Modhash Proofs: Basic Example\n");

    println!("Step 1: Load the group parameters");
    let group = GroupParameters::global().expect("Group constants should load");
    println!(
        "  Using {} (generator {}, {}-bit prime)\n",
        GroupParameters::NAME,
        group.generator(),
        group.prime().bits()
    );

    println!("Step 2: Hash the document");
    let secret = sha256_bytes(br#"{"indicator":"198.51.100.7"}"#);
    println!("  Digest computed (automatically zeroized on drop)\n");

    println!("Step 3: Generate the proof");
    let proof = Prover::new(group).generate(&secret);
    println!("  Proof computed: m = g^digest mod p\n");

    println!("Step 4: Serialize proof for transmission");
    let wire = proof.to_json_pretty().expect("Serialization should succeed");
    println!("{wire}\n");

    println!("Step 5: Deserialize proof");
    let received = Proof::from_json(&wire).expect("Deserialization should succeed");
    println!("  Proof deserialized successfully\n");

    println!("Step 6: Compare");
    let comparator = Comparator::new(group);
    match comparator.compare(&secret, &received) {
        Ok(true) => println!("  Same document"),
        Ok(false) => println!("  Different documents"),
        Err(e) => println!("  Cannot compare: {e}"),
    }

    let other = sha256_bytes(br#"{"indicator":"203.0.113.9"}"#);
    match comparator.compare(&other, &received) {
        Ok(true) => println!("  Same document"),
        Ok(false) => println!("  A different document does not match"),
        Err(e) => println!("  Cannot compare: {e}"),
    }
}
