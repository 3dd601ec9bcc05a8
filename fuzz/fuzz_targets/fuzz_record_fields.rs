#![no_main]

use libfuzzer_sys::fuzz_target;
use modhash_proof::{codec, compare, ProofRecord};

fuzz_target!(|fields: (String, String, String)| {
    let record = ProofRecord {
        generator: fields.0,
        prime: fields.1,
        modular_hash: fields.2,
    };

    if let Ok(proof) = codec::decode(&record) {
        assert!(proof.modular_hash() < proof.prime());
        let _ = compare(b"fuzz", &proof);
    }
});
