#![no_main]

use libfuzzer_sys::fuzz_target;
use modhash_proof::Proof;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Proof::from_json(text);
    }
});
