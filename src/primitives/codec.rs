//! Text encoding of proofs for transport between parties.
//!
//! A proof travels as a record with exactly three string fields, each holding an integer in
//! base 16:
//!
//! ```json
//! {
//!   "modular-multiplicative-generator": "2",
//!   "prime": "ffffffffffffffffc90fdaa2...",
//!   "modular-hash": "5c1a..."
//! }
//! ```
//!
//! Encoding emits lowercase digits without padding. Decoding accepts either case and any
//! number of leading zeros, and rejects everything else.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::gadgets::check_parameters;
use super::{GroupParameters, Proof};
use crate::{Error, Result};

/// Wire name of the generator field.
pub const GENERATOR_FIELD: &str = "modular-multiplicative-generator";

/// Wire name of the prime field.
pub const PRIME_FIELD: &str = "prime";

/// Wire name of the modular hash field.
pub const MODULAR_HASH_FIELD: &str = "modular-hash";

/// Upper bound on digits per field, leading zeros included.
const MAX_FIELD_DIGITS: usize = 4096;

/// Serialized form of a [`Proof`].
///
/// Field names are the wire contract shared by independently operated instances and must
/// not change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProofRecord {
    /// Generator in hexadecimal.
    #[serde(rename = "modular-multiplicative-generator")]
    pub generator: String,
    /// Prime in hexadecimal.
    #[serde(rename = "prime")]
    pub prime: String,
    /// Modular hash in hexadecimal.
    #[serde(rename = "modular-hash")]
    pub modular_hash: String,
}

/// Encodes a proof as a hexadecimal record.
pub fn encode(proof: &Proof) -> ProofRecord {
    ProofRecord {
        generator: format!("{:x}", proof.generator()),
        prime: format!("{:x}", proof.prime()),
        modular_hash: format!("{:x}", proof.modular_hash()),
    }
}

/// Decodes a record into a proof computed in the process-wide group.
///
/// # Errors
///
/// Returns the errors of [`decode_in`], and [`Error::ParameterInitialization`] if the
/// process-wide group cannot be loaded.
pub fn decode(record: &ProofRecord) -> Result<Proof> {
    decode_in(record, GroupParameters::global()?)
}

/// Decodes a record into a proof computed in `group`.
///
/// All three fields are parsed before the proof is built, so a malformed record never
/// yields a partially populated value. The generator and prime are checked against
/// `group` before the modular hash is range checked, so a record from a foreign group is
/// always reported as a mismatch.
///
/// # Errors
///
/// - [`Error::InvalidFieldEncoding`] if any field is not plain base-16
/// - [`Error::ParameterMismatch`] if the generator or prime differ from `group`
/// - [`Error::ModularHashOutOfRange`] if the modular hash is not below the prime
pub fn decode_in(record: &ProofRecord, group: &GroupParameters) -> Result<Proof> {
    let generator = parse_hex_field(GENERATOR_FIELD, &record.generator)?;
    let prime = parse_hex_field(PRIME_FIELD, &record.prime)?;
    let modular_hash = parse_hex_field(MODULAR_HASH_FIELD, &record.modular_hash)?;

    check_parameters(group, &generator, &prime).inspect_err(|e| {
        warn!("rejecting proof record: {e}");
    })?;

    Proof::new(generator, prime, modular_hash)
}

fn parse_hex_field(field: &'static str, value: &str) -> Result<BigUint> {
    if value.is_empty() {
        return Err(Error::InvalidFieldEncoding {
            field,
            reason: "value is empty".to_string(),
        });
    }

    if value.len() > MAX_FIELD_DIGITS {
        return Err(Error::InvalidFieldEncoding {
            field,
            reason: format!(
                "{} digits exceeds the limit of {}",
                value.len(),
                MAX_FIELD_DIGITS
            ),
        });
    }

    // from_str_radix tolerates '_' and a leading '+', so check digits first.
    if let Some((pos, c)) = value.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(Error::InvalidFieldEncoding {
            field,
            reason: format!("invalid hexadecimal digit {c:?} at position {pos}"),
        });
    }

    BigUint::parse_bytes(value.as_bytes(), 16).ok_or_else(|| Error::InvalidFieldEncoding {
        field,
        reason: "value is not base-16".to_string(),
    })
}

impl From<&Proof> for ProofRecord {
    fn from(proof: &Proof) -> Self {
        encode(proof)
    }
}

impl TryFrom<&ProofRecord> for Proof {
    type Error = Error;

    fn try_from(record: &ProofRecord) -> Result<Self> {
        decode(record)
    }
}

impl Proof {
    /// Serializes the proof to its JSON record.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&encode(self))?)
    }

    /// Serializes the proof to an indented JSON record.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&encode(self))?)
    }

    /// Deserializes a proof from its JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not an object with exactly the three record
    /// fields as strings, and otherwise the errors of [`decode`].
    /// Records from a foreign group fail with [`Error::ParameterMismatch`].
    pub fn from_json(text: &str) -> Result<Self> {
        let record: ProofRecord = serde_json::from_str(text)?;
        decode(&record)
    }
}
