//! Deterministic modular-exponentiation commitments for comparing secret digests.
//!
//! Two parties each hold a digest (typically the SHA-256 of a document) and want to learn
//! whether the digests are equal without handing them over. Each side publishes
//! `g^digest mod p` in the RFC 3526 3072-bit MODP group; a party holding a digest can then
//! recompute the residue for its own digest and compare.
//!
//! ```rust
//! use modhash_proof::{compare, generate, Proof};
//!
//! // Producer
//! let proof = generate(b"digest of our document").unwrap();
//! let wire = proof.to_json().unwrap();
//!
//! // Verifier
//! let received = Proof::from_json(&wire).unwrap();
//! assert!(compare(b"digest of our document", &received).unwrap());
//! assert!(!compare(b"digest of another document", &received).unwrap());
//! ```
//!
//! This is a one-way commitment, not a zero-knowledge proof: equal digests always give equal
//! proofs, and the scheme is only as strong as the digest is unpredictable.

#![deny(missing_docs)]

/// Tool configuration.
pub mod config;
/// Document digests.
pub mod digest;
mod error;
/// Core primitives: group parameters, proofs and their text encoding.
pub mod primitives;
/// Proof generation and comparison.
pub mod protocol;
/// Document schema validation.
pub mod schema;

pub use error::Error;
pub use primitives::codec::{self, ProofRecord};
pub use primitives::{GroupParameters, Proof, SecretDigest};
pub use protocol::{compare, generate, Comparator, Prover};

/// Result type for this crate.
pub type Result<T> = core::result::Result<T, Error>;
