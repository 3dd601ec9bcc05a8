//! Core building blocks for modhash proofs.
//!
//! - **groups**: the fixed group parameters every proof is computed in
//! - **gadgets**: secret digests and the proofs committing to them
//! - **codec**: the hexadecimal text record proofs travel as

/// Proof record encoding and decoding.
pub mod codec;
/// Secret digest and proof values.
pub mod gadgets;
/// Group parameter definitions.
pub mod groups;

pub use codec::ProofRecord;
pub use gadgets::{Proof, SecretDigest};
pub use groups::GroupParameters;
