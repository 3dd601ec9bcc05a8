//! Proof generation and comparison over the fixed group.

/// Comparison of a local secret against remote proofs.
pub mod comparator;
/// Proof generation from secret digests.
pub mod prover;

pub use comparator::Comparator;
pub use prover::Prover;

use crate::{Proof, Result};

/// Commits to `secret` in the process-wide group.
///
/// # Errors
///
/// Returns [`crate::Error::EmptySecret`] for an empty secret, or
/// [`crate::Error::ParameterInitialization`] if the group constants cannot be loaded.
pub fn generate(secret: &[u8]) -> Result<Proof> {
    Prover::from_global()?.generate_from_bytes(secret)
}

/// Decides whether `secret` equals the digest committed to by `remote`, in the process-wide
/// group.
///
/// # Errors
///
/// Returns [`crate::Error::ParameterMismatch`] if `remote` belongs to another group, and
/// [`crate::Error::EmptySecret`] for an empty secret.
pub fn compare(secret: &[u8], remote: &Proof) -> Result<bool> {
    Comparator::from_global()?.compare_bytes(secret, remote)
}
