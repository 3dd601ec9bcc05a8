use tracing::debug;

use crate::{GroupParameters, Proof, Result, SecretDigest};

/// Generates proofs committing to secret digests.
///
/// A proof is `g^digest mod p`, with the digest read as a big-endian integer and used as
/// the exponent without reduction. Generation is deterministic: the same digest always
/// produces the same proof, which is what makes equality testing possible.
///
/// # Security
///
/// There is no blinding. Anyone holding a candidate input can compute its proof and compare,
/// so the digest must be a hash of content the other side does not already possess.
#[derive(Clone, Debug)]
pub struct Prover<'a> {
    group: &'a GroupParameters,
}

impl<'a> Prover<'a> {
    /// Creates a prover over the given group.
    pub fn new(group: &'a GroupParameters) -> Self {
        Self { group }
    }

    /// Creates a prover over the process-wide RFC 3526 group.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use modhash_proof::{Prover, SecretDigest};
    ///
    /// let prover = Prover::from_global().unwrap();
    /// let digest = SecretDigest::new([0x01]).unwrap();
    /// let proof = prover.generate(&digest);
    /// assert_eq!(proof.modular_hash(), &num_bigint::BigUint::from(2u32));
    /// ```
    pub fn from_global() -> Result<Prover<'static>> {
        Ok(Prover::new(GroupParameters::global()?))
    }

    /// Returns the group proofs are generated in.
    pub fn group(&self) -> &'a GroupParameters {
        self.group
    }

    /// Commits to `secret`.
    pub fn generate(&self, secret: &SecretDigest) -> Proof {
        let modular_hash = self.group.exponentiate(&secret.exponent());
        debug!(
            group = GroupParameters::NAME,
            digest_len = secret.len(),
            "generated modular hash"
        );
        Proof::in_group(self.group, modular_hash)
    }

    /// Commits to a raw digest.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptySecret`] if `secret` is empty.
    pub fn generate_from_bytes(&self, secret: &[u8]) -> Result<Proof> {
        let digest = SecretDigest::new(secret)?;
        Ok(self.generate(&digest))
    }
}
