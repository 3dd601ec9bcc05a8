//! Protocol gadgets for modhash proofs.
//!
//! This module contains the two values that flow through the protocol: the secret digest
//! each party holds locally, and the proof that commits to it.

use core::fmt;

use num_bigint::BigUint;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::GroupParameters;
use crate::{Error, Result};

/// Secret digest held by one party.
///
/// The bytes are interpreted as a big-endian unsigned exponent. They never leave the
/// process: only `g^digest mod p` is ever serialized.
///
/// # Security
///
/// - The digest is automatically zeroized when dropped
/// - `Debug` output never includes the digest bytes
/// - Confidentiality rests entirely on the digest's entropy; a predictable digest can be
///   recovered by a dictionary search over candidate inputs
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretDigest {
    bytes: Vec<u8>,
}

impl SecretDigest {
    /// Wraps a digest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySecret`] if `bytes` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use modhash_proof::SecretDigest;
    ///
    /// let digest = SecretDigest::new([0xAB; 32]).unwrap();
    /// assert_eq!(digest.len(), 32);
    /// assert!(SecretDigest::new(Vec::new()).is_err());
    /// ```
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(Error::EmptySecret);
        }
        Ok(Self { bytes })
    }

    /// Returns the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the digest.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; an empty digest cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The digest as a big-endian exponent.
    pub(crate) fn exponent(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }
}

impl fmt::Debug for SecretDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretDigest([REDACTED; {} bytes])", self.bytes.len())
    }
}

/// Commitment to a secret digest.
///
/// Carries `g^digest mod p` together with the generator and prime it was computed under,
/// so a receiver can detect a parameter mismatch before trusting any comparison.
///
/// # Invariants
///
/// `modular_hash < prime` always holds; it is checked on every construction path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    generator: BigUint,
    prime: BigUint,
    modular_hash: BigUint,
}

impl Proof {
    /// Creates a proof from explicit values, typically ones received from another party.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModularHashOutOfRange`] if `modular_hash >= prime`.
    pub fn new(generator: BigUint, prime: BigUint, modular_hash: BigUint) -> Result<Self> {
        if modular_hash >= prime {
            return Err(Error::ModularHashOutOfRange);
        }

        Ok(Self {
            generator,
            prime,
            modular_hash,
        })
    }

    /// Creates a proof for a residue already reduced in `group`.
    pub(crate) fn in_group(group: &GroupParameters, modular_hash: BigUint) -> Self {
        debug_assert!(group.contains(&modular_hash));
        Self {
            generator: group.generator().clone(),
            prime: group.prime().clone(),
            modular_hash,
        }
    }

    /// Returns the generator the proof was computed with.
    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// Returns the prime the proof was computed with.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Returns the committed residue `g^digest mod p`.
    pub fn modular_hash(&self) -> &BigUint {
        &self.modular_hash
    }

    /// Checks that the proof was computed in `group`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParameterMismatch`] naming the first differing parameter.
    pub fn ensure_group(&self, group: &GroupParameters) -> Result<()> {
        check_parameters(group, &self.generator, &self.prime)
    }
}

/// Checks a received generator and prime against `group`, generator first.
pub(crate) fn check_parameters(
    group: &GroupParameters,
    generator: &BigUint,
    prime: &BigUint,
) -> Result<()> {
    if generator != group.generator() {
        return Err(Error::ParameterMismatch { field: "generator" });
    }

    if prime != group.prime() {
        return Err(Error::ParameterMismatch { field: "prime" });
    }

    Ok(())
}
