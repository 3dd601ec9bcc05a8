use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::{Error, GroupParameters, Proof, Result, SecretDigest};

/// Maximum number of remote proofs compared in a single batch.
const MAX_BATCH_SIZE: usize = 1000;

/// Compares a locally held secret against proofs produced by other parties.
///
/// The comparator recomputes `g^digest mod p` from its own digest and declares the secrets
/// equal iff that residue is identical to the remote proof's modular hash. Both values are
/// already reduced into `[0, p)`, so residue equality is the whole test.
///
/// # Security
///
/// - The remote proof's generator and prime are checked before any arithmetic; a mismatch
///   is an error, never a `false` result
/// - Residues are compared in constant time over fixed-width encodings
#[derive(Clone, Debug)]
pub struct Comparator<'a> {
    group: &'a GroupParameters,
}

impl<'a> Comparator<'a> {
    /// Creates a comparator over the given group.
    pub fn new(group: &'a GroupParameters) -> Self {
        Self { group }
    }

    /// Creates a comparator over the process-wide RFC 3526 group.
    pub fn from_global() -> Result<Comparator<'static>> {
        Ok(Comparator::new(GroupParameters::global()?))
    }

    /// Returns the group the comparator expects proofs in.
    pub fn group(&self) -> &'a GroupParameters {
        self.group
    }

    /// Decides whether `secret` equals the digest committed to by `remote`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParameterMismatch`] if `remote` was computed under a different
    /// generator or prime. No equality conclusion can be drawn in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use modhash_proof::{Comparator, Prover, SecretDigest};
    ///
    /// let ours = SecretDigest::new(*b"same content hash").unwrap();
    /// let theirs = Prover::from_global().unwrap().generate(&ours);
    ///
    /// let comparator = Comparator::from_global().unwrap();
    /// assert!(comparator.compare(&ours, &theirs).unwrap());
    /// ```
    pub fn compare(&self, secret: &SecretDigest, remote: &Proof) -> Result<bool> {
        self.check_parameters(remote)?;
        let local = self.local_residue(secret);
        Ok(self.residue_matches(&local, remote))
    }

    /// Same as [`Comparator::compare`] for a raw digest.
    ///
    /// # Errors
    ///
    /// Additionally returns [`Error::EmptySecret`] if `secret` is empty.
    pub fn compare_bytes(&self, secret: &[u8], remote: &Proof) -> Result<bool> {
        let digest = SecretDigest::new(secret)?;
        self.compare(&digest, remote)
    }

    /// Compares one local secret against several remote proofs.
    ///
    /// The local residue is computed once. Each proof gets its own result, so a parameter
    /// mismatch in one entry does not affect the others.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BatchTooLarge`] if more than 1000 proofs are supplied.
    pub fn compare_batch(
        &self,
        secret: &SecretDigest,
        remotes: &[Proof],
    ) -> Result<Vec<Result<bool>>> {
        if remotes.len() > MAX_BATCH_SIZE {
            return Err(Error::BatchTooLarge {
                size: remotes.len(),
                max: MAX_BATCH_SIZE,
            });
        }

        let local = self.local_residue(secret);
        let results = remotes
            .iter()
            .map(|remote| {
                self.check_parameters(remote)?;
                Ok(self.residue_matches(&local, remote))
            })
            .collect();

        Ok(results)
    }

    fn check_parameters(&self, remote: &Proof) -> Result<()> {
        remote.ensure_group(self.group).inspect_err(|e| {
            warn!(group = GroupParameters::NAME, "rejecting remote proof: {e}");
        })
    }

    fn local_residue(&self, secret: &SecretDigest) -> Vec<u8> {
        let residue = self.group.exponentiate(&secret.exponent());
        self.group.element_to_bytes(&residue)
    }

    fn residue_matches(&self, local: &[u8], remote: &Proof) -> bool {
        let remote = self.group.element_to_bytes(remote.modular_hash());
        let equal = bool::from(local.ct_eq(remote.as_slice()));
        debug!(equal, "compared residues");
        equal
    }
}
