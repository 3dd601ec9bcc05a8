use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::{Error, Result};

/// Generator of the RFC 3526 MODP groups.
const MODP_3072_GENERATOR: u32 = 2;

/// 3072-bit MODP prime from RFC 3526, section 4 (group 15).
///
/// `p = 2^3072 - 2^3008 - 1 + 2^64 * ( [2^2942 pi] + 1690314 )`
const MODP_3072_PRIME_HEX: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74",
    "020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437",
    "4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED",
    "EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF05",
    "98DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB",
    "9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B",
    "E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF695581718",
    "3995497CEA956AE515D2261898FA051015728E5A8AAAC42DAD33170D04507A33",
    "A85521ABDF1CBA64ECFB850458DBEF0A8AEA71575D060C7DB3970F85A6E1E4C7",
    "ABF5AE8CDB0933D71E8C94E04A25619DCEE3D2261AD2EE6BF12FFA06D98A0864",
    "D87602733EC86A64521F2B18177B200CBBE117577A615D6C770988C0BAD946E2",
    "08E24FA074E5AB3143DB5BFCE0FD108E4B82D120A93AD2CAFFFFFFFFFFFFFFFF",
);

static MODP_3072: OnceLock<core::result::Result<GroupParameters, String>> = OnceLock::new();

/// Fixed multiplicative group every proof is computed in.
///
/// The process-wide instance is the RFC 3526 3072-bit MODP group with generator 2,
/// obtained through [`GroupParameters::global`]. Other instances only exist so that
/// proofs computed under foreign parameters can be represented and rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupParameters {
    generator: BigUint,
    prime: BigUint,
    element_len: usize,
}

impl GroupParameters {
    /// Name of the hardcoded group.
    pub const NAME: &'static str = "RFC3526-MODP-3072";

    /// Returns the shared, lazily initialized RFC 3526 group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParameterInitialization`] if the constant prime fails to parse.
    /// This cannot be recovered from and callers should abort startup.
    pub fn global() -> Result<&'static Self> {
        MODP_3072
            .get_or_init(|| {
                Self::from_hex(MODP_3072_GENERATOR, MODP_3072_PRIME_HEX).map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|reason| Error::ParameterInitialization(reason.clone()))
    }

    /// Builds parameters from a small generator and a hexadecimal prime.
    pub fn from_hex(generator: u32, prime_hex: &str) -> Result<Self> {
        let prime = BigUint::parse_bytes(prime_hex.as_bytes(), 16).ok_or_else(|| {
            Error::ParameterInitialization("prime is not valid hexadecimal".to_string())
        })?;

        Self::new(BigUint::from(generator), prime)
    }

    /// Builds parameters from explicit values.
    ///
    /// # Errors
    ///
    /// The prime must be odd and greater than 2, and the generator must lie in `[2, prime)`.
    pub fn new(generator: BigUint, prime: BigUint) -> Result<Self> {
        if prime <= BigUint::from(2u32) || !prime.bit(0) {
            return Err(Error::ParameterInitialization(
                "prime must be an odd integer greater than 2".to_string(),
            ));
        }

        if generator < BigUint::from(2u32) || generator >= prime {
            return Err(Error::ParameterInitialization(
                "generator must lie in [2, prime)".to_string(),
            ));
        }

        let element_len = (prime.bits() as usize).div_ceil(8);

        Ok(Self {
            generator,
            prime,
            element_len,
        })
    }

    /// Returns the generator `g`.
    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// Returns the prime modulus `p`.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Number of bytes in a fixed-width element encoding.
    pub fn element_len(&self) -> usize {
        self.element_len
    }

    /// Computes `g^exponent mod p`.
    pub fn exponentiate(&self, exponent: &BigUint) -> BigUint {
        self.generator.modpow(exponent, &self.prime)
    }

    /// Returns true if `element` is a residue, i.e. `element < p`.
    pub fn contains(&self, element: &BigUint) -> bool {
        element < &self.prime
    }

    /// Encodes a residue as big-endian bytes left-padded to [`Self::element_len`].
    ///
    /// Values wider than the modulus are returned unpadded.
    pub fn element_to_bytes(&self, element: &BigUint) -> Vec<u8> {
        let raw = element.to_bytes_be();
        if raw.len() >= self.element_len {
            return raw;
        }

        let mut padded = vec![0u8; self.element_len - raw.len()];
        padded.extend_from_slice(&raw);
        padded
    }

    /// Returns true if `generator` and `prime` both match this group.
    pub fn matches(&self, generator: &BigUint, prime: &BigUint) -> bool {
        &self.generator == generator && &self.prime == prime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_group_is_modp_3072() {
        let group = GroupParameters::global().unwrap();
        assert_eq!(group.generator(), &BigUint::from(2u32));
        assert_eq!(group.prime().bits(), 3072);
        assert_eq!(group.element_len(), 384);
    }

    #[test]
    fn prime_has_rfc3526_shape() {
        let group = GroupParameters::global().unwrap();
        let bytes = group.prime().to_bytes_be();
        assert_eq!(&bytes[..8], &[0xFF; 8]);
        assert_eq!(&bytes[bytes.len() - 8..], &[0xFF; 8]);
        assert_eq!(&bytes[8..12], &[0xC9, 0x0F, 0xDA, 0xA2]);
    }

    #[test]
    fn global_is_shared() {
        let a = GroupParameters::global().unwrap();
        let b = GroupParameters::global().unwrap();
        assert!(core::ptr::eq(a, b));
    }

    #[test]
    fn rejects_bad_prime_hex() {
        let result = GroupParameters::from_hex(2, "not-hex");
        assert!(matches!(result, Err(Error::ParameterInitialization(_))));
    }

    #[test]
    fn rejects_even_prime() {
        let result = GroupParameters::new(BigUint::from(2u32), BigUint::from(24u32));
        assert!(matches!(result, Err(Error::ParameterInitialization(_))));
    }

    #[test]
    fn rejects_generator_outside_group() {
        let result = GroupParameters::new(BigUint::from(23u32), BigUint::from(23u32));
        assert!(result.is_err());

        let result = GroupParameters::new(BigUint::from(1u32), BigUint::from(23u32));
        assert!(result.is_err());
    }

    #[test]
    fn small_group_exponentiation() {
        let group = GroupParameters::new(BigUint::from(4u32), BigUint::from(23u32)).unwrap();
        assert_eq!(group.exponentiate(&BigUint::from(6u32)), BigUint::from(2u32));
        assert_eq!(group.exponentiate(&BigUint::from(0u32)), BigUint::from(1u32));
    }

    #[test]
    fn element_encoding_is_fixed_width() {
        let group = GroupParameters::global().unwrap();
        let bytes = group.element_to_bytes(&BigUint::from(1u32));
        assert_eq!(bytes.len(), 384);
        assert_eq!(bytes[383], 1);
        assert!(bytes[..383].iter().all(|b| *b == 0));
    }
}
