/// RFC 3526 MODP group (3072-bit, generator 2).
pub mod rfc3526;

pub use rfc3526::GroupParameters;
