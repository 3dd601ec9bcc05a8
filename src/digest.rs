//! SHA-256 digests of intelligence documents.
//!
//! Both parties must derive their secret the same way; the digest of the raw document bytes
//! is what the CLI feeds into the prover and comparator.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::{Result, SecretDigest};

/// Read buffer size for streaming hashes.
const CHUNK_SIZE: usize = 64 * 1024;

/// Hashes an in-memory buffer.
pub fn sha256_bytes(data: &[u8]) -> SecretDigest {
    digest_from(Sha256::digest(data).to_vec())
}

/// Hashes everything `reader` yields, in fixed-size chunks.
pub fn sha256_reader<R: Read>(mut reader: R) -> Result<SecretDigest> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total = 0usize;

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
        total += n;
    }

    debug!(bytes = total, "hashed document");
    Ok(digest_from(hasher.finalize().to_vec()))
}

/// Hashes the file at `path`.
pub fn sha256_file(path: impl AsRef<Path>) -> Result<SecretDigest> {
    let file = File::open(path.as_ref())?;
    sha256_reader(BufReader::new(file))
}

fn digest_from(bytes: Vec<u8>) -> SecretDigest {
    SecretDigest::new(bytes).unwrap_or_else(|_| unreachable!("SHA-256 output is 32 bytes"))
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn known_answer() {
        let digest = sha256_bytes(b"abc");
        assert_eq!(hex::encode(digest.as_bytes()), ABC_SHA256);
    }

    #[test]
    fn reader_matches_buffer() {
        let data = vec![0x42u8; CHUNK_SIZE * 2 + 17];
        let streamed = sha256_reader(Cursor::new(&data)).unwrap();
        assert_eq!(streamed.as_bytes(), sha256_bytes(&data).as_bytes());
    }

    #[test]
    fn empty_document_still_has_a_digest() {
        let digest = sha256_reader(Cursor::new(Vec::new())).unwrap();
        assert_eq!(digest.len(), 32);
    }

    #[test]
    fn file_digest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"abc").unwrap();
        let digest = sha256_file(file.path()).unwrap();
        assert_eq!(hex::encode(digest.as_bytes()), ABC_SHA256);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = sha256_file("/nonexistent/modhash/document.json");
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
