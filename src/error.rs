//! Error types for modhash proofs

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The hardcoded group constants could not be loaded.
    #[error("Unable to initialize constant group parameters: {0}")]
    ParameterInitialization(String),

    /// A proof record field is not a valid hexadecimal integer.
    #[error("Invalid encoding for field '{field}': {reason}")]
    InvalidFieldEncoding {
        /// Wire name of the offending field.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The proof's modular hash is not reduced modulo its prime.
    #[error("Modular hash must be less than the prime")]
    ModularHashOutOfRange,

    /// The remote proof was computed in a different group.
    #[error("Sender/receiver {field} did not match")]
    ParameterMismatch {
        /// Which group parameter differs (`generator` or `prime`).
        field: &'static str,
    },

    /// Too many proofs were submitted in one batch.
    #[error("Batch of {size} proofs exceeds the maximum of {max}")]
    BatchTooLarge {
        /// Number of proofs submitted.
        size: usize,
        /// Maximum accepted.
        max: usize,
    },

    /// The secret digest was empty.
    #[error("Secret digest must not be empty")]
    EmptySecret,

    /// The proof text is not a well-formed record.
    #[error("Malformed proof record: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a document, schema or proof file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON schema could not be loaded or compiled.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Configuration could not be extracted or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}
