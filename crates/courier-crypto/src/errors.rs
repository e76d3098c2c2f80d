//! Crypto error types.

use courier_config::AlgorithmError;
use thiserror::Error;

/// Failures inside an encryption or compression algorithm.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Encryption failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption or authentication failed
    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Key material is not valid hex
    #[error("Invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    /// Input shorter than the nonce and tag it must carry
    #[error("Ciphertext too short: need at least {minimum} bytes, got {actual}")]
    CiphertextTooShort {
        /// Minimum length in bytes
        minimum: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Compression failed
    #[error("Compression failed: {0}")]
    CompressionFailed(String),

    /// Input is not a valid compressed stream
    #[error("Decompression failed: {0}")]
    DecompressionFailed(String),
}

impl CryptoError {
    /// Attribute this error to the algorithm registered as `algorithm`.
    pub fn into_algorithm_error(self, algorithm: &str) -> AlgorithmError {
        AlgorithmError::new(algorithm, self.to_string())
    }
}
