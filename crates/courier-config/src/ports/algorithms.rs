//! Named byte transforms held by the algorithm registries.

use crate::error::AlgorithmError;

/// Anything that can be registered by name.
pub trait Algorithm: Send + Sync {
    /// Registry name. Lookups compare it case-insensitively.
    fn name(&self) -> &str;
}

/// Symmetric encryption applied to message bodies.
pub trait EncryptionAlgorithm: Algorithm {
    /// Encrypt `plaintext`.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, AlgorithmError>;

    /// Decrypt bytes previously produced by [`EncryptionAlgorithm::encrypt`].
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, AlgorithmError>;
}

/// Compression applied to message bodies.
pub trait CompressionAlgorithm: Algorithm {
    /// Compress `bytes`.
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, AlgorithmError>;

    /// Reverse [`CompressionAlgorithm::compress`].
    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, AlgorithmError>;
}
