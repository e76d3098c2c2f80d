//! # Courier Crypto - Message Transforms
//!
//! Implementations of the `EncryptionAlgorithm` and `CompressionAlgorithm`
//! ports, ready to be added to a configuration's algorithm registries.
//!
//! ## Components
//!
//! | Module | Algorithm | Registry name |
//! |--------|-----------|---------------|
//! | `symmetric` | XChaCha20-Poly1305 | `xchacha20-poly1305` |
//! | `symmetric` | AES-256-GCM | `aes-256-gcm` |
//! | `compression` | gzip | `gzip` |
//! | `compression` | raw deflate | `deflate` |
//!
//! ## Wire Format
//!
//! Ciphers emit `nonce || ciphertext || tag` with a fresh random nonce per
//! message, so the same key can be shared by every endpoint of a bus.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compression;
pub mod errors;
pub mod symmetric;

// Re-exports
pub use compression::{register_default_compression, DeflateCompressionAlgorithm, GzipCompressionAlgorithm};
pub use errors::CryptoError;
pub use symmetric::{register_default_encryption, Aes256GcmAlgorithm, SecretKey, XChaCha20Poly1305Algorithm};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
