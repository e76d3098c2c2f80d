//! # Symmetric Encryption
//!
//! XChaCha20-Poly1305 and AES-256-GCM as registry algorithms.
//!
//! ## Security Properties
//!
//! - **XChaCha20-Poly1305**: 192-bit nonce, safe to generate at random per message
//! - **AES-256-GCM**: 96-bit nonce; prefer it only where AES-NI is available
//! - Both authenticate the whole payload, so tampering fails decryption

use crate::CryptoError;
use aes_gcm::Aes256Gcm;
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    XChaCha20Poly1305, XNonce,
};
use courier_config::{Algorithm, AlgorithmError, AlgorithmRegistry, ConfigurationError, EncryptionAlgorithm};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key length in bytes for both ciphers.
pub const KEY_LENGTH: usize = 32;

/// Authentication tag length in bytes for both ciphers.
const TAG_LENGTH: usize = 16;

const XCHACHA_NONCE_LENGTH: usize = 24;
const AES_GCM_NONCE_LENGTH: usize = 12;

/// Secret key (256-bit). Zeroed on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; KEY_LENGTH]);

impl SecretKey {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse 64 hex characters.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKeyEncoding` for non-hex input and
    /// `CryptoError::InvalidKeyLength` when it does not decode to 32 bytes.
    pub fn from_hex(encoded: &str) -> Result<Self, CryptoError> {
        let mut decoded = hex::decode(encoded.trim()).map_err(|e| CryptoError::InvalidKeyEncoding(e.to_string()))?;

        let result = <[u8; KEY_LENGTH]>::try_from(decoded.as_slice())
            .map(Self)
            .map_err(|_| CryptoError::InvalidKeyLength {
                expected: KEY_LENGTH,
                actual: decoded.len(),
            });
        decoded.zeroize();
        result
    }

    /// Generate random key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LENGTH];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut bytes);
        Self(bytes)
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

fn random_nonce<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut bytes);
    bytes
}

/// Split `nonce || sealed`, rejecting input too short to hold a nonce and tag.
fn split_sealed(input: &[u8], nonce_length: usize) -> Result<(&[u8], &[u8]), CryptoError> {
    let minimum = nonce_length + TAG_LENGTH;
    if input.len() < minimum {
        return Err(CryptoError::CiphertextTooShort {
            minimum,
            actual: input.len(),
        });
    }
    Ok(input.split_at(nonce_length))
}

/// XChaCha20-Poly1305 keyed by a [`SecretKey`].
pub struct XChaCha20Poly1305Algorithm {
    cipher: XChaCha20Poly1305,
}

impl XChaCha20Poly1305Algorithm {
    /// Registry name.
    pub const NAME: &'static str = "xchacha20-poly1305";

    /// Create the algorithm for `key`.
    pub fn new(key: &SecretKey) -> Self {
        Self {
            cipher: XChaCha20Poly1305::new(key.as_bytes().into()),
        }
    }

    fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let nonce = random_nonce::<XCHACHA_NONCE_LENGTH>();
        let sealed = self
            .cipher
            .encrypt(XNonce::from_slice(&nonce), plaintext)
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

        let mut out = Vec::with_capacity(nonce.len() + sealed.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&sealed);
        Ok(out)
    }

    fn open(&self, input: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let (nonce, sealed) = split_sealed(input, XCHACHA_NONCE_LENGTH)?;
        self.cipher
            .decrypt(XNonce::from_slice(nonce), sealed)
            .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))
    }
}

impl Algorithm for XChaCha20Poly1305Algorithm {
    fn name(&self) -> &str {
        Self::NAME
    }
}

impl EncryptionAlgorithm for XChaCha20Poly1305Algorithm {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, AlgorithmError> {
        self.seal(plaintext).map_err(|e| e.into_algorithm_error(Self::NAME))
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, AlgorithmError> {
        self.open(ciphertext).map_err(|e| e.into_algorithm_error(Self::NAME))
    }
}

/// AES-256-GCM keyed by a [`SecretKey`].
pub struct Aes256GcmAlgorithm {
    cipher: Aes256Gcm,
}

impl Aes256GcmAlgorithm {
    /// Registry name.
    pub const NAME: &'static str = "aes-256-gcm";

    /// Create the algorithm for `key`.
    pub fn new(key: &SecretKey) -> Self {
        Self {
            cipher: Aes256Gcm::new(key.as_bytes().into()),
        }
    }

    fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let nonce = random_nonce::<AES_GCM_NONCE_LENGTH>();
        let sealed = self
            .cipher
            .encrypt(aes_gcm::Nonce::from_slice(&nonce), plaintext)
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

        let mut out = Vec::with_capacity(nonce.len() + sealed.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&sealed);
        Ok(out)
    }

    fn open(&self, input: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let (nonce, sealed) = split_sealed(input, AES_GCM_NONCE_LENGTH)?;
        self.cipher
            .decrypt(aes_gcm::Nonce::from_slice(nonce), sealed)
            .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))
    }
}

impl Algorithm for Aes256GcmAlgorithm {
    fn name(&self) -> &str {
        Self::NAME
    }
}

impl EncryptionAlgorithm for Aes256GcmAlgorithm {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, AlgorithmError> {
        self.seal(plaintext).map_err(|e| e.into_algorithm_error(Self::NAME))
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, AlgorithmError> {
        self.open(ciphertext).map_err(|e| e.into_algorithm_error(Self::NAME))
    }
}

/// Register both ciphers under `key`, XChaCha20-Poly1305 first.
///
/// # Errors
///
/// Propagates registry errors.
pub fn register_default_encryption(
    registry: &mut AlgorithmRegistry<dyn EncryptionAlgorithm>,
    key: &SecretKey,
) -> Result<(), ConfigurationError> {
    registry.add(Some(Box::new(XChaCha20Poly1305Algorithm::new(key))))?;
    registry.add(Some(Box::new(Aes256GcmAlgorithm::new(key))))?;
    tracing::debug!(algorithms = ?registry.names(), "Encryption algorithms registered");
    Ok(())
}
