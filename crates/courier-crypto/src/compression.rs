//! Compression algorithms over `flate2`.

use crate::CryptoError;
use courier_config::{Algorithm, AlgorithmError, AlgorithmRegistry, CompressionAlgorithm, ConfigurationError};
use flate2::read::{DeflateDecoder, GzDecoder};
use flate2::write::{DeflateEncoder, GzEncoder};
use flate2::Compression;
use std::io::{Read, Write};

/// gzip (RFC 1952) framing.
#[derive(Debug, Clone, Copy)]
pub struct GzipCompressionAlgorithm {
    level: Compression,
}

impl GzipCompressionAlgorithm {
    /// Registry name.
    pub const NAME: &'static str = "gzip";

    /// Default compression level.
    pub fn new() -> Self {
        Self {
            level: Compression::default(),
        }
    }

    /// Explicit level, 0 (none) to 9 (best).
    pub fn with_level(level: u32) -> Self {
        Self {
            level: Compression::new(level.min(9)),
        }
    }
}

impl Default for GzipCompressionAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for GzipCompressionAlgorithm {
    fn name(&self) -> &str {
        Self::NAME
    }
}

impl CompressionAlgorithm for GzipCompressionAlgorithm {
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, AlgorithmError> {
        let failed = |e: std::io::Error| CryptoError::CompressionFailed(e.to_string()).into_algorithm_error(Self::NAME);

        let mut encoder = GzEncoder::new(Vec::new(), self.level);
        encoder.write_all(bytes).map_err(failed)?;
        encoder.finish().map_err(failed)
    }

    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, AlgorithmError> {
        let mut out = Vec::new();
        GzDecoder::new(bytes)
            .read_to_end(&mut out)
            .map_err(|e| CryptoError::DecompressionFailed(e.to_string()).into_algorithm_error(Self::NAME))?;
        Ok(out)
    }
}

/// Raw deflate (RFC 1951), no header or checksum.
#[derive(Debug, Clone, Copy)]
pub struct DeflateCompressionAlgorithm {
    level: Compression,
}

impl DeflateCompressionAlgorithm {
    /// Registry name.
    pub const NAME: &'static str = "deflate";

    /// Default compression level.
    pub fn new() -> Self {
        Self {
            level: Compression::default(),
        }
    }

    /// Explicit level, 0 (none) to 9 (best).
    pub fn with_level(level: u32) -> Self {
        Self {
            level: Compression::new(level.min(9)),
        }
    }
}

impl Default for DeflateCompressionAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for DeflateCompressionAlgorithm {
    fn name(&self) -> &str {
        Self::NAME
    }
}

impl CompressionAlgorithm for DeflateCompressionAlgorithm {
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, AlgorithmError> {
        let failed = |e: std::io::Error| CryptoError::CompressionFailed(e.to_string()).into_algorithm_error(Self::NAME);

        let mut encoder = DeflateEncoder::new(Vec::new(), self.level);
        encoder.write_all(bytes).map_err(failed)?;
        encoder.finish().map_err(failed)
    }

    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, AlgorithmError> {
        let mut out = Vec::new();
        DeflateDecoder::new(bytes)
            .read_to_end(&mut out)
            .map_err(|e| CryptoError::DecompressionFailed(e.to_string()).into_algorithm_error(Self::NAME))?;
        Ok(out)
    }
}

/// Register gzip then deflate at their default levels.
///
/// # Errors
///
/// Propagates registry errors.
pub fn register_default_compression(
    registry: &mut AlgorithmRegistry<dyn CompressionAlgorithm>,
) -> Result<(), ConfigurationError> {
    registry.add(Some(Box::new(GzipCompressionAlgorithm::new())))?;
    registry.add(Some(Box::new(DeflateCompressionAlgorithm::new())))?;
    tracing::debug!(algorithms = ?registry.names(), "Compression algorithms registered");
    Ok(())
}
