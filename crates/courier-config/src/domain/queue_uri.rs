//! Queue URI value object.

use crate::error::QueueError;
use std::fmt;

/// A parsed `scheme://path` queue address.
///
/// The scheme is normalized to lowercase; the rest is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueueUri {
    raw: String,
    scheme: String,
}

impl QueueUri {
    /// Parse `uri`.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::InvalidUri` if the scheme or path is empty.
    pub fn parse(uri: &str) -> Result<Self, QueueError> {
        let invalid = || QueueError::InvalidUri {
            uri: uri.to_string(),
        };

        let (scheme, path) = uri.trim().split_once("://").ok_or_else(invalid)?;
        if scheme.is_empty() || path.is_empty() {
            return Err(invalid());
        }

        let scheme = scheme.to_ascii_lowercase();
        Ok(Self {
            raw: format!("{scheme}://{path}"),
            scheme,
        })
    }

    /// The lowercase scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Everything after `://`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.raw[self.scheme.len() + 3..]
    }

    /// The normalized URI string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for QueueUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
