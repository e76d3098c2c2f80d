//! # Algorithm Registry
//!
//! Ordered, name-indexed list of pluggable transforms. The same registry type
//! backs both the encryption and the compression algorithms.
//!
//! ## Lookup Rules
//!
//! - Names compare case-insensitively (simple lowercase folding, no locale rules)
//! - Insertion order is kept; the first matching entry wins
//! - Duplicate names are accepted, so a later entry is shadowed by an earlier one
//! - A missing name is `None`, never an error
//!
//! Lookups are a linear scan; registries hold a handful of entries.

use crate::error::ConfigurationError;
use crate::ports::Algorithm;
use tracing::{debug, warn};

/// Append-only registry of named algorithms.
///
/// `T` is the algorithm trait object, e.g. `dyn EncryptionAlgorithm`.
pub struct AlgorithmRegistry<T: ?Sized + Algorithm> {
    /// Label used in logs ("encryption", "compression").
    kind: &'static str,
    entries: Vec<Box<T>>,
}

impl<T: ?Sized + Algorithm> AlgorithmRegistry<T> {
    /// Create an empty registry labelled `kind`.
    #[must_use]
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Append an algorithm, taking ownership of it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::NullArgument` when `algorithm` is `None`;
    /// the registry is unchanged.
    pub fn add(&mut self, algorithm: Option<Box<T>>) -> Result<(), ConfigurationError> {
        let algorithm = algorithm.ok_or(ConfigurationError::NullArgument { name: "algorithm" })?;

        if self.find(algorithm.name()).is_some() {
            warn!(
                kind = self.kind,
                algorithm = algorithm.name(),
                "Duplicate algorithm name registered; the earlier entry wins lookups"
            );
        } else {
            debug!(kind = self.kind, algorithm = algorithm.name(), "Algorithm registered");
        }

        self.entries.push(algorithm);
        Ok(())
    }

    /// First algorithm whose name matches `name` case-insensitively.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|entry| names_match(entry.name(), name))
            .map(|entry| &**entry)
    }

    /// Registered names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name()).collect()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &**entry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The label this registry logs under.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl<T: ?Sized + Algorithm> std::fmt::Debug for AlgorithmRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("kind", &self.kind)
            .field("names", &self.names())
            .finish()
    }
}

fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
