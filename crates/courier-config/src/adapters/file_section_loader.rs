//! # File Section Loader
//!
//! Reads the `serviceBus` section from a JSON configuration document:
//!
//! ```json
//! {
//!   "serviceBus": {
//!     "inbox": { "workQueueUri": "memory://work", "errorQueueUri": "memory://error" },
//!     "compressionAlgorithm": "gzip"
//!   }
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `COURIER_CONFIG` | `courier.json` | Path of the configuration document |

use crate::domain::{SectionCache, ServiceBusSection};
use crate::ports::SectionLoader;
use serde_json::Value;
use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

/// Environment variable naming the configuration document.
pub const CONFIG_PATH_ENV: &str = "COURIER_CONFIG";

/// Document used when `COURIER_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "courier.json";

/// Loads a named section from a JSON file on every call.
#[derive(Debug, Clone)]
pub struct FileSectionLoader {
    path: PathBuf,
}

impl FileSectionLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loader for the document named by `COURIER_CONFIG`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string()))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SectionLoader for FileSectionLoader {
    fn load(&self, section_name: &str) -> Option<ServiceBusSection> {
        let path = self.path.display();

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path, "No configuration document");
                return None;
            }
            Err(e) => {
                warn!(path = %path, error = %e, "Configuration document unreadable");
                return None;
            }
        };

        let mut document: Value = match serde_json::from_str(&contents) {
            Ok(document) => document,
            Err(e) => {
                warn!(path = %path, error = %e, "Configuration document is not valid JSON");
                return None;
            }
        };

        let Some(raw) = document.get_mut(section_name).map(Value::take) else {
            debug!(path = %path, section = section_name, "Section not present");
            return None;
        };

        match serde_json::from_value(raw) {
            Ok(section) => {
                info!(path = %path, section = section_name, "Section loaded");
                Some(section)
            }
            Err(e) => {
                warn!(path = %path, section = section_name, error = %e, "Section is malformed");
                None
            }
        }
    }
}

impl SectionCache {
    /// The process-wide cache, backed by [`FileSectionLoader::from_env`].
    ///
    /// Created on first use; every caller gets the same handle.
    pub fn shared() -> Arc<SectionCache> {
        static SHARED: OnceLock<Arc<SectionCache>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(SectionCache::new(FileSectionLoader::from_env()))))
    }
}
