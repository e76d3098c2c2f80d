//! # Courier Test Suite
//!
//! Cross-crate flows that no single crate can exercise on its own.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── bootstrap.rs       # configuration → section → started bus
//!     ├── section_file.rs    # file loader behind the section cache
//!     ├── algorithms.rs      # real ciphers and compressors in the registries
//!     └── strategies.rs      # default strategies read back from a configuration
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p courier-tests
//! cargo test -p courier-tests integration::algorithms
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
