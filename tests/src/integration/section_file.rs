//! # Section File Flow
//!
//! `FileSectionLoader` behind a `SectionCache`: loaded once on success,
//! retried while missing or malformed.

#[cfg(test)]
mod tests {
    use courier_config::{FileSectionLoader, SectionCache};
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    const FIRST: &str = r#"{ "serviceBus": { "compressionAlgorithm": "gzip" } }"#;
    const SECOND: &str = r#"{ "serviceBus": { "compressionAlgorithm": "deflate" } }"#;

    #[test]
    fn test_loaded_section_survives_file_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("courier.json");
        fs::write(&path, FIRST).unwrap();
        let cache = SectionCache::new(FileSectionLoader::new(path.clone()));

        let first = cache.get().unwrap();
        fs::write(&path, SECOND).unwrap();
        let second = cache.get().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.compression_algorithm.as_deref(), Some("gzip"));
    }

    #[test]
    fn test_missing_file_is_retried() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("courier.json");
        let cache = SectionCache::new(FileSectionLoader::new(path.clone()));

        assert!(cache.get().is_none());
        assert!(!cache.is_loaded());

        fs::write(&path, SECOND).unwrap();

        let section = cache.get().unwrap();
        assert_eq!(section.compression_algorithm.as_deref(), Some("deflate"));
        assert!(cache.is_loaded());
    }

    #[test]
    fn test_malformed_section_is_retried() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("courier.json");
        fs::write(&path, r#"{ "serviceBus": { "inbox": { "threadCount": 3 } } }"#).unwrap();
        let cache = SectionCache::new(FileSectionLoader::new(path.clone()));

        assert!(cache.get().is_none());

        fs::write(&path, FIRST).unwrap();
        assert!(cache.get().is_some());
    }

    #[test]
    fn test_document_without_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("courier.json");
        fs::write(&path, r#"{ "logging": { "level": "debug" } }"#).unwrap();

        let cache = SectionCache::new(FileSectionLoader::new(path));

        assert!(cache.get().is_none());
    }
}
