//! Process-lifetime dataset cache.
//! Owned by the UI thread; the file is read once and the same table is handed
//! to every page until the source changes or the cache is reset.

use super::dataset::Dataset;
use super::loader::{load_csv, LoadOptions, LoaderError};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lazily loads the source CSV and memoizes the cleaned table.
pub struct DatasetCache {
    source: PathBuf,
    options: LoadOptions,
    table: Option<Arc<Dataset>>,
    reads: usize,
}

impl DatasetCache {
    pub fn new(source: impl Into<PathBuf>, options: LoadOptions) -> Self {
        Self {
            source: source.into(),
            options,
            table: None,
            reads: 0,
        }
    }

    /// Return the cached table, reading the file on first use.
    /// Errors are not cached.
    pub fn load(&mut self) -> Result<Arc<Dataset>, LoaderError> {
        if let Some(table) = &self.table {
            log::debug!("Dataset cache hit for {}", self.source.display());
            return Ok(Arc::clone(table));
        }

        self.reads += 1;
        log::debug!("Reading {} (read #{})", self.source.display(), self.reads);
        let table = Arc::new(load_csv(&self.source, &self.options)?);
        self.table = Some(Arc::clone(&table));
        Ok(table)
    }

    /// Point the cache at another file. Drops the cached table if the path changed.
    pub fn set_source(&mut self, source: impl Into<PathBuf>) {
        let source = source.into();
        if source != self.source {
            self.source = source;
            self.table = None;
        }
    }

    /// Forget the cached table; the next `load` re-reads the file.
    pub fn reset(&mut self) {
        self.table = None;
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Number of times the file has actually been read.
    #[cfg(test)]
    pub fn read_count(&self) -> usize {
        self.reads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_second_load_uses_cache() {
        let file = write_csv("a,b\n1,2\n3,4\n");
        let mut cache = DatasetCache::new(file.path(), LoadOptions::default());

        let first = cache.load().unwrap();
        let second = cache.load().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.read_count(), 1);
        assert_eq!(first.preview(2), second.preview(2));
    }

    #[test]
    fn test_cache_ignores_file_changes_until_reset() {
        let mut file = write_csv("a\n1\n");
        let mut cache = DatasetCache::new(file.path(), LoadOptions::default());
        assert_eq!(cache.load().unwrap().row_count(), 1);

        file.write_all(b"2\n").unwrap();
        file.flush().unwrap();
        assert_eq!(cache.load().unwrap().row_count(), 1);

        cache.reset();
        assert!(!cache.is_loaded());
        assert_eq!(cache.load().unwrap().row_count(), 2);
        assert_eq!(cache.read_count(), 2);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let mut cache = DatasetCache::new("/no/such/dir/diabetes.csv", LoadOptions::default());

        assert!(cache.load().is_err());
        assert!(cache.load().is_err());
        assert!(!cache.is_loaded());
        assert_eq!(cache.read_count(), 2);
    }

    #[test]
    fn test_set_source_invalidates_only_on_change() {
        let first = write_csv("a\n1\n");
        let second = write_csv("a,b\n1,2\n");
        let mut cache = DatasetCache::new(first.path(), LoadOptions::default());
        cache.load().unwrap();

        cache.set_source(first.path());
        assert!(cache.is_loaded());

        cache.set_source(second.path());
        assert!(!cache.is_loaded());
        assert_eq!(cache.load().unwrap().column_count(), 2);
        assert_eq!(cache.source(), second.path());
    }
}
