//! Registration table
//!
//! Maps cleaned logical paths to [`AssetRecord`]s. The compiled-in table is
//! built on first use and shared for the rest of the process; tests and
//! embedders can also assemble their own tables from records.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

use bytes::Bytes;
use tracing::trace;

use crate::codec::MAX_ASSET_SIZE;
use crate::error::{AssetError, AssetResult};
use crate::generated;
use crate::path;
use crate::record::AssetRecord;

static EMBEDDED: LazyLock<Arc<AssetTable>> =
    LazyLock::new(|| Arc::new(AssetTable::from_records(generated::records())));

/// Lookup counters for a table
#[derive(Debug, Default)]
pub struct TableStats {
    lookups: AtomicU64,
    misses: AtomicU64,
    decode_failures: AtomicU64,
}

impl TableStats {
    /// Create a snapshot of the current counters
    pub fn snapshot(&self) -> TableStatsSnapshot {
        TableStatsSnapshot {
            lookups: self.lookups.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            decode_failures: self.decode_failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`TableStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStatsSnapshot {
    /// Total lookups, hits and misses
    pub lookups: u64,
    /// Lookups for unregistered paths
    pub misses: u64,
    /// Content requests answered with a decode error
    pub decode_failures: u64,
}

/// Mapping from logical path to asset record
#[derive(Debug, Default)]
pub struct AssetTable {
    records: HashMap<String, AssetRecord>,
    stats: TableStats,
}

impl AssetTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from records, later duplicates replacing earlier ones
    pub fn from_records(records: impl IntoIterator<Item = AssetRecord>) -> Self {
        let mut table = Self::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    /// The compiled-in front-end table
    pub fn embedded() -> Arc<Self> {
        Arc::clone(&EMBEDDED)
    }

    /// Register a record, returning the one it replaced
    pub fn insert(&mut self, record: AssetRecord) -> Option<AssetRecord> {
        self.records.insert(record.path().to_string(), record)
    }

    /// Find a record by logical path
    pub fn get(&self, name: &str) -> Option<&AssetRecord> {
        self.records.get(&path::clean(name))
    }

    /// Find a record by logical path, failing with `NotFound`
    pub fn lookup(&self, name: &str) -> AssetResult<&AssetRecord> {
        let key = path::clean(name);
        self.stats.lookups.fetch_add(1, Ordering::Relaxed);
        trace!("Looking up embedded asset {}", key);

        self.records.get(&key).ok_or_else(|| {
            self.stats.misses.fetch_add(1, Ordering::Relaxed);
            AssetError::NotFound { path: key }
        })
    }

    /// Decompressed contents of the record at `name`
    pub fn contents(&self, name: &str) -> AssetResult<Bytes> {
        self.resolve(name).map(|(_, data)| data)
    }

    /// Record at `name` together with its decompressed contents
    pub fn resolve(&self, name: &str) -> AssetResult<(&AssetRecord, Bytes)> {
        let record = self.lookup(name)?;
        let data = record.contents().map_err(|source| {
            self.stats.decode_failures.fetch_add(1, Ordering::Relaxed);
            AssetError::Decode {
                path: record.path().to_string(),
                source,
            }
        })?;
        Ok((record, data))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered logical paths, sorted
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.records.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Iterate over all records in no particular order
    pub fn records(&self) -> impl Iterator<Item = &AssetRecord> + '_ {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lookup counters
    pub fn stats(&self) -> TableStatsSnapshot {
        self.stats.snapshot()
    }

    /// Check the structural rules of the table
    ///
    /// The root must be registered, every other path's parent must be a
    /// registered directory, directories carry no payload and sizes stay
    /// within [`MAX_ASSET_SIZE`].
    pub fn validate(&self) -> AssetResult<()> {
        if self.records.is_empty() {
            return Ok(());
        }

        match self.records.get("/") {
            Some(root) if root.is_dir() => {}
            Some(_) => return Err(AssetError::InvalidTable("root must be a directory".into())),
            None => return Err(AssetError::InvalidTable("root directory missing".into())),
        }

        for (key, record) in &self.records {
            if let Some(parent) = path::parent(key) {
                match self.records.get(parent) {
                    Some(entry) if entry.is_dir() => {}
                    Some(_) => {
                        return Err(AssetError::InvalidTable(format!(
                            "parent of {key} is not a directory: {parent}"
                        )));
                    }
                    None => {
                        return Err(AssetError::InvalidTable(format!(
                            "parent of {key} is not registered: {parent}"
                        )));
                    }
                }
            }

            if record.is_dir() && (record.size() != 0 || record.compressed_len() != 0) {
                return Err(AssetError::InvalidTable(format!(
                    "directory {key} carries a payload"
                )));
            }

            if record.size() > MAX_ASSET_SIZE {
                return Err(AssetError::InvalidTable(format!(
                    "{key} declares {} bytes, limit is {MAX_ASSET_SIZE}",
                    record.size()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_table() -> AssetTable {
        AssetTable::from_records([
            AssetRecord::dir("/", "/"),
            AssetRecord::dir("/html", "/html"),
            AssetRecord::file("/html/broken.js", "html/broken.js", 8, "!!!!"),
        ])
    }

    #[test]
    fn test_embedded_table_layout() {
        let table = AssetTable::embedded();
        assert_eq!(
            table.paths(),
            vec![
                "/",
                "/html",
                "/html/css",
                "/html/css/main.css",
                "/html/index.html",
                "/html/js",
                "/html/js/boltguiapp.js",
                "/html/js/ui-bootstrap-tpls-0.13.2.min.js",
            ]
        );
        table.validate().expect("Embedded table should be well formed");
    }

    #[test]
    fn test_embedded_table_is_shared() {
        assert!(Arc::ptr_eq(&AssetTable::embedded(), &AssetTable::embedded()));
    }

    #[test]
    fn test_lookup_cleans_names() {
        let table = sample_table();
        assert!(table.contains("html"));
        assert!(table.contains("/html/"));
        assert!(table.contains("/html/../html/broken.js"));
        assert!(table.get("/missing").is_none());
    }

    #[test]
    fn test_lookup_not_found() {
        let table = sample_table();
        let err = table.lookup("/html/nope.css").expect_err("Unknown path should fail");
        assert!(matches!(err, AssetError::NotFound { ref path } if path == "/html/nope.css"));

        let stats = table.stats();
        assert_eq!(stats.lookups, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_contents_decode_failure() {
        let table = sample_table();
        let err = table
            .contents("/html/broken.js")
            .expect_err("Corrupt payload should fail");
        assert!(matches!(err, AssetError::Decode { .. }));
        let again = table
            .contents("/html/broken.js")
            .expect_err("Failure should be replayed");
        assert_eq!(err.to_string(), again.to_string());
        assert_eq!(table.stats().decode_failures, 2);
    }

    #[test]
    fn test_validate_missing_parent() {
        let table = AssetTable::from_records([
            AssetRecord::dir("/", "/"),
            AssetRecord::file("/html/index.html", "html/index.html", 0, ""),
        ]);
        let err = table.validate().expect_err("Orphaned file should be rejected");
        assert!(err.to_string().contains("parent of /html/index.html"));
    }

    #[test]
    fn test_validate_missing_root() {
        let table = AssetTable::from_records([AssetRecord::dir("/html", "/html")]);
        assert!(matches!(table.validate(), Err(AssetError::InvalidTable(_))));
    }

    #[test]
    fn test_validate_file_as_parent() {
        let table = AssetTable::from_records([
            AssetRecord::dir("/", "/"),
            AssetRecord::file("/a", "a", 0, ""),
            AssetRecord::file("/a/b", "a/b", 0, ""),
        ]);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = AssetTable::new();
        assert!(table.is_empty());
        assert!(table.insert(AssetRecord::dir("/", "/")).is_none());
        let replaced = table.insert(AssetRecord::dir("/", "."));
        assert_eq!(replaced.map(|r| r.local().to_string()), Some("/".to_string()));
        assert_eq!(table.len(), 1);
    }
}
