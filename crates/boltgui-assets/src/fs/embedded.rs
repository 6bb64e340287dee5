//! Memory-resident backend over a registration table

use std::sync::Arc;

use bytes::Bytes;
use tracing::trace;

use super::FileSystem;
use crate::error::AssetResult;
use crate::file::{AssetFile, FileInfo};
use crate::table::AssetTable;

/// Serves assets from an [`AssetTable`], decompressing each one on first use
#[derive(Debug, Clone)]
pub struct EmbeddedFs {
    table: Arc<AssetTable>,
}

impl EmbeddedFs {
    /// Backend over the compiled-in table
    pub fn new() -> Self {
        Self::with_table(AssetTable::embedded())
    }

    /// Backend over a caller-supplied table
    pub fn with_table(table: Arc<AssetTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &AssetTable {
        &self.table
    }
}

impl Default for EmbeddedFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for EmbeddedFs {
    fn open(&self, name: &str) -> AssetResult<AssetFile> {
        let (record, data) = self.table.resolve(name)?;
        trace!("Opened embedded asset {} ({} bytes)", record.path(), data.len());
        Ok(AssetFile::memory(data, FileInfo::from_record(record)))
    }

    fn read(&self, name: &str) -> AssetResult<Bytes> {
        self.table.contents(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;
    use crate::record::AssetRecord;
    use std::io::{Read, Seek};

    #[test]
    fn test_open_embedded_file() {
        let fs = EmbeddedFs::new();
        let mut file = fs
            .open("/html/index.html")
            .expect("Embedded index should open");

        assert_eq!(file.name(), "index.html");
        assert_eq!(file.size(), 3329);
        assert!(!file.is_dir());
        assert_eq!(file.modified(), None);

        let mut first = Vec::new();
        file.read_to_end(&mut first).expect("Embedded read should succeed");
        file.rewind().expect("Rewind should succeed");
        let mut second = Vec::new();
        file.read_to_end(&mut second).expect("Second read should succeed");

        assert_eq!(first.len(), 3329);
        assert_eq!(first, second);
    }

    #[test]
    fn test_open_directory() {
        let fs = EmbeddedFs::new();
        let file = fs.open("/html/js/").expect("Directory entry should open");
        assert!(file.is_dir());
        assert_eq!(file.name(), "js");
        assert_eq!(file.size(), 0);
    }

    #[test]
    fn test_open_missing() {
        let fs = EmbeddedFs::new();
        let err = fs.open("/html/missing.html").expect_err("Missing file should fail");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_open_corrupt_payload() {
        let table = AssetTable::from_records([
            AssetRecord::dir("/", "/"),
            AssetRecord::file("/bad.css", "bad.css", 12, "H4sIAAAAAAAA"),
        ]);
        let fs = EmbeddedFs::with_table(Arc::new(table));

        let err = fs.open("/bad.css").expect_err("Corrupt payload should fail");
        assert!(matches!(err, AssetError::Decode { .. }));
        assert!(fs.read("/bad.css").is_err());
        assert_eq!(fs.table().stats().decode_failures, 2);
    }
}
