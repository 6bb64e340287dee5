//! Disk-backed backend for development
//!
//! Every open goes straight to the file system; nothing is cached, so edits
//! to the front-end show up on the next request.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::trace;

use super::FileSystem;
use crate::error::{AssetError, AssetResult};
use crate::file::{AssetFile, FileInfo};
use crate::path;
use crate::table::AssetTable;

/// Opens logical paths relative to a root directory
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
    table: Option<Arc<AssetTable>>,
}

impl LocalFs {
    /// Resolve any logical path under `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            table: None,
        }
    }

    /// Only serve paths registered in `table`, using each record's on-disk
    /// counterpart under `root`
    pub fn restricted(root: impl AsRef<Path>, table: Arc<AssetTable>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            table: Some(table),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Disk path a logical name resolves to
    pub fn resolve(&self, name: &str) -> AssetResult<PathBuf> {
        let logical = path::clean(name);
        let relative = match &self.table {
            Some(table) => path::relative(table.lookup(&logical)?.local()).to_string(),
            None => path::relative(&logical).to_string(),
        };
        Ok(self.root.join(relative))
    }
}

impl FileSystem for LocalFs {
    fn open(&self, name: &str) -> AssetResult<AssetFile> {
        let logical = path::clean(name);
        let disk_path = self.resolve(&logical)?;
        trace!("Opening {} from {}", logical, disk_path.display());

        let io_error = |source: std::io::Error| AssetError::Io {
            path: logical.clone(),
            source,
        };
        let file = fs::File::open(&disk_path).map_err(io_error)?;
        let metadata = file.metadata().map_err(io_error)?;

        Ok(AssetFile::disk(
            file,
            FileInfo::from_metadata(path::base_name(&logical), &metadata),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AssetRecord;
    use std::io::Read;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().expect("Temp dir should be created");
        fs::create_dir_all(dir.path().join("html/css")).expect("Fixture dirs should be created");
        fs::write(dir.path().join("html/css/main.css"), "h4 { display: inline; }")
            .expect("Fixture file should be written");
        dir
    }

    #[test]
    fn test_open_local_file() {
        let dir = fixture();
        let local = LocalFs::new(dir.path());

        let mut file = local.open("/html/css/main.css").expect("Fixture should open");
        assert_eq!(file.name(), "main.css");
        assert_eq!(file.size(), 23);
        assert!(!file.is_dir());

        let mut content = String::new();
        file.read_to_string(&mut content).expect("Fixture should be readable");
        assert_eq!(content, "h4 { display: inline; }");
    }

    #[test]
    fn test_no_caching() {
        let dir = fixture();
        let local = LocalFs::new(dir.path());
        let before = local.read("html/css/main.css").expect("Fixture should be readable");

        fs::write(dir.path().join("html/css/main.css"), "h4 {}").expect("Rewrite should succeed");
        let after = local.read("html/css/main.css").expect("Fixture should be readable");

        assert_ne!(before, after);
        assert_eq!(&after[..], b"h4 {}");
    }

    #[test]
    fn test_open_missing_local_file() {
        let dir = fixture();
        let local = LocalFs::new(dir.path());
        let err = local.open("/html/nope.js").expect_err("Missing file should fail");
        assert!(matches!(err, AssetError::Io { .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_cannot_escape_root() {
        let dir = fixture();
        let local = LocalFs::new(dir.path().join("html"));
        let resolved = local
            .resolve("/../../etc/passwd")
            .expect("Unrestricted resolve should succeed");
        assert_eq!(resolved, dir.path().join("html/etc/passwd"));
    }

    #[test]
    fn test_open_directory() {
        let dir = fixture();
        let local = LocalFs::new(dir.path());
        let file = local.open("/html/css").expect("Directory should open");
        assert!(file.is_dir());
        assert_eq!(file.name(), "css");
    }

    #[test]
    fn test_restricted_to_table() {
        let dir = fixture();
        let table = AssetTable::from_records([
            AssetRecord::dir("/", "/"),
            AssetRecord::dir("/style", "/html/css"),
            AssetRecord::file("/style/main.css", "html/css/main.css", 0, ""),
        ]);
        let local = LocalFs::restricted(dir.path(), Arc::new(table));

        let data = local.read("/style/main.css").expect("Registered file should be served");
        assert_eq!(&data[..], b"h4 { display: inline; }");

        let err = local
            .open("/html/css/main.css")
            .expect_err("Unregistered path should be refused");
        assert!(matches!(err, AssetError::NotFound { .. }));
    }
}
