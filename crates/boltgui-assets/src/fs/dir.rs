//! Prefix-mounted view of another backend

use bytes::Bytes;

use super::FileSystem;
use crate::error::AssetResult;
use crate::file::AssetFile;
use crate::path;

/// Exposes the sub-tree under `prefix` as the namespace root
///
/// Opening `/js/boltguiapp.js` through `Dir::new(fs, "/html")` opens
/// `/html/js/boltguiapp.js` on `fs`. Names cannot climb out of the prefix:
/// `/../index.html` under `/html/css` is `/html/css/index.html`.
#[derive(Debug, Clone)]
pub struct Dir<F> {
    fs: F,
    prefix: String,
}

impl<F: FileSystem> Dir<F> {
    pub fn new(fs: F, prefix: impl Into<String>) -> Self {
        Self {
            fs,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The wrapped backend
    pub fn inner(&self) -> &F {
        &self.fs
    }

    /// Logical path on the wrapped backend for `name`
    pub fn full_path(&self, name: &str) -> String {
        path::join(&self.prefix, name)
    }
}

impl<F: FileSystem> FileSystem for Dir<F> {
    fn open(&self, name: &str) -> AssetResult<AssetFile> {
        self.fs.open(&self.full_path(name))
    }

    fn read(&self, name: &str) -> AssetResult<Bytes> {
        self.fs.read(&self.full_path(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::EmbeddedFs;

    #[test]
    fn test_prefix_composition() {
        let root = EmbeddedFs::new();
        let html = Dir::new(root.clone(), "/html");

        let via_dir = html
            .read("/js/boltguiapp.js")
            .expect("Mounted path should resolve");
        let direct = root
            .read("/html/js/boltguiapp.js")
            .expect("Full path should resolve");
        assert_eq!(via_dir, direct);

        let file = html.open("/index.html").expect("Mounted index should open");
        assert_eq!(file.name(), "index.html");
        assert_eq!(file.size(), 3329);
    }

    #[test]
    fn test_mount_root_is_prefix_directory() {
        let html = Dir::new(EmbeddedFs::new(), "/html");
        let file = html.open("/").expect("Mount root should open");
        assert!(file.is_dir());
        assert_eq!(file.name(), "html");
    }

    #[test]
    fn test_parent_segments_stay_in_mount() {
        let css = Dir::new(EmbeddedFs::new(), "/html/css");
        assert_eq!(css.full_path("/../index.html"), "/html/css/index.html");

        let err = css.read("/../index.html").expect_err("Index is outside the mount");
        assert!(err.is_not_found());

        let data = css
            .read("/../../main.css")
            .expect("Parent segments resolve inside the mount");
        assert_eq!(data.len(), 183);
    }

    #[test]
    fn test_nested_dirs() {
        let js = Dir::new(Dir::new(EmbeddedFs::new(), "/html"), "/js");
        assert_eq!(js.full_path("/boltguiapp.js"), "/js/boltguiapp.js");
        assert_eq!(js.inner().full_path("/js/boltguiapp.js"), "/html/js/boltguiapp.js");
        let data = js.read("/boltguiapp.js").expect("Nested mount should resolve");
        assert_eq!(data.len(), 4612);
    }

    #[test]
    fn test_missing_under_prefix() {
        let css = Dir::new(EmbeddedFs::new(), "/html/css");
        let err = css.open("/index.html").expect_err("Index is not under css");
        assert!(err.is_not_found());
        assert_eq!(err.path(), Some("/html/css/index.html"));
    }
}
