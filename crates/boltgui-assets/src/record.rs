//! Asset records
//!
//! An [`AssetRecord`] describes one logical path of the compiled-in tree. It
//! is built once and never mutated afterwards, except for its decompressed
//! contents, which move exactly once from "not yet decoded" to either
//! "ready" or "failed":
//!
//! ```text
//!   Uninitialized ──decode ok──▶ Ready(bytes)
//!         │
//!         └──────decode err───▶ Failed(error)
//! ```
//!
//! The transition is guarded by a [`OnceLock`]: concurrent callers block on
//! the single in-flight decode and then all observe its outcome. A failure is
//! kept and replayed to every later caller.

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use tracing::{debug, warn};

use crate::codec::decode_payload;
use crate::error::DecodeError;
use crate::path;

/// Compiled-in descriptor for one logical path
pub struct AssetRecord {
    path: Cow<'static, str>,
    local: Cow<'static, str>,
    compressed: Cow<'static, str>,
    size: u64,
    is_dir: bool,
    contents: OnceLock<Result<Bytes, DecodeError>>,
    decompressions: AtomicU64,
}

impl AssetRecord {
    /// Leaf file record holding a base64 + gzip payload
    pub fn file(
        path: impl Into<Cow<'static, str>>,
        local: impl Into<Cow<'static, str>>,
        size: u64,
        compressed: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            path: normalized(path.into()),
            local: local.into(),
            compressed: compressed.into(),
            size,
            is_dir: false,
            contents: OnceLock::new(),
            decompressions: AtomicU64::new(0),
        }
    }

    /// Directory placeholder record, no payload
    pub fn dir(path: impl Into<Cow<'static, str>>, local: impl Into<Cow<'static, str>>) -> Self {
        Self {
            path: normalized(path.into()),
            local: local.into(),
            compressed: Cow::Borrowed(""),
            size: 0,
            is_dir: true,
            contents: OnceLock::new(),
            decompressions: AtomicU64::new(0),
        }
    }

    /// Logical path this record is registered under
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base name of the logical path
    pub fn name(&self) -> &str {
        path::base_name(&self.path)
    }

    /// On-disk counterpart, relative to the local backend root
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Uncompressed size in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Length of the stored payload text
    pub fn compressed_len(&self) -> usize {
        self.compressed.len()
    }

    /// Whether decoding has already run (successfully or not)
    pub fn is_loaded(&self) -> bool {
        self.contents.get().is_some()
    }

    /// Number of times the payload has been decompressed
    ///
    /// Stays at zero for empty records and never exceeds one otherwise.
    pub fn decompress_count(&self) -> u64 {
        self.decompressions.load(Ordering::Acquire)
    }

    /// Decompressed contents, decoding on first access
    ///
    /// Zero-length records resolve to empty contents without touching the
    /// payload.
    pub fn contents(&self) -> Result<Bytes, DecodeError> {
        self.contents
            .get_or_init(|| {
                if self.size == 0 {
                    return Ok(Bytes::new());
                }

                self.decompressions.fetch_add(1, Ordering::AcqRel);
                let result = decode_payload(&self.compressed, self.size);
                match &result {
                    Ok(data) => debug!(
                        "Decompressed {} ({} payload bytes -> {} bytes)",
                        self.path,
                        self.compressed.len(),
                        data.len()
                    ),
                    Err(e) => warn!("Failed to decompress {}: {}", self.path, e),
                }
                result
            })
            .clone()
    }
}

impl fmt::Debug for AssetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetRecord")
            .field("path", &self.path)
            .field("local", &self.local)
            .field("size", &self.size)
            .field("is_dir", &self.is_dir)
            .field("compressed_len", &self.compressed.len())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

fn normalized(raw: Cow<'static, str>) -> Cow<'static, str> {
    let cleaned = path::clean(&raw);
    if cleaned == raw {
        raw
    } else {
        Cow::Owned(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine as _, engine::general_purpose};
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    fn encode(data: &[u8]) -> String {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(data).expect("Writing to Vec should not fail");
        general_purpose::STANDARD.encode(encoder.finish().expect("gzip finish should not fail"))
    }

    #[test]
    fn test_file_record_metadata() {
        let record = AssetRecord::file("html/app.js", "html/app.js", 3, encode(b"abc"));
        assert_eq!(record.path(), "/html/app.js");
        assert_eq!(record.name(), "app.js");
        assert_eq!(record.local(), "html/app.js");
        assert_eq!(record.size(), 3);
        assert!(!record.is_dir());
        assert!(!record.is_loaded());
    }

    #[test]
    fn test_contents_decoded_once() {
        let record = AssetRecord::file("/a.txt", "a.txt", 5, encode(b"hello"));

        let first = record.contents().expect("Valid record should decode");
        let second = record.contents().expect("Cached record should decode");

        assert_eq!(first, second);
        assert_eq!(&first[..], b"hello");
        assert_eq!(record.decompress_count(), 1);
        assert!(record.is_loaded());
    }

    #[test]
    fn test_empty_records_skip_decoding() {
        let dir = AssetRecord::dir("/html", "/html");
        assert!(dir.is_dir());
        assert!(dir.contents().expect("Directory has no payload").is_empty());
        assert_eq!(dir.decompress_count(), 0);

        let empty = AssetRecord::file("/empty.txt", "empty.txt", 0, "");
        assert!(empty.contents().expect("Empty file has no payload").is_empty());
        assert_eq!(empty.decompress_count(), 0);
    }

    #[test]
    fn test_failure_is_persisted() {
        let record = AssetRecord::file("/broken.css", "broken.css", 10, "@@@@");

        let first = record.contents().expect_err("Corrupt payload should fail");
        let second = record.contents().expect_err("Failure should be replayed");

        assert_eq!(first, second);
        assert!(matches!(first, DecodeError::Base64(_)));
        assert_eq!(record.decompress_count(), 1);
    }

    #[test]
    fn test_root_record_name() {
        let root = AssetRecord::dir("/", "/");
        assert_eq!(root.path(), "/");
        assert_eq!(root.name(), "/");
    }
}
