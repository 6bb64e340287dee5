//! Open file handles and their metadata

use std::fs;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::time::SystemTime;

use bytes::Bytes;

use crate::record::AssetRecord;

/// Metadata of an opened asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Base name of the logical path
    pub name: String,
    /// Size in bytes
    pub size: u64,
    pub is_dir: bool,
    /// Modification time; embedded assets do not track one
    pub modified: Option<SystemTime>,
}

impl FileInfo {
    pub(crate) fn from_record(record: &AssetRecord) -> Self {
        Self {
            name: record.name().to_string(),
            size: record.size(),
            is_dir: record.is_dir(),
            modified: None,
        }
    }

    pub(crate) fn from_metadata(name: &str, metadata: &fs::Metadata) -> Self {
        Self {
            name: name.to_string(),
            size: metadata.len(),
            is_dir: metadata.is_dir(),
            modified: metadata.modified().ok(),
        }
    }
}

#[derive(Debug)]
enum Source {
    Memory(Cursor<Bytes>),
    Disk(fs::File),
}

/// A readable, seekable handle to one asset
///
/// Embedded handles read from the shared decompressed bytes, local handles
/// from the file on disk. Dropping the handle closes it.
#[derive(Debug)]
pub struct AssetFile {
    source: Source,
    info: FileInfo,
}

impl AssetFile {
    pub(crate) fn memory(data: Bytes, info: FileInfo) -> Self {
        Self {
            source: Source::Memory(Cursor::new(data)),
            info,
        }
    }

    pub(crate) fn disk(file: fs::File, info: FileInfo) -> Self {
        Self {
            source: Source::Disk(file),
            info,
        }
    }

    pub fn info(&self) -> &FileInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn size(&self) -> u64 {
        self.info.size
    }

    pub fn is_dir(&self) -> bool {
        self.info.is_dir
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.info.modified
    }

    /// Read everything from the current position to the end
    pub fn read_all(&mut self) -> io::Result<Bytes> {
        if let Source::Memory(cursor) = &mut self.source {
            let start = usize::try_from(cursor.position())
                .unwrap_or(usize::MAX)
                .min(cursor.get_ref().len());
            let rest = cursor.get_ref().slice(start..);
            cursor.set_position(cursor.get_ref().len() as u64);
            return Ok(rest);
        }

        let capacity = usize::try_from(self.info.size).unwrap_or(0);
        let mut buf = Vec::with_capacity(capacity);
        self.read_to_end(&mut buf)?;
        Ok(Bytes::from(buf))
    }
}

impl Read for AssetFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.source {
            Source::Memory(cursor) => cursor.read(buf),
            Source::Disk(file) => file.read(buf),
        }
    }
}

impl Seek for AssetFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match &mut self.source {
            Source::Memory(cursor) => cursor.seek(pos),
            Source::Disk(file) => file.seek(pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn memory_file(data: &'static [u8]) -> AssetFile {
        AssetFile::memory(
            Bytes::from_static(data),
            FileInfo {
                name: "app.js".to_string(),
                size: data.len() as u64,
                is_dir: false,
                modified: None,
            },
        )
    }

    #[test]
    fn test_memory_read_and_seek() {
        let mut file = memory_file(b"angular.module('boltgui', []);");

        let mut head = [0u8; 7];
        file.read_exact(&mut head).expect("Reading prefix should succeed");
        assert_eq!(&head, b"angular");

        file.seek(SeekFrom::End(-4)).expect("Seeking from end should succeed");
        let tail = file.read_all().expect("Reading tail should succeed");
        assert_eq!(&tail[..], b"[]);");

        file.rewind().expect("Rewind should succeed");
        let all = file.read_all().expect("Reading everything should succeed");
        assert_eq!(all.len() as u64, file.size());
        assert_eq!(file.info().name, "app.js");
        assert_eq!(file.info().modified, None);
        assert!(file.read_all().expect("Reading at EOF should succeed").is_empty());
    }

    #[test]
    fn test_memory_metadata() {
        let file = memory_file(b"x");
        assert_eq!(file.name(), "app.js");
        assert!(!file.is_dir());
        assert_eq!(file.modified(), None);
    }

    #[test]
    fn test_disk_read() {
        let mut tmp = tempfile::NamedTempFile::new().expect("Temp file should be created");
        tmp.write_all(b"<h4>buckets</h4>").expect("Temp write should succeed");

        let handle = fs::File::open(tmp.path()).expect("Temp file should open");
        let metadata = handle.metadata().expect("Metadata should be readable");
        let mut file = AssetFile::disk(handle, FileInfo::from_metadata("index.html", &metadata));

        assert_eq!(file.size(), 16);
        assert!(file.modified().is_some());
        let data = file.read_all().expect("Disk read should succeed");
        assert_eq!(&data[..], b"<h4>buckets</h4>");
    }
}
