//! Read-only file system backends
//!
//! [`FileSystem`] is the whole contract offered to a hosting server or GUI:
//! open a logical path, get back a seekable [`AssetFile`] with metadata.
//!
//! - [`LocalFs`] - reads from a directory on disk, for development
//! - [`EmbeddedFs`] - serves the compiled-in table from memory
//! - [`Dir`] - mounts a sub-tree of another backend under a prefix
//! - [`Backend`] - local or embedded, chosen once from configuration

mod dir;
mod embedded;
mod local;

pub use dir::Dir;
pub use embedded::EmbeddedFs;
pub use local::LocalFs;

use std::io::Read;
use std::sync::Arc;

use bytes::Bytes;

use crate::config::AssetConfig;
use crate::error::{AssetError, AssetResult};
use crate::file::AssetFile;
use crate::table::AssetTable;

/// A read-only, path-addressed source of assets
pub trait FileSystem: Send + Sync {
    /// Open the asset at a logical path
    fn open(&self, name: &str) -> AssetResult<AssetFile>;

    /// Read the full contents of the asset at a logical path
    fn read(&self, name: &str) -> AssetResult<Bytes> {
        let mut file = self.open(name)?;
        let capacity = usize::try_from(file.size()).unwrap_or(0);
        let mut buf = Vec::with_capacity(capacity);
        file.read_to_end(&mut buf).map_err(|source| AssetError::Io {
            path: name.to_string(),
            source,
        })?;
        Ok(Bytes::from(buf))
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn open(&self, name: &str) -> AssetResult<AssetFile> {
        (**self).open(name)
    }

    fn read(&self, name: &str) -> AssetResult<Bytes> {
        (**self).read(name)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for Arc<F> {
    fn open(&self, name: &str) -> AssetResult<AssetFile> {
        (**self).open(name)
    }

    fn read(&self, name: &str) -> AssetResult<Bytes> {
        (**self).read(name)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for Box<F> {
    fn open(&self, name: &str) -> AssetResult<AssetFile> {
        (**self).open(name)
    }

    fn read(&self, name: &str) -> AssetResult<Bytes> {
        (**self).read(name)
    }
}

/// Local or embedded backend
#[derive(Debug, Clone)]
pub enum Backend {
    Local(LocalFs),
    Embedded(EmbeddedFs),
}

impl Backend {
    /// Select the backend described by a configuration
    pub fn from_config(config: &AssetConfig) -> Self {
        if !config.use_local {
            return Self::Embedded(EmbeddedFs::new());
        }

        let local = if config.restrict_local_to_table {
            LocalFs::restricted(&config.local_root, AssetTable::embedded())
        } else {
            LocalFs::new(&config.local_root)
        };
        Self::Local(local)
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl FileSystem for Backend {
    fn open(&self, name: &str) -> AssetResult<AssetFile> {
        match self {
            Self::Local(fs) => fs.open(name),
            Self::Embedded(fs) => fs.open(name),
        }
    }

    fn read(&self, name: &str) -> AssetResult<Bytes> {
        match self {
            Self::Local(fs) => fs.read(name),
            Self::Embedded(fs) => fs.read(name),
        }
    }
}
