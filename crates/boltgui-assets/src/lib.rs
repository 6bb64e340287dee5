//! Compiled-in front-end assets for boltgui
//!
//! The HTML, CSS and JavaScript of the boltgui web interface are stored in the
//! binary as base64-encoded gzip payloads and exposed through a small
//! read-only file system, so the GUI server ships without external files.
//!
//! # Components
//!
//! - **Registration table**: [`AssetTable`] maps logical paths such as
//!   `/html/index.html` to [`AssetRecord`]s
//! - **Lazy decoding**: each record is decompressed at most once, on first
//!   access, and the result (or the failure) is kept for the process lifetime
//! - **Backends**: [`EmbeddedFs`] serves the table from memory, [`LocalFs`]
//!   reads the same tree from disk during development
//! - **Mounting**: [`Dir`] exposes a sub-tree under a different root
//!
//! # Examples
//!
//! ```
//! use boltgui_assets::FileSystem;
//!
//! // Serve the `html` directory as the web root, from the embedded table.
//! let web_root = boltgui_assets::dir(false, "/html");
//! let index = web_root.open("/index.html")?;
//! assert_eq!(index.name(), "index.html");
//!
//! let css = boltgui_assets::read_string(false, "/html/css/main.css")?;
//! assert!(css.contains("textarea"));
//! # Ok::<(), boltgui_assets::AssetError>(())
//! ```
//!
//! Switching to `true` reads the same paths from the working directory.

pub mod codec;
pub mod config;
pub mod error;
pub mod file;
pub mod fs;
mod generated;
pub mod path;
pub mod record;
pub mod table;

pub use config::AssetConfig;
pub use error::{AssetError, AssetResult, DecodeError};
pub use file::{AssetFile, FileInfo};
pub use fs::{Backend, Dir, EmbeddedFs, FileSystem, LocalFs};
pub use record::AssetRecord;
pub use table::{AssetTable, TableStatsSnapshot};

use bytes::Bytes;
use tracing::error;

/// Configured entry point to the asset tree
///
/// The backend is selected once, when the `Assets` value is built.
#[derive(Debug, Clone)]
pub struct Assets {
    backend: Backend,
}

impl Assets {
    pub fn new(config: &AssetConfig) -> Self {
        Self {
            backend: Backend::from_config(config),
        }
    }

    /// Assets configured from `BOLTGUI_ASSETS_*` environment variables
    pub fn from_env() -> Self {
        Self::new(&AssetConfig::from_env())
    }

    /// Compiled-in assets
    pub fn embedded() -> Self {
        Self {
            backend: Backend::Embedded(EmbeddedFs::new()),
        }
    }

    /// The whole namespace
    pub fn fs(&self) -> Backend {
        self.backend.clone()
    }

    /// The namespace below `prefix`, mounted as root
    pub fn dir(&self, prefix: &str) -> Dir<Backend> {
        Dir::new(self.backend.clone(), prefix)
    }

    /// Full contents of an asset
    pub fn read_bytes(&self, name: &str) -> AssetResult<Bytes> {
        self.backend.read(name)
    }

    /// Full contents of an asset that must exist
    ///
    /// # Panics
    ///
    /// Panics if the asset is missing or cannot be decoded. Only use this for
    /// assets that are part of the build. The process only aborts when built
    /// with `panic = "abort"`; otherwise the panic unwinds the calling thread.
    pub fn must_read_bytes(&self, name: &str) -> Bytes {
        match self.read_bytes(name) {
            Ok(data) => data,
            Err(e) => missing_asset(name, &e),
        }
    }

    /// Full contents of an asset as UTF-8 text
    pub fn read_string(&self, name: &str) -> AssetResult<String> {
        let data = self.read_bytes(name)?;
        String::from_utf8(data.to_vec()).map_err(|source| AssetError::InvalidUtf8 {
            path: path::clean(name),
            source,
        })
    }

    /// Full contents of a text asset that must exist
    ///
    /// # Panics
    ///
    /// Panics if the asset is missing, cannot be decoded or is not UTF-8. See
    /// [`Assets::must_read_bytes`] for how the panic ends the process.
    pub fn must_read_string(&self, name: &str) -> String {
        match self.read_string(name) {
            Ok(text) => text,
            Err(e) => missing_asset(name, &e),
        }
    }
}

impl Default for Assets {
    fn default() -> Self {
        Self::embedded()
    }
}

#[allow(clippy::panic)]
fn missing_asset(name: &str, err: &AssetError) -> ! {
    error!("Required asset {} is unavailable: {}", name, err);
    panic!("required asset {name} is unavailable: {err}");
}

fn assets(use_local: bool) -> Assets {
    Assets::new(&AssetConfig::default().with_local(use_local))
}

/// File system for the whole asset tree
///
/// With `use_local` the working directory is used instead of the compiled-in
/// table.
pub fn fs(use_local: bool) -> Backend {
    assets(use_local).fs()
}

/// File system for the sub-tree below `prefix`
pub fn dir(use_local: bool, prefix: &str) -> Dir<Backend> {
    assets(use_local).dir(prefix)
}

/// Full contents of the asset at `name`
pub fn read_bytes(use_local: bool, name: &str) -> AssetResult<Bytes> {
    assets(use_local).read_bytes(name)
}

/// Same as [`read_bytes`], but the asset is required
///
/// # Panics
///
/// Panics if `name` is not present, aborting the process under
/// `panic = "abort"`.
pub fn must_read_bytes(use_local: bool, name: &str) -> Bytes {
    assets(use_local).must_read_bytes(name)
}

/// Text version of [`read_bytes`]
pub fn read_string(use_local: bool, name: &str) -> AssetResult<String> {
    assets(use_local).read_string(name)
}

/// Text version of [`must_read_bytes`]
///
/// # Panics
///
/// Panics if `name` is not present or not UTF-8, aborting the process under
/// `panic = "abort"`.
pub fn must_read_string(use_local: bool, name: &str) -> String {
    assets(use_local).must_read_string(name)
}
