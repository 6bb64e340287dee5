//! Asset source configuration
//!
//! Decides whether assets come from the compiled-in table or from a directory
//! on disk. The host application usually derives this from its own
//! development-mode switch; [`AssetConfig::from_env`] covers the common case.
//!
//! # Environment Variables
//!
//! - `BOLTGUI_ASSETS_LOCAL` - `1`, `true`, `yes` or `on` serves from disk
//! - `BOLTGUI_ASSETS_ROOT` - directory the local backend reads from

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable selecting the local backend
pub const ENV_LOCAL: &str = "BOLTGUI_ASSETS_LOCAL";

/// Environment variable overriding the local root directory
pub const ENV_ROOT: &str = "BOLTGUI_ASSETS_ROOT";

/// Backend selection and local backend settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Serve from `local_root` instead of the compiled-in table
    pub use_local: bool,
    /// Directory the local backend resolves paths against
    pub local_root: PathBuf,
    /// Local backend only serves paths present in the compiled-in table
    pub restrict_local_to_table: bool,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            use_local: false,
            local_root: PathBuf::from("."),
            restrict_local_to_table: false,
        }
    }
}

impl AssetConfig {
    /// Create a new configuration serving embedded assets
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `BOLTGUI_ASSETS_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_LOCAL) {
            config.use_local = parse_flag(&value);
        }
        if let Some(root) = lookup(ENV_ROOT)
            && !root.trim().is_empty()
        {
            config.local_root = PathBuf::from(root);
        }
        config
    }

    /// Select the local (`true`) or embedded (`false`) backend
    pub fn with_local(mut self, use_local: bool) -> Self {
        self.use_local = use_local;
        self
    }

    /// Set the local root directory
    pub fn with_local_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.local_root = root.into();
        self
    }

    /// Limit the local backend to registered paths
    pub fn with_table_restriction(mut self, restrict: bool) -> Self {
        self.restrict_local_to_table = restrict;
        self
    }

    pub fn local_root(&self) -> &Path {
        &self.local_root
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.local_root.as_os_str().is_empty() {
            return Err("local_root must not be empty".to_string());
        }

        if self.use_local && !self.local_root.is_dir() {
            return Err(format!(
                "local_root {} is not a directory",
                self.local_root.display()
            ));
        }

        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
