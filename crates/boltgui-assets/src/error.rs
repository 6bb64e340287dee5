//! Error types for asset lookup and decoding

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Result type for asset operations
pub type AssetResult<T> = Result<T, AssetError>;

/// Errors that can occur while resolving or reading an asset
#[derive(Debug, Error)]
pub enum AssetError {
    /// Logical path is not registered in the asset table
    #[error("Asset not found: {path}")]
    NotFound {
        /// Cleaned logical path that was requested
        path: String,
    },

    /// Embedded payload could not be turned back into the original bytes
    #[error("Failed to decode asset {path}: {source}")]
    Decode {
        /// Logical path of the broken record
        path: String,
        /// What went wrong while decoding
        #[source]
        source: DecodeError,
    },

    /// I/O error from the local disk backend, carried unchanged
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Logical path that was being opened or read
        path: String,
        /// Underlying file system error
        #[source]
        source: io::Error,
    },

    /// Asset content was requested as text but is not UTF-8
    #[error("Asset {path} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        /// Logical path of the asset
        path: String,
        /// Conversion error
        #[source]
        source: FromUtf8Error,
    },

    /// Registration table violates one of its structural rules
    #[error("Invalid asset table: {0}")]
    InvalidTable(String),
}

impl AssetError {
    /// True when the asset does not exist, regardless of backend
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Logical path the error refers to, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::NotFound { path }
            | Self::Decode { path, .. }
            | Self::Io { path, .. }
            | Self::InvalidUtf8 { path, .. } => Some(path),
            Self::InvalidTable(_) => None,
        }
    }
}

impl From<AssetError> for io::Error {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::Io { source, .. } => source,
            AssetError::NotFound { .. } => Self::new(io::ErrorKind::NotFound, err),
            AssetError::Decode { .. } | AssetError::InvalidUtf8 { .. } => {
                Self::new(io::ErrorKind::InvalidData, err)
            }
            AssetError::InvalidTable(_) => Self::other(err),
        }
    }
}

/// Errors produced while decoding an embedded payload
///
/// Cloneable so that a failed decompression can be stored on its record and
/// handed to every later caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Payload text is not valid base64
    #[error("invalid base64 payload: {0}")]
    Base64(String),

    /// Decoded bytes are not a valid gzip stream
    #[error("gzip decompression failed: {0}")]
    Gzip(String),

    /// Decompressed length differs from the recorded size
    #[error("size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Size recorded in the table
        expected: u64,
        /// Bytes actually produced (capped at `expected + 1`)
        actual: u64,
    },
}
