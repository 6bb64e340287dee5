//! Embedded payload decoding
//!
//! A payload is base64 text (line breaks allowed) whose decoded bytes form a
//! single gzip member. Decompressing it must yield exactly the size recorded
//! for the asset.

use std::io::Read;

use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use flate2::read::GzDecoder;

use crate::error::DecodeError;

/// Largest uncompressed size accepted for a single asset (256 MB)
///
/// Bounds the allocation made up front from a record's declared size.
pub const MAX_ASSET_SIZE: u64 = 256 * 1024 * 1024;

/// Decode a base64 + gzip payload into the original asset bytes
///
/// Output is capped at `expected_size + 1` bytes so an oversized stream is
/// reported as a size mismatch without inflating it completely.
pub fn decode_payload(text: &str, expected_size: u64) -> Result<Bytes, DecodeError> {
    let compact: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let compressed = general_purpose::STANDARD
        .decode(&compact)
        .map_err(|e| DecodeError::Base64(e.to_string()))?;

    let capacity = usize::try_from(expected_size.min(MAX_ASSET_SIZE)).unwrap_or(0);
    let mut decompressed = Vec::with_capacity(capacity);
    GzDecoder::new(compressed.as_slice())
        .take(expected_size.saturating_add(1))
        .read_to_end(&mut decompressed)
        .map_err(|e| DecodeError::Gzip(e.to_string()))?;

    let actual = decompressed.len() as u64;
    if actual != expected_size {
        return Err(DecodeError::SizeMismatch {
            expected: expected_size,
            actual,
        });
    }

    Ok(Bytes::from(decompressed))
}
