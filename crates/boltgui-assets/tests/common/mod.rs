//! Shared helpers for integration tests

#![allow(dead_code)]

use base64::{Engine as _, engine::general_purpose};
use boltgui_assets::{AssetRecord, AssetTable};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Encode bytes the way the compiled-in table stores them
pub fn encode_payload(data: &[u8]) -> String {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data).unwrap();
    general_purpose::STANDARD.encode(encoder.finish().unwrap())
}

/// Leaf record built from raw content
pub fn file_record(path: &'static str, data: &[u8]) -> AssetRecord {
    AssetRecord::file(
        path,
        path.trim_start_matches('/'),
        data.len() as u64,
        encode_payload(data),
    )
}

/// Small table with a root, one directory and the given leaves
pub fn table_with(leaves: Vec<AssetRecord>) -> Arc<AssetTable> {
    let mut records = vec![AssetRecord::dir("/", "/"), AssetRecord::dir("/html", "/html")];
    records.extend(leaves);
    let table = AssetTable::from_records(records);
    table.validate().unwrap();
    Arc::new(table)
}

/// Directory holding the uncompressed copy of the embedded tree
pub fn manifest_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}
