#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the compiled-in front-end tree

mod common;

use boltgui_assets::{AssetError, AssetTable, Dir, EmbeddedFs, FileSystem};
use pretty_assertions::assert_eq;
use std::io::{Read, Seek, SeekFrom};

const MAIN_CSS: &str = include_str!("../html/css/main.css");

#[test]
fn every_leaf_decodes_to_recorded_size() {
    let table = AssetTable::embedded();
    let mut leaves = 0;
    for record in table.records().filter(|r| !r.is_dir()) {
        let data = record
            .contents()
            .unwrap_or_else(|e| panic!("{} failed to decode: {e}", record.path()));
        assert_eq!(data.len() as u64, record.size(), "{}", record.path());
        leaves += 1;
    }
    assert_eq!(leaves, 4);
}

#[test]
fn main_css_matches_source() {
    let data = boltgui_assets::read_bytes(false, "/html/css/main.css").unwrap();
    assert_eq!(data.len(), 183);
    assert!(MAIN_CSS.starts_with(".cross:before"));
    assert_eq!(std::str::from_utf8(&data).unwrap(), MAIN_CSS);
}

#[test]
fn repeated_reads_are_identical() {
    let fs = EmbeddedFs::new();
    let first = fs.read("/html/js/ui-bootstrap-tpls-0.13.2.min.js").unwrap();
    let second = fs.read("/html/js/ui-bootstrap-tpls-0.13.2.min.js").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 82316);

    let table = AssetTable::embedded();
    let record = table
        .get("/html/js/ui-bootstrap-tpls-0.13.2.min.js")
        .unwrap();
    assert!(record.is_loaded());
    assert_eq!(record.decompress_count(), 1);
}

#[test]
fn open_handle_is_seekable() {
    let mut file = boltgui_assets::fs(false).open("/html/js/boltguiapp.js").unwrap();
    assert_eq!(file.size(), 4612);
    assert_eq!(file.name(), "boltguiapp.js");

    let mut prefix = [0u8; 14];
    file.read_exact(&mut prefix).unwrap();
    assert_eq!(&prefix, b"angular.module");

    let end = file.seek(SeekFrom::End(0)).unwrap();
    assert_eq!(end, 4612);
    file.rewind().unwrap();
    let mut all = Vec::new();
    file.read_to_end(&mut all).unwrap();
    assert_eq!(all.len(), 4612);
}

#[test]
fn directories_report_no_size() {
    let fs = boltgui_assets::fs(false);
    for dir in ["/", "/html", "/html/css", "/html/js"] {
        let file = fs.open(dir).unwrap();
        assert!(file.is_dir(), "{dir}");
        assert_eq!(file.size(), 0, "{dir}");
        assert_eq!(file.modified(), None);
    }
}

#[test]
fn unknown_path_is_not_found() {
    let err = boltgui_assets::fs(false).open("/html/js/jquery.js").unwrap_err();
    assert!(matches!(err, AssetError::NotFound { .. }));

    let err = boltgui_assets::read_string(false, "/favicon.ico").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn dir_wrapper_resolves_same_entry() {
    let mounted = boltgui_assets::dir(false, "/html");
    let via_mount = mounted.read("/js/boltguiapp.js").unwrap();
    let direct = boltgui_assets::read_bytes(false, "/html/js/boltguiapp.js").unwrap();
    assert_eq!(via_mount, direct);

    let nested = Dir::new(mounted, "/css");
    assert_eq!(nested.read("/main.css").unwrap().len(), 183);
}

#[test]
fn string_accessors_match_bytes() {
    let text = boltgui_assets::must_read_string(false, "/html/index.html");
    let bytes = boltgui_assets::must_read_bytes(false, "/html/index.html");
    assert_eq!(text.as_bytes(), &bytes[..]);
    assert!(text.starts_with("<!doctype html>"));
}

#[test]
fn fallible_accessor_keeps_running() {
    let result = std::panic::catch_unwind(|| boltgui_assets::read_bytes(false, "/nope"));
    assert!(matches!(result, Ok(Err(_))));
}

#[test]
fn must_accessor_panics_on_missing_asset() {
    let result = std::panic::catch_unwind(|| boltgui_assets::must_read_bytes(false, "/nope"));
    assert!(result.is_err());

    let result = std::panic::catch_unwind(|| boltgui_assets::must_read_string(false, "/nope"));
    assert!(result.is_err());
}

#[test]
fn custom_table_round_trip() {
    let table = common::table_with(vec![common::file_record(
        "/html/app.css",
        b"body { color: #333; }",
    )]);
    let fs = EmbeddedFs::with_table(table);
    assert_eq!(&fs.read("/html/app.css").unwrap()[..], b"body { color: #333; }");
}
