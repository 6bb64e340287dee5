#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Concurrent first access to embedded records

mod common;

use boltgui_assets::{AssetError, AssetRecord, DecodeError, EmbeddedFs, FileSystem};
use std::sync::Barrier;
use std::thread;

const THREADS: usize = 16;

#[test]
fn concurrent_opens_decompress_once() {
    let content: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
    let table = common::table_with(vec![common::file_record("/html/big.js", &content)]);
    let fs = EmbeddedFs::with_table(table);
    let barrier = Barrier::new(THREADS);

    let results: Vec<Vec<u8>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    let mut file = fs.open("/html/big.js").unwrap();
                    let mut buf = Vec::new();
                    std::io::Read::read_to_end(&mut file, &mut buf).unwrap();
                    buf
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.len(), THREADS);
    for data in &results {
        assert_eq!(data, &content);
    }

    let record = fs.table().get("/html/big.js").unwrap();
    assert_eq!(record.decompress_count(), 1);
}

#[test]
fn concurrent_failure_is_shared() {
    let broken = AssetRecord::file("/html/broken.js", "html/broken.js", 100, "H4sI####");
    let table = common::table_with(vec![broken]);
    let fs = EmbeddedFs::with_table(table);
    let barrier = Barrier::new(THREADS);

    let errors: Vec<AssetError> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    fs.read("/html/broken.js").unwrap_err()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = match &errors[0] {
        AssetError::Decode { source, .. } => source.clone(),
        other => panic!("expected decode error, got {other}"),
    };
    assert!(matches!(first, DecodeError::Base64(_)));
    for err in &errors {
        match err {
            AssetError::Decode { source, .. } => assert_eq!(source, &first),
            other => panic!("expected decode error, got {other}"),
        }
    }

    // Later callers see the same failure without another attempt.
    let late = fs.open("/html/broken.js").unwrap_err();
    assert_eq!(late.to_string(), errors[0].to_string());
    assert_eq!(fs.table().get("/html/broken.js").unwrap().decompress_count(), 1);
}

#[test]
fn concurrent_reads_of_embedded_tree() {
    let fs = EmbeddedFs::new();
    let paths = [
        "/html/css/main.css",
        "/html/index.html",
        "/html/js/boltguiapp.js",
        "/html/js/ui-bootstrap-tpls-0.13.2.min.js",
    ];

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for path in paths {
                    let record = fs.table().get(path).unwrap();
                    let data = fs.read(path).unwrap();
                    assert_eq!(data.len() as u64, record.size());
                }
            });
        }
    });

    for path in paths {
        assert_eq!(fs.table().get(path).unwrap().decompress_count(), 1);
    }
}
