//! Tests for the snapshot walker

#![allow(clippy::expect_used)]

use std::fs;

use tempfile::TempDir;

use crate::scanner::{DiscoveredSnapshot, Scanner};

#[test]
fn test_scanner_finds_snapshots_recursively() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let nested = temp_dir.path().join("module").join("build");
    fs::create_dir_all(&nested).expect("Failed to create dirs");

    fs::write(temp_dir.path().join("app.snapshot.json"), "{}").expect("Failed to write file");
    fs::write(nested.join("lib.snapshot.json"), "{}").expect("Failed to write file");
    fs::write(nested.join("notes.json"), "{}").expect("Failed to write file");
    fs::write(temp_dir.path().join("Foo.java"), "class Foo {}").expect("Failed to write file");

    let found = Scanner::new(temp_dir.path()).scan();

    assert_eq!(found.len(), 2);
    assert!(found
        .iter()
        .all(|s| s.path.to_string_lossy().ends_with(".snapshot.json")));
}

#[test]
fn test_scanner_results_are_sorted() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for name in ["c", "a", "b"] {
        fs::write(temp_dir.path().join(format!("{name}.snapshot.json")), "{}")
            .expect("Failed to write file");
    }

    let found = Scanner::new(temp_dir.path()).scan();

    let names: Vec<String> = found
        .iter()
        .filter_map(|s| s.path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    assert_eq!(
        names,
        vec!["a.snapshot.json", "b.snapshot.json", "c.snapshot.json"]
    );
}

#[test]
fn test_scanner_respects_gitignore() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    // The ignore crate only honours .gitignore inside a git repository
    git2::Repository::init(temp_dir.path()).expect("Failed to init repo");
    fs::write(temp_dir.path().join(".gitignore"), "stale/\n").expect("Failed to write file");
    let stale = temp_dir.path().join("stale");
    fs::create_dir(&stale).expect("Failed to create dir");
    fs::write(stale.join("old.snapshot.json"), "{}").expect("Failed to write file");
    fs::write(temp_dir.path().join("new.snapshot.json"), "{}").expect("Failed to write file");

    let found = Scanner::new(temp_dir.path()).scan();

    assert_eq!(found.len(), 1);
    assert!(found[0].path.ends_with("new.snapshot.json"));
}

#[test]
fn test_scanner_file_root_is_returned_as_is() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("program.json");
    fs::write(&path, "{}").expect("Failed to write file");

    let found = Scanner::new(&path).scan();

    assert_eq!(found, vec![DiscoveredSnapshot { path }]);
}

#[test]
fn test_scanner_with_suffix() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.snapshot.json"), "{}").expect("Failed to write file");
    fs::write(temp_dir.path().join("b.program.json"), "{}").expect("Failed to write file");

    let found = Scanner::new(temp_dir.path())
        .with_suffix(".program.json")
        .scan();

    assert_eq!(found.len(), 1);
    assert!(found[0].path.ends_with("b.program.json"));
}

#[test]
fn test_scanner_missing_root_finds_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let found = Scanner::new(temp_dir.path().join("missing")).scan();

    assert!(found.is_empty());
}

#[test]
fn test_compute_hash() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("a.snapshot.json");
    fs::write(&path, "").expect("Failed to write file");
    let snapshot = DiscoveredSnapshot { path };

    let hash = snapshot.compute_hash().expect("Failed to compute hash");

    // sha-256 of the empty string
    assert_eq!(
        hash,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_compute_hash_missing_file() {
    let snapshot = DiscoveredSnapshot {
        path: "/nonexistent/a.snapshot.json".into(),
    };

    assert!(snapshot.compute_hash().is_err());
}
