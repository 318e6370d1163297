//! Tests for build run metadata

#![allow(clippy::expect_used)]

use tempfile::TempDir;

use crate::graph::{Entity, GraphBuild, PropertyValue, RelationshipLabel, Properties};
use crate::source::SyntaxRef;
use crate::version::BuildRun;

#[test]
fn test_new_build_run() {
    let run = BuildRun::new("/tmp/program.snapshot.json");

    assert_eq!(run.source_path, "/tmp/program.snapshot.json");
    assert_eq!(run.id.len(), 36);
    assert!(run.source_hash.is_none());
    assert!(run.commit_sha.is_none());
    assert!(run.branch.is_none());
    assert_eq!(run.node_count, 0);
}

#[test]
fn test_ids_are_unique() {
    assert_ne!(BuildRun::new("a").id, BuildRun::new("a").id);
}

#[test]
fn test_builder_methods() {
    let mut graph = GraphBuild::new();
    graph.connect(
        &Entity::syntax(SyntaxRef::new(0, 1), "NameExpr"),
        &Entity::syntax(SyntaxRef::new(0, 0), "CompilationUnit"),
        RelationshipLabel::ParentOf,
        Properties::new(),
    );

    let run = BuildRun::new("program.snapshot.json")
        .with_source_hash("abc123")
        .with_commit("deadbeef")
        .with_branch("main")
        .with_counts(&graph);

    assert_eq!(run.source_hash.as_deref(), Some("abc123"));
    assert_eq!(run.commit_sha.as_deref(), Some("deadbeef"));
    assert_eq!(run.branch.as_deref(), Some("main"));
    assert_eq!(run.node_count, 2);
    assert_eq!(run.relationship_count, 1);
}

#[test]
fn test_to_node() {
    let run = BuildRun::new("program.snapshot.json").with_source_hash("abc123");

    let node = run.to_node();

    assert_eq!(node.label, "BuildRun");
    assert_eq!(node.id, run.id);
    let get = |key: &str| node.properties.get(key).and_then(PropertyValue::as_str);
    assert_eq!(get("sourcePath"), Some("program.snapshot.json"));
    assert_eq!(get("sourceHash"), Some("abc123"));
    assert_eq!(get("commitSha"), None);
    assert!(get("startedAt").is_some_and(|s| s.contains('T')));
}

#[test]
fn test_with_git_info_outside_repository() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let run = BuildRun::new(temp_dir.path().to_string_lossy()).with_git_info();

    assert!(run.commit_sha.is_none());
    assert!(run.branch.is_none());
}

#[test]
fn test_with_git_info_reads_head() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo = git2::Repository::init(temp_dir.path()).expect("Failed to init repo");
    let signature = git2::Signature::now("Loom Test", "test@example.com").expect("signature");
    let tree_id = repo
        .index()
        .and_then(|mut index| index.write_tree())
        .expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let commit = repo
        .commit(Some("HEAD"), &signature, &signature, "initial", &tree, &[])
        .expect("Failed to commit");

    let run = BuildRun::new(temp_dir.path().to_string_lossy()).with_git_info();

    assert_eq!(run.commit_sha, Some(commit.to_string()));
    assert!(run.branch.is_some());
}
