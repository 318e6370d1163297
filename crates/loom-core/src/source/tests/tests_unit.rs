//! Tests for source unit validation

use rstest::rstest;

use crate::source::{NodeIndex, SourceError, SourceUnit, SyntaxNode};

fn tree() -> SourceUnit {
    let mut unit = SourceUnit::new("Foo.java");
    let root = unit.add_node(SyntaxNode::new("CompilationUnit", "class Foo {}"));
    unit.add_node(SyntaxNode::new("ClassOrInterfaceDeclaration", "class Foo {}").with_parent(root));
    unit
}

#[test]
fn test_valid_tree() {
    assert!(tree().validate().is_ok());
}

#[test]
fn test_add_node_returns_sequential_indices() {
    let mut unit = SourceUnit::new("Foo.java");
    let a = unit.add_node(SyntaxNode::new("CompilationUnit", ""));
    let b = unit.add_node(SyntaxNode::new("NameExpr", "x").with_parent(a));

    assert_eq!(a, NodeIndex(0));
    assert_eq!(b, NodeIndex(1));
    assert_eq!(unit.len(), 2);
}

fn with_parse_error() -> SourceUnit {
    let mut unit = tree();
    unit.parse_errors.push("Parse error. Found \"}\"".to_string());
    unit
}

fn with_dangling_parent() -> SourceUnit {
    let mut unit = tree();
    unit.add_node(SyntaxNode::new("NameExpr", "y").with_parent(NodeIndex(42)));
    unit
}

fn with_two_roots() -> SourceUnit {
    let mut unit = SourceUnit::new("Bad.java");
    unit.add_node(SyntaxNode::new("CompilationUnit", ""));
    unit.add_node(SyntaxNode::new("CompilationUnit", ""));
    unit
}

fn with_mutual_parents() -> SourceUnit {
    let mut unit = SourceUnit::new("Bad.java");
    unit.add_node(SyntaxNode::new("A", "").with_parent(NodeIndex(1)));
    unit.add_node(SyntaxNode::new("B", "").with_parent(NodeIndex(0)));
    unit
}

#[rstest]
#[case::parse_errors(with_parse_error(), "1 parse error(s)")]
#[case::empty(SourceUnit::new("Bad.java"), "no syntax nodes")]
#[case::dangling_parent(with_dangling_parent(), "parent 42 outside the unit")]
#[case::two_roots(with_two_roots(), "expected one root node, found 2")]
#[case::no_root(with_mutual_parents(), "expected one root node, found 0")]
fn test_malformed_units(#[case] unit: SourceUnit, #[case] expected: &str) {
    let err = unit.validate();

    assert!(
        matches!(&err, Err(SourceError::Malformed { reason, .. }) if reason.contains(expected)),
        "unexpected result: {err:?}"
    );
}

#[test]
fn test_cycle_below_root_is_rejected() {
    let mut unit = SourceUnit::new("Cycle.java");
    unit.add_node(SyntaxNode::new("CompilationUnit", ""));
    unit.add_node(SyntaxNode::new("A", "").with_parent(NodeIndex(2)));
    unit.add_node(SyntaxNode::new("B", "").with_parent(NodeIndex(1)));

    let err = unit.validate();

    assert!(matches!(&err, Err(SourceError::Malformed { reason, .. }) if reason.contains("cyclic")));
}

#[test]
fn test_deep_chain_is_valid() {
    let mut unit = SourceUnit::new("Deep.java");
    let mut parent = unit.add_node(SyntaxNode::new("CompilationUnit", ""));
    for _ in 0..50_000 {
        parent = unit.add_node(SyntaxNode::new("BlockStmt", "{}").with_parent(parent));
    }

    assert!(unit.validate().is_ok());
}

#[test]
fn test_shared_ancestors_are_valid() {
    let mut unit = SourceUnit::new("Wide.java");
    let root = unit.add_node(SyntaxNode::new("CompilationUnit", ""));
    let class = unit.add_node(SyntaxNode::new("ClassOrInterfaceDeclaration", "").with_parent(root));
    for name in ["a", "b", "c"] {
        unit.add_node(SyntaxNode::new("NameExpr", name).with_parent(class));
    }

    assert!(unit.validate().is_ok());
}

#[test]
fn test_branch_into_cycle_is_rejected() {
    let mut unit = SourceUnit::new("Cycle.java");
    unit.add_node(SyntaxNode::new("CompilationUnit", ""));
    unit.add_node(SyntaxNode::new("NameExpr", "x").with_parent(NodeIndex(2)));
    unit.add_node(SyntaxNode::new("A", "").with_parent(NodeIndex(3)));
    unit.add_node(SyntaxNode::new("B", "").with_parent(NodeIndex(2)));

    let err = unit.validate();

    assert!(matches!(&err, Err(SourceError::Malformed { reason, .. }) if reason.contains("cyclic")));
}

#[test]
fn test_malformed_error_names_unit() {
    let unit = SourceUnit::new("Empty.java");

    let message = unit.validate().map_err(|e| e.to_string()).err();

    assert_eq!(
        message.as_deref(),
        Some("Malformed source Empty.java: no syntax nodes")
    );
}

#[test]
fn test_display_name_without_file() {
    assert_eq!(SourceUnit::default().display_name(), "<unnamed>");
}
