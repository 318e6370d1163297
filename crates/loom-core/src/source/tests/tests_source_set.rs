//! Tests for SourceSet admission

use crate::source::{SourceError, SourceSet, SourceUnit, SyntaxNode, SyntaxRef, UnitId};

fn unit(name: &str) -> SourceUnit {
    let mut unit = SourceUnit::new(name);
    let root = unit.add_node(SyntaxNode::new("CompilationUnit", ""));
    unit.add_node(SyntaxNode::new("NameExpr", "x").with_parent(root));
    unit
}

#[test]
fn test_from_units_skips_malformed() {
    let (set, rejected) = SourceSet::from_units([
        unit("A.java"),
        SourceUnit::new("Empty.java"),
        unit("C.java"),
    ]);

    assert_eq!(set.len(), 2);
    assert_eq!(rejected.len(), 1);
    assert!(matches!(&rejected[0], SourceError::Malformed { unit, .. } if unit == "Empty.java"));
    // Unit ids keep their snapshot position
    assert!(set.get(UnitId(0)).is_some());
    assert!(set.get(UnitId(1)).is_none());
    assert!(set.get(UnitId(2)).is_some());
}

#[test]
fn test_admit_leaves_set_unchanged_on_error() {
    let mut set = SourceSet::new();

    assert!(set.admit(UnitId(0), SourceUnit::new("Empty.java")).is_err());
    assert!(set.is_empty());
}

#[test]
fn test_node_lookup() {
    let (set, _) = SourceSet::from_units([unit("A.java")]);

    assert_eq!(set.node(SyntaxRef::new(0, 1)).map(|n| n.text.as_str()), Some("x"));
    assert!(set.node(SyntaxRef::new(0, 2)).is_none());
    assert!(set.node(SyntaxRef::new(1, 0)).is_none());
}
