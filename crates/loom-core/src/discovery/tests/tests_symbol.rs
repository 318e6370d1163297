//! Tests for symbol entity enrichment

#![allow(clippy::expect_used)]

use super::fixtures::{
    class_program, method_program, symbol, text, ty, FOO, GREET, INT, NAME_FIELD, PARAM_O,
    PERSON, STRING, STRING_DECL,
};
use crate::discovery::{discover, fingerprint, DiscoveryOptions};
use crate::graph::{Entity, PropertyValue, RelationshipKey, RelationshipLabel};
use crate::resolve::{DeclCategory, DeclId, Declaration, ResolveError, SnapshotResolver};
use crate::source::{SourceSet, SourceUnit, SyntaxNode, SyntaxRef};

#[test]
fn test_method_links_return_type() {
    let (sources, resolver) = method_program();

    let (graph, _) = discover(&sources, &resolver, DiscoveryOptions::default());

    let foo = symbol(FOO);
    assert_eq!(text(&graph, foo, "name"), Some("foo"));
    assert_eq!(text(&graph, foo, "category"), Some("method"));
    assert_eq!(text(&graph, foo, "qualifiedSignature"), Some("Foo.foo()"));
    assert_eq!(text(&graph, foo, "returnType"), Some("int"));

    let key = RelationshipKey {
        source: foo,
        target: ty(INT),
        label: RelationshipLabel::ReturnTypeOf,
    };
    let (rel, props) = graph.relationships.get(&key).expect("return_type_of edge");
    assert_eq!(rel.source.label, "ResolvedMethod");
    assert_eq!(rel.target.label, "ResolvedPrimitiveType");
    assert_eq!(props.get("uses").and_then(PropertyValue::as_str), Some("return_type"));
}

#[test]
fn test_field_links_value_type() {
    let (sources, resolver) = class_program();

    let (graph, _) = discover(&sources, &resolver, DiscoveryOptions::default());

    let field = symbol(NAME_FIELD);
    assert_eq!(text(&graph, field, "category"), Some("field"));
    assert_eq!(text(&graph, field, "valueType"), Some("java.lang.String"));
    assert_eq!(text(&graph, field, "qualifiedSignature"), Some("java.lang.String"));
    assert!(graph.relationships.contains(&RelationshipKey {
        source: field,
        target: ty(STRING),
        label: RelationshipLabel::ValueTypeOf,
    }));
}

#[test]
fn test_shared_return_type_is_one_entity() {
    let (sources, resolver) = class_program();

    let (graph, _) = discover(&sources, &resolver, DiscoveryOptions::default());

    assert_eq!(text(&graph, symbol(GREET), "returnType"), Some("java.lang.String"));
    let string_targets = graph
        .relationships
        .relationships()
        .filter(|(r, _)| r.target.key == ty(STRING))
        .count();
    // value_type_of, return_type_of and the type_of self-loop
    assert_eq!(string_targets, 3);
}

#[test]
fn test_ambiguous_value_type_is_recorded_separately() {
    let (sources, resolver) = class_program();

    let (graph, _) = discover(&sources, &resolver, DiscoveryOptions::default());

    let param = symbol(PARAM_O);
    assert_eq!(
        text(&graph, param, "valueTypeAmbiguity"),
        Some("Ambiguous resolution: Object matches 2 candidates")
    );
    assert_eq!(text(&graph, param, "valueTypeError"), None);
    assert_eq!(text(&graph, param, "qualifiedSignature"), Some("N/A"));
    assert_eq!(
        graph
            .relationships
            .relationships()
            .filter(|(r, _)| r.source.key == param)
            .count(),
        0
    );
}

#[test]
fn test_reference_type_declaration() {
    let (sources, resolver) = class_program();

    let (graph, _) = discover(&sources, &resolver, DiscoveryOptions::default());

    let person = symbol(PERSON);
    assert_eq!(text(&graph, person, "simpleName"), Some("Person"));
    assert_eq!(text(&graph, person, "qualifiedName"), Some("org.example.Person"));
    assert_eq!(text(&graph, person, "qualifiedSignature"), Some("org.example.Person"));
    assert_eq!(
        text(&graph, person, "identityHash"),
        Some(fingerprint(&["reference_type", "org.example.Person"]).as_str())
    );

    let string = graph.nodes.get(&symbol(STRING_DECL)).map(|(e, _)| e.label.as_str());
    assert_eq!(string, Some("ResolvedReferenceTypeDeclaration"));
}

fn single_binding(mut resolver: SnapshotResolver, decl: DeclId) -> (SourceSet, SnapshotResolver) {
    let mut unit = SourceUnit::new("One.java");
    let root = unit.add_node(SyntaxNode::new("CompilationUnit", ""));
    unit.add_node(SyntaxNode::new("NameExpr", "x").with_parent(root).resolvable());
    resolver.bind(SyntaxRef::new(0, 1), Ok(decl));
    let (sources, _) = SourceSet::from_units([unit]);
    (sources, resolver)
}

#[test]
fn test_missing_return_type_is_recorded() {
    let mut resolver = SnapshotResolver::new();
    let decl = resolver.add_declaration(Declaration::new("make", DeclCategory::Method));
    let (sources, resolver) = single_binding(resolver, decl);

    let (graph, stats) = discover(&sources, &resolver, DiscoveryOptions::default());

    assert_eq!(
        text(&graph, symbol(decl), "returnTypeError"),
        Some("Unresolved reference: return type of make is not recorded")
    );
    assert_eq!(text(&graph, symbol(decl), "qualifiedSignature"), Some("N/A"));
    assert_eq!(stats.resolution_failures, 1);
    assert_eq!(graph.relationships.with_label(RelationshipLabel::ReturnTypeOf).count(), 0);
}

#[test]
fn test_constructor_has_signature_and_no_return_type() {
    let mut resolver = SnapshotResolver::new();
    let decl = resolver.add_declaration(
        Declaration::new("Counter", DeclCategory::Constructor)
            .with_signature("org.example.Counter.Counter(int)"),
    );
    let (sources, resolver) = single_binding(resolver, decl);

    let (graph, stats) = discover(&sources, &resolver, DiscoveryOptions::default());

    assert_eq!(
        text(&graph, symbol(decl), "qualifiedSignature"),
        Some("org.example.Counter.Counter(int)")
    );
    assert_eq!(text(&graph, symbol(decl), "returnTypeError"), None);
    assert_eq!(text(&graph, symbol(decl), "returnType"), None);
    assert_eq!(stats.resolution_failures, 0);
    assert_eq!(graph.relationships.with_label(RelationshipLabel::ReturnTypeOf).count(), 0);
}

#[test]
fn test_value_type_error_is_recorded() {
    let mut resolver = SnapshotResolver::new();
    let decl = resolver.add_declaration(Declaration::new("x", DeclCategory::LocalVariable));
    resolver.set_value_type(decl, Err(ResolveError::Unresolved("var".to_string())));
    let (sources, resolver) = single_binding(resolver, decl);

    let (graph, _) = discover(&sources, &resolver, DiscoveryOptions::default());

    assert_eq!(
        text(&graph, symbol(decl), "valueTypeError"),
        Some("Unresolved reference: var")
    );
    assert_eq!(text(&graph, symbol(decl), "valueTypeAmbiguity"), None);
}

#[test]
fn test_unknown_declaration_is_recorded() {
    let (sources, resolver) = single_binding(SnapshotResolver::new(), DeclId(99));

    let (graph, stats) = discover(&sources, &resolver, DiscoveryOptions::default());

    let entity = graph.nodes.get(&symbol(DeclId(99))).map(|(e, _)| e.clone());
    assert_eq!(
        entity.map(|e| e.label),
        Some(Entity::symbol(DeclId(99), DeclCategory::Other).label)
    );
    assert_eq!(
        text(&graph, symbol(DeclId(99)), "declarationError"),
        Some("Resolver failure: unknown declaration 99")
    );
    assert_eq!(text(&graph, symbol(DeclId(99)), "name"), None);
    assert_eq!(stats.resolution_failures, 1);
}

#[test]
fn test_other_declarations_get_no_type_edges() {
    let mut resolver = SnapshotResolver::new();
    let decl = resolver.add_declaration(Declaration::new("java.util", DeclCategory::Other));
    let (sources, resolver) = single_binding(resolver, decl);

    let (graph, stats) = discover(&sources, &resolver, DiscoveryOptions::default());

    assert_eq!(text(&graph, symbol(decl), "category"), Some("other"));
    assert_eq!(text(&graph, symbol(decl), "qualifiedSignature"), Some("N/A"));
    assert_eq!(stats.resolution_failures, 0);
    assert_eq!(graph.node_count(), 3);
}
