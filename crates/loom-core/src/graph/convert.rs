//! Conversion from registries to store-facing graph model types

use super::build::GraphBuild;
use super::entity::Entity;
use super::model::{GraphEdge, GraphNode};
use super::properties::Properties;
use super::relationship::Relationship;

/// Convert a registered entity to a graph node
#[must_use]
pub fn entity_to_node(entity: &Entity, properties: &Properties) -> GraphNode {
    GraphNode {
        label: entity.label.clone(),
        id: entity.id(),
        properties: properties.clone(),
    }
}

/// Convert a registered relationship to a graph edge
#[must_use]
pub fn relationship_to_edge(relationship: &Relationship, properties: &Properties) -> GraphEdge {
    GraphEdge {
        source_label: relationship.source.label.clone(),
        source_id: relationship.source.id(),
        target_label: relationship.target.label.clone(),
        target_id: relationship.target.id(),
        label: relationship.label.to_string(),
        properties: properties.clone(),
    }
}

/// All nodes of a build, in registration order
pub fn graph_nodes(graph: &GraphBuild) -> Vec<GraphNode> {
    graph
        .nodes
        .entities()
        .map(|(entity, props)| entity_to_node(entity, props))
        .collect()
}

/// All edges of a build, in registration order
pub fn graph_edges(graph: &GraphBuild) -> Vec<GraphEdge> {
    graph
        .relationships
        .relationships()
        .map(|(rel, props)| relationship_to_edge(rel, props))
        .collect()
}

/// Prefix an id with an export scope
///
/// Scoped ids let several builds share one store without colliding.
#[must_use]
pub fn scoped_id(scope: Option<&str>, id: String) -> String {
    match scope {
        Some(scope) => format!("{scope}/{id}"),
        None => id,
    }
}

/// Distinct node labels, sorted
pub fn node_labels(graph: &GraphBuild) -> Vec<String> {
    let mut labels: Vec<String> = graph
        .nodes
        .entities()
        .map(|(entity, _)| entity.label.clone())
        .collect();
    labels.sort();
    labels.dedup();
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RelationshipLabel;
    use crate::resolve::{DeclCategory, DeclId};
    use crate::source::SyntaxRef;

    #[test]
    fn test_entity_to_node() {
        let entity = Entity::syntax(SyntaxRef::new(0, 3), "MethodDeclaration");
        let props = Properties::new().with("nodeType", "MethodDeclaration");

        let node = entity_to_node(&entity, &props);

        assert_eq!(node.label, "MethodDeclaration");
        assert_eq!(node.id, "syntax:0:3");
        assert_eq!(node.properties, props);
    }

    #[test]
    fn test_relationship_to_edge() {
        let child = Entity::syntax(SyntaxRef::new(0, 1), "MethodDeclaration");
        let symbol = Entity::symbol(DeclId(4), DeclCategory::Method);
        let rel = Relationship::new(child, symbol, RelationshipLabel::ParentOf);

        let edge = relationship_to_edge(&rel, &Properties::new());

        assert_eq!(edge.source_label, "MethodDeclaration");
        assert_eq!(edge.source_id, "syntax:0:1");
        assert_eq!(edge.target_label, "ResolvedMethod");
        assert_eq!(edge.target_id, "symbol:4");
        assert_eq!(edge.label, "parent_of");
    }

    #[test]
    fn test_scoped_id() {
        assert_eq!(scoped_id(None, "type:0".to_string()), "type:0");
        assert_eq!(scoped_id(Some("1a2b"), "type:0".to_string()), "1a2b/type:0");
    }

    #[test]
    fn test_node_labels_are_distinct_and_sorted() {
        let mut graph = GraphBuild::new();
        graph
            .nodes
            .register(Entity::syntax(SyntaxRef::new(0, 0), "CompilationUnit"));
        graph
            .nodes
            .register(Entity::syntax(SyntaxRef::new(0, 1), "NameExpr"));
        graph
            .nodes
            .register(Entity::syntax(SyntaxRef::new(0, 2), "NameExpr"));

        assert_eq!(node_labels(&graph), vec!["CompilationUnit", "NameExpr"]);
    }
}
