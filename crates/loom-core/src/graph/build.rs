//! Graph build context: the registries owned by one discovery run

use super::entity::Entity;
use super::properties::Properties;
use super::registry::NodeRegistry;
use super::relationship::{Relationship, RelationshipLabel, RelationshipRegistry};

/// All entities and relationships discovered during one run
#[derive(Debug, Default)]
pub struct GraphBuild {
    pub nodes: NodeRegistry,
    pub relationships: RelationshipRegistry,
}

impl GraphBuild {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register both endpoints and the edge between them
    ///
    /// Returns `true` iff the edge identity was new.
    pub fn connect(
        &mut self,
        source: &Entity,
        target: &Entity,
        label: RelationshipLabel,
        properties: Properties,
    ) -> bool {
        self.nodes.register(source.clone());
        self.nodes.register(target.clone());
        self.relationships.register(
            Relationship::new(source.clone(), target.clone(), label),
            properties,
        )
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}
