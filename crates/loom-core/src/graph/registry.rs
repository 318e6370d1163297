//! Node registry: identity-keyed entity store with a discovery frontier

use std::collections::HashMap;

use super::entity::{Entity, EntityKey};
use super::properties::{Properties, PropertyValue};

#[derive(Debug)]
struct NodeEntry {
    entity: Entity,
    properties: Properties,
}

/// Deduplicates entities by identity and tracks which are newly discovered
///
/// Entries live in an arena; `index` maps identity to arena slot and the
/// frontier holds slots registered since the last drain, in insertion order.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    entries: Vec<NodeEntry>,
    index: HashMap<EntityKey, usize>,
    frontier: Vec<usize>,
}

impl NodeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity
    ///
    /// Returns `true` and adds the entity to the frontier iff its identity was
    /// unknown. An empty property bag always exists afterwards.
    pub fn register(&mut self, entity: Entity) -> bool {
        if self.index.contains_key(&entity.key) {
            return false;
        }
        let slot = self.entries.len();
        self.index.insert(entity.key, slot);
        self.entries.push(NodeEntry {
            entity,
            properties: Properties::new(),
        });
        self.frontier.push(slot);
        true
    }

    /// Register the entity if needed, then insert or overwrite one property
    pub fn set_property(
        &mut self,
        entity: &Entity,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) {
        let slot = self.slot_for(entity);
        self.entries[slot].properties.insert(key, value);
    }

    /// Register the entity if needed, then merge a whole bag into its properties
    pub fn merge_properties(&mut self, entity: &Entity, properties: Properties) {
        let slot = self.slot_for(entity);
        self.entries[slot].properties.merge(properties);
    }

    fn slot_for(&mut self, entity: &Entity) -> usize {
        if let Some(&slot) = self.index.get(&entity.key) {
            return slot;
        }
        self.register(entity.clone());
        self.entries.len() - 1
    }

    /// Take the current frontier, leaving it empty
    pub fn drain_frontier(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.frontier)
            .into_iter()
            .map(|slot| self.entries[slot].entity.clone())
            .collect()
    }

    /// Number of entities waiting to be drained
    #[must_use]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// All entities with their properties, in registration order
    pub fn entities(&self) -> impl Iterator<Item = (&Entity, &Properties)> {
        self.entries.iter().map(|e| (&e.entity, &e.properties))
    }

    #[must_use]
    pub fn get(&self, key: &EntityKey) -> Option<(&Entity, &Properties)> {
        self.index
            .get(key)
            .map(|&slot| (&self.entries[slot].entity, &self.entries[slot].properties))
    }

    #[must_use]
    pub fn properties(&self, key: &EntityKey) -> Option<&Properties> {
        self.get(key).map(|(_, props)| props)
    }

    #[must_use]
    pub fn contains(&self, key: &EntityKey) -> bool {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
