//! Directed labeled relationships and their registry

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKey};
use super::properties::Properties;

/// Label of a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipLabel {
    /// Child syntax node to its parent (source is the child)
    ParentOf,
    /// Method-like declaration to its return type
    ReturnTypeOf,
    /// Value-like declaration to its declared type
    ValueTypeOf,
    /// Reference type to its reference-type view
    TypeOf,
}

impl std::fmt::Display for RelationshipLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ParentOf => "parent_of",
            Self::ReturnTypeOf => "return_type_of",
            Self::ValueTypeOf => "value_type_of",
            Self::TypeOf => "type_of",
        };
        write!(f, "{s}")
    }
}

/// A directed, labeled edge between two entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub source: Entity,
    pub target: Entity,
    pub label: RelationshipLabel,
}

impl Relationship {
    #[must_use]
    pub const fn new(source: Entity, target: Entity, label: RelationshipLabel) -> Self {
        Self {
            source,
            target,
            label,
        }
    }

    /// Identity triple of this relationship
    #[must_use]
    pub const fn key(&self) -> RelationshipKey {
        RelationshipKey {
            source: self.source.key,
            target: self.target.key,
            label: self.label,
        }
    }

    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source.key == self.target.key
    }
}

/// `(source, target, label)` identity of a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelationshipKey {
    pub source: EntityKey,
    pub target: EntityKey,
    pub label: RelationshipLabel,
}

#[derive(Debug)]
struct RelationshipEntry {
    relationship: Relationship,
    properties: Properties,
}

/// Deduplicates relationships by identity triple
///
/// Properties live in a side table keyed by the same slot as the edge.
/// Relationships never drive discovery, so there is no frontier here.
#[derive(Debug, Default)]
pub struct RelationshipRegistry {
    entries: Vec<RelationshipEntry>,
    index: HashMap<RelationshipKey, usize>,
}

impl RelationshipRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a relationship, merging `properties` into its bag
    ///
    /// Returns `true` iff the identity triple was not yet known.
    pub fn register(&mut self, relationship: Relationship, properties: Properties) -> bool {
        let key = relationship.key();
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].properties.merge(properties);
            return false;
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(RelationshipEntry {
            relationship,
            properties,
        });
        true
    }

    /// All relationships with their properties, in registration order
    pub fn relationships(&self) -> impl Iterator<Item = (&Relationship, &Properties)> {
        self.entries
            .iter()
            .map(|e| (&e.relationship, &e.properties))
    }

    #[must_use]
    pub fn get(&self, key: &RelationshipKey) -> Option<(&Relationship, &Properties)> {
        self.index.get(key).map(|&slot| {
            let entry = &self.entries[slot];
            (&entry.relationship, &entry.properties)
        })
    }

    #[must_use]
    pub fn contains(&self, key: &RelationshipKey) -> bool {
        self.index.contains_key(key)
    }

    /// Relationships with the given label
    pub fn with_label(
        &self,
        label: RelationshipLabel,
    ) -> impl Iterator<Item = &Relationship> + '_ {
        self.entries
            .iter()
            .map(|e| &e.relationship)
            .filter(move |r| r.label == label)
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
