//! Store contract consumed by export, plus an in-memory store

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use super::model::{GraphEdge, GraphNode};
use super::neo4j::Neo4jError;
use super::properties::Properties;

/// Errors a store may report for a single upsert
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid label: {0:?}")]
    InvalidLabel(String),

    #[error("Missing endpoint {label}:{id}")]
    MissingEndpoint { label: String, id: String },

    #[error("Rejected by store: {0}")]
    Rejected(String),

    #[error(transparent)]
    Neo4j(#[from] Neo4jError),
}

/// Idempotent upsert sink for nodes and relationships
///
/// Upserting the same node (label + id) or edge (endpoints + label) again
/// with a superset of properties must update, never duplicate.
#[allow(async_fn_in_trait)]
pub trait GraphStore {
    /// Insert or update a node, merging properties
    ///
    /// # Errors
    /// Returns an error if the store rejects the node.
    async fn upsert_node(&self, node: &GraphNode) -> Result<(), StoreError>;

    /// Insert or update a relationship between two existing nodes
    ///
    /// # Errors
    /// Returns an error if the store rejects the relationship.
    async fn upsert_relationship(&self, edge: &GraphEdge) -> Result<(), StoreError>;

    /// Make sure lookups by `id` are indexed for the given labels
    ///
    /// # Errors
    /// Returns an error if index creation fails.
    async fn ensure_indexes(&self, _labels: &[String]) -> Result<(), StoreError> {
        Ok(())
    }
}

type NodeKey = (String, String);
type EdgeKey = (String, String, String, String, String);

#[derive(Debug, Default)]
struct MemoryState {
    nodes: BTreeMap<NodeKey, Properties>,
    edges: BTreeMap<EdgeKey, Properties>,
    indexes: BTreeSet<String>,
}

/// In-memory [`GraphStore`] with upsert semantics
///
/// Ids listed via [`MemoryStore::reject_id`] fail every upsert that touches
/// them, which lets callers exercise partial export failure.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
    rejected_ids: HashSet<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every upsert naming this node id
    #[must_use]
    pub fn reject_id(mut self, id: impl Into<String>) -> Self {
        self.rejected_ids.insert(id.into());
        self
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.state().nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.state().edges.len()
    }

    /// Properties of a stored node
    #[must_use]
    pub fn node(&self, label: &str, id: &str) -> Option<Properties> {
        self.state()
            .nodes
            .get(&(label.to_string(), id.to_string()))
            .cloned()
    }

    /// Properties of a stored edge
    #[must_use]
    pub fn edge(&self, source_id: &str, label: &str, target_id: &str) -> Option<Properties> {
        self.state()
            .edges
            .iter()
            .find(|((_, s, _, t, l), _)| s == source_id && t == target_id && l == label)
            .map(|(_, props)| props.clone())
    }

    #[must_use]
    pub fn indexed_labels(&self) -> Vec<String> {
        self.state().indexes.iter().cloned().collect()
    }

    fn check_id(&self, id: &str) -> Result<(), StoreError> {
        if self.rejected_ids.contains(id) {
            return Err(StoreError::Rejected(format!("id {id} is rejected")));
        }
        Ok(())
    }
}

impl GraphStore for MemoryStore {
    async fn upsert_node(&self, node: &GraphNode) -> Result<(), StoreError> {
        if node.label.is_empty() {
            return Err(StoreError::InvalidLabel(node.label.clone()));
        }
        self.check_id(&node.id)?;

        self.state()
            .nodes
            .entry((node.label.clone(), node.id.clone()))
            .or_default()
            .merge(node.properties.clone());
        Ok(())
    }

    async fn upsert_relationship(&self, edge: &GraphEdge) -> Result<(), StoreError> {
        if edge.label.is_empty() {
            return Err(StoreError::InvalidLabel(edge.label.clone()));
        }
        self.check_id(&edge.source_id)?;
        self.check_id(&edge.target_id)?;

        let mut state = self.state();
        for (label, id) in [
            (&edge.source_label, &edge.source_id),
            (&edge.target_label, &edge.target_id),
        ] {
            if !state.nodes.contains_key(&(label.clone(), id.clone())) {
                return Err(StoreError::MissingEndpoint {
                    label: label.clone(),
                    id: id.clone(),
                });
            }
        }

        state
            .edges
            .entry((
                edge.source_label.clone(),
                edge.source_id.clone(),
                edge.target_label.clone(),
                edge.target_id.clone(),
                edge.label.clone(),
            ))
            .or_default()
            .merge(edge.properties.clone());
        Ok(())
    }

    async fn ensure_indexes(&self, labels: &[String]) -> Result<(), StoreError> {
        self.state().indexes.extend(labels.iter().cloned());
        Ok(())
    }
}
