//! Graph model types handed to stores

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::properties::Properties;

/// A node as seen by a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Store label (the entity's kind tag)
    pub label: String,
    /// Unique identifier within the build
    pub id: String,
    pub properties: Properties,
}

/// A relationship as seen by a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source_label: String,
    pub source_id: String,
    pub target_label: String,
    pub target_id: String,
    /// Relationship type, e.g. `parent_of`
    pub label: String,
    pub properties: Properties,
}

/// Metadata of one graph build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRun {
    /// Unique identifier for this build
    pub id: String,
    /// Snapshot the build was discovered from
    pub source_path: String,
    /// sha-256 of the snapshot
    pub source_hash: Option<String>,
    /// Git commit SHA (if available)
    pub commit_sha: Option<String>,
    /// Git branch (if available)
    pub branch: Option<String>,
    /// When the build started
    pub started_at: DateTime<Utc>,
    pub node_count: usize,
    pub relationship_count: usize,
}
