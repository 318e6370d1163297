//! Graph module: identity model, registries and storage
//!
//! Defines the deduplicated property graph built by discovery and the
//! export path that upserts it into a store such as Neo4j.

pub mod build;
pub mod convert;
pub mod entity;
pub mod export;
pub mod model;
pub mod neo4j;
pub mod properties;
pub mod queries;
pub mod registry;
pub mod relationship;
pub mod store;

pub use build::GraphBuild;
pub use entity::{Entity, EntityKey, EntityKind};
pub use export::{export_build_run, export_graph, export_graph_scoped, ExportSummary};
pub use model::{BuildRun, GraphEdge, GraphNode};
pub use properties::{Properties, PropertyValue};
pub use registry::NodeRegistry;
pub use relationship::{Relationship, RelationshipKey, RelationshipLabel, RelationshipRegistry};
pub use store::{GraphStore, MemoryStore, StoreError};
