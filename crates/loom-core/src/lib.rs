//! loom-core: incremental program graph discovery
//!
//! Turns parsed source units plus a symbol resolver into a deduplicated
//! property graph. Discovery starts from every syntax node and keeps
//! following parents, resolved declarations and resolved types until no new
//! entity appears. Resolution failures are recorded on the graph instead of
//! stopping it. The finished graph is upserted into a store such as Neo4j.

pub mod discovery;
pub mod graph;
pub mod resolve;
pub mod scanner;
pub mod source;
pub mod version;

// Re-export commonly used types
pub use discovery::{discover, DiscoveryEngine, DiscoveryOptions, DiscoveryStats};
pub use graph::neo4j::{Neo4jClient, Neo4jConfig};
pub use graph::{
    export_graph, export_graph_scoped, Entity, EntityKey, GraphBuild, GraphStore, MemoryStore,
    Properties, PropertyValue, RelationshipLabel,
};
pub use resolve::{ResolveError, Resolver, SnapshotResolver};
pub use scanner::{DiscoveredSnapshot, Scanner};
pub use source::{load_snapshot, SourceError, SourceSet, SourceUnit, SyntaxNode, SyntaxRef};
pub use version::BuildRun;
