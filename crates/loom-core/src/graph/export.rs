//! Export of a finished graph build into a store

use serde::Serialize;
use tracing::{debug, info, warn};

use super::build::GraphBuild;
use super::convert::{graph_edges, graph_nodes, node_labels, scoped_id};
use super::model::BuildRun;
use super::store::GraphStore;

/// Outcome counters of one export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub nodes_exported: usize,
    pub nodes_failed: usize,
    pub relationships_exported: usize,
    pub relationships_failed: usize,
    /// Labels for which an id index was requested
    pub indexed_labels: usize,
}

impl ExportSummary {
    #[must_use]
    pub const fn failures(&self) -> usize {
        self.nodes_failed + self.relationships_failed
    }
}

/// Upsert every node, then every relationship, then request label indexes
///
/// A failed upsert is logged and counted; the remaining items still go out.
pub async fn export_graph<S: GraphStore>(graph: &GraphBuild, store: &S) -> ExportSummary {
    export_graph_scoped(graph, store, None).await
}

/// [`export_graph`] with every id prefixed by `scope`
pub async fn export_graph_scoped<S: GraphStore>(
    graph: &GraphBuild,
    store: &S,
    scope: Option<&str>,
) -> ExportSummary {
    let mut summary = ExportSummary::default();

    info!(
        "Exporting {} nodes and {} relationships...",
        graph.node_count(),
        graph.relationship_count()
    );

    for mut node in graph_nodes(graph) {
        node.id = scoped_id(scope, node.id);
        match store.upsert_node(&node).await {
            Ok(()) => summary.nodes_exported += 1,
            Err(e) => {
                summary.nodes_failed += 1;
                warn!("Failed to export node {}:{}: {}", node.label, node.id, e);
            }
        }
    }

    for mut edge in graph_edges(graph) {
        edge.source_id = scoped_id(scope, edge.source_id);
        edge.target_id = scoped_id(scope, edge.target_id);
        match store.upsert_relationship(&edge).await {
            Ok(()) => summary.relationships_exported += 1,
            Err(e) => {
                summary.relationships_failed += 1;
                warn!(
                    "Failed to export relationship {} -[{}]-> {}: {}",
                    edge.source_id, edge.label, edge.target_id, e
                );
            }
        }
    }

    let labels = node_labels(graph);
    match store.ensure_indexes(&labels).await {
        Ok(()) => {
            summary.indexed_labels = labels.len();
            debug!("Ensured id indexes for {} labels", labels.len());
        }
        Err(e) => warn!("Failed to create label indexes: {}", e),
    }

    if summary.failures() > 0 {
        warn!(
            "Export finished with {} failed nodes and {} failed relationships",
            summary.nodes_failed, summary.relationships_failed
        );
    }
    summary
}

/// Record the build run itself as a node
///
/// Returns `false` if the store rejected it; the failure is logged.
pub async fn export_build_run<S: GraphStore>(run: &BuildRun, store: &S) -> bool {
    match store.upsert_node(&run.to_node()).await {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to export build run {}: {}", run.id, e);
            false
        }
    }
}
