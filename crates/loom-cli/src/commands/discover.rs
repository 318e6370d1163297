//! Discover command: run discovery without a store

use std::path::Path;

use anyhow::Result;
use loom_core::graph::convert::{graph_edges, graph_nodes};
use loom_core::graph::{GraphEdge, GraphNode};
use loom_core::{discover, DiscoveryOptions, DiscoveryStats};
use serde::Serialize;

use super::{find_snapshots, load_or_skip};

/// Discovery result for one snapshot
#[derive(Debug, Serialize)]
pub struct SnapshotGraph {
    pub snapshot: String,
    pub rejected_units: usize,
    pub stats: DiscoveryStats,
    pub nodes: Vec<GraphNode>,
    pub relationships: Vec<GraphEdge>,
}

/// Run the discover command
///
/// # Errors
/// Returns an error if the JSON output cannot be written.
pub fn run(path: &Path, json: bool, options: &DiscoveryOptions) -> Result<()> {
    let graphs = discover_all(path, options);

    if json {
        println!("{}", serde_json::to_string_pretty(&graphs)?);
        return Ok(());
    }

    for graph in &graphs {
        println!("{}", summary_line(graph));
    }
    Ok(())
}

/// Discover every readable snapshot under `path`
#[must_use]
pub fn discover_all(path: &Path, options: &DiscoveryOptions) -> Vec<SnapshotGraph> {
    find_snapshots(path)
        .iter()
        .filter_map(|snapshot| {
            let program = load_or_skip(snapshot)?;
            let (graph, stats) = discover(&program.sources, &program.resolver, options.clone());
            Some(SnapshotGraph {
                snapshot: snapshot.path.display().to_string(),
                rejected_units: program.rejected.len(),
                stats,
                nodes: graph_nodes(&graph),
                relationships: graph_edges(&graph),
            })
        })
        .collect()
}

/// One-line human summary of a snapshot graph
#[must_use]
pub fn summary_line(graph: &SnapshotGraph) -> String {
    format!(
        "{}: {} nodes, {} relationships, {} waves, {} resolution failures, {} rejected units",
        graph.snapshot,
        graph.nodes.len(),
        graph.relationships.len(),
        graph.stats.waves,
        graph.stats.resolution_failures,
        graph.rejected_units
    )
}
