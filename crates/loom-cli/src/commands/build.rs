//! Build command: discover each snapshot and export it to a graph store

use std::path::Path;

use anyhow::Result;
use loom_core::graph::{export_build_run, export_graph_scoped, ExportSummary};
use loom_core::scanner::DiscoveredSnapshot;
use loom_core::{
    discover, BuildRun, DiscoveryOptions, GraphStore, MemoryStore, Neo4jClient,
    Neo4jConfig,
};
use tracing::{info, warn};

use super::{find_snapshots, load_or_skip};

/// Hex digits of the snapshot hash used to scope exported ids
const SCOPE_LEN: usize = 12;

/// Settings for one `loom build` invocation
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub discovery: DiscoveryOptions,
    /// Export into a [`MemoryStore`] instead of Neo4j
    pub dry_run: bool,
}

/// Totals over every snapshot of one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub builds: usize,
    pub skipped: usize,
    pub nodes: usize,
    pub relationships: usize,
    pub resolution_failures: usize,
    pub export_failures: usize,
}

/// Run the build command
///
/// # Errors
/// Returns an error if the Neo4j connection cannot be established.
pub async fn run(path: &Path, config: &Neo4jConfig, options: &BuildOptions) -> Result<BuildReport> {
    info!("Building program graphs from {}", path.display());
    let snapshots = find_snapshots(path);

    let report = if options.dry_run {
        info!("Dry run: exporting into memory");
        let store = MemoryStore::new();
        let report = build_all(&snapshots, &store, &options.discovery).await;
        info!(
            "Memory store holds {} nodes and {} relationships",
            store.node_count(),
            store.edge_count()
        );
        report
    } else {
        let client = connect_neo4j(config).await?;
        build_all(&snapshots, &client, &options.discovery).await
    };

    log_build_summary(&report);
    Ok(report)
}

async fn connect_neo4j(config: &Neo4jConfig) -> Result<Neo4jClient> {
    info!("Connecting to Neo4j at {}", config.uri);
    Ok(Neo4jClient::connect(config).await?)
}

/// Build every snapshot into `store`, skipping the ones that fail to load
pub async fn build_all<S: GraphStore>(
    snapshots: &[DiscoveredSnapshot],
    store: &S,
    options: &DiscoveryOptions,
) -> BuildReport {
    let mut report = BuildReport::default();
    for snapshot in snapshots {
        match build_one(snapshot, store, options).await {
            Some(outcome) => {
                report.builds += 1;
                report.nodes += outcome.run.node_count;
                report.relationships += outcome.run.relationship_count;
                report.resolution_failures += outcome.resolution_failures;
                report.export_failures += outcome.export.failures();
            }
            None => report.skipped += 1,
        }
    }
    report
}

struct BuildOutcome {
    run: BuildRun,
    resolution_failures: usize,
    export: ExportSummary,
}

async fn build_one<S: GraphStore>(
    snapshot: &DiscoveredSnapshot,
    store: &S,
    options: &DiscoveryOptions,
) -> Option<BuildOutcome> {
    let program = load_or_skip(snapshot)?;
    let (graph, stats) = discover(&program.sources, &program.resolver, options.clone());

    let run = BuildRun::new(snapshot.path.display().to_string())
        .with_source_hash(program.content_hash.as_str())
        .with_git_info()
        .with_counts(&graph);
    log_build_run_info(&run);

    // Every snapshot numbers its entities from zero
    let scope = program
        .content_hash
        .get(..SCOPE_LEN)
        .unwrap_or(&program.content_hash);
    let export = export_graph_scoped(&graph, store, Some(scope)).await;
    if !export_build_run(&run, store).await {
        warn!("Build run {} was not recorded", run.id);
    }

    Some(BuildOutcome {
        run,
        resolution_failures: stats.resolution_failures,
        export,
    })
}

fn log_build_run_info(run: &BuildRun) {
    info!(
        "Build run {} for {} (commit: {}, branch: {:?}): {} nodes, {} relationships",
        run.id,
        run.source_path,
        run.commit_sha.as_deref().unwrap_or("none"),
        run.branch,
        run.node_count,
        run.relationship_count
    );
}

fn log_build_summary(report: &BuildReport) {
    info!(
        "✓ Build completed: {} snapshots built, {} skipped, {} nodes, {} relationships, {} resolution failures, {} export failures",
        report.builds,
        report.skipped,
        report.nodes,
        report.relationships,
        report.resolution_failures,
        report.export_failures
    );
}
