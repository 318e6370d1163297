//! CLI commands

pub mod build;
pub mod discover;

use std::path::Path;

use loom_core::scanner::{DiscoveredSnapshot, Scanner};
use loom_core::source::LoadedProgram;
use loom_core::load_snapshot;
use tracing::{info, warn};

/// Snapshots under `path`, or `path` itself when it is a file
fn find_snapshots(path: &Path) -> Vec<DiscoveredSnapshot> {
    let snapshots = Scanner::new(path).scan();
    info!("Found {} snapshots under {}", snapshots.len(), path.display());
    snapshots
}

/// Load one snapshot, reporting and skipping it on failure
fn load_or_skip(snapshot: &DiscoveredSnapshot) -> Option<LoadedProgram> {
    match load_snapshot(&snapshot.path) {
        Ok(program) => {
            for rejected in &program.rejected {
                warn!("{}: {}", snapshot.path.display(), rejected);
            }
            Some(program)
        }
        Err(e) => {
            warn!("Skipping snapshot {}: {}", snapshot.path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests;
