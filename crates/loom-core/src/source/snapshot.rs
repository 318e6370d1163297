//! Program snapshots: source units plus pre-resolved semantic tables
//!
//! A snapshot is the JSON hand-off from an external parser and resolver.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{SourceError, SourceSet, SourceUnit};
use crate::resolve::{BindingRecord, DeclarationRecord, SnapshotResolver, TypeRecord};

/// Serialized form of one program
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramSnapshot {
    #[serde(default)]
    pub units: Vec<SourceUnit>,
    #[serde(default)]
    pub declarations: Vec<DeclarationRecord>,
    #[serde(default)]
    pub types: Vec<TypeRecord>,
    #[serde(default)]
    pub bindings: Vec<BindingRecord>,
}

/// A snapshot split into validated units and a resolver
#[derive(Debug)]
pub struct LoadedProgram {
    pub sources: SourceSet,
    pub resolver: SnapshotResolver,
    /// Units skipped as malformed
    pub rejected: Vec<SourceError>,
    /// sha-256 of the snapshot bytes
    pub content_hash: String,
}

impl ProgramSnapshot {
    /// Validate units and build the resolver
    ///
    /// Units without their own content hash inherit `content_hash`.
    #[must_use]
    pub fn into_program(self, content_hash: String) -> LoadedProgram {
        let units = self.units.into_iter().map(|mut unit| {
            if unit.content_hash.is_none() {
                unit.content_hash = Some(content_hash.clone());
            }
            unit
        });
        let (sources, rejected) = SourceSet::from_units(units);
        let resolver = SnapshotResolver::from_records(self.declarations, self.types, self.bindings);

        LoadedProgram {
            sources,
            resolver,
            rejected,
            content_hash,
        }
    }
}

/// Parse snapshot JSON held in memory
///
/// # Errors
/// Returns [`SourceError::Json`] if the text is not a valid snapshot.
pub fn parse_snapshot(text: &str) -> Result<LoadedProgram, SourceError> {
    let snapshot: ProgramSnapshot = serde_json::from_str(text)?;
    Ok(snapshot.into_program(content_hash(text.as_bytes())))
}

/// Read and parse a snapshot file
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid snapshot.
pub fn load_snapshot(path: &Path) -> Result<LoadedProgram, SourceError> {
    let text = std::fs::read_to_string(path)?;
    tracing::debug!("Loaded snapshot {} ({} bytes)", path.display(), text.len());
    parse_snapshot(&text)
}

fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
