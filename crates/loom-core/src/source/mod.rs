//! Source module: parsed source units fed into discovery
//!
//! The parser itself lives outside this crate. A unit arrives as an arena of
//! syntax nodes with parent links plus optional file-level metadata, and is
//! validated before it may seed any entity.

mod snapshot;
mod unit;

use std::collections::BTreeMap;

use thiserror::Error;

pub use snapshot::{load_snapshot, parse_snapshot, LoadedProgram, ProgramSnapshot};
pub use unit::{NodeIndex, Position, SourceUnit, SyntaxNode, SyntaxRef, UnitId};

/// Errors raised while reading or admitting source units
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Malformed source {unit}: {reason}")]
    Malformed { unit: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validated units addressed by their snapshot position
#[derive(Debug, Default)]
pub struct SourceSet {
    units: BTreeMap<UnitId, SourceUnit>,
}

impl SourceSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a unit and add it under `id`
    ///
    /// # Errors
    /// Returns [`SourceError::Malformed`] if the unit fails validation; the
    /// set is left unchanged.
    pub fn admit(&mut self, id: UnitId, unit: SourceUnit) -> Result<(), SourceError> {
        unit.validate()?;
        self.units.insert(id, unit);
        Ok(())
    }

    /// Admit units in order, numbering them from zero
    ///
    /// Malformed units are logged and returned alongside the set; they never
    /// stop the remaining units from being admitted.
    pub fn from_units(units: impl IntoIterator<Item = SourceUnit>) -> (Self, Vec<SourceError>) {
        let mut set = Self::new();
        let mut rejected = Vec::new();
        for (i, unit) in units.into_iter().enumerate() {
            if let Err(e) = set.admit(UnitId(i as u32), unit) {
                tracing::warn!("Skipping unit {}: {}", i, e);
                rejected.push(e);
            }
        }
        (set, rejected)
    }

    #[must_use]
    pub fn get(&self, id: UnitId) -> Option<&SourceUnit> {
        self.units.get(&id)
    }

    /// Look up a single node by reference
    #[must_use]
    pub fn node(&self, node: SyntaxRef) -> Option<&SyntaxNode> {
        self.get(node.unit).and_then(|u| u.node(node.node))
    }

    pub fn iter(&self) -> impl Iterator<Item = (UnitId, &SourceUnit)> {
        self.units.iter().map(|(id, unit)| (*id, unit))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests;
