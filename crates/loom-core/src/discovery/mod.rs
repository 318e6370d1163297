//! Discovery module: worklist-driven graph expansion to a fixpoint
//!
//! Seeds every syntax node of every admitted unit, then repeatedly drains
//! the node registry's frontier and enriches each drained entity by kind.
//! Enrichment may register new entities, which land in the next wave. The
//! loop ends when a drain comes back empty.

mod engine;
mod fingerprint;
mod symbol;
mod syntax;
mod types;

use serde::Serialize;

pub use engine::{discover, DiscoveryEngine};
pub use fingerprint::fingerprint;

/// Value recorded when a property has no meaningful answer
pub const NOT_AVAILABLE: &str = "N/A";
/// Package recorded for units without a package declaration
pub const DEFAULT_PACKAGE: &str = "default";
/// Position recorded for nodes without a begin position
pub const UNKNOWN_POSITION: &str = "unknown";

/// Knobs for one discovery run
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Register the `type_of` edge from a reference type to itself
    pub type_self_loops: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            type_self_loops: true,
        }
    }
}

impl DiscoveryOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_type_self_loops(mut self, enabled: bool) -> Self {
        self.type_self_loops = enabled;
        self
    }
}

/// Counters collected while discovering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscoveryStats {
    /// Non-empty frontier drains
    pub waves: usize,
    /// Syntax entities seeded from source units
    pub seeded: usize,
    pub syntax_enriched: usize,
    pub symbols_enriched: usize,
    pub types_enriched: usize,
    /// Resolver failures absorbed into properties
    pub resolution_failures: usize,
}

impl DiscoveryStats {
    /// Entities passed to enrichment so far
    #[must_use]
    pub const fn enriched(&self) -> usize {
        self.syntax_enriched + self.symbols_enriched + self.types_enriched
    }
}

#[cfg(test)]
mod tests;
