//! The fixpoint loop and entity dispatch

use tracing::{debug, info};

use super::{DiscoveryOptions, DiscoveryStats};
use crate::graph::{Entity, EntityKey, GraphBuild};
use crate::resolve::{DeclCategory, DeclId, ResolveError, Resolver, TypeCategory, TypeId};
use crate::source::{SourceSet, SyntaxRef, UnitId};

/// Expands seeded syntax entities into a closed graph
///
/// Owns the [`GraphBuild`] for the run; borrows the sources and the resolver.
pub struct DiscoveryEngine<'a, R: Resolver + ?Sized> {
    pub(super) sources: &'a SourceSet,
    pub(super) resolver: &'a R,
    pub(super) options: DiscoveryOptions,
    pub(super) graph: GraphBuild,
    pub(super) stats: DiscoveryStats,
}

impl<'a, R: Resolver + ?Sized> DiscoveryEngine<'a, R> {
    #[must_use]
    pub fn new(sources: &'a SourceSet, resolver: &'a R) -> Self {
        Self {
            sources,
            resolver,
            options: DiscoveryOptions::default(),
            graph: GraphBuild::new(),
            stats: DiscoveryStats::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: DiscoveryOptions) -> Self {
        self.options = options;
        self
    }

    /// Seed every node of every admitted unit
    ///
    /// Returns the number of entities added to the frontier.
    pub fn seed(&mut self) -> usize {
        let sources = self.sources;
        sources.iter().map(|(id, _)| self.seed_unit(id)).sum()
    }

    /// Seed every node of one unit
    pub fn seed_unit(&mut self, unit_id: UnitId) -> usize {
        let Some(unit) = self.sources.get(unit_id) else {
            debug!("Cannot seed unknown unit {}", unit_id.0);
            return 0;
        };

        let mut added = 0;
        for (index, node) in unit.nodes() {
            let node_ref = SyntaxRef {
                unit: unit_id,
                node: index,
            };
            if self
                .graph
                .nodes
                .register(Entity::syntax(node_ref, node.kind.as_str()))
            {
                added += 1;
            }
        }
        self.stats.seeded += added;
        debug!("Seeded {} syntax entities from {}", added, unit.display_name());
        added
    }

    /// Drain and enrich the frontier until a drain comes back empty
    pub fn run(&mut self) -> &DiscoveryStats {
        loop {
            let frontier = self.graph.nodes.drain_frontier();
            if frontier.is_empty() {
                break;
            }
            self.stats.waves += 1;
            debug!(
                "Discovery wave {}: {} new entities",
                self.stats.waves,
                frontier.len()
            );
            for entity in &frontier {
                self.enrich(entity);
            }
        }

        info!(
            "Discovery reached fixpoint after {} waves: {} entities, {} relationships, {} resolution failures",
            self.stats.waves,
            self.graph.node_count(),
            self.graph.relationship_count(),
            self.stats.resolution_failures
        );
        &self.stats
    }

    fn enrich(&mut self, entity: &Entity) {
        match entity.key {
            EntityKey::Syntax(node) => {
                self.stats.syntax_enriched += 1;
                self.enrich_syntax(entity, node);
            }
            EntityKey::Symbol { decl } => {
                self.stats.symbols_enriched += 1;
                self.enrich_symbol(entity, decl);
            }
            EntityKey::Type { ty } => {
                self.stats.types_enriched += 1;
                self.enrich_type(entity, ty);
            }
        }
    }

    /// Entity for a declaration, labeled by its category
    pub(super) fn symbol_entity(&self, decl: DeclId) -> Entity {
        let category = self
            .resolver
            .declaration(decl)
            .map_or(DeclCategory::Other, |d| d.category);
        Entity::symbol(decl, category)
    }

    /// Entity for a type, labeled by its category
    pub(super) fn type_entity(&self, ty: TypeId) -> Entity {
        let category = self
            .resolver
            .resolved_type(ty)
            .map_or(TypeCategory::Other, |t| t.category);
        Entity::resolved_type(ty, category)
    }

    pub(super) fn note_failure(&mut self, entity: &Entity, what: &str, error: &ResolveError) {
        self.stats.resolution_failures += 1;
        debug!("{} failed for {}: {}", what, entity.id(), error);
    }

    #[must_use]
    pub fn graph(&self) -> &GraphBuild {
        &self.graph
    }

    #[must_use]
    pub fn stats(&self) -> &DiscoveryStats {
        &self.stats
    }

    /// Finish the run, handing over the graph and counters
    #[must_use]
    pub fn finish(self) -> (GraphBuild, DiscoveryStats) {
        (self.graph, self.stats)
    }
}

/// Seed all units and run discovery to its fixpoint
#[must_use]
pub fn discover<R: Resolver + ?Sized>(
    sources: &SourceSet,
    resolver: &R,
    options: DiscoveryOptions,
) -> (GraphBuild, DiscoveryStats) {
    let mut engine = DiscoveryEngine::new(sources, resolver).with_options(options);
    engine.seed();
    engine.run();
    engine.finish()
}
