//! Syntax entity enrichment

use tracing::debug;

use super::engine::DiscoveryEngine;
use super::{fingerprint, DEFAULT_PACKAGE, NOT_AVAILABLE, UNKNOWN_POSITION};
use crate::graph::{Entity, Properties, PropertyValue, RelationshipLabel};
use crate::resolve::Resolver;
use crate::source::{SourceUnit, SyntaxNode, SyntaxRef};

impl<R: Resolver + ?Sized> DiscoveryEngine<'_, R> {
    pub(super) fn enrich_syntax(&mut self, entity: &Entity, node_ref: SyntaxRef) {
        let sources = self.sources;
        let Some(unit) = sources.get(node_ref.unit) else {
            debug!("No unit for syntax entity {}", entity.id());
            return;
        };
        let Some(node) = unit.node(node_ref.node) else {
            debug!("No node for syntax entity {}", entity.id());
            return;
        };

        let mut props = describe_node(node);
        match node.parent {
            None => describe_file(unit, &mut props),
            Some(parent_index) => {
                if let Some(parent_node) = unit.node(parent_index) {
                    let parent = Entity::syntax(
                        SyntaxRef {
                            unit: node_ref.unit,
                            node: parent_index,
                        },
                        parent_node.kind.as_str(),
                    );
                    // Child is the source: the label reads "child parent_of parent"
                    self.graph
                        .connect(entity, &parent, RelationshipLabel::ParentOf, Properties::new());
                }
            }
        }

        if node.resolvable {
            self.resolve_syntax(entity, node_ref, &mut props);
        }

        self.graph.nodes.merge_properties(entity, props);
    }

    fn resolve_syntax(&mut self, entity: &Entity, node_ref: SyntaxRef, props: &mut Properties) {
        match self.resolver.resolve(node_ref) {
            Ok(decl) => {
                let symbol = self.symbol_entity(decl);
                props.insert("resolvedSymbol", PropertyValue::reference(symbol.id()));
                self.graph.nodes.register(symbol);
            }
            Err(e) => {
                props.insert("resolveError", e.message());
                props.insert("resolveErrorKind", e.kind());
                self.note_failure(entity, "Resolution", &e);
            }
        }
    }
}

fn describe_node(node: &SyntaxNode) -> Properties {
    let position = node
        .begin
        .map_or_else(|| UNKNOWN_POSITION.to_string(), |p| p.to_string());

    let mut props = Properties::new()
        .with("nodeType", node.kind.as_str())
        .with("position", position)
        .with("sourceText", node.text.as_str())
        .with("structuralHash", fingerprint(&[node.kind.as_str(), node.text.as_str()]));

    if let Some(begin) = node.begin {
        props.insert("beginLine", begin.line);
        props.insert("beginColumn", begin.column);
    }
    props
}

fn describe_file(unit: &SourceUnit, props: &mut Properties) {
    props.insert(
        "fileName",
        unit.file_name.as_deref().unwrap_or(NOT_AVAILABLE),
    );
    props.insert(
        "packageName",
        unit.package.as_deref().unwrap_or(DEFAULT_PACKAGE),
    );
    if let Some(hash) = &unit.content_hash {
        props.insert("contentHash", hash.as_str());
    }
}
