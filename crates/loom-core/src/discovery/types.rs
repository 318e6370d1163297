//! Type entity enrichment

use super::engine::DiscoveryEngine;
use super::{fingerprint, NOT_AVAILABLE};
use crate::graph::{Entity, Properties, RelationshipLabel};
use crate::resolve::{ResolvedType, Resolver, TypeId};

impl<R: Resolver + ?Sized> DiscoveryEngine<'_, R> {
    pub(super) fn enrich_type(&mut self, entity: &Entity, ty: TypeId) {
        let resolver = self.resolver;
        let resolved = match resolver.resolved_type(ty) {
            Ok(t) => t,
            Err(e) => {
                self.graph
                    .nodes
                    .set_property(entity, "typeError", e.to_string());
                self.note_failure(entity, "Type lookup", &e);
                return;
            }
        };

        let category_name = resolved.category.to_string();
        let mut props = classify(resolved).with(
            "structuralHash",
            fingerprint(&[category_name.as_str(), resolved.description.as_str()]),
        );

        if resolved.is_reference_type() {
            self.link_reference_type(entity, ty, resolved, &mut props);
        } else {
            props.insert("fullName", resolved.description.as_str());
            props.insert("simpleName", resolved.description.as_str());
            props.insert("typeDeclaration", NOT_AVAILABLE);
        }

        self.graph.nodes.merge_properties(entity, props);
    }

    fn link_reference_type(
        &mut self,
        entity: &Entity,
        ty: TypeId,
        resolved: &ResolvedType,
        props: &mut Properties,
    ) {
        if self.options.type_self_loops {
            // The reference-type view of a reference type is the type itself
            let uses = Properties::new().with("uses", "reference_type");
            self.graph
                .connect(entity, entity, RelationshipLabel::TypeOf, uses);
        }

        let resolver = self.resolver;
        let Some(decl) = resolver.type_declaration(ty) else {
            props.insert("fullName", resolved.description.as_str());
            props.insert("simpleName", resolved.description.as_str());
            props.insert("typeDeclaration", NOT_AVAILABLE);
            return;
        };

        let symbol = self.symbol_entity(decl);
        self.graph.nodes.register(symbol);

        match resolver.declaration(decl) {
            Ok(declaration) => {
                let full_name = declaration
                    .qualified_name
                    .as_deref()
                    .unwrap_or(&resolved.description);
                props.insert("fullName", full_name);
                props.insert("simpleName", declaration.name.as_str());
                props.insert("typeDeclaration", declaration.name.as_str());
            }
            Err(e) => {
                props.insert("fullName", resolved.description.as_str());
                props.insert("simpleName", resolved.description.as_str());
                props.insert("typeDeclaration", NOT_AVAILABLE);
                self.note_failure(entity, "Type declaration lookup", &e);
            }
        }
    }
}

fn classify(ty: &ResolvedType) -> Properties {
    Properties::new()
        .with("isReferenceType", ty.is_reference_type())
        .with("isNullType", ty.is_null())
        .with("isNumeric", ty.is_numeric())
        .with("isPrimitive", ty.is_primitive())
        .with("isReference", ty.is_reference())
}
