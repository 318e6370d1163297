//! Symbol entity enrichment

use super::engine::DiscoveryEngine;
use super::{fingerprint, NOT_AVAILABLE};
use crate::graph::{Entity, Properties, RelationshipLabel};
use crate::resolve::{DeclCategory, DeclId, Declaration, ResolveError, Resolver, TypeId};

impl<R: Resolver + ?Sized> DiscoveryEngine<'_, R> {
    pub(super) fn enrich_symbol(&mut self, entity: &Entity, decl: DeclId) {
        let resolver = self.resolver;
        let declaration = match resolver.declaration(decl) {
            Ok(d) => d,
            Err(e) => {
                self.graph
                    .nodes
                    .set_property(entity, "declarationError", e.to_string());
                self.note_failure(entity, "Declaration lookup", &e);
                return;
            }
        };

        let mut props = Properties::new()
            .with("name", declaration.name.as_str())
            .with("category", declaration.category.to_string())
            .with("qualifiedSignature", self.qualified_signature(decl, declaration));

        let category = declaration.category;
        if category.has_return_type() {
            self.link_return_type(entity, decl, &mut props);
        } else if category.is_value_like() {
            self.link_value_type(entity, decl, &mut props);
        } else if category == DeclCategory::ReferenceType {
            // Supertypes and members are not walked from here
            let qualified = declaration
                .qualified_name
                .as_deref()
                .unwrap_or(&declaration.name);
            props.insert("simpleName", declaration.name.as_str());
            props.insert("qualifiedName", qualified);
            let category_name = category.to_string();
            props.insert(
                "identityHash",
                fingerprint(&[category_name.as_str(), qualified]),
            );
        }

        self.graph.nodes.merge_properties(entity, props);
    }

    fn link_return_type(&mut self, entity: &Entity, decl: DeclId, props: &mut Properties) {
        match self.resolver.return_type(decl) {
            Ok(ty) => {
                let target = self.type_entity(ty);
                let uses = Properties::new().with("uses", "return_type");
                self.graph
                    .connect(entity, &target, RelationshipLabel::ReturnTypeOf, uses);
                props.insert("returnType", self.describe_type(ty));
            }
            Err(e) => {
                props.insert("returnTypeError", e.to_string());
                self.note_failure(entity, "Return type lookup", &e);
            }
        }
    }

    fn link_value_type(&mut self, entity: &Entity, decl: DeclId, props: &mut Properties) {
        match self.resolver.value_type(decl) {
            Ok(ty) => {
                let target = self.type_entity(ty);
                let uses = Properties::new().with("uses", "value_type");
                self.graph
                    .connect(entity, &target, RelationshipLabel::ValueTypeOf, uses);
                props.insert("valueType", self.describe_type(ty));
            }
            Err(e) => {
                let key = match e {
                    ResolveError::Ambiguous(_) => "valueTypeAmbiguity",
                    ResolveError::Unresolved(_) | ResolveError::Other(_) => "valueTypeError",
                };
                props.insert(key, e.to_string());
                self.note_failure(entity, "Value type lookup", &e);
            }
        }
    }

    /// Best-effort signature; any lookup failure yields the sentinel
    fn qualified_signature(&self, decl: DeclId, declaration: &Declaration) -> String {
        let category = declaration.category;
        let signature = if category.is_method_like() {
            declaration.qualified_signature.clone()
        } else if category == DeclCategory::ReferenceType {
            declaration.qualified_name.clone()
        } else if category.is_value_like() {
            self.resolver
                .value_type(decl)
                .and_then(|ty| self.resolver.resolved_type(ty))
                .ok()
                .map(|t| t.description.clone())
        } else {
            None
        };
        signature.unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    fn describe_type(&self, ty: TypeId) -> String {
        self.resolver
            .resolved_type(ty)
            .map_or_else(|_| NOT_AVAILABLE.to_string(), |t| t.description.clone())
    }
}
