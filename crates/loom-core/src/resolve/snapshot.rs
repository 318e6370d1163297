//! In-memory resolver backed by a pre-resolved program snapshot

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::model::{DeclId, Declaration, ResolvedType, TypeId};
use super::{ResolveError, Resolver};
use crate::source::SyntaxRef;

/// Failure category as written in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Unresolved,
    Ambiguous,
    Other,
}

/// A recorded resolver failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub kind: FailureKind,
    #[serde(default)]
    pub message: String,
}

impl From<&FailureRecord> for ResolveError {
    fn from(record: &FailureRecord) -> Self {
        let message = record.message.clone();
        match record.kind {
            FailureKind::Unresolved => Self::Unresolved(message),
            FailureKind::Ambiguous => Self::Ambiguous(message),
            FailureKind::Other => Self::Other(message),
        }
    }
}

impl From<&ResolveError> for FailureRecord {
    fn from(error: &ResolveError) -> Self {
        let kind = match error {
            ResolveError::Unresolved(_) => FailureKind::Unresolved,
            ResolveError::Ambiguous(_) => FailureKind::Ambiguous,
            ResolveError::Other(_) => FailureKind::Other,
        };
        Self {
            kind,
            message: error.message().to_string(),
        }
    }
}

/// Declaration entry of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationRecord {
    #[serde(flatten)]
    pub declaration: Declaration,
    #[serde(default)]
    pub return_type: Option<TypeId>,
    #[serde(default)]
    pub return_type_error: Option<FailureRecord>,
    #[serde(default)]
    pub value_type: Option<TypeId>,
    #[serde(default)]
    pub value_type_error: Option<FailureRecord>,
}

impl DeclarationRecord {
    #[must_use]
    pub const fn new(declaration: Declaration) -> Self {
        Self {
            declaration,
            return_type: None,
            return_type_error: None,
            value_type: None,
            value_type_error: None,
        }
    }
}

/// Type entry of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    #[serde(flatten)]
    pub ty: ResolvedType,
    /// Declaration behind a reference type
    #[serde(default)]
    pub declaration: Option<DeclId>,
}

/// Binding of one syntax node to a declaration or a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingRecord {
    pub unit: u32,
    pub node: u32,
    #[serde(default)]
    pub declaration: Option<DeclId>,
    #[serde(default)]
    pub error: Option<FailureRecord>,
}

/// Resolver answering from recorded bindings, declarations and types
#[derive(Debug, Default)]
pub struct SnapshotResolver {
    declarations: Vec<DeclarationRecord>,
    types: Vec<TypeRecord>,
    bindings: HashMap<SyntaxRef, Result<DeclId, ResolveError>>,
}

impl SnapshotResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a resolver from snapshot tables
    #[must_use]
    pub fn from_records(
        declarations: Vec<DeclarationRecord>,
        types: Vec<TypeRecord>,
        bindings: Vec<BindingRecord>,
    ) -> Self {
        let mut resolver = Self {
            declarations,
            types,
            bindings: HashMap::new(),
        };
        for binding in bindings {
            let node = SyntaxRef::new(binding.unit, binding.node);
            let outcome = match (binding.declaration, &binding.error) {
                (Some(decl), _) => Ok(decl),
                (None, Some(error)) => Err(ResolveError::from(error)),
                (None, None) => Err(ResolveError::Unresolved(format!(
                    "binding for {node} names no declaration"
                ))),
            };
            resolver.bindings.insert(node, outcome);
        }
        resolver
    }

    /// Add a declaration, returning its handle
    pub fn add_declaration(&mut self, declaration: Declaration) -> DeclId {
        let id = DeclId(self.declarations.len() as u32);
        self.declarations.push(DeclarationRecord::new(declaration));
        id
    }

    /// Add a type, returning its handle
    pub fn add_type(&mut self, ty: ResolvedType, declaration: Option<DeclId>) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(TypeRecord { ty, declaration });
        id
    }

    /// Record what resolving `node` yields
    pub fn bind(&mut self, node: SyntaxRef, outcome: Result<DeclId, ResolveError>) {
        self.bindings.insert(node, outcome);
    }

    /// Record the return type lookup of a declaration
    pub fn set_return_type(&mut self, decl: DeclId, outcome: Result<TypeId, ResolveError>) {
        if let Some(record) = self.declarations.get_mut(decl.0 as usize) {
            match outcome {
                Ok(ty) => record.return_type = Some(ty),
                Err(e) => record.return_type_error = Some(FailureRecord::from(&e)),
            }
        }
    }

    /// Record the value type lookup of a declaration
    pub fn set_value_type(&mut self, decl: DeclId, outcome: Result<TypeId, ResolveError>) {
        if let Some(record) = self.declarations.get_mut(decl.0 as usize) {
            match outcome {
                Ok(ty) => record.value_type = Some(ty),
                Err(e) => record.value_type_error = Some(FailureRecord::from(&e)),
            }
        }
    }

    #[must_use]
    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
    }

    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    fn record(&self, decl: DeclId) -> Result<&DeclarationRecord, ResolveError> {
        self.declarations
            .get(decl.0 as usize)
            .ok_or_else(|| ResolveError::Other(format!("unknown declaration {}", decl.0)))
    }

    fn type_record(&self, ty: TypeId) -> Result<&TypeRecord, ResolveError> {
        self.types
            .get(ty.0 as usize)
            .ok_or_else(|| ResolveError::Other(format!("unknown type {}", ty.0)))
    }

    fn lookup_type(
        &self,
        decl: DeclId,
        found: Option<TypeId>,
        failure: Option<&FailureRecord>,
        what: &str,
    ) -> Result<TypeId, ResolveError> {
        match (found, failure) {
            (Some(ty), _) => {
                self.type_record(ty)?;
                Ok(ty)
            }
            (None, Some(failure)) => Err(ResolveError::from(failure)),
            (None, None) => Err(ResolveError::Unresolved(format!(
                "{what} of {} is not recorded",
                self.record(decl)?.declaration.name
            ))),
        }
    }
}

impl Resolver for SnapshotResolver {
    fn resolve(&self, node: SyntaxRef) -> Result<DeclId, ResolveError> {
        match self.bindings.get(&node) {
            Some(outcome) => outcome.clone(),
            None => Err(ResolveError::Unresolved(format!("no binding for {node}"))),
        }
    }

    fn declaration(&self, decl: DeclId) -> Result<&Declaration, ResolveError> {
        self.record(decl).map(|r| &r.declaration)
    }

    fn return_type(&self, decl: DeclId) -> Result<TypeId, ResolveError> {
        let record = self.record(decl)?;
        self.lookup_type(
            decl,
            record.return_type,
            record.return_type_error.as_ref(),
            "return type",
        )
    }

    fn value_type(&self, decl: DeclId) -> Result<TypeId, ResolveError> {
        let record = self.record(decl)?;
        self.lookup_type(
            decl,
            record.value_type,
            record.value_type_error.as_ref(),
            "value type",
        )
    }

    fn resolved_type(&self, ty: TypeId) -> Result<&ResolvedType, ResolveError> {
        self.type_record(ty).map(|r| &r.ty)
    }

    fn type_declaration(&self, ty: TypeId) -> Option<DeclId> {
        self.types.get(ty.0 as usize).and_then(|r| r.declaration)
    }
}
