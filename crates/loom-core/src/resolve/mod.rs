//! Resolve module: the symbol resolver capability
//!
//! Discovery never inspects source text to find declarations. It asks a
//! [`Resolver`] to map syntax nodes to declarations and declarations to
//! types; every lookup may fail and failures are part of the result.

mod model;
mod snapshot;

use thiserror::Error;

use crate::source::SyntaxRef;

pub use model::{DeclCategory, DeclId, Declaration, ResolvedType, TypeCategory, TypeId};
pub use snapshot::{
    BindingRecord, DeclarationRecord, FailureKind, FailureRecord, SnapshotResolver, TypeRecord,
};

/// Resolution failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Symbol or type could not be resolved
    #[error("Unresolved reference: {0}")]
    Unresolved(String),

    /// Several candidates and no way to pick one
    #[error("Ambiguous resolution: {0}")]
    Ambiguous(String),

    #[error("Resolver failure: {0}")]
    Other(String),
}

impl ResolveError {
    /// Short category name recorded next to the message
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unresolved(_) => "unresolved",
            Self::Ambiguous(_) => "ambiguous",
            Self::Other(_) => "other",
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Unresolved(m) | Self::Ambiguous(m) | Self::Other(m) => m,
        }
    }
}

/// Symbol and type resolution over a set of source units
///
/// Handles returned by one call must stay valid for the resolver's lifetime,
/// and resolving the same element twice must return the same handle.
pub trait Resolver {
    /// Resolve a syntax node to the declaration it declares or references
    ///
    /// # Errors
    /// Returns the resolver's failure for this node.
    fn resolve(&self, node: SyntaxRef) -> Result<DeclId, ResolveError>;

    /// Describe a declaration
    ///
    /// # Errors
    /// Returns [`ResolveError::Other`] for an unknown handle.
    fn declaration(&self, decl: DeclId) -> Result<&Declaration, ResolveError>;

    /// Return type of a method-like declaration
    ///
    /// # Errors
    /// Returns [`ResolveError::Unresolved`] when the type cannot be resolved.
    fn return_type(&self, decl: DeclId) -> Result<TypeId, ResolveError>;

    /// Declared type of a value-like declaration
    ///
    /// # Errors
    /// Returns [`ResolveError::Unresolved`] or [`ResolveError::Ambiguous`].
    fn value_type(&self, decl: DeclId) -> Result<TypeId, ResolveError>;

    /// Describe a type
    ///
    /// # Errors
    /// Returns [`ResolveError::Other`] for an unknown handle.
    fn resolved_type(&self, ty: TypeId) -> Result<&ResolvedType, ResolveError>;

    /// Declaration behind a reference type, if the resolver has one
    fn type_declaration(&self, ty: TypeId) -> Option<DeclId>;
}
