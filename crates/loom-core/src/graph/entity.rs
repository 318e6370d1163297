//! Entity identity model
//!
//! An entity wraps one discovered program element: a syntax node, a resolved
//! declaration or a resolved type. Identity is the wrapped element's reference
//! identity (its arena handle), never its structure.

use serde::{Deserialize, Serialize};

use crate::resolve::{DeclCategory, DeclId, TypeCategory, TypeId};
use crate::source::SyntaxRef;

/// Discriminant of an [`EntityKey`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Syntax,
    Symbol,
    Type,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Syntax => "syntax",
            Self::Symbol => "symbol",
            Self::Type => "type",
        };
        write!(f, "{s}")
    }
}

/// Reference identity of a wrapped element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityKey {
    Syntax(SyntaxRef),
    Symbol { decl: DeclId },
    Type { ty: TypeId },
}

impl EntityKey {
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Syntax(_) => EntityKind::Syntax,
            Self::Symbol { .. } => EntityKind::Symbol,
            Self::Type { .. } => EntityKind::Type,
        }
    }

    /// Stable string id used when exporting to a store
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::Syntax(r) => format!("syntax:{}:{}", r.unit.0, r.node.0),
            Self::Symbol { decl } => format!("symbol:{}", decl.0),
            Self::Type { ty } => format!("type:{}", ty.0),
        }
    }
}

/// A discovered entity: identity key plus its kind tag
///
/// Equality and hashing only look at the key. Reference-identical elements
/// always produce the same label, so the label never disambiguates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub key: EntityKey,
    /// Concrete kind tag, used as the store label
    pub label: String,
}

impl Entity {
    /// Wrap a syntax node with its concrete syntax kind
    #[must_use]
    pub fn syntax(node: SyntaxRef, kind: impl Into<String>) -> Self {
        Self {
            key: EntityKey::Syntax(node),
            label: kind.into(),
        }
    }

    /// Wrap a resolved declaration
    #[must_use]
    pub fn symbol(decl: DeclId, category: DeclCategory) -> Self {
        Self {
            key: EntityKey::Symbol { decl },
            label: category.label().to_string(),
        }
    }

    /// Wrap a resolved type
    #[must_use]
    pub fn resolved_type(ty: TypeId, category: TypeCategory) -> Self {
        Self {
            key: EntityKey::Type { ty },
            label: category.label().to_string(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.key.kind()
    }

    #[must_use]
    pub fn id(&self) -> String {
        self.key.id()
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Entity {}

impl std::hash::Hash for Entity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
