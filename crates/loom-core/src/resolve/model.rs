//! Resolved declarations and types

use serde::{Deserialize, Serialize};

/// Handle of a resolved declaration, owned by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclId(pub u32);

/// Handle of a resolved type, owned by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

/// Category of a resolved declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclCategory {
    Method,
    Constructor,
    Field,
    Parameter,
    LocalVariable,
    EnumConstant,
    ReferenceType,
    Other,
}

impl DeclCategory {
    /// Declarations identified by a callable signature
    #[must_use]
    pub const fn is_method_like(self) -> bool {
        matches!(self, Self::Method | Self::Constructor)
    }

    /// Declarations with a return type; constructors have none
    #[must_use]
    pub const fn has_return_type(self) -> bool {
        matches!(self, Self::Method)
    }

    /// Declarations with a declared value type
    #[must_use]
    pub const fn is_value_like(self) -> bool {
        matches!(
            self,
            Self::Field | Self::Parameter | Self::LocalVariable | Self::EnumConstant
        )
    }

    /// Store label for symbol entities of this category
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Method => "ResolvedMethod",
            Self::Constructor => "ResolvedConstructor",
            Self::Field => "ResolvedField",
            Self::Parameter => "ResolvedParameter",
            Self::LocalVariable => "ResolvedLocalVariable",
            Self::EnumConstant => "ResolvedEnumConstant",
            Self::ReferenceType => "ResolvedReferenceTypeDeclaration",
            Self::Other => "ResolvedDeclaration",
        }
    }
}

impl std::fmt::Display for DeclCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Field => "field",
            Self::Parameter => "parameter",
            Self::LocalVariable => "local_variable",
            Self::EnumConstant => "enum_constant",
            Self::ReferenceType => "reference_type",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// A resolved declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Simple name
    pub name: String,
    pub category: DeclCategory,
    /// Fully qualified name, for types and members
    #[serde(default)]
    pub qualified_name: Option<String>,
    /// Qualified signature, for methods and constructors
    #[serde(default)]
    pub qualified_signature: Option<String>,
}

impl Declaration {
    #[must_use]
    pub fn new(name: impl Into<String>, category: DeclCategory) -> Self {
        Self {
            name: name.into(),
            category,
            qualified_name: None,
            qualified_signature: None,
        }
    }

    #[must_use]
    pub fn with_qualified_name(mut self, qualified_name: impl Into<String>) -> Self {
        self.qualified_name = Some(qualified_name.into());
        self
    }

    #[must_use]
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.qualified_signature = Some(signature.into());
        self
    }
}

/// Category of a resolved type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    Primitive,
    Reference,
    Array,
    TypeVariable,
    Wildcard,
    Null,
    Void,
    Other,
}

impl TypeCategory {
    /// Store label for type entities of this category
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primitive => "ResolvedPrimitiveType",
            Self::Reference => "ResolvedReferenceType",
            Self::Array => "ResolvedArrayType",
            Self::TypeVariable => "ResolvedTypeVariable",
            Self::Wildcard => "ResolvedWildcard",
            Self::Null => "NullType",
            Self::Void => "ResolvedVoidType",
            Self::Other => "ResolvedType",
        }
    }
}

impl std::fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Primitive => "primitive",
            Self::Reference => "reference",
            Self::Array => "array",
            Self::TypeVariable => "type_variable",
            Self::Wildcard => "wildcard",
            Self::Null => "null",
            Self::Void => "void",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// A resolved type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedType {
    /// Human-readable description, e.g. `int` or `java.util.List<String>`
    pub description: String,
    pub category: TypeCategory,
    #[serde(default)]
    pub numeric: bool,
}

impl ResolvedType {
    #[must_use]
    pub fn new(description: impl Into<String>, category: TypeCategory) -> Self {
        Self {
            description: description.into(),
            category,
            numeric: false,
        }
    }

    #[must_use]
    pub const fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    #[must_use]
    pub const fn is_reference_type(&self) -> bool {
        matches!(self.category, TypeCategory::Reference)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.category, TypeCategory::Null)
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.numeric
    }

    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self.category, TypeCategory::Primitive)
    }

    /// Anything held by reference: reference types, arrays, type
    /// variables, wildcards and the null type
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(
            self.category,
            TypeCategory::Reference
                | TypeCategory::Array
                | TypeCategory::TypeVariable
                | TypeCategory::Wildcard
                | TypeCategory::Null
        )
    }
}
