use super::symbol::DeclId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A type as seen by the analysis, referring to declarations by handle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// Primitive type name (e.g., "int", "boolean")
    Primitive { name: String },

    Void,

    /// Class or interface type, possibly parameterized (e.g., `List<String>`)
    Declared { decl: DeclId, args: Vec<TypeRef> },

    /// Reference to a type parameter declaration (e.g., `T`)
    TypeVar { decl: DeclId },

    /// Array type (e.g., `String[]`)
    Array {
        element: Box<TypeRef>,
        dimensions: usize,
    },

    /// Wildcard type argument (e.g., `? extends Number`)
    Wildcard {
        bound: Option<Box<TypeRef>>,
        is_upper_bound: bool, // true: extends, false: super
    },

    /// Method or constructor signature
    Executable {
        type_vars: Vec<DeclId>,
        params: Vec<TypeRef>,
        ret: Box<TypeRef>,
        thrown: Vec<TypeRef>,
    },

    Unknown,
}

impl TypeRef {
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeRef::Primitive { name: name.into() }
    }

    /// Non-generic declared type.
    pub fn simple(decl: DeclId) -> Self {
        TypeRef::Declared { decl, args: vec![] }
    }

    pub fn declared(decl: DeclId, args: Vec<TypeRef>) -> Self {
        TypeRef::Declared { decl, args }
    }

    pub fn var(decl: DeclId) -> Self {
        TypeRef::TypeVar { decl }
    }

    pub fn array_of(element: TypeRef) -> Self {
        match element {
            TypeRef::Array {
                element,
                dimensions,
            } => TypeRef::Array {
                element,
                dimensions: dimensions + 1,
            },
            other => TypeRef::Array {
                element: Box::new(other),
                dimensions: 1,
            },
        }
    }

    pub fn method(params: Vec<TypeRef>, ret: TypeRef) -> Self {
        TypeRef::Executable {
            type_vars: vec![],
            params,
            ret: Box::new(ret),
            thrown: vec![],
        }
    }

    /// The declaration handle and arguments of a declared type.
    pub fn as_declared(&self) -> Option<(DeclId, &[TypeRef])> {
        match self {
            TypeRef::Declared { decl, args } => Some((*decl, args.as_slice())),
            _ => None,
        }
    }
}

impl Default for TypeRef {
    fn default() -> Self {
        TypeRef::Unknown
    }
}
