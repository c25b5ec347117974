use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Package,
    Module,
    Class,
    Interface,
    Enum,
    Annotation,
    Method,
    Constructor,
    Field,
    Parameter,
    TypeParameter,
    // Extension
    Custom(#[schemars(with = "String")] String),
}

impl DeclKind {
    /// Class, interface, enum or annotation declarations.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            DeclKind::Class | DeclKind::Interface | DeclKind::Enum | DeclKind::Annotation
        )
    }
}

impl From<&str> for DeclKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "package" => DeclKind::Package,
            "module" => DeclKind::Module,
            "class" => DeclKind::Class,
            "interface" => DeclKind::Interface,
            "enum" => DeclKind::Enum,
            "annotation" => DeclKind::Annotation,
            "method" => DeclKind::Method,
            "constructor" => DeclKind::Constructor,
            "field" => DeclKind::Field,
            "parameter" => DeclKind::Parameter,
            "type_parameter" => DeclKind::TypeParameter,
            _ => DeclKind::Custom(s.to_string()),
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeclKind::Package => "package",
            DeclKind::Module => "module",
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Enum => "enum",
            DeclKind::Annotation => "annotation",
            DeclKind::Method => "method",
            DeclKind::Constructor => "constructor",
            DeclKind::Field => "field",
            DeclKind::Parameter => "parameter",
            DeclKind::TypeParameter => "type_parameter",
            DeclKind::Custom(s) => s,
        };
        f.write_str(s)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub enum EdgeType {
    // Structural relationships
    Contains,
    // Inheritance/Implementation
    InheritsFrom,
    Implements,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub struct GraphEdge {
    pub edge_type: EdgeType,
}

impl GraphEdge {
    pub fn new(edge_type: EdgeType) -> Self {
        Self { edge_type }
    }
}
