use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to a declaration in the front end's symbol table.
///
/// Two handles are the same declaration iff they compare equal; no structural
/// comparison is ever performed.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(transparent)]
pub struct DeclId(pub u32);

impl DeclId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(
    Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
    Sealed,
    Custom(#[schemars(with = "String")] String),
}

impl From<&str> for Modifier {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "public" => Modifier::Public,
            "protected" => Modifier::Protected,
            "private" => Modifier::Private,
            "abstract" => Modifier::Abstract,
            "default" => Modifier::Default,
            "static" => Modifier::Static,
            "final" => Modifier::Final,
            "transient" => Modifier::Transient,
            "volatile" => Modifier::Volatile,
            "synchronized" => Modifier::Synchronized,
            "native" => Modifier::Native,
            "strictfp" => Modifier::Strictfp,
            "sealed" => Modifier::Sealed,
            _ => Modifier::Custom(s.to_string()),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Default => "default",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
            Modifier::Sealed => "sealed",
            Modifier::Custom(s) => s,
        };
        f.write_str(s)
    }
}
