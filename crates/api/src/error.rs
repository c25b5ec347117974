use crate::models::DeclId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Unknown declaration: {0}")]
    UnknownDeclaration(DeclId),
    #[error("Declaration {0} has no enclosing type declaration")]
    NoEnclosingType(DeclId),
    #[error("Enclosing chain of {decl} exceeds {limit} levels")]
    EnclosingCycle { decl: DeclId, limit: usize },
    #[error("Containing type is not a declared type: {0}")]
    NotDeclaredType(String),
    #[error("Raw reference to {decl}: expected {expected} type arguments, found {found}")]
    RawType {
        decl: DeclId,
        expected: usize,
        found: usize,
    },
    #[error("Wildcard type argument in containing type {0}")]
    WildcardArgument(DeclId),
    #[error("{member} is not a member of {containing}")]
    NotAMember { member: DeclId, containing: DeclId },
    #[error("{contributor} is not related to {enclosing}, the enclosing type of {element}")]
    UnrelatedContributor {
        element: DeclId,
        enclosing: DeclId,
        contributor: DeclId,
    },
    #[error("Hierarchy of {0} exceeds {1} levels")]
    HierarchyTooDeep(DeclId, usize),
}

pub type ResolveResult<T> = std::result::Result<T, ResolveError>;
