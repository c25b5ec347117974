use crate::models::{DeclId, DeclKind, Modifier, TypeRef};

/// Read access to a front end's declaration graph.
///
/// Declarations are addressed by [`DeclId`]; lookups on an unknown handle
/// return `None` and callers turn that into
/// [`ResolveError::UnknownDeclaration`](crate::ResolveError::UnknownDeclaration).
pub trait DeclarationGraph: Send + Sync {
    fn kind(&self, decl: DeclId) -> Option<&DeclKind>;

    /// Simple name of the declaration.
    fn name(&self, decl: DeclId) -> Option<&str>;

    fn modifiers(&self, decl: DeclId) -> Option<&[Modifier]>;

    /// The lexically enclosing declaration; `None` for packages and top-level roots.
    fn enclosing(&self, decl: DeclId) -> Option<DeclId>;

    /// Declared type of the node. For a type declaration this is the type
    /// parameterized by its own type variables.
    fn declared_type(&self, decl: DeclId) -> Option<&TypeRef>;

    /// Declared type parameters, in order.
    fn type_parameters(&self, decl: DeclId) -> &[DeclId];

    /// Direct supertypes (superclass first, then interfaces), expressed in
    /// terms of the declaration's own type parameters.
    fn supertypes(&self, decl: DeclId) -> &[TypeRef];
}
