use crate::error::ResolveResult;
use crate::models::{DeclId, TypeRef};

/// Type-resolution service used to view a member through a containing type.
pub trait TypeResolver: Send + Sync {
    /// Type of `member` when viewed as a member of `containing`, with the
    /// containing type's arguments substituted for the type variables of the
    /// member's enclosing declaration.
    fn as_member_of(&self, containing: &TypeRef, member: DeclId) -> ResolveResult<TypeRef>;
}

impl<R: TypeResolver + ?Sized> TypeResolver for &R {
    fn as_member_of(&self, containing: &TypeRef, member: DeclId) -> ResolveResult<TypeRef> {
        (**self).as_member_of(containing, member)
    }
}

impl<R: TypeResolver + ?Sized> TypeResolver for std::sync::Arc<R> {
    fn as_member_of(&self, containing: &TypeRef, member: DeclId) -> ResolveResult<TypeRef> {
        (**self).as_member_of(containing, member)
    }
}
