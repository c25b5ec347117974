//! A declaration, optionally contributed by a type other than the one that
//! lexically encloses it.

use crate::config::ResolverConfig;
use hierscope_api::models::{DeclId, DeclKind, TypeRef};
use hierscope_api::{DeclarationGraph, ResolveError, ResolveResult, TypeResolver};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fmt;

/// Upper bound on the enclosing chain walked by [`enclosing_type_of`].
pub const MAX_ENCLOSING_DEPTH: usize = 256;

/// An object that has a [`SourceElement`].
pub trait HasSourceElement {
    /// The source element associated with this object.
    fn source_element(&self) -> SourceElement;
}

/// A declaration together with the type it was reached through, if that type
/// differs from the declaration's enclosing type.
///
/// Equality, ordering and hashing use the handles only.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
pub struct SourceElement {
    element: DeclId,
    contributed_by: Option<DeclId>,
}

impl SourceElement {
    /// The element considered in its own lexical context.
    pub fn for_element(element: DeclId) -> Self {
        Self {
            element,
            contributed_by: None,
        }
    }

    /// The element as reached while processing `contributed_by`.
    ///
    /// The relationship between the two is not checked here; see
    /// [`SourceElement::contributed_checked`].
    pub fn contributed(element: DeclId, contributed_by: DeclId) -> Self {
        Self {
            element,
            contributed_by: Some(contributed_by),
        }
    }

    /// Like [`SourceElement::contributed`], but fails unless the element's
    /// enclosing type is `contributed_by` or one of its supertypes.
    pub fn contributed_checked<G: DeclarationGraph + ?Sized>(
        graph: &G,
        element: DeclId,
        contributed_by: DeclId,
    ) -> ResolveResult<Self> {
        match graph.kind(contributed_by) {
            Some(kind) if kind.is_type() => {}
            Some(_) => {
                return Err(ResolveError::NotDeclaredType(format!(
                    "{contributed_by} ({})",
                    graph.name(contributed_by).unwrap_or("?")
                )));
            }
            None => return Err(ResolveError::UnknownDeclaration(contributed_by)),
        }
        let enclosing = enclosing_type_of(graph, element)?;
        if !has_ancestor(graph, contributed_by, enclosing) {
            tracing::warn!(%element, %enclosing, contributor = %contributed_by, "unrelated contributing type");
            return Err(ResolveError::UnrelatedContributor {
                element,
                enclosing,
                contributor: contributed_by,
            });
        }
        Ok(Self::contributed(element, contributed_by))
    }

    /// Checked or unchecked construction depending on
    /// [`ResolverConfig::strict_contributors`].
    pub fn contributed_with<G: DeclarationGraph + ?Sized>(
        graph: &G,
        config: &ResolverConfig,
        element: DeclId,
        contributed_by: DeclId,
    ) -> ResolveResult<Self> {
        if config.strict_contributors {
            Self::contributed_checked(graph, element, contributed_by)
        } else {
            Ok(Self::contributed(element, contributed_by))
        }
    }

    pub fn element(&self) -> DeclId {
        self.element
    }

    /// The type that contributed [`Self::element`], if different from its
    /// enclosing type.
    pub fn contributed_by(&self) -> Option<DeclId> {
        self.contributed_by
    }

    /// The type lexically enclosing the element, regardless of any
    /// contributing type.
    pub fn enclosing_type_element<G: DeclarationGraph + ?Sized>(
        &self,
        graph: &G,
    ) -> ResolveResult<DeclId> {
        enclosing_type_of(graph, self.element)
    }

    /// The type of the element, viewed as a member of the contributing type
    /// when there is one.
    pub fn as_member_of_contributing_type<G, R>(
        &self,
        graph: &G,
        resolver: &R,
    ) -> ResolveResult<TypeRef>
    where
        G: DeclarationGraph + ?Sized,
        R: TypeResolver + ?Sized,
    {
        match self.contributed_by {
            None => graph
                .declared_type(self.element)
                .cloned()
                .ok_or(ResolveError::UnknownDeclaration(self.element)),
            Some(contributor) => {
                let containing = graph
                    .declared_type(contributor)
                    .ok_or(ResolveError::UnknownDeclaration(contributor))?;
                resolver.as_member_of(containing, self.element)
            }
        }
    }
}

impl HasSourceElement for SourceElement {
    fn source_element(&self) -> SourceElement {
        *self
    }
}

impl fmt::Display for SourceElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.contributed_by {
            Some(by) => write!(f, "{} via {}", self.element, by),
            None => write!(f, "{}", self.element),
        }
    }
}

/// Walk the enclosing chain of `decl` up to the nearest type declaration.
/// A type declaration is its own enclosing type.
pub fn enclosing_type_of<G: DeclarationGraph + ?Sized>(
    graph: &G,
    decl: DeclId,
) -> ResolveResult<DeclId> {
    let mut current = decl;
    for _ in 0..MAX_ENCLOSING_DEPTH {
        let kind = graph
            .kind(current)
            .ok_or(ResolveError::UnknownDeclaration(current))?;
        match kind {
            DeclKind::Class | DeclKind::Interface | DeclKind::Enum | DeclKind::Annotation => {
                return Ok(current);
            }
            DeclKind::Package | DeclKind::Module => {
                return Err(ResolveError::NoEnclosingType(decl));
            }
            DeclKind::Method
            | DeclKind::Constructor
            | DeclKind::Field
            | DeclKind::Parameter
            | DeclKind::TypeParameter
            | DeclKind::Custom(_) => match graph.enclosing(current) {
                Some(parent) => current = parent,
                None => return Err(ResolveError::NoEnclosingType(decl)),
            },
        }
    }
    Err(ResolveError::EnclosingCycle {
        decl,
        limit: MAX_ENCLOSING_DEPTH,
    })
}

fn has_ancestor<G: DeclarationGraph + ?Sized>(graph: &G, sub: DeclId, sup: DeclId) -> bool {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([sub]);
    visited.insert(sub);
    while let Some(current) = queue.pop_front() {
        if current == sup {
            return true;
        }
        for ty in graph.supertypes(current) {
            if let Some((next, _)) = ty.as_declared() {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    false
}
