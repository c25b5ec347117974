//! Member type resolution through a parameterized containing type.

use crate::cache::CachedResolver;
use crate::config::ResolverConfig;
use crate::source_element::enclosing_type_of;
use crate::substitution::Substitution;
use hierscope_api::models::{DeclId, TypeRef};
use hierscope_api::{DeclarationGraph, ResolveError, ResolveResult, TypeResolver};
use std::collections::{HashSet, VecDeque};

/// [`TypeResolver`] backed by a [`DeclarationGraph`].
///
/// Walks the supertypes of the containing type breadth first, instantiating
/// each supertype with the arguments of the step below it, until it reaches
/// the type that declares the member. The member's declared type is then
/// rewritten with that instantiation.
pub struct HierarchyResolver<'g, G: DeclarationGraph + ?Sized> {
    graph: &'g G,
    max_depth: usize,
}

impl<'g, G: DeclarationGraph + ?Sized> HierarchyResolver<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self::with_config(graph, &ResolverConfig::default())
    }

    pub fn with_config(graph: &'g G, config: &ResolverConfig) -> Self {
        Self {
            graph,
            max_depth: config.max_hierarchy_depth,
        }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    fn check_parameterized(&self, decl: DeclId, args: &[TypeRef]) -> ResolveResult<()> {
        if self.graph.kind(decl).is_none() {
            return Err(ResolveError::UnknownDeclaration(decl));
        }
        let expected = self.graph.type_parameters(decl).len();
        if args.len() != expected {
            return Err(ResolveError::RawType {
                decl,
                expected,
                found: args.len(),
            });
        }
        if args.iter().any(|a| matches!(a, TypeRef::Wildcard { .. })) {
            return Err(ResolveError::WildcardArgument(decl));
        }
        Ok(())
    }

    /// The type that declares `member`. For a nested type this is its outer type.
    fn owner_of(&self, member: DeclId) -> ResolveResult<DeclId> {
        let kind = self
            .graph
            .kind(member)
            .ok_or(ResolveError::UnknownDeclaration(member))?;
        if kind.is_type() {
            let parent = self
                .graph
                .enclosing(member)
                .ok_or(ResolveError::NoEnclosingType(member))?;
            enclosing_type_of(self.graph, parent).map_err(|e| match e {
                ResolveError::NoEnclosingType(_) => ResolveError::NoEnclosingType(member),
                other => other,
            })
        } else {
            enclosing_type_of(self.graph, member)
        }
    }

    /// `target` as instantiated when seen from `start`.
    fn find_supertype(&self, start: &TypeRef, target: DeclId) -> ResolveResult<TypeRef> {
        let Some((start_decl, _)) = start.as_declared() else {
            return Err(ResolveError::NotDeclaredType(format!("{start:?}")));
        };
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start_decl);
        queue.push_back((start.clone(), 0usize));
        let mut truncated = false;

        while let Some((current, depth)) = queue.pop_front() {
            let Some((decl, args)) = current.as_declared() else {
                continue;
            };
            // A raw step would leave its supertypes' variables unbound.
            self.check_parameterized(decl, args)?;
            if decl == target {
                return Ok(current);
            }
            if depth >= self.max_depth {
                truncated = true;
                continue;
            }

            let subst = Substitution::from_params(self.graph.type_parameters(decl), args);
            for sup in self.graph.supertypes(decl) {
                let instantiated = subst.apply(sup);
                if let Some((sup_decl, _)) = instantiated.as_declared() {
                    if visited.insert(sup_decl) {
                        tracing::trace!(from = %decl, to = %sup_decl, depth, "walking supertype");
                        queue.push_back((instantiated, depth + 1));
                    }
                }
            }
        }

        if truncated {
            Err(ResolveError::HierarchyTooDeep(start_decl, self.max_depth))
        } else {
            Err(ResolveError::NotAMember {
                member: target,
                containing: start_decl,
            })
        }
    }
}

/// A [`HierarchyResolver`], memoized when [`ResolverConfig::memoize`] is set.
pub fn resolver_for<'g, G: DeclarationGraph + ?Sized>(
    graph: &'g G,
    config: &ResolverConfig,
) -> Box<dyn TypeResolver + 'g> {
    let resolver = HierarchyResolver::with_config(graph, config);
    if config.memoize {
        Box::new(CachedResolver::new(resolver))
    } else {
        Box::new(resolver)
    }
}

impl<G: DeclarationGraph + ?Sized> TypeResolver for HierarchyResolver<'_, G> {
    fn as_member_of(&self, containing: &TypeRef, member: DeclId) -> ResolveResult<TypeRef> {
        let (decl, args) = containing
            .as_declared()
            .ok_or_else(|| ResolveError::NotDeclaredType(format!("{containing:?}")))?;
        self.check_parameterized(decl, args)?;

        let member_type = self
            .graph
            .declared_type(member)
            .ok_or(ResolveError::UnknownDeclaration(member))?;
        let owner = self.owner_of(member)?;

        let seen = self
            .find_supertype(containing, owner)
            .map_err(|e| match e {
                ResolveError::NotAMember { .. } => ResolveError::NotAMember {
                    member,
                    containing: decl,
                },
                other => other,
            })?;
        let owner_args = seen.as_declared().map(|(_, a)| a).unwrap_or(&[]);

        let subst = Substitution::from_params(self.graph.type_parameters(owner), owner_args);
        let resolved = subst.apply(member_type);
        tracing::debug!(%member, containing = %decl, %owner, "resolved member type");
        Ok(resolved)
    }
}
