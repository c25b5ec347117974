//! Type variable substitution.
//!
//! Maps type parameter declarations to the types they are instantiated with.

use hierscope_api::models::{DeclId, TypeRef};
use std::collections::HashMap;

/// A map from type variables to concrete types.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Substitution {
    map: HashMap<DeclId, TypeRef>,
}

impl Substitution {
    /// Create a new empty substitution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair each type parameter with the argument at the same position.
    /// Extra parameters or arguments are ignored; callers check arity.
    pub fn from_params(params: &[DeclId], args: &[TypeRef]) -> Self {
        let map = params
            .iter()
            .copied()
            .zip(args.iter().cloned())
            .collect();
        Self { map }
    }

    pub fn insert(&mut self, var: DeclId, ty: TypeRef) {
        self.map.insert(var, ty);
    }

    /// Apply this substitution to a type.
    ///
    /// Replacement is simultaneous: a substituted type is not substituted again.
    pub fn apply(&self, ty: &TypeRef) -> TypeRef {
        if self.map.is_empty() {
            return ty.clone();
        }
        match ty {
            TypeRef::TypeVar { decl } => match self.map.get(decl) {
                Some(sub) => sub.clone(),
                None => ty.clone(),
            },
            TypeRef::Declared { decl, args } => TypeRef::Declared {
                decl: *decl,
                args: args.iter().map(|arg| self.apply(arg)).collect(),
            },
            TypeRef::Array {
                element,
                dimensions,
            } => TypeRef::Array {
                element: Box::new(self.apply(element)),
                dimensions: *dimensions,
            },
            TypeRef::Wildcard {
                bound,
                is_upper_bound,
            } => TypeRef::Wildcard {
                bound: bound.as_ref().map(|b| Box::new(self.apply(b))),
                is_upper_bound: *is_upper_bound,
            },
            TypeRef::Executable {
                type_vars,
                params,
                ret,
                thrown,
            } => {
                // A method's own type variables shadow any outer binding.
                let inner;
                let subst = if type_vars.iter().any(|v| self.map.contains_key(v)) {
                    let mut shadowed = self.clone();
                    for v in type_vars {
                        shadowed.map.remove(v);
                    }
                    inner = shadowed;
                    &inner
                } else {
                    self
                };
                TypeRef::Executable {
                    type_vars: type_vars.clone(),
                    params: params.iter().map(|p| subst.apply(p)).collect(),
                    ret: Box::new(subst.apply(ret)),
                    thrown: thrown.iter().map(|t| subst.apply(t)).collect(),
                }
            }
            // Primitives and others remain unchanged
            TypeRef::Primitive { .. } | TypeRef::Void | TypeRef::Unknown => ty.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: DeclId = DeclId(1);
    const STRING: DeclId = DeclId(2);
    const T: DeclId = DeclId(10);
    const U: DeclId = DeclId(11);

    #[test]
    fn test_apply_replaces_nested_vars() {
        let subst = Substitution::from_params(&[T], &[TypeRef::simple(STRING)]);
        let ty = TypeRef::array_of(TypeRef::declared(LIST, vec![TypeRef::var(T)]));

        assert_eq!(
            subst.apply(&ty),
            TypeRef::array_of(TypeRef::declared(LIST, vec![TypeRef::simple(STRING)]))
        );
    }

    #[test]
    fn test_apply_is_simultaneous() {
        let mut subst = Substitution::new();
        subst.insert(T, TypeRef::var(U));
        subst.insert(U, TypeRef::simple(STRING));

        assert_eq!(subst.apply(&TypeRef::var(T)), TypeRef::var(U));
    }

    #[test]
    fn test_method_type_vars_shadow_outer_binding() {
        let subst = Substitution::from_params(&[T], &[TypeRef::simple(STRING)]);
        let sig = TypeRef::Executable {
            type_vars: vec![T],
            params: vec![TypeRef::var(T)],
            ret: Box::new(TypeRef::var(T)),
            thrown: vec![],
        };

        assert_eq!(subst.apply(&sig), sig);
    }

    #[test]
    fn test_unbound_vars_and_primitives_untouched() {
        let subst = Substitution::from_params(&[T], &[TypeRef::simple(STRING)]);
        assert_eq!(subst.apply(&TypeRef::var(U)), TypeRef::var(U));
        assert_eq!(
            subst.apply(&TypeRef::primitive("int")),
            TypeRef::primitive("int")
        );
    }
}
