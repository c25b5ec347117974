use dashmap::DashMap;
use hierscope_api::models::{DeclId, TypeRef};
use hierscope_api::{ResolveResult, TypeResolver};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Memoizing wrapper around a [`TypeResolver`].
///
/// Only successful resolutions are cached; failures are recomputed and
/// returned unchanged every time. Intended to live for one analysis pass.
pub struct CachedResolver<R> {
    inner: R,
    cache: DashMap<(TypeRef, DeclId), TypeRef>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: usize,
    pub misses: usize,
}

impl<R: TypeResolver> CachedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl<R: TypeResolver> TypeResolver for CachedResolver<R> {
    fn as_member_of(&self, containing: &TypeRef, member: DeclId) -> ResolveResult<TypeRef> {
        let key = (containing.clone(), member);
        if let Some(hit) = self.cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(hit.value().clone());
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let resolved = self.inner.as_member_of(containing, member)?;
        self.cache.insert(key, resolved.clone());
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hierscope_api::ResolveError;

    struct Counting {
        calls: AtomicUsize,
        fail: bool,
    }

    impl TypeResolver for Counting {
        fn as_member_of(&self, _: &TypeRef, member: DeclId) -> ResolveResult<TypeRef> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ResolveError::UnknownDeclaration(member))
            } else {
                Ok(TypeRef::primitive("int"))
            }
        }
    }

    #[test]
    fn test_hits_skip_inner_resolver() {
        let cached = CachedResolver::new(Counting {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let containing = TypeRef::simple(DeclId(1));

        for _ in 0..3 {
            assert_eq!(
                cached.as_member_of(&containing, DeclId(2)),
                Ok(TypeRef::primitive("int"))
            );
        }
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            cached.stats(),
            CacheStats {
                entries: 1,
                hits: 2,
                misses: 1
            }
        );
    }

    #[test]
    fn test_failures_are_not_cached() {
        let cached = CachedResolver::new(Counting {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let containing = TypeRef::simple(DeclId(1));

        assert!(cached.as_member_of(&containing, DeclId(2)).is_err());
        assert!(cached.as_member_of(&containing, DeclId(2)).is_err());
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);
        assert_eq!(cached.stats().entries, 0);
    }
}
