use serde::{Deserialize, Serialize};

pub const STRICT_CONTRIBUTORS_ENV: &str = "HIERSCOPE_STRICT_CONTRIBUTORS";
pub const MEMOIZE_ENV: &str = "HIERSCOPE_MEMOIZE";
pub const MAX_HIERARCHY_DEPTH_ENV: &str = "HIERSCOPE_MAX_HIERARCHY_DEPTH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Reject contributing types whose hierarchy does not include the
    /// element's enclosing type at construction time.
    pub strict_contributors: bool,
    /// Wrap the resolver in a memoizing cache.
    pub memoize: bool,
    /// Maximum number of supertype steps walked while locating a member.
    pub max_hierarchy_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            strict_contributors: false,
            memoize: false,
            max_hierarchy_depth: 64,
        }
    }
}

impl ResolverConfig {
    /// Defaults overridden by `HIERSCOPE_*` environment variables.
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = lookup(STRICT_CONTRIBUTORS_ENV) {
            match parse_flag(&v) {
                Some(flag) => config.strict_contributors = flag,
                None => tracing::warn!(key = STRICT_CONTRIBUTORS_ENV, value = %v, "ignoring invalid flag"),
            }
        }
        if let Some(v) = lookup(MEMOIZE_ENV) {
            match parse_flag(&v) {
                Some(flag) => config.memoize = flag,
                None => tracing::warn!(key = MEMOIZE_ENV, value = %v, "ignoring invalid flag"),
            }
        }
        if let Some(v) = lookup(MAX_HIERARCHY_DEPTH_ENV) {
            match v.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => config.max_hierarchy_depth = depth,
                _ => tracing::warn!(key = MAX_HIERARCHY_DEPTH_ENV, value = %v, "ignoring invalid depth"),
            }
        }
        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
