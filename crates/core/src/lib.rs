pub mod cache;
pub mod config;
pub mod graph;
pub mod logging;
pub mod projection;
pub mod resolver;
pub mod source_element;
pub mod substitution;

pub use cache::{CacheStats, CachedResolver};
pub use config::ResolverConfig;
pub use graph::DeclGraph;
pub use projection::{
    all_contributing_classes, contributing_classes, group_by_source_element, has_modifier,
    source_element_of,
};
pub use resolver::{HierarchyResolver, resolver_for};
pub use source_element::{HasSourceElement, SourceElement, enclosing_type_of};
pub use substitution::Substitution;

pub use hierscope_api::{
    DeclarationGraph, ResolveError, ResolveResult, TypeResolver,
    models::{DeclId, DeclKind, Modifier, TypeRef},
};
