pub mod error;
pub mod graph;
pub mod models;
pub mod semantic;

// Re-export commonly used types
pub use error::{ResolveError, ResolveResult};
pub use graph::DeclarationGraph;
pub use models::*;
pub use semantic::TypeResolver;
