pub mod graph;
pub mod symbol;
pub mod types;

pub use graph::*;
pub use symbol::*;
pub use types::*;
