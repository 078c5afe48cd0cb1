//! flowts_ast: Abstract Syntax Tree definitions for Flow type declarations.
//!
//! Defines the arena-allocated node types, the closed `NodeKind` tag set and
//! the `NodeFactory` that builds trees.

pub mod factory;
pub mod kind;
pub mod node;

// Re-export key types
pub use factory::NodeFactory;
pub use kind::{NodeCategory, NodeKind};
pub use node::*;
