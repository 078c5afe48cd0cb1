//! flowts_core: Core utilities for the flowts type printer.
//!
//! Provides the arena that owns AST nodes and the string interner used for
//! every name that appears in a type declaration.

pub mod arena;
pub mod intern;

// Re-export commonly used types
pub use arena::AstArena;
pub use intern::{InternedString, StringInterner};
