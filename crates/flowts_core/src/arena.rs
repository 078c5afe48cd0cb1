//! Arena allocation for AST nodes.
//!
//! Every node of a loaded program lives in one bump arena, so a whole tree
//! is released at once when the arena is dropped.

use bumpalo::Bump;

/// Wraps the bump allocator that backs one loaded program.
#[derive(Default)]
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Copy literal text into the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Move the items of an iterator into an arena slice.
    #[inline]
    pub fn alloc_slice<T, I>(&self, items: I) -> &[T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.bump.alloc_slice_fill_iter(items)
    }
}
