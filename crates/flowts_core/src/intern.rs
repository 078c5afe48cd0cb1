//! String interning for names.
//!
//! Type names, property names, index keys and alias names are interned so
//! nodes carry a 4-byte handle and the printer resolves text on demand.

use lasso::{Spur, ThreadedRodeo};
use std::fmt;
use std::sync::Arc;

/// Handle to a name in a `StringInterner`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct InternedString(Spur);

impl fmt::Debug for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InternedString({:?})", self.0)
    }
}

/// Name table shared by every file of one run.
///
/// Clones share storage, so files loaded on different rayon workers resolve
/// against one table.
#[derive(Clone, Default)]
pub struct StringInterner {
    rodeo: Arc<ThreadedRodeo>,
}

impl StringInterner {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn intern(&self, name: &str) -> InternedString {
        InternedString(self.rodeo.get_or_intern(name))
    }

    #[inline]
    pub fn resolve(&self, name: InternedString) -> &str {
        self.rodeo.resolve(&name.0)
    }

    /// Number of distinct names seen so far.
    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}
