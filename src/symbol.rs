//! Interned symbols for class and role names.
//!
//! Mirrors [`crate::error`]'s sibling in the teacher crate, `iri::IRI`:
//! a cheaply-cloned, cheaply-hashed handle backed by `Arc<str>`, but
//! scoped down to bare class/role names (no namespace/prefix handling —
//! that belongs to the external ontology loader, not the core).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An interned name: a named class or a role.
///
/// Equality and hashing are by string content via a cached hash, so two
/// `Symbol`s built from the same text always compare equal regardless of
/// which `Interner` produced them.
#[derive(Debug, Clone, Eq)]
pub struct Symbol {
    text: Arc<str>,
    hash: u64,
}

impl Symbol {
    fn new(text: &str) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        text.hash(&mut hasher);
        Symbol {
            text: Arc::from(text),
            hash: hasher.finish(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.text == other.text
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Deduplicating table of [`Symbol`]s, scoped to a single ontology load.
///
/// Deliberately *not* a process-wide `static` cache (see §9 of the
/// design notes: "global ontology singletons" is the anti-pattern to
/// avoid) — each loader call owns its own interner.
#[derive(Debug, Default)]
pub struct Interner {
    symbols: hashbrown::HashMap<Arc<str>, Symbol>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning the shared `Symbol` for it.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(sym) = self.symbols.get(text) {
            return sym.clone();
        }
        let sym = Symbol::new(text);
        self.symbols.insert(Arc::from(text), sym.clone());
        sym
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_deduplicates_by_content() {
        let mut interner = Interner::new();
        let a = interner.intern("Person");
        let b = interner.intern("Person");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "Person");
    }

    #[test]
    fn distinct_text_is_distinct_symbol() {
        let mut interner = Interner::new();
        let a = interner.intern("Person");
        let b = interner.intern("Parent");
        assert_ne!(a, b);
    }

    #[test]
    fn symbols_from_different_interners_compare_structurally() {
        let mut i1 = Interner::new();
        let mut i2 = Interner::new();
        assert_eq!(i1.intern("Person"), i2.intern("Person"));
    }
}
