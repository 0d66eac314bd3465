//! Concept term model: the tagged-variant term type for EL class
//! expressions — `⊤`, named classes, binary conjunction, and existential
//! role restriction.
//!
//! Mirrors the shape of the teacher's `ClassExpression` (a plain
//! `#[derive(..., PartialEq, Eq, Hash)]` enum with boxed/shared
//! recursive fields), pared down to exactly the EL constructs. Terms
//! are immutable once built; equality is always structural because
//! `Rc` derives compare pointee content, never the pointer.

use crate::symbol::Symbol;
use std::rc::Rc;

/// A concept term of the EL language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Concept {
    /// The universal concept ⊤.
    Top,
    /// A named class.
    Name(Symbol),
    /// Binary conjunction `L ⊓ R`. Not commutative as stored: `And(X, Y)`
    /// and `And(Y, X)` are distinct terms (see Intersect-2's dual probe).
    And(Rc<Concept>, Rc<Concept>),
    /// Existential role restriction `∃r.F`.
    Exists(Symbol, Rc<Concept>),
}

impl Concept {
    pub fn is_top(&self) -> bool {
        matches!(self, Concept::Top)
    }

    pub fn as_name(&self) -> Option<&Symbol> {
        match self {
            Concept::Name(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_and(&self) -> Option<(&Rc<Concept>, &Rc<Concept>)> {
        match self {
            Concept::And(l, r) => Some((l, r)),
            _ => None,
        }
    }

    pub fn as_exists(&self) -> Option<(&Symbol, &Rc<Concept>)> {
        match self {
            Concept::Exists(role, filler) => Some((role, filler)),
            _ => None,
        }
    }
}

/// Total, pure smart constructor for ⊤.
pub fn top() -> Rc<Concept> {
    Rc::new(Concept::Top)
}

/// Total, pure smart constructor for a named class.
pub fn name(symbol: Symbol) -> Rc<Concept> {
    Rc::new(Concept::Name(symbol))
}

/// Total, pure smart constructor for a binary conjunction. Does not
/// normalise operand order — see the `And` variant's doc comment.
pub fn and_(l: Rc<Concept>, r: Rc<Concept>) -> Rc<Concept> {
    Rc::new(Concept::And(l, r))
}

/// Total, pure smart constructor for an existential restriction.
pub fn exists(role: Symbol, filler: Rc<Concept>) -> Rc<Concept> {
    Rc::new(Concept::Exists(role, filler))
}

/// Deduplicating cache over the constructors above: equal terms share a
/// single allocation. Purely a performance device — two implementations
/// that disagree on whether a given term is interned still produce
/// identical subsumer sequences, because every comparison and hash in
/// this crate is structural (`Concept`'s derived `PartialEq`/`Hash`),
/// never by `Rc` pointer identity.
#[derive(Debug, Default)]
pub struct ConceptInterner {
    cache: hashbrown::HashMap<Rc<Concept>, Rc<Concept>>,
}

impl ConceptInterner {
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, term: Concept) -> Rc<Concept> {
        if let Some(existing) = self.cache.get(&term) {
            return existing.clone();
        }
        let rc = Rc::new(term);
        self.cache.insert(rc.clone(), rc.clone());
        rc
    }

    pub fn top(&mut self) -> Rc<Concept> {
        self.intern(Concept::Top)
    }

    pub fn name(&mut self, symbol: Symbol) -> Rc<Concept> {
        self.intern(Concept::Name(symbol))
    }

    pub fn and_(&mut self, l: Rc<Concept>, r: Rc<Concept>) -> Rc<Concept> {
        self.intern(Concept::And(l, r))
    }

    pub fn exists(&mut self, role: Symbol, filler: Rc<Concept>) -> Rc<Concept> {
        self.intern(Concept::Exists(role, filler))
    }
}
