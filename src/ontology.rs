//! Ontology index: normalises a terminology into the efficient lookup
//! tables the completion engine reads from.
//!
//! Mirrors the teacher's `Ontology` in spirit — an indexed, read-only
//! view built once and reused — but scoped to exactly what EL
//! completion needs: the set of all sub-concepts, a GCI adjacency
//! table, and a `has_top` flag. The heavier indexed-storage pattern of
//! `owl2_reasoner::ontology::Ontology` (one `Vec<Arc<_>>` per axiom
//! kind) doesn't apply here because EL recognises only two axiom
//! shapes.

use crate::concept::Concept;
use crate::symbol::Symbol;
use hashbrown::{HashMap, HashSet};
use std::rc::Rc;

/// A single terminological axiom, already binarised by the loader.
#[derive(Debug, Clone)]
pub enum Axiom {
    /// `L ⊑ R`
    Gci(Rc<Concept>, Rc<Concept>),
    /// `L ≡ R`, equivalent to the pair `L ⊑ R` and `R ⊑ L`.
    Equivalence(Rc<Concept>, Rc<Concept>),
}

/// The indexed ontology `O`. Immutable after [`OntologyIndex::build`];
/// safe to share read-only (via `Arc`) across sequential queries.
#[derive(Debug, Default)]
pub struct OntologyIndex {
    sub_concepts: HashSet<Rc<Concept>>,
    gci_rhs: HashMap<Rc<Concept>, HashSet<Rc<Concept>>>,
    has_top: bool,
    names: Vec<Symbol>,
    /// Ambient diagnostic view: every role symbol appearing in some
    /// `∃r.F` subterm of O. Never consulted by the rule engine, which
    /// only ever reads `sub_concepts` and `gci_rhs`.
    roles: HashSet<Symbol>,
}

impl OntologyIndex {
    /// Build the index from a finite axiom stream, a concept enumeration
    /// (the set of all sub-concepts reachable in O, per §6.1), and the
    /// ordered list of named classes.
    ///
    /// `sub_concepts` is the union of full recursive sub-term collection
    /// over every axiom (matching the treatment of GCIs for
    /// equivalences too — see the design-notes open question) and the
    /// supplied concept enumeration, so a caller's enumeration and the
    /// indexer's own derivation can never disagree silently.
    pub fn build(
        axioms: impl IntoIterator<Item = Axiom>,
        concept_enumeration: impl IntoIterator<Item = Rc<Concept>>,
        names: Vec<Symbol>,
    ) -> Self {
        let mut sub_concepts = HashSet::new();
        let mut gci_rhs: HashMap<Rc<Concept>, HashSet<Rc<Concept>>> = HashMap::new();

        for axiom in axioms {
            match axiom {
                Axiom::Gci(l, r) => {
                    collect_subterms(&l, &mut sub_concepts);
                    collect_subterms(&r, &mut sub_concepts);
                    gci_rhs.entry(l).or_default().insert(r);
                }
                Axiom::Equivalence(l, r) => {
                    collect_subterms(&l, &mut sub_concepts);
                    collect_subterms(&r, &mut sub_concepts);
                    gci_rhs.entry(l.clone()).or_default().insert(r.clone());
                    gci_rhs.entry(r).or_default().insert(l);
                }
            }
        }

        for concept in concept_enumeration {
            collect_subterms(&concept, &mut sub_concepts);
        }

        let has_top = sub_concepts.iter().any(|c| c.is_top());

        let mut roles = HashSet::new();
        for concept in &sub_concepts {
            if let Some((role, _)) = concept.as_exists() {
                roles.insert(role.clone());
            }
        }

        OntologyIndex {
            sub_concepts,
            gci_rhs,
            has_top,
            names,
            roles,
        }
    }

    pub fn has_top(&self) -> bool {
        self.has_top
    }

    pub fn contains_sub_concept(&self, concept: &Rc<Concept>) -> bool {
        self.sub_concepts.contains(concept)
    }

    pub fn sub_concepts(&self) -> &HashSet<Rc<Concept>> {
        &self.sub_concepts
    }

    /// The set of rhs concepts directly entailed by `lhs`, if any.
    pub fn gci_rhs(&self, lhs: &Rc<Concept>) -> Option<&HashSet<Rc<Concept>>> {
        self.gci_rhs.get(lhs)
    }

    pub fn names(&self) -> &[Symbol] {
        &self.names
    }

    pub fn roles(&self) -> &HashSet<Symbol> {
        &self.roles
    }
}

/// Recursively insert `term` and every sub-term reachable from it into
/// `into`. Stops descending once a term is already present, since its
/// children must already have been visited when it was first inserted.
fn collect_subterms(term: &Rc<Concept>, into: &mut HashSet<Rc<Concept>>) {
    if !into.insert(term.clone()) {
        return;
    }
    match term.as_ref() {
        Concept::Top | Concept::Name(_) => {}
        Concept::And(l, r) => {
            collect_subterms(l, into);
            collect_subterms(r, into);
        }
        Concept::Exists(_, filler) => {
            collect_subterms(filler, into);
        }
    }
}
