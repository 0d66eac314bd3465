//! The six EL completion rules.
//!
//! Each rule is a pure function of `(state, focus individual)` that
//! returns whether the state changed, matching §4.4 of the design.
//! Every rule that reads a label or successor set while deciding what
//! to add first collects a snapshot `Vec`, then commits buffered
//! insertions once the snapshot's borrow has ended — strategy (a) of
//! the design notes' "iteration over a container that rules mutate"
//! guidance, applied uniformly so no rule risks mutating the set it is
//! currently iterating.

use crate::concept::{and_, exists, Concept};
use crate::model::{IndividualId, Model};
use crate::ontology::OntologyIndex;
use std::rc::Rc;

/// Add ⊤ to `d` if O declares ⊤ at all and `d` doesn't have it yet.
pub fn top_rule(model: &mut Model, index: &OntologyIndex, d: IndividualId) -> bool {
    if !index.has_top() {
        return false;
    }
    model.add_label(d, crate::concept::top())
}

/// Conjunction-elim (Intersect-1): for every `And(X, Y)` in `label[d]`,
/// add `X` and `Y`.
pub fn conjunction_elim(model: &mut Model, d: IndividualId) -> bool {
    let conjunctions: Vec<(Rc<Concept>, Rc<Concept>)> = model
        .label(d)
        .iter()
        .filter_map(|c| c.as_and().map(|(l, r)| (l.clone(), r.clone())))
        .collect();

    let mut changed = false;
    for (l, r) in conjunctions {
        changed |= model.add_label(d, l);
        changed |= model.add_label(d, r);
    }
    changed
}

/// Conjunction-intro (Intersect-2): for every unordered pair of distinct
/// concepts in `label[d]`, add whichever ordering of their conjunction
/// occurs in `sub_concepts` (gated — conjunctions absent from O are
/// never introduced). Both orderings are probed because `And` storage
/// is not commutative-normalised.
pub fn conjunction_intro(model: &mut Model, index: &OntologyIndex, d: IndividualId) -> bool {
    let concepts: Vec<Rc<Concept>> = model.label(d).iter().cloned().collect();

    let mut to_add = Vec::new();
    for i in 0..concepts.len() {
        for j in (i + 1)..concepts.len() {
            let x = &concepts[i];
            let y = &concepts[j];
            let xy = and_(x.clone(), y.clone());
            if index.contains_sub_concept(&xy) {
                to_add.push(xy);
            }
            let yx = and_(y.clone(), x.clone());
            if index.contains_sub_concept(&yx) {
                to_add.push(yx);
            }
        }
    }

    let mut changed = false;
    for conjunction in to_add {
        changed |= model.add_label(d, conjunction);
    }
    changed
}

/// Existential-instantiate (Exists-1): for every `Exists(r, C)` in
/// `label[d]`, reuse the shared witness for `C` if one exists, else
/// create it. Demands for the same `C` from anywhere in the model are
/// satisfied by the same individual — this is what keeps the model
/// finite.
pub fn existential_instantiate(model: &mut Model, d: IndividualId) -> bool {
    let demands: Vec<(crate::symbol::Symbol, Rc<Concept>)> = model
        .label(d)
        .iter()
        .filter_map(|c| c.as_exists().map(|(r, f)| (r.clone(), f.clone())))
        .collect();

    let mut changed = false;
    for (role, filler) in demands {
        let witness = match model.lookup_rep(&filler) {
            Some(e) => e,
            None => {
                let e = model.ensure_individual();
                model.set_rep(filler.clone(), e);
                model.add_label(e, filler);
                e
            }
        };
        changed |= model.add_successor(d, role, witness);
    }
    changed
}

/// Existential-reflect (Exists-2): for every role `r`, every
/// `e ∈ succ[d][r]`, and every `C ∈ label[e]`, add `Exists(r, C)` to
/// `label[d]` if that term occurs in O and isn't there already.
pub fn existential_reflect(model: &mut Model, index: &OntologyIndex, d: IndividualId) -> bool {
    let edges: Vec<(crate::symbol::Symbol, IndividualId)> = model
        .successor_edges(d)
        .map(|(role, e)| (role.clone(), e))
        .collect();

    let mut to_add = Vec::new();
    for (role, e) in edges {
        let fillers: Vec<Rc<Concept>> = model.label(e).iter().cloned().collect();
        for filler in fillers {
            let candidate = exists(role.clone(), filler);
            if index.contains_sub_concept(&candidate) {
                to_add.push(candidate);
            }
        }
    }

    let mut changed = false;
    for candidate in to_add {
        changed |= model.add_label(d, candidate);
    }
    changed
}

/// GCI/Subsumption: for every `C ∈ label[d]`, add every term in
/// `gci_rhs[C]` to `label[d]`.
pub fn gci_subsumption(model: &mut Model, index: &OntologyIndex, d: IndividualId) -> bool {
    let concepts: Vec<Rc<Concept>> = model.label(d).iter().cloned().collect();

    let mut to_add = Vec::new();
    for concept in &concepts {
        if let Some(rhs) = index.gci_rhs(concept) {
            to_add.extend(rhs.iter().cloned());
        }
    }

    let mut changed = false;
    for concept in to_add {
        changed |= model.add_label(d, concept);
    }
    changed
}

/// Apply all six rules to `d` once. Uses `|` (not `||`) so every rule
/// runs regardless of whether an earlier one already changed the
/// state — skipping later rules on an early change would still reach
/// the same fixed point, but only after more rounds.
pub fn apply_all(model: &mut Model, index: &OntologyIndex, d: IndividualId) -> bool {
    let c1 = top_rule(model, index, d);
    let c2 = conjunction_elim(model, d);
    let c3 = conjunction_intro(model, index, d);
    let c4 = existential_instantiate(model, d);
    let c5 = existential_reflect(model, index, d);
    let c6 = gci_subsumption(model, index, d);
    c1 | c2 | c3 | c4 | c5 | c6
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::name;
    use crate::ontology::Axiom;
    use crate::symbol::Interner;

    #[test]
    fn top_rule_adds_top_only_when_declared() {
        let mut s = Interner::new();
        let a = name(s.intern("A"));
        let mut model = Model::seeded_with(a.clone());
        let index = OntologyIndex::build(vec![], vec![], vec![]);
        assert!(!top_rule(&mut model, &index, model.root()));

        let index_with_top = OntologyIndex::build(
            vec![Axiom::Gci(a, crate::concept::top())],
            vec![],
            vec![],
        );
        let mut model2 = Model::seeded_with(name(s.intern("A")));
        assert!(top_rule(&mut model2, &index_with_top, model2.root()));
        assert!(model2.label(model2.root()).iter().any(|c| c.is_top()));
    }

    #[test]
    fn conjunction_elim_unpacks_conjuncts() {
        let mut s = Interner::new();
        let b = name(s.intern("B"));
        let c = name(s.intern("C"));
        let conj = and_(b.clone(), c.clone());
        let mut model = Model::seeded_with(conj);
        assert!(conjunction_elim(&mut model, model.root()));
        assert!(model.label(model.root()).contains(&b));
        assert!(model.label(model.root()).contains(&c));
    }

    #[test]
    fn conjunction_intro_is_gated_by_sub_concepts() {
        let mut s = Interner::new();
        let b = name(s.intern("B"));
        let c = name(s.intern("C"));
        let mut model = Model::seeded_with(b.clone());
        model.add_label(model.root(), c.clone());

        let ungated = OntologyIndex::build(vec![], vec![], vec![]);
        assert!(!conjunction_intro(&mut model, &ungated, model.root()));

        let conj = and_(b.clone(), c.clone());
        let gated = OntologyIndex::build(vec![], vec![conj.clone()], vec![]);
        assert!(conjunction_intro(&mut model, &gated, model.root()));
        assert!(model.label(model.root()).contains(&conj));
    }

    #[test]
    fn existential_instantiate_reuses_shared_witness() {
        let mut s = Interner::new();
        let role = s.intern("r");
        let filler = name(s.intern("C"));
        let demand = exists(role, filler);
        let mut model = Model::seeded_with(demand.clone());
        model.add_label(model.root(), demand);

        assert!(existential_instantiate(&mut model, model.root()));
        let witnesses: Vec<_> = model.successors(model.root(), &s.intern("r")).collect();
        assert_eq!(witnesses.len(), 1);

        // A second demand for the same filler from elsewhere reuses it.
        let other = model.ensure_individual();
        let demand2 = exists(s.intern("r"), name(s.intern("C")));
        model.add_label(other, demand2);
        assert!(existential_instantiate(&mut model, other));
        let witnesses2: Vec<_> = model.successors(other, &s.intern("r")).collect();
        assert_eq!(witnesses2, witnesses);
    }

    #[test]
    fn existential_reflect_is_gated_by_sub_concepts() {
        let mut s = Interner::new();
        let a = name(s.intern("A"));
        let mut model = Model::seeded_with(a);
        let e = model.ensure_individual();
        let role = s.intern("r");
        model.add_successor(model.root(), role.clone(), e);
        let c = name(s.intern("C"));
        model.add_label(e, c.clone());

        let ungated = OntologyIndex::build(vec![], vec![], vec![]);
        assert!(!existential_reflect(&mut model, &ungated, model.root()));

        let candidate = exists(role, c);
        let gated = OntologyIndex::build(vec![], vec![candidate.clone()], vec![]);
        assert!(existential_reflect(&mut model, &gated, model.root()));
        assert!(model.label(model.root()).contains(&candidate));
    }

    #[test]
    fn gci_subsumption_propagates_rhs() {
        let mut s = Interner::new();
        let a = name(s.intern("A"));
        let b = name(s.intern("B"));
        let mut model = Model::seeded_with(a.clone());
        let index = OntologyIndex::build(vec![Axiom::Gci(a, b.clone())], vec![], vec![]);
        assert!(gci_subsumption(&mut model, &index, model.root()));
        assert!(model.label(model.root()).contains(&b));
    }
}
