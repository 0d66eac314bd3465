//! The single query entry point, `subsumers`, and the subsumer
//! extractor that reads named concepts off the saturated root label.

use crate::concept::{name, top, Concept};
use crate::driver;
use crate::error::{ReasonerError, ReasonerResult};
use crate::model::Model;
use crate::ontology::OntologyIndex;
use crate::symbol::Symbol;
use std::rc::Rc;

/// Compute every named concept (plus ⊤, when declared) that `O` entails
/// as a subsumer of `a`.
///
/// If `a` does not occur in `index.names()`, this is the *unknown class
/// name* case of §7: not an error, just an empty result, returned
/// without constructing a model at all.
pub fn subsumers(index: &OntologyIndex, a: Symbol) -> ReasonerResult<Vec<Rc<Concept>>> {
    if !index.names().iter().any(|n| *n == a) {
        return Ok(Vec::new());
    }

    let mut model = Model::seeded_with(name(a));
    driver::saturate(&mut model, index);

    model
        .check_invariants()
        .map_err(ReasonerError::InvariantViolation)?;

    Ok(extract_subsumers(&model, index))
}

/// Intersect the root's label with the set of named concepts, in the
/// loader's enumeration order, then append ⊤ if present. Duplicates
/// never appear because each named concept is visited once.
fn extract_subsumers(model: &Model, index: &OntologyIndex) -> Vec<Rc<Concept>> {
    let root_label = model.label(model.root());

    let mut result: Vec<Rc<Concept>> = index
        .names()
        .iter()
        .map(|n| name(n.clone()))
        .filter(|term| root_label.contains(term))
        .collect();

    // The Top rule (§4.4) unconditionally adds ⊤ to every label once
    // `has_top` holds, so this is equivalent to checking the label —
    // but stating it via `has_top` matches §8's "plus ⊤ iff present in
    // O" phrasing directly.
    if index.has_top() {
        result.push(top());
    }

    result
}
