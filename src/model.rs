//! Canonical-model state `M`: the individuals, their labels, the
//! role-successor graph, and the initial-concept registry used to
//! share successors.
//!
//! Grounded on the teacher's tableaux graph pair
//! (`reasoning::tableaux::core::{NodeId, TableauxNode}` and
//! `reasoning::tableaux::graph::TableauxGraph`): a small integer node
//! id, a per-node label set, and an explicit two-level successor index
//! built with an `add_successor` primitive rather than relying on
//! implicit auto-vivification (§9).

use crate::concept::Concept;
use crate::symbol::Symbol;
use hashbrown::{HashMap, HashSet};
use std::rc::Rc;

/// An individual identifier, unique only within a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndividualId(usize);

impl IndividualId {
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

/// The canonical model under construction for one query.
#[derive(Debug)]
pub struct Model {
    next_id: usize,
    label: HashMap<IndividualId, HashSet<Rc<Concept>>>,
    succ: HashMap<IndividualId, HashMap<Symbol, HashSet<IndividualId>>>,
    rep: HashMap<Rc<Concept>, IndividualId>,
    root: IndividualId,
}

impl Model {
    /// Seed a fresh model: allocate the root individual (id 1) and
    /// label it `{seed}`. The root is deliberately *not* registered as
    /// `rep[seed]`: a later `Exists(r, seed)` demand anywhere in the
    /// model must allocate its own fresh witness rather than looping
    /// back to root, exactly as the query-time `rep` table starts empty
    /// in the reference implementation. Root only ever becomes a
    /// witness for some other individual's demand if a rule's own
    /// `existential_instantiate` call happens to land on it.
    pub fn seeded_with(seed: Rc<Concept>) -> Self {
        let mut model = Model {
            next_id: 1,
            label: HashMap::new(),
            succ: HashMap::new(),
            rep: HashMap::new(),
            root: IndividualId(1),
        };
        let root = model.ensure_individual();
        model.root = root;
        model.add_label(root, seed);
        model
    }

    pub fn root(&self) -> IndividualId {
        self.root
    }

    /// Allocate a fresh individual with an empty label and no successors.
    pub fn ensure_individual(&mut self) -> IndividualId {
        let id = IndividualId(self.next_id);
        self.next_id += 1;
        self.label.entry(id).or_default();
        self.succ.entry(id).or_default();
        id
    }

    /// Snapshot of every individual created so far, in creation order.
    /// Used by the driver to iterate a stable round even if rules create
    /// new individuals mid-round.
    pub fn individuals(&self) -> Vec<IndividualId> {
        (1..self.next_id).map(IndividualId).collect()
    }

    /// Insert `concept` into `label[i]`. Returns whether the label grew.
    /// `label` only ever grows across a query (monotonicity, §3).
    pub fn add_label(&mut self, i: IndividualId, concept: Rc<Concept>) -> bool {
        self.label.entry(i).or_default().insert(concept)
    }

    /// The label of `i`. Every `IndividualId` returned by
    /// [`Model::ensure_individual`] has an entry here from creation
    /// onward (possibly empty) — a missing entry is the internal
    /// invariant violation of §7, not an expected condition.
    pub fn label(&self, i: IndividualId) -> &HashSet<Rc<Concept>> {
        self.label
            .get(&i)
            .expect("individual id was never created via ensure_individual")
    }

    /// Insert `j` into `succ[i][r]`. Returns whether it grew.
    pub fn add_successor(&mut self, i: IndividualId, role: Symbol, j: IndividualId) -> bool {
        self.succ.entry(i).or_default().entry(role).or_default().insert(j)
    }

    pub fn successors(&self, i: IndividualId, role: &Symbol) -> impl Iterator<Item = IndividualId> + '_ {
        self.succ
            .get(&i)
            .and_then(|by_role| by_role.get(role))
            .into_iter()
            .flatten()
            .copied()
    }

    /// All `(role, successor)` edges out of `i`, for rules that need to
    /// range over every role rather than one named role.
    pub fn successor_edges(&self, i: IndividualId) -> impl Iterator<Item = (&Symbol, IndividualId)> {
        self.succ
            .get(&i)
            .into_iter()
            .flat_map(|by_role| by_role.iter())
            .flat_map(|(role, targets)| targets.iter().map(move |t| (role, *t)))
    }

    pub fn lookup_rep(&self, concept: &Rc<Concept>) -> Option<IndividualId> {
        self.rep.get(concept).copied()
    }

    pub fn set_rep(&mut self, concept: Rc<Concept>, i: IndividualId) {
        self.rep.insert(concept, i);
    }

    /// Check the two structural invariants of §3: every `rep` entry
    /// names a live individual, and that individual's label contains the
    /// concept it is the representative of. A violation here is an
    /// internal bug, not an expected condition — see
    /// [`crate::error::ReasonerError::InvariantViolation`].
    pub fn check_invariants(&self) -> Result<(), String> {
        for (concept, &i) in &self.rep {
            let Some(label) = self.label.get(&i) else {
                return Err(format!(
                    "rep[{concept:?}] = {i:?}, but {i:?} was never created"
                ));
            };
            if !label.contains(concept) {
                return Err(format!(
                    "rep[{concept:?}] = {i:?}, but {concept:?} is not in label[{i:?}]"
                ));
            }
        }
        Ok(())
    }
}
