//! # el-reasoner
//!
//! A forward-chaining completion reasoner for the EL description logic:
//! decides subsumption by building a canonical model and saturating it
//! with a fixed set of monotone rules, rather than the tableaux
//! backtracking search a more expressive DL requires.
//!
//! ## Quick start
//!
//! ```rust
//! use el_reasoner::loader;
//! use el_reasoner::ontology::OntologyIndex;
//! use el_reasoner::reasoner::subsumers;
//! use el_reasoner::symbol::Interner;
//!
//! let loaded = loader::load("A ⊑ B\nB ⊑ C\n").unwrap();
//! let index = OntologyIndex::build(loaded.axioms, loaded.concepts, loaded.names);
//!
//! let mut symbols = Interner::new();
//! let a = symbols.intern("A");
//! let result = subsumers(&index, a).unwrap();
//! assert_eq!(result.len(), 3); // A, B, C
//! ```
//!
//! ## Architecture
//!
//! - [`concept`] - the EL concept term model (⊤, named classes,
//!   conjunction, existential restriction)
//! - [`symbol`] - interned class/role names
//! - [`ontology`] - the indexed, read-only view of a terminology the
//!   rule engine queries against
//! - [`model`] - canonical-model state for one query: individuals,
//!   labels, successors, shared-witness registry
//! - [`rules`] - the six completion rules
//! - [`driver`] - the fixed-point saturation loop and blocking
//! - [`reasoner`] - the `subsumers` query entry point
//! - [`loader`] - a concrete ontology-source reader (external to the
//!   reasoning core, shipped so the crate is runnable end-to-end)
//! - [`error`] - the error taxonomy

pub mod concept;
pub mod driver;
pub mod error;
pub mod loader;
pub mod model;
pub mod ontology;
pub mod reasoner;
pub mod rules;
pub mod symbol;
