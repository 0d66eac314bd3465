//! Error types for the EL completion reasoner

use thiserror::Error;

/// Reasoner error type
#[derive(Error, Debug)]
pub enum ReasonerError {
    /// The ontology source could not be loaded at all (a loader failure,
    /// as opposed to a single malformed axiom the indexer can skip).
    #[error("loader failure: {0}")]
    Loader(String),

    /// An internal invariant was violated (e.g. a dangling `rep` entry
    /// pointing at an individual that was never created). Not an expected
    /// condition; the query aborts rather than recovering.
    #[error("internal invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type for reasoner operations
pub type ReasonerResult<T> = Result<T, ReasonerError>;
