//! Error types for path compilation and evaluation.

use thiserror::Error;

/// Errors surfaced by `compile` and `evaluate`.
///
/// Absence of matches is never an error; evaluation of a well-formed
/// expression yields an empty node set instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Malformed expression, rejected at compile time. Nothing is
    /// partially evaluated.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Structurally invalid step, e.g. a positional predicate that is
    /// not a decimal integer.
    #[error("invalid step: {0}")]
    Evaluation(String),
}
