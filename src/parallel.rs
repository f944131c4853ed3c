//! Batch Evaluation
//!
//! Rayon-parallel evaluation of multiple expressions against one
//! immutable tree. Trees are read-only during evaluation, so no locking
//! is needed.

use crate::error::PathError;
use crate::path::eval::evaluate;
use crate::path::nodeset::NodeSet;
use crate::tree::{NodeId, Tree};
use rayon::prelude::*;

/// Evaluate multiple path expressions in parallel
pub fn evaluate_many(tree: &Tree, expressions: &[&str]) -> Vec<Result<NodeSet, PathError>> {
    expressions
        .par_iter()
        .map(|expression| evaluate(tree, expression))
        .collect()
}

/// Evaluate an expression and map over the resulting nodes in parallel
pub fn select_map<F, T>(tree: &Tree, expression: &str, mapper: F) -> Result<Vec<T>, PathError>
where
    F: Fn(NodeId) -> T + Sync + Send,
    T: Send,
{
    let nodes = evaluate(tree, expression)?;
    Ok(nodes.as_slice().par_iter().map(|&id| mapper(id)).collect())
}
