//! Path Compiler
//!
//! Compiles expression strings into reusable step sequences.

use super::parser::{self, Step};
use crate::error::PathError;

/// A compiled path expression
///
/// An ordered, non-empty sequence of location steps. Immutable and
/// shareable across threads; compile once per expression string, then
/// evaluate against any number of trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPath {
    steps: Vec<Step>,
}

impl CompiledPath {
    /// The location steps, in application order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

/// Compile a path expression string
pub fn compile(expression: &str) -> Result<CompiledPath, PathError> {
    let steps = parser::parse(expression)?;
    Ok(CompiledPath { steps })
}
