//! RustyPath - location-path queries over in-memory document trees
//!
//! Pipeline:
//! - Build an immutable tree through `TreeBuilder` (tree)
//! - Compile a path expression once (path::compiler)
//! - Evaluate it against any tree (path::eval), directly or through the
//!   caching `Evaluator` (engine)
//! - Batch-evaluate many expressions in parallel (parallel)
//!
//! Results are `NodeSet`s: deduplicated by node identity, ordered by
//! document order, iterable any number of times.

pub mod engine;
pub mod error;
pub mod parallel;
pub mod path;
pub mod tree;

pub use engine::Evaluator;
pub use error::PathError;
pub use path::{compile, evaluate, evaluate_from, CompiledPath, NodeSet};
pub use tree::{NodeId, NodeKind, Tree, TreeBuilder};
