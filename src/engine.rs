//! Caching Evaluator
//!
//! Facade over compile-and-run with an LRU cache of compiled expressions,
//! keyed by expression string. Repeated queries skip recompilation; the
//! cache mutex is the evaluator's only interior mutability, so one
//! evaluator can serve many threads.

use crate::error::PathError;
use crate::path::compiler::{self, CompiledPath};
use crate::path::eval;
use crate::path::nodeset::NodeSet;
use crate::tree::{NodeId, Tree};
use log::debug;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

/// Default number of compiled expressions kept per evaluator
const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Evaluator with a compiled-expression cache
pub struct Evaluator {
    cache: Mutex<LruCache<String, Arc<CompiledPath>>>,
}

impl Evaluator {
    /// Create an evaluator with the default cache capacity
    pub fn new() -> Self {
        let capacity =
            NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::with_capacity(capacity)
    }

    /// Create an evaluator with a custom cache capacity
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Evaluator {
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Evaluate an expression against a tree, starting at the root
    pub fn evaluate(&self, tree: &Tree, expression: &str) -> Result<NodeSet, PathError> {
        let compiled = self.compiled(expression)?;
        Ok(eval::run(tree, &compiled, tree.root()))
    }

    /// Evaluate an expression from a specific context node
    pub fn evaluate_from(
        &self,
        tree: &Tree,
        context: NodeId,
        expression: &str,
    ) -> Result<NodeSet, PathError> {
        let compiled = self.compiled(expression)?;
        Ok(eval::run(tree, &compiled, context))
    }

    /// Fetch a compiled path from the cache, compiling on miss
    ///
    /// A poisoned cache lock degrades to compiling without caching.
    fn compiled(&self, expression: &str) -> Result<Arc<CompiledPath>, PathError> {
        if let Ok(mut cache) = self.cache.lock() {
            if let Some(compiled) = cache.get(expression) {
                debug!("compile cache hit: {}", expression);
                return Ok(Arc::clone(compiled));
            }
        }

        debug!("compile cache miss: {}", expression);
        let compiled = Arc::new(compiler::compile(expression)?);

        if let Ok(mut cache) = self.cache.lock() {
            cache.put(expression.to_string(), Arc::clone(&compiled));
        }

        Ok(compiled)
    }

    /// Number of cached compiled expressions
    pub fn cached_len(&self) -> usize {
        self.cache.lock().map(|cache| cache.len()).unwrap_or(0)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
