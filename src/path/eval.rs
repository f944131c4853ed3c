//! Step Evaluation Engine
//!
//! Applies compiled steps against context node sets. Evaluating a full
//! path is a left fold: the output of step i is the context of step i+1,
//! starting from a singleton context.

use super::axes::{matches_name_test, navigate};
use super::compiler::{self, CompiledPath};
use super::nodeset::NodeSet;
use super::parser::Step;
use crate::error::PathError;
use crate::tree::{NodeId, Tree};
use log::trace;
use std::collections::HashSet;

/// Evaluate a path expression against a tree, starting at the root
#[must_use = "evaluation result should be used"]
pub fn evaluate(tree: &Tree, expression: &str) -> Result<NodeSet, PathError> {
    let compiled = compiler::compile(expression)?;
    Ok(run(tree, &compiled, tree.root()))
}

/// Evaluate a path expression from a specific context node
#[must_use = "evaluation result should be used"]
pub fn evaluate_from(
    tree: &Tree,
    context: NodeId,
    expression: &str,
) -> Result<NodeSet, PathError> {
    let compiled = compiler::compile(expression)?;
    Ok(run(tree, &compiled, context))
}

/// Run a compiled path from a start node
pub fn run(tree: &Tree, path: &CompiledPath, start: NodeId) -> NodeSet {
    let mut context = vec![start];
    for step in path.steps() {
        context = apply(tree, step, &context);
        trace!("step {:?} -> {} context nodes", step, context.len());
        if context.is_empty() {
            break;
        }
    }
    NodeSet::from_raw(context)
}

/// Apply one step to a context set, producing the next context set
///
/// Matches are collected per context node so positional predicates filter
/// the per-parent match list. Identity dedup uses a HashSet; global
/// document order is restored by sorting, since ids are ordinals.
pub fn apply(tree: &Tree, step: &Step, context: &[NodeId]) -> Vec<NodeId> {
    let mut seen = HashSet::with_capacity(context.len());
    let mut result = Vec::with_capacity(context.len());

    for &node in context {
        let mut matches: Vec<NodeId> = navigate(tree, node, step.axis)
            .into_iter()
            .filter(|&candidate| matches_name_test(tree, candidate, &step.test))
            .collect();

        if let Some(index) = step.index {
            // 1-based; index 0 or one past the end selects nothing
            matches = match index.checked_sub(1).and_then(|i| matches.get(i)) {
                Some(&chosen) => vec![chosen],
                None => Vec::new(),
            };
        }

        for matched in matches {
            if seen.insert(matched) {
                result.push(matched);
            }
        }
    }

    result.sort_unstable();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeBuilder;

    /// catalog with two cds; the first has a country attribute and a
    /// nested note/author chain under its title
    fn catalog() -> Tree {
        let mut builder = TreeBuilder::new("catalog");
        builder
            .element_with_attrs("cd", &[("country", "UK")])
            .element("title")
            .text("Empire Burlesque")
            .element("note")
            .leaf("author")
            .close()
            .close()
            .close()
            .element("cd")
            .element("title")
            .text("Hide Your Heart")
            .close()
            .close();
        builder.build()
    }

    #[test]
    fn test_child_step() {
        let tree = catalog();
        let result = evaluate(&tree, "/cd").unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_child_name_filter() {
        // root -> [a, b, a] keeps both a children, in source order
        let mut builder = TreeBuilder::new("root");
        builder.leaf("a").leaf("b").leaf("a");
        let tree = builder.build();

        let result = evaluate(&tree, "/a").unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.as_slice(), &[1, 3]);
    }

    #[test]
    fn test_descendant_finds_all_depths() {
        // "child" elements at two different depths, both found, the
        // shallower (smaller ordinal) first
        let mut builder = TreeBuilder::new("root");
        builder
            .element("a")
            .element("b")
            .leaf("child")
            .close()
            .close()
            .element("x")
            .element("y")
            .element("z")
            .element("w")
            .leaf("child")
            .close()
            .close()
            .close()
            .close();
        let tree = builder.build();

        let result = evaluate(&tree, "//child").unwrap();
        assert_eq!(result.len(), 2);
        let ids = result.as_slice();
        assert!(ids[0] < ids[1]);
        assert!(result.iter().all(|id| tree.name(id) == Some("child")));
    }

    #[test]
    fn test_descendant_includes_context() {
        let tree = catalog();
        let result = evaluate(&tree, "//catalog").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.first(), Some(tree.root()));
    }

    #[test]
    fn test_attribute_step() {
        let tree = catalog();
        let result = evaluate(&tree, "/cd/@country").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(tree.value(result.first().unwrap_or(0)), Some("UK"));
    }

    #[test]
    fn test_attribute_missing_is_empty() {
        let tree = catalog();
        // The root has no attributes: empty set, not an error
        let result = evaluate(&tree, "@id").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_descendant_attribute() {
        let tree = catalog();
        let result = evaluate(&tree, "//@country").unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_positional_predicate_per_parent() {
        // [1] picks the first title under EACH cd, not globally
        let tree = catalog();
        let result = evaluate(&tree, "/cd/title[1]").unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_positional_predicate_bounds() {
        let tree = catalog();
        assert_eq!(evaluate(&tree, "/cd[1]").unwrap().len(), 1);
        assert_eq!(evaluate(&tree, "/cd[2]").unwrap().len(), 1);
        assert!(evaluate(&tree, "/cd[3]").unwrap().is_empty());
        assert!(evaluate(&tree, "/cd[0]").unwrap().is_empty());
    }

    #[test]
    fn test_wildcard_step() {
        let tree = catalog();
        let result = evaluate(&tree, "/*").unwrap();
        assert_eq!(result.len(), 2);

        let everything = evaluate(&tree, "//*").unwrap();
        // Every element, no text nodes, no attributes
        assert!(everything.iter().all(|id| tree.get(id).is_some_and(|n| n.is_element())));
        assert_eq!(everything.len(), 7);
    }

    #[test]
    fn test_deep_descendant_chain() {
        let tree = catalog();
        let result = evaluate(&tree, "//title//author").unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_no_duplicates_from_overlapping_contexts() {
        // Both the root and each cd reach the titles on the descendant
        // walk; every title must still appear exactly once
        let tree = catalog();
        let result = evaluate(&tree, "//*//title").unwrap();
        let mut ids: Vec<_> = result.iter().collect();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_document_order_strictly_increasing() {
        let tree = catalog();
        for expression in ["//*", "//title", "/cd/title", "//@country", "//*//*"] {
            let result = evaluate(&tree, expression).unwrap();
            assert!(
                result.as_slice().windows(2).all(|w| w[0] < w[1]),
                "{} out of order",
                expression
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let tree = catalog();
        for expression in ["//title", "/cd/@country", "//*[1]"] {
            let first = evaluate(&tree, expression).unwrap();
            let second = evaluate(&tree, expression).unwrap();
            assert_eq!(first, second, "{} not deterministic", expression);
        }
    }

    #[test]
    fn test_evaluate_from_context_node() {
        let tree = catalog();
        let cds = evaluate(&tree, "/cd").unwrap();
        let first_cd = cds.first().unwrap_or(0);

        let titles = evaluate_from(&tree, first_cd, "title").unwrap();
        assert_eq!(titles.len(), 1);

        let self_match = evaluate_from(&tree, first_cd, "self::cd").unwrap();
        assert_eq!(self_match.len(), 1);
        let self_miss = evaluate_from(&tree, first_cd, "self::dvd").unwrap();
        assert!(self_miss.is_empty());
    }

    #[test]
    fn test_syntax_error_propagates() {
        let tree = catalog();
        assert!(matches!(
            evaluate(&tree, "//"),
            Err(PathError::Syntax(_))
        ));
        assert!(matches!(
            evaluate(&tree, "cd[first]"),
            Err(PathError::Evaluation(_))
        ));
    }

    #[test]
    fn test_compiled_path_reusable_across_trees() {
        let compiled = compiler::compile("//title").unwrap();

        let tree_a = catalog();
        let mut builder = TreeBuilder::new("library");
        builder.element("shelf").leaf("title").close();
        let tree_b = builder.build();

        assert_eq!(run(&tree_a, &compiled, tree_a.root()).len(), 2);
        assert_eq!(run(&tree_b, &compiled, tree_b.root()).len(), 1);
    }
}
