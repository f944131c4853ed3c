//! Axis Navigation
//!
//! The four supported axes: child, descendant-or-self, attribute, self.

use super::parser::{Axis, NameTest};
use crate::tree::{NodeId, NodeKind, Tree};

/// Navigate along an axis from a context node
pub fn navigate(tree: &Tree, context: NodeId, axis: Axis) -> Vec<NodeId> {
    match axis {
        Axis::Child => child_axis(tree, context),
        Axis::DescendantOrSelf => descendant_or_self_axis(tree, context),
        Axis::Attribute => attribute_axis(tree, context),
        Axis::SelfAxis => self_axis(context),
    }
}

/// child:: axis - all child nodes, attributes excluded
fn child_axis(tree: &Tree, context: NodeId) -> Vec<NodeId> {
    tree.children(context).collect()
}

/// descendant-or-self:: axis - the context node followed by every
/// descendant, in pre-order
fn descendant_or_self_axis(tree: &Tree, context: NodeId) -> Vec<NodeId> {
    let descendants = tree.descendants(context);
    let mut result = Vec::with_capacity(1 + descendants.len());
    result.push(context);
    result.extend(descendants);
    result
}

/// attribute:: axis - attribute nodes of an element
///
/// Nodes without attributes yield an empty list, never an error.
fn attribute_axis(tree: &Tree, context: NodeId) -> Vec<NodeId> {
    tree.attributes(context).collect()
}

/// self:: axis - just the context node
fn self_axis(context: NodeId) -> Vec<NodeId> {
    vec![context]
}

/// Check if a node matches a name test
///
/// The wildcard matches principal-kind nodes: elements on the element
/// axes and attribute nodes (only ever reached through the attribute
/// axis). Text nodes have no name and match neither form.
pub fn matches_name_test(tree: &Tree, id: NodeId, test: &NameTest) -> bool {
    let kind = match tree.kind(id) {
        Some(kind) => kind,
        None => return false,
    };
    if kind == NodeKind::Text {
        return false;
    }

    match test {
        NameTest::Wildcard => true,
        NameTest::Name(name) => tree.name(id) == Some(name.as_str()),
    }
}
