//! Programmatic tree construction
//!
//! Stands in for an external document loader: the loader walks whatever it
//! parsed and replays the structure into the builder. Node ids are handed
//! out in document order (element, then its attributes, then children), so
//! the arena index is the node's ordinal position.
//!
//! Attributes are given at element creation, keeping each element's
//! attribute range contiguous in the arena.

use super::node::{NodeId, TreeNode};
use super::strings::StringPool;
use super::Tree;

/// Builder producing an immutable [`Tree`]
///
/// ```
/// use rustypath::tree::TreeBuilder;
///
/// let mut builder = TreeBuilder::new("catalog");
/// builder
///     .element_with_attrs("cd", &[("country", "UK")])
///     .leaf("title")
///     .close();
/// let tree = builder.build();
/// assert_eq!(tree.name(tree.root()), Some("catalog"));
/// ```
pub struct TreeBuilder {
    nodes: Vec<TreeNode>,
    strings: StringPool,
    /// Stack of open elements; the root is never popped
    open: Vec<NodeId>,
}

impl TreeBuilder {
    /// Create a builder with the given root element
    pub fn new(root_name: &str) -> Self {
        Self::new_with_attrs(root_name, &[])
    }

    /// Create a builder with a root element carrying attributes
    pub fn new_with_attrs(root_name: &str, attrs: &[(&str, &str)]) -> Self {
        let mut builder = TreeBuilder {
            nodes: Vec::with_capacity(16),
            strings: StringPool::new(),
            open: Vec::with_capacity(8),
        };
        let name_id = builder.strings.intern(root_name);
        builder.nodes.push(TreeNode::element(name_id, None, 0));
        builder.push_attrs(0, attrs);
        builder.open.push(0);
        builder
    }

    /// Open a child element; subsequent nodes nest beneath it until
    /// [`close`](Self::close)
    pub fn element(&mut self, name: &str) -> &mut Self {
        self.element_with_attrs(name, &[])
    }

    /// Open a child element with attributes
    pub fn element_with_attrs(&mut self, name: &str, attrs: &[(&str, &str)]) -> &mut Self {
        let name_id = self.strings.intern(name);
        let parent = self.current();
        let depth = self.nodes[parent as usize].depth + 1;
        let id = self.push_linked(TreeNode::element(name_id, Some(parent), depth));
        self.push_attrs(id, attrs);
        self.open.push(id);
        self
    }

    /// Add a childless element and immediately close it
    pub fn leaf(&mut self, name: &str) -> &mut Self {
        self.element(name).close()
    }

    /// Add a childless element with attributes and immediately close it
    pub fn leaf_with_attrs(&mut self, name: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.element_with_attrs(name, attrs).close()
    }

    /// Add a text child to the current element
    pub fn text(&mut self, content: &str) -> &mut Self {
        let value_id = self.strings.intern(content);
        let parent = self.current();
        let depth = self.nodes[parent as usize].depth + 1;
        self.push_linked(TreeNode::text(value_id, Some(parent), depth));
        self
    }

    /// Close the current element; closing at the root is a no-op
    pub fn close(&mut self) -> &mut Self {
        if self.open.len() > 1 {
            self.open.pop();
        }
        self
    }

    /// Finish construction; any still-open elements are closed
    pub fn build(self) -> Tree {
        Tree::from_parts(self.nodes, self.strings, 0)
    }

    fn current(&self) -> NodeId {
        self.open.last().copied().unwrap_or(0)
    }

    /// Append a node into its parent's child chain
    fn push_linked(&mut self, mut node: TreeNode) -> NodeId {
        let id = self.nodes.len() as NodeId;
        if let Some(parent) = node.parent {
            let p = parent as usize;
            if let Some(prev) = self.nodes[p].last_child {
                self.nodes[prev as usize].next_sibling = Some(id);
                node.prev_sibling = Some(prev);
            } else {
                self.nodes[p].first_child = Some(id);
            }
            self.nodes[p].last_child = Some(id);
        }
        self.nodes.push(node);
        id
    }

    /// Append attribute nodes for `owner`; they sit directly after the
    /// element in the arena and outside the sibling chain
    fn push_attrs(&mut self, owner: NodeId, attrs: &[(&str, &str)]) {
        if attrs.is_empty() {
            return;
        }
        let start = self.nodes.len() as NodeId;
        let depth = self.nodes[owner as usize].depth + 1;
        for (name, value) in attrs {
            let name_id = self.strings.intern(name);
            let value_id = self.strings.intern(value);
            self.nodes
                .push(TreeNode::attribute(name_id, value_id, Some(owner), depth));
        }
        let node = &mut self.nodes[owner as usize];
        node.attr_start = start;
        node.attr_count = attrs.len() as u16;
    }
}
