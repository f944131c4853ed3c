//! Tree Module - Arena-based document tree
//!
//! Implements an efficient tree representation using:
//! - Arena allocation for nodes
//! - NodeId (u32) indices for cache-friendly traversal; ids are assigned
//!   in document order and double as ordinal positions
//! - String interning for names, attribute values and text content
//!
//! Trees are built through [`TreeBuilder`] and immutable afterwards, so
//! any number of evaluations may run against one tree concurrently.

pub mod builder;
pub mod node;
pub mod strings;

pub use builder::TreeBuilder;
pub use node::{NodeId, NodeKind, TreeNode};
pub use strings::StringPool;

/// An immutable document tree stored in arena format
pub struct Tree {
    /// Arena of nodes, indexed by NodeId in document order
    nodes: Vec<TreeNode>,
    /// Interned strings
    strings: StringPool,
    /// Root element node id
    root: NodeId,
}

impl Tree {
    pub(crate) fn from_parts(nodes: Vec<TreeNode>, strings: StringPool, root: NodeId) -> Self {
        Tree {
            nodes,
            strings,
            root,
        }
    }

    /// Get the root element id
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get total node count (elements, attributes and text nodes)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get a node by id
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node's kind
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.get(id).map(|node| node.kind)
    }

    /// Get a node's name
    ///
    /// Elements and attributes have their given name; text nodes report
    /// the empty string.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        let node = self.get(id)?;
        self.strings.get(node.name_id)
    }

    /// Get a node's own value: text content for text nodes, the value
    /// for attributes, None for elements
    pub fn value(&self, id: NodeId) -> Option<&str> {
        let node = self.get(id)?;
        match node.kind {
            NodeKind::Text | NodeKind::Attribute => self.strings.get(node.value_id),
            NodeKind::Element => None,
        }
    }

    /// Get a node's parent
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Iterate over a node's direct children (attributes excluded)
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).and_then(|node| node.first_child),
        }
    }

    /// Collect every descendant of a node in pre-order, excluding the
    /// node itself and any attributes
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).collect();
        stack.reverse();
        while let Some(current) = stack.pop() {
            result.push(current);
            let first = stack.len();
            stack.extend(self.children(current));
            stack[first..].reverse();
        }
        result
    }

    /// Iterate over an element's attribute node ids
    pub fn attributes(&self, id: NodeId) -> impl Iterator<Item = NodeId> {
        let (start, count) = self
            .get(id)
            .map(|node| (node.attr_start, node.attr_count as u32))
            .unwrap_or((0, 0));
        start..start + count
    }

    /// Find an attribute node by name
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.attributes(id).find(|&attr| self.name(attr) == Some(name))
    }

    /// Get an attribute's value by name
    pub fn attribute_value(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attribute(id, name).and_then(|attr| self.value(attr))
    }

    /// Get the string-value of a node: its own value for text nodes and
    /// attributes, the concatenated descendant text for elements
    pub fn string_value(&self, id: NodeId) -> String {
        match self.kind(id) {
            Some(NodeKind::Text) | Some(NodeKind::Attribute) => {
                self.value(id).unwrap_or("").to_string()
            }
            Some(NodeKind::Element) => {
                let mut result = String::new();
                self.collect_text(id, &mut result);
                result
            }
            None => String::new(),
        }
    }

    /// Recursively collect text content from descendants
    fn collect_text(&self, id: NodeId, result: &mut String) {
        for child in self.children(id) {
            match self.kind(child) {
                Some(NodeKind::Text) => {
                    if let Some(text) = self.value(child) {
                        result.push_str(text);
                    }
                }
                Some(NodeKind::Element) => self.collect_text(child, result),
                _ => {}
            }
        }
    }
}

/// Iterator over an element's direct children
pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.get(id).and_then(|node| node.next_sibling);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        let mut builder = TreeBuilder::new("catalog");
        builder
            .element_with_attrs("cd", &[("country", "UK")])
            .element("title")
            .text("Empire Burlesque")
            .close()
            .close()
            .element("cd")
            .leaf("title")
            .close();
        builder.build()
    }

    #[test]
    fn test_descendants_pre_order() {
        let tree = sample();
        let descendants = tree.descendants(tree.root());
        // Attribute nodes never appear on the descendant walk
        assert!(descendants
            .iter()
            .all(|&id| tree.kind(id) != Some(NodeKind::Attribute)));
        // Pre-order over document-ordered ids is strictly increasing
        assert!(descendants.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_string_value_concatenates_text() {
        let tree = sample();
        let cds: Vec<_> = tree.children(tree.root()).collect();
        assert_eq!(tree.string_value(cds[0]), "Empire Burlesque");
        assert_eq!(tree.string_value(tree.root()), "Empire Burlesque");
    }

    #[test]
    fn test_attribute_lookup() {
        let tree = sample();
        let cds: Vec<_> = tree.children(tree.root()).collect();
        assert_eq!(tree.attribute_value(cds[0], "country"), Some("UK"));
        assert_eq!(tree.attribute_value(cds[0], "year"), None);
        assert_eq!(tree.attribute_value(cds[1], "country"), None);
    }

    #[test]
    fn test_out_of_range_id() {
        let tree = sample();
        assert!(tree.get(999).is_none());
        assert_eq!(tree.name(999), None);
        assert_eq!(tree.children(999).count(), 0);
    }
}
