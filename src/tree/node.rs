//! Tree node representation
//!
//! Uses NodeId (u32) for compact, cache-friendly node references. Ids are
//! handed out in document order, so a node's id doubles as its ordinal
//! position.

/// Compact node identifier (index into arena)
pub type NodeId = u32;

/// Kind of tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Element node
    Element,
    /// Attribute node (owned by an element, outside the sibling chain)
    Attribute,
    /// Text content
    Text,
}

/// A node in the arena
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Kind of this node
    pub kind: NodeKind,
    /// Parent node (None for the root)
    pub parent: Option<NodeId>,
    /// First child node
    pub first_child: Option<NodeId>,
    /// Last child node
    pub last_child: Option<NodeId>,
    /// Previous sibling
    pub prev_sibling: Option<NodeId>,
    /// Next sibling
    pub next_sibling: Option<NodeId>,
    /// Index into string pool for the name (elements, attributes); 0 for text nodes
    pub name_id: u32,
    /// Index into string pool for text content (text nodes) or the value (attributes)
    pub value_id: u32,
    /// First attribute node id (elements with attributes)
    pub attr_start: u32,
    /// Number of attribute nodes
    pub attr_count: u16,
    /// Depth in the tree
    pub depth: u16,
}

impl TreeNode {
    /// Create a new element node
    pub fn element(name_id: u32, parent: Option<NodeId>, depth: u16) -> Self {
        TreeNode {
            kind: NodeKind::Element,
            parent,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            name_id,
            value_id: 0,
            attr_start: 0,
            attr_count: 0,
            depth,
        }
    }

    /// Create a new attribute node
    pub fn attribute(name_id: u32, value_id: u32, parent: Option<NodeId>, depth: u16) -> Self {
        TreeNode {
            kind: NodeKind::Attribute,
            parent,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            name_id,
            value_id,
            attr_start: 0,
            attr_count: 0,
            depth,
        }
    }

    /// Create a new text node
    pub fn text(value_id: u32, parent: Option<NodeId>, depth: u16) -> Self {
        TreeNode {
            kind: NodeKind::Text,
            parent,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            name_id: 0,
            value_id,
            attr_start: 0,
            attr_count: 0,
            depth,
        }
    }

    /// Check if this is an element node
    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Check if this is an attribute node
    #[inline]
    pub fn is_attribute(&self) -> bool {
        self.kind == NodeKind::Attribute
    }

    /// Check if this is a text node
    #[inline]
    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// Check if this node has children
    #[inline]
    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }

    /// Check if this node has attributes
    #[inline]
    pub fn has_attributes(&self) -> bool {
        self.attr_count > 0
    }
}
