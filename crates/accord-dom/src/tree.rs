//! DOM Tree (arena-based allocation)

use crate::{Node, NodeId};

/// Arena-based DOM tree
///
/// Slot 0 always holds the document node. Nodes are never freed; detached
/// nodes simply have no parent.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree holds nothing but the document node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content))
    }

    /// Create a detached DOCTYPE node
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        self.push(Node::doctype(name))
    }

    /// Append `child` as the last child of `parent`
    ///
    /// Returns false when either ID is out of range, the child is the
    /// parent itself, or the child is already attached somewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child || self.get(parent).is_none() {
            return false;
        }
        match self.get(child) {
            Some(node) if !node.parent.is_valid() && child != NodeId::ROOT => {}
            _ => return false,
        }

        let last = self.nodes[parent.index()].last_child;
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;

        let node = &mut self.nodes[child.index()];
        node.parent = parent;
        node.prev_sibling = last;
        node.next_sibling = NodeId::NONE;
        true
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent.valid()
    }

    /// Iterate over the direct children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self
            .get(id)
            .map(|n| n.first_child)
            .unwrap_or(NodeId::NONE);
        Children { tree: self, next }
    }

    /// Iterate over the direct element children of a node
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).filter(|&c| self.is_element(c))
    }

    /// Next sibling that is an element, skipping text and comments
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.get(id)?.next_sibling;
        while current.is_valid() {
            if self.is_element(current) {
                return Some(current);
            }
            current = self.nodes[current.index()].next_sibling;
        }
        None
    }

    /// Pre-order traversal of the descendants of `id`, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let first = self
            .get(id)
            .map(|n| n.first_child)
            .unwrap_or(NodeId::NONE);
        Descendants {
            tree: self,
            root: id,
            next: first,
        }
    }

    /// Inclusive descendant test (a node contains itself)
    pub fn contains(&self, ancestor: NodeId, id: NodeId) -> bool {
        if self.get(ancestor).is_none() {
            return false;
        }
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Check if a node is an element
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_element)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over child node IDs
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.valid()?;
        self.next = self.tree.nodes[current.index()].next_sibling;
        Some(current)
    }
}

/// Pre-order iterator over descendant node IDs
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: NodeId,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.valid()?;
        let node = &self.tree.nodes[current.index()];

        self.next = if node.first_child.is_valid() {
            node.first_child
        } else {
            // Climb until a sibling is found or we are back at the root
            let mut up = current;
            loop {
                if up == self.root {
                    break NodeId::NONE;
                }
                let n = &self.tree.nodes[up.index()];
                if n.next_sibling.is_valid() {
                    break n.next_sibling;
                }
                match n.parent.valid() {
                    Some(p) if p != self.root => up = p,
                    _ => break NodeId::NONE,
                }
            }
        };
        Some(current)
    }
}
