//! Document - High-level document API

use crate::{
    Dom, DomTree, Event, EventType, InlineStyle, ListenerId, ListenerStore, NodeId, Selector,
};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Registered event listeners
    listeners: ListenerStore,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a document with an empty html/head/body skeleton
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            listeners: ListenerStore::new(),
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty() -> Self {
        Self {
            tree: DomTree::new(),
            listeners: ListenerStore::new(),
            body_element: NodeId::NONE,
        }
    }

    /// Locate body after the tree was built externally
    pub fn finalize(&mut self) {
        let find = |tree: &DomTree, parent: NodeId, tag: &str| {
            tree.element_children(parent)
                .find(|&c| tree.get(c).and_then(|n| n.as_element()).is_some_and(|e| e.tag == tag))
                .unwrap_or(NodeId::NONE)
        };

        let html = find(&self.tree, self.tree.root(), "html");
        self.body_element = if html.is_valid() {
            find(&self.tree, html, "body")
        } else {
            NodeId::NONE
        };
    }

    /// Get <body> element
    pub fn body(&self) -> Option<NodeId> {
        self.body_element.valid()
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Registered listeners
    pub fn listeners(&self) -> &ListenerStore {
        &self.listeners
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.tree.create_text(content)
    }

    /// Append `child` under `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.tree.append_child(parent, child)
    }

    /// Create an element with attributes and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.tree.create_element(tag);
        for (name, value) in attrs {
            self.set_attribute(id, name, value);
        }
        self.tree.append_child(parent, id);
        id
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for Document {
    fn root(&self) -> NodeId {
        self.tree.root()
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.tree.get(node)?.as_element().map(|e| e.tag.as_str())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.parent(node)
    }

    fn next_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.tree.next_element_sibling(node)
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.tree.contains(ancestor, node)
    }

    fn query_selector_all(&self, root: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.tree
            .descendants(root)
            .filter(|&id| selector.matches(&self.tree, id))
            .collect()
    }

    fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.descendants(self.tree.root()).find(|&node| {
            self.tree
                .get(node)
                .and_then(|n| n.as_element())
                .is_some_and(|e| e.id() == Some(id))
        })
    }

    fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree.get(node)?.as_element()?.get_attr(name)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.tree.get_mut(node).and_then(|n| n.as_element_mut()) {
            elem.set_attr(name, value);
        }
    }

    fn style_property(&self, node: NodeId, property: &str) -> Option<String> {
        let css = self.get_attribute(node, "style")?;
        InlineStyle::parse(css).ok()?.get(property).map(str::to_string)
    }

    fn set_style_property(&mut self, node: NodeId, property: &str, value: &str) {
        let Some(elem) = self.tree.get_mut(node).and_then(|n| n.as_element_mut()) else {
            return;
        };
        let current = elem.get_attr("style").unwrap_or("");
        let updated = InlineStyle::parse(current).and_then(|mut style| {
            style.set(property, value)?;
            Ok(style.css_text())
        });
        match updated {
            Ok(css) => elem.set_attr("style", &css),
            Err(err) => tracing::warn!(%node, %err, "leaving inline style untouched"),
        }
    }

    fn add_event_listener(&mut self, target: NodeId, event_type: EventType) -> ListenerId {
        self.listeners.add(target, event_type)
    }

    fn remove_event_listener(&mut self, listener: ListenerId) -> bool {
        self.listeners.remove(listener)
    }

    fn propagation_path(&self, event: &Event) -> Vec<(ListenerId, NodeId)> {
        let mut path = Vec::new();
        let mut current = Some(event.target);
        while let Some(node) = current {
            path.extend(
                self.listeners
                    .get(node, event.event_type)
                    .iter()
                    .map(|&listener| (listener, node)),
            );
            current = self.tree.parent(node);
        }
        path
    }
}

