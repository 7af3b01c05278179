//! DOM capability
//!
//! Everything the accordion needs from a document, passed in explicitly so
//! components can be driven against [`Document`](crate::Document) or any
//! other tree that implements the trait.

use crate::{Event, EventType, ListenerId, NodeId, Selector};

/// Document access used by components
pub trait Dom {
    /// Document root node
    fn root(&self) -> NodeId;

    /// Lowercase tag name; `None` for non-element or unknown nodes
    fn tag_name(&self, node: NodeId) -> Option<&str>;

    /// Check if a node is an element
    fn is_element(&self, node: NodeId) -> bool {
        self.tag_name(node).is_some()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Next sibling that is an element
    fn next_element_sibling(&self, node: NodeId) -> Option<NodeId>;

    /// Inclusive descendant test
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    /// Descendant elements of `root` matching `selector`, in document order
    fn query_selector_all(&self, root: NodeId, selector: &Selector) -> Vec<NodeId>;

    /// First descendant element of `root` matching `selector`
    fn query_selector(&self, root: NodeId, selector: &Selector) -> Option<NodeId> {
        self.query_selector_all(root, selector).into_iter().next()
    }

    /// First element in document order carrying `id`
    fn get_element_by_id(&self, id: &str) -> Option<NodeId>;

    fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.get_attribute(node, name).is_some()
    }

    /// Set an attribute; ignored for non-elements
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Inline style property value
    fn style_property(&self, node: NodeId, property: &str) -> Option<String>;

    /// Set an inline style property; ignored for non-elements
    fn set_style_property(&mut self, node: NodeId, property: &str, value: &str);

    /// Register a listener on `target`
    fn add_event_listener(&mut self, target: NodeId, event_type: EventType) -> ListenerId;

    /// Unregister a listener; false if it was not registered
    fn remove_event_listener(&mut self, listener: ListenerId) -> bool;

    /// Listeners reached by `event`, paired with the node each is registered
    /// on, in delivery order (target first, then its ancestors)
    fn propagation_path(&self, event: &Event) -> Vec<(ListenerId, NodeId)>;
}
