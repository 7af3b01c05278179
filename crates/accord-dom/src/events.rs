//! DOM Events
//!
//! Listener registration and bubbling dispatch. Listeners are identified by
//! [`ListenerId`] instead of holding closures; the component that registered
//! a listener receives the event through [`EventHandler`].

use crate::{Dom, NodeId};
use std::collections::HashMap;

/// Event type identifier; every supported type bubbles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
}

/// Registered listener handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// DOM event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_type: EventType,
    /// Node the event was fired at
    pub target: NodeId,
    /// Node whose listener is currently running
    pub current_target: NodeId,
}

impl Event {
    /// Create an event of the given type aimed at `target`
    pub fn new(event_type: EventType, target: NodeId) -> Self {
        Self {
            event_type,
            target,
            current_target: target,
        }
    }

    /// Create a click event
    pub fn click(target: NodeId) -> Self {
        Self::new(EventType::Click, target)
    }

    /// Same event as seen by a listener on `current_target`
    pub fn at(&self, current_target: NodeId) -> Self {
        Self {
            current_target,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Registration {
    target: NodeId,
    event_type: EventType,
}

/// Listener store keyed by target node and event type
#[derive(Debug, Default)]
pub struct ListenerStore {
    next_id: u64,
    by_target: HashMap<(NodeId, EventType), Vec<ListenerId>>,
    registrations: HashMap<ListenerId, Registration>,
}

impl ListenerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener, returning its handle
    pub fn add(&mut self, target: NodeId, event_type: EventType) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.by_target.entry((target, event_type)).or_default().push(id);
        self.registrations.insert(id, Registration { target, event_type });
        id
    }

    /// Remove a listener; false if it was not registered
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let Some(reg) = self.registrations.remove(&id) else {
            return false;
        };
        let key = (reg.target, reg.event_type);
        if let Some(listeners) = self.by_target.get_mut(&key) {
            listeners.retain(|&l| l != id);
            if listeners.is_empty() {
                self.by_target.remove(&key);
            }
        }
        true
    }

    /// Listeners on one node for one event type, in registration order
    pub fn get(&self, target: NodeId, event_type: EventType) -> &[ListenerId] {
        self.by_target
            .get(&(target, event_type))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

/// Receiver of events for the listeners it registered
pub trait EventHandler<D: Dom + ?Sized> {
    /// Whether this handler registered `listener`
    fn owns_listener(&self, listener: ListenerId) -> bool;

    /// Handle one event delivery; `event.current_target` is the node the
    /// listener was registered on
    fn handle_event(&mut self, dom: &mut D, event: &Event);
}

/// Deliver `event` along its propagation path
///
/// Each listener reached is handed to the handler owning it. Returns the
/// number of deliveries made.
pub fn dispatch<D: Dom + ?Sized>(
    dom: &mut D,
    event: &Event,
    handlers: &mut [&mut dyn EventHandler<D>],
) -> usize {
    let path = dom.propagation_path(event);
    tracing::trace!(event_type = ?event.event_type, node = %event.target, listeners = path.len(), "dispatching event");

    let mut delivered = 0;
    for (listener, current_target) in path {
        let scoped = event.at(current_target);
        for handler in handlers.iter_mut() {
            if handler.owns_listener(listener) {
                handler.handle_event(dom, &scoped);
                delivered += 1;
            }
        }
    }
    delivered
}
