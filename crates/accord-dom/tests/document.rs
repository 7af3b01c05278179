//! Document and DOM capability tests
//!
//! Exercises `Document` only through the `Dom` trait where possible, the way
//! components see it.

use accord_dom::{
    dispatch, Document, Dom, Event, EventHandler, EventType, ListenerId, NodeId, Selector,
};

fn sel(s: &str) -> Selector {
    Selector::parse(s).expect("valid selector")
}

/// <div class="outer"><button id="b1"><span/></button><p id="p1"/><div class="inner"><button id="b2"/></div></div>
fn fixture() -> (Document, NodeId) {
    let mut doc = Document::new();
    let body = doc.body().unwrap();
    let outer = doc.append_element(body, "div", &[("class", "outer")]);
    let b1 = doc.append_element(outer, "button", &[("id", "b1")]);
    doc.append_element(b1, "span", &[]);
    doc.append_element(outer, "p", &[("id", "p1")]);
    let inner = doc.append_element(outer, "div", &[("class", "inner")]);
    doc.append_element(inner, "button", &[("id", "b2")]);
    (doc, outer)
}

// ============================================================================
// QUERIES
// ============================================================================

#[test]
fn test_query_selector_all_in_document_order() {
    let (doc, outer) = fixture();
    let buttons = doc.query_selector_all(outer, &sel("button"));
    assert_eq!(buttons.len(), 2);
    assert_eq!(doc.get_attribute(buttons[0], "id"), Some("b1"));
    assert_eq!(doc.get_attribute(buttons[1], "id"), Some("b2"));
}

#[test]
fn test_query_excludes_root_itself() {
    let (doc, outer) = fixture();
    assert!(doc.query_selector(outer, &sel(".outer")).is_none());
    assert_eq!(doc.query_selector(doc.root(), &sel(".outer")), Some(outer));
}

#[test]
fn test_get_element_by_id_and_relations() {
    let (doc, outer) = fixture();
    let b1 = doc.get_element_by_id("b1").unwrap();
    let p1 = doc.get_element_by_id("p1").unwrap();
    assert_eq!(doc.next_element_sibling(b1), Some(p1));
    assert_eq!(doc.parent(b1), Some(outer));
    assert!(doc.contains(outer, b1));
    assert!(!doc.contains(b1, p1));
    assert!(doc.get_element_by_id("missing").is_none());
    assert_eq!(doc.tag_name(b1), Some("button"));
    assert!(!doc.is_element(doc.root()));
}

#[test]
fn test_style_round_trips_through_attribute() {
    let (mut doc, outer) = fixture();
    doc.set_attribute(outer, "style", "color: red");
    doc.set_style_property(outer, "display", "block");
    assert_eq!(doc.style_property(outer, "display").as_deref(), Some("block"));
    assert_eq!(doc.get_attribute(outer, "style"), Some("color: red; display: block;"));
}

// ============================================================================
// EVENTS
// ============================================================================

#[derive(Default)]
struct Recorder {
    listeners: Vec<ListenerId>,
    seen: Vec<(NodeId, NodeId)>,
}

impl EventHandler<Document> for Recorder {
    fn owns_listener(&self, listener: ListenerId) -> bool {
        self.listeners.contains(&listener)
    }

    fn handle_event(&mut self, _dom: &mut Document, event: &Event) {
        self.seen.push((event.target, event.current_target));
    }
}

#[test]
fn test_click_bubbles_to_ancestors() {
    let (mut doc, outer) = fixture();
    let inner = doc.query_selector(outer, &sel(".inner")).unwrap();
    let b2 = doc.get_element_by_id("b2").unwrap();

    let mut rec = Recorder::default();
    rec.listeners.push(doc.add_event_listener(outer, EventType::Click));
    rec.listeners.push(doc.add_event_listener(inner, EventType::Click));

    let delivered = dispatch(&mut doc, &Event::click(b2), &mut [&mut rec]);
    assert_eq!(delivered, 2);
    // Innermost listener first
    assert_eq!(rec.seen, vec![(b2, inner), (b2, outer)]);
}

#[test]
fn test_removed_listener_is_not_reached() {
    let (mut doc, outer) = fixture();
    let b1 = doc.get_element_by_id("b1").unwrap();

    let mut rec = Recorder::default();
    let id = doc.add_event_listener(outer, EventType::Click);
    rec.listeners.push(id);
    assert!(doc.remove_event_listener(id));
    assert!(!doc.remove_event_listener(id));

    assert_eq!(dispatch(&mut doc, &Event::click(b1), &mut [&mut rec]), 0);
    assert!(rec.seen.is_empty());
    assert!(doc.listeners().is_empty());
}
