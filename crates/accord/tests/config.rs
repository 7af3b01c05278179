//! Configuration loading and construction errors

use accord::{
    Accordion, AccordionError, ConfigurationError, Options, Selectors, UnresolvedReason,
};
use accord_dom::{Document, Dom, Selector, SelectorError};

fn load(markup: &str) -> Document {
    accord_html::parse(markup).expect("markup parses")
}

// ============================================================================
// OPTIONS
// ============================================================================

#[test]
fn test_options_from_json_uses_defaults_for_missing_fields() {
    let opts: Options =
        serde_json::from_str(r#"{"collapseOthers": true, "contentPrefix": "faq"}"#).unwrap();
    assert_eq!(opts, Options::new().collapse_others(true).content_prefix("faq"));

    let empty: Options = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, Options::default());
}

#[test]
fn test_options_reject_unknown_fields() {
    let err = serde_json::from_str::<Options>(r#"{"collapseOther": true}"#).unwrap_err();
    assert!(err.to_string().contains("collapseOther"));
}

#[test]
fn test_selectors_from_json() {
    let sel: Selectors = serde_json::from_str(r#"{"trigger": ".toggle"}"#).unwrap();
    assert_eq!(sel.trigger, ".toggle");
    assert_eq!(sel.body, ".js-accordion");
}

// ============================================================================
// CONSTRUCTION ERRORS
// ============================================================================

#[test]
fn test_missing_container() {
    let mut doc = load("<p>nothing here</p>");
    let err = Accordion::mount(&mut doc, Selectors::default(), Options::default()).unwrap_err();
    assert_eq!(
        err,
        AccordionError::Configuration(ConfigurationError::ContainerNotFound(
            ".js-accordion".into()
        ))
    );
    assert!(err.is_configuration());
}

#[test]
fn test_container_must_be_an_element() {
    let mut doc = load(r#"<div class="js-accordion">text only</div>"#);
    let container = doc.query_selector(doc.root(), &".js-accordion".parse::<Selector>().unwrap()).unwrap();
    let text = doc.tree().children(container).next().unwrap();

    let err = Accordion::new(&mut doc, text, Selectors::default(), Options::default()).unwrap_err();
    assert!(matches!(
        err,
        AccordionError::Configuration(ConfigurationError::InvalidContainer(n)) if n == text
    ));
}

#[test]
fn test_no_triggers() {
    let mut doc = load(r#"<div class="js-accordion"><p>a</p></div>"#);
    let err = Accordion::mount(&mut doc, Selectors::default(), Options::default()).unwrap_err();
    assert_eq!(
        err,
        AccordionError::Configuration(ConfigurationError::NoTriggers("button".into()))
    );
}

#[test]
fn test_flat_search_with_only_nested_triggers_has_no_triggers() {
    let mut doc = load(r#"<div class="js-accordion"><div><button>a</button><p>a</p></div></div>"#);
    let err = Accordion::mount(
        &mut doc,
        Selectors::default(),
        Options::new().flat_search(true),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AccordionError::Configuration(ConfigurationError::NoTriggers(_))
    ));
}

#[test]
fn test_invalid_selectors() {
    let mut doc = load(r#"<div class="js-accordion"><button>a</button><p>a</p></div>"#);

    let err = Accordion::mount(
        &mut doc,
        Selectors::new().trigger("h3 + button"),
        Options::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AccordionError::Configuration(ConfigurationError::Selector(SelectorError::Combinator(_)))
    ));

    let err = Accordion::mount(&mut doc, Selectors::new().body(""), Options::default()).unwrap_err();
    assert!(matches!(
        err,
        AccordionError::Configuration(ConfigurationError::Selector(SelectorError::Empty))
    ));
}

#[test]
fn test_invalid_content_prefix() {
    let mut doc = load(r#"<div class="js-accordion"><button>a</button><p>a</p></div>"#);
    let err = Accordion::mount(
        &mut doc,
        Selectors::default(),
        Options::new().content_prefix("two words"),
    )
    .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_trigger_without_sibling_fails_before_touching_markup() {
    let mut doc = load(
        r#"<div class="js-accordion"><button>a</button><p>a</p><div><button id="last">b</button></div></div>"#,
    );
    let before = doc.outer_html(doc.root());
    let last = doc.get_element_by_id("last").unwrap();

    let err = Accordion::mount(&mut doc, Selectors::default(), Options::default()).unwrap_err();
    assert_eq!(
        err,
        AccordionError::UnresolvedPanel {
            trigger: last,
            reason: UnresolvedReason::NoSibling,
        }
    );
    assert_eq!(doc.outer_html(doc.root()), before);
    assert!(doc.listeners().is_empty());
}

#[test]
fn test_custom_target_that_does_not_resolve() {
    let mut doc = load(
        r#"<div class="js-accordion"><button aria-controls="ghost">a</button><p>a</p></div>"#,
    );
    let err = Accordion::mount(
        &mut doc,
        Selectors::default(),
        Options::new().custom_targets(true),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AccordionError::UnresolvedPanel { reason: UnresolvedReason::MissingTarget(ref id), .. } if id == "ghost"
    ));
    let AccordionError::UnresolvedPanel { trigger, .. } = &err else {
        unreachable!()
    };
    assert_eq!(
        err.to_string(),
        format!("trigger {trigger} has no content panel: no element has id `ghost`")
    );
}

#[test]
fn test_synthesized_id_collision() {
    let mut doc = load(
        r#"<p id="accordion-content-0"></p><div class="js-accordion"><button>a</button><p>a</p></div>"#,
    );
    let err = Accordion::mount(&mut doc, Selectors::default(), Options::default()).unwrap_err();
    assert!(matches!(
        err,
        AccordionError::DuplicatePanelId { ref id, .. } if id == "accordion-content-0"
    ));
}

#[test]
fn test_operations_on_unknown_trigger() {
    let mut doc = load(r#"<div class="js-accordion"><button>a</button><p id="p">a</p></div>"#);
    let acc = Accordion::mount(&mut doc, Selectors::default(), Options::default()).unwrap();
    let stranger = doc.get_element_by_id("p").unwrap();

    assert_eq!(
        acc.toggle(&mut doc, stranger),
        Err(AccordionError::UnknownTrigger(stranger))
    );
    assert!(acc.expand(&mut doc, stranger).is_err());
    assert!(acc.collapse(&mut doc, stranger).is_err());
}
