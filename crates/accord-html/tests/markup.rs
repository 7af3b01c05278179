//! Markup loading tests for accord-html

use accord_dom::{Dom, Selector};
use accord_html::{parse, HtmlParser};

const ACCORDION: &str = r#"
<!DOCTYPE html>
<html>
  <head><title>FAQ</title></head>
  <body>
    <div class="js-accordion">
      <button>First <i class="icon"></i></button>
      <div>One</div>
      <button>Second</button>
      <div id="existing" aria-hidden="false" style="color: red">Two</div>
    </div>
  </body>
</html>
"#;

#[test]
fn test_parse_accordion_markup() {
    let doc = parse(ACCORDION).unwrap();

    let container = doc
        .query_selector(doc.root(), &Selector::parse(".js-accordion").unwrap())
        .expect("container");
    let buttons = doc.query_selector_all(container, &Selector::parse("button").unwrap());
    assert_eq!(buttons.len(), 2);

    // Whitespace between elements is dropped, so siblings line up
    let panel = doc.next_element_sibling(buttons[1]).unwrap();
    assert_eq!(doc.get_attribute(panel, "id"), Some("existing"));
    assert_eq!(doc.get_attribute(panel, "aria-hidden"), Some("false"));
    assert_eq!(doc.style_property(panel, "color").as_deref(), Some("red"));
}

#[test]
fn test_nested_markup_keeps_structure() {
    let html = r#"<div id="outer"><button>A</button><div><div id="inner"><button>B</button><p>b</p></div></div></div>"#;
    let doc = HtmlParser::new().parse(html).unwrap();
    let outer = doc.get_element_by_id("outer").unwrap();
    let inner = doc.get_element_by_id("inner").unwrap();
    assert!(doc.contains(outer, inner));
    assert_eq!(
        doc.outer_html(inner),
        r#"<div id="inner"><button>B</button><p>b</p></div>"#
    );
}

#[test]
fn test_doctype_is_serialized() {
    let doc = parse("<!DOCTYPE html><p>x</p>").unwrap();
    assert!(doc.outer_html(doc.root()).starts_with("<!DOCTYPE html><html>"));
}
