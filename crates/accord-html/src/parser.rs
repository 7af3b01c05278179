//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to the arena DOM.

use crate::ParseError;
use accord_dom::{Document, Dom, DomTree, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// HTML5 parser
#[derive(Debug, Clone, Default)]
pub struct HtmlParser {
    keep_whitespace: bool,
}

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep whitespace-only text nodes instead of dropping them
    pub fn keep_whitespace(mut self, keep: bool) -> Self {
        self.keep_whitespace = keep;
        self
    }

    /// Parse HTML string into a Document
    ///
    /// Fragments are wrapped in html/head/body the way browsers do.
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        tracing::debug!(bytes = html.len(), "parsing HTML document");

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty();
        let root = document.root();
        self.convert_node(&dom.document, &mut document, root);
        document.finalize();

        tracing::debug!(nodes = document.tree().len(), "parsed HTML document");
        Ok(document)
    }

    /// Convert an RcDom node to our DOM format
    fn convert_node(&self, handle: &Handle, document: &mut Document, parent: NodeId) {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, document, parent);
                }
            }
            RcNodeData::Doctype { name, .. } => {
                let tree: &mut DomTree = document.tree_mut();
                let id = tree.create_doctype(name);
                tree.append_child(parent, id);
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if self.keep_whitespace || !text.trim().is_empty() {
                    let id = document.create_text(&text);
                    document.append_child(parent, id);
                }
            }
            RcNodeData::Comment { contents } => {
                let tree = document.tree_mut();
                let id = tree.create_comment(contents);
                tree.append_child(parent, id);
            }
            RcNodeData::Element { name, attrs, .. } => {
                let id = document.create_element(&name.local);
                for attr in attrs.borrow().iter() {
                    document.set_attribute(id, &attr.name.local, &attr.value);
                }
                document.append_child(parent, id);

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, document, id);
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let doc = HtmlParser::new().parse(html).unwrap();

        let body = doc.body().expect("body");
        assert_eq!(doc.inner_html(body), "<p>Hello</p>");
    }

    #[test]
    fn test_parse_fragment_is_wrapped() {
        let doc = HtmlParser::new().parse("<div><span>Text</span></div>").unwrap();
        let body = doc.body().unwrap();
        assert_eq!(doc.inner_html(body), "<div><span>Text</span></div>");
    }

    #[test]
    fn test_whitespace_text_dropped_by_default() {
        let html = "<div>\n  <button>A</button>\n  <p>B</p>\n</div>";
        let doc = HtmlParser::new().parse(html).unwrap();
        let body = doc.body().unwrap();
        assert_eq!(doc.inner_html(body), "<div><button>A</button><p>B</p></div>");

        let kept = HtmlParser::new().keep_whitespace(true).parse(html).unwrap();
        assert!(kept.tree().len() > doc.tree().len());
    }
}
