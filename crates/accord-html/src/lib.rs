//! Accord HTML Parser
//!
//! Loads HTML5 markup into an [`accord_dom::Document`] using html5ever.

mod parser;

pub use parser::HtmlParser;

use accord_dom::Document;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read markup: {0}")]
    Io(#[from] std::io::Error),
}
