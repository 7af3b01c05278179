//! Inline style declarations
//!
//! The `style` attribute is the single source of truth. It is parsed with
//! lightningcss as a style attribute, so `;` inside strings and `url(...)`
//! never splits a declaration, and written back declaration by declaration.

use lightningcss::declaration::DeclarationBlock;
use lightningcss::printer::PrinterOptions;
use lightningcss::properties::{Property, PropertyId};
use lightningcss::stylesheet::{ParserOptions, StyleAttribute};
use lightningcss::traits::ToCss;

/// Style parse or write error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("invalid style attribute: {0}")]
    Parse(String),

    #[error("invalid value `{value}` for `{property}`: {message}")]
    InvalidValue {
        property: String,
        value: String,
        message: String,
    },

    #[error("cannot serialize `{property}`: {message}")]
    Print { property: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Declaration {
    /// Canonical property name, vendor prefix included
    name: String,
    value: String,
    important: bool,
}

impl Declaration {
    fn from_property(property: &Property<'_>, important: bool) -> Result<Self, StyleError> {
        let id = property.property_id();
        let name = canonical_name(&id)?;
        let value = property
            .value_to_css_string(PrinterOptions::default())
            .map_err(|err| StyleError::Print {
                property: name.clone(),
                message: err.to_string(),
            })?;
        Ok(Self {
            name,
            value,
            important,
        })
    }
}

fn canonical_name(id: &PropertyId<'_>) -> Result<String, StyleError> {
    id.to_css_string(PrinterOptions::default())
        .map_err(|err| StyleError::Print {
            property: id.name().to_string(),
            message: err.to_string(),
        })
}

/// Ordered declarations of one `style` attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<Declaration>,
}

impl InlineStyle {
    /// Parse `style` attribute text
    ///
    /// Declarations lightningcss cannot parse are skipped; everything else
    /// survives in order, `!important` ones after the normal ones.
    pub fn parse(css_text: &str) -> Result<Self, StyleError> {
        let options = ParserOptions {
            error_recovery: true,
            ..ParserOptions::default()
        };
        let attribute = StyleAttribute::parse(css_text, options)
            .map_err(|err| StyleError::Parse(err.to_string()))?;
        Self::from_block(&attribute.declarations)
    }

    fn from_block(block: &DeclarationBlock<'_>) -> Result<Self, StyleError> {
        let normal = block.declarations.iter().map(|p| (p, false));
        let important = block.important_declarations.iter().map(|p| (p, true));
        let declarations = normal
            .chain(important)
            .map(|(property, important)| Declaration::from_property(property, important))
            .collect::<Result<_, _>>()?;
        Ok(Self { declarations })
    }

    /// Get a property value; the winning declaration when repeated
    pub fn get(&self, property: &str) -> Option<&str> {
        let name = canonical_name(&PropertyId::from(property)).ok()?;
        self.declarations
            .iter()
            .rev()
            .find(|decl| decl.name == name)
            .map(|decl| decl.value.as_str())
    }

    /// Set a property, replacing an existing declaration in place
    pub fn set(&mut self, property: &str, value: &str) -> Result<(), StyleError> {
        let parsed = Property::parse_string(PropertyId::from(property), value, ParserOptions::default())
            .map_err(|err| StyleError::InvalidValue {
                property: property.to_string(),
                value: value.to_string(),
                message: err.to_string(),
            })?;
        let decl = Declaration::from_property(&parsed, false)?;

        match self.declarations.iter().position(|d| d.name == decl.name) {
            Some(pos) => {
                let name = decl.name.clone();
                self.declarations[pos] = decl;
                // Later duplicates would shadow the new value
                let mut index = 0;
                self.declarations.retain(|d| {
                    index += 1;
                    index - 1 <= pos || d.name != name
                });
            }
            None => self.declarations.push(decl),
        }
        Ok(())
    }

    /// Serialize back to attribute text
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|decl| {
                let important = if decl.important { " !important" } else { "" };
                format!("{}: {}{important};", decl.name, decl.value)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_serialize() {
        let style = InlineStyle::parse("display:none ; ; color: red").unwrap();
        assert_eq!(style.get("display"), Some("none"));
        assert_eq!(style.get("DISPLAY"), Some("none"));
        assert_eq!(style.get("margin"), None);
        assert_eq!(style.css_text(), "display: none; color: red;");
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut style = InlineStyle::parse("display: none; color: red; display: inline").unwrap();
        style.set("display", "block").unwrap();
        assert_eq!(style.css_text(), "display: block; color: red;");

        style.set("margin-top", "4px").unwrap();
        assert_eq!(style.get("margin-top"), Some("4px"));
    }

    #[test]
    fn test_semicolons_inside_values_are_kept() {
        let css = r#"background-image: url("data:image/png;base64,AAAA"); content: "a;b"; color: red"#;
        let mut style = InlineStyle::parse(css).unwrap();
        style.set("display", "none").unwrap();

        let text = style.css_text();
        assert!(text.contains("data:image/png;base64,AAAA"), "{text}");
        assert!(text.contains("a;b"), "{text}");
        assert_eq!(style.get("color"), Some("red"));
        assert_eq!(style.get("display"), Some("none"));
    }

    #[test]
    fn test_important_wins_and_survives() {
        let mut style = InlineStyle::parse("color: red !important; color: blue").unwrap();
        assert_eq!(style.get("color"), Some("red"));

        style.set("display", "block").unwrap();
        assert!(style.css_text().contains("color: red !important;"));
    }

    #[test]
    fn test_custom_property_round_trips() {
        let mut style = InlineStyle::parse("--gap: 4px").unwrap();
        style.set("display", "block").unwrap();
        assert_eq!(style.get("--gap"), Some("4px"));
    }
}
