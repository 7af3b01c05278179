//! ARIA state attributes
//!
//! The accordion only manages three attributes; values are the literal
//! strings `"true"` / `"false"` read by assistive technology.

use accord_dom::{Dom, NodeId};

pub const ARIA_CONTROLS: &str = "aria-controls";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_HIDDEN: &str = "aria-hidden";

/// ARIA state/property managed by the accordion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AriaState {
    Controls(String),
    Expanded(bool),
    Hidden(bool),
}

impl AriaState {
    /// Attribute name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Controls(_) => ARIA_CONTROLS,
            Self::Expanded(_) => ARIA_EXPANDED,
            Self::Hidden(_) => ARIA_HIDDEN,
        }
    }

    /// Attribute value
    pub fn value(&self) -> &str {
        match self {
            Self::Controls(id) => id,
            Self::Expanded(b) | Self::Hidden(b) => bool_str(*b),
        }
    }

    /// Write this state onto `node`
    pub fn apply<D: Dom + ?Sized>(&self, dom: &mut D, node: NodeId) {
        dom.set_attribute(node, self.name(), self.value());
    }
}

/// ARIA boolean string
pub fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Check an ARIA boolean attribute is exactly `"true"`
pub fn is_true<D: Dom + ?Sized>(dom: &D, node: NodeId, name: &str) -> bool {
    dom.get_attribute(node, name) == Some("true")
}
