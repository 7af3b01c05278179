//! Accordion configuration
//!
//! Both structs deserialize from camelCase option objects such as
//! `{"collapseOthers": true}`; missing fields take their defaults.

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Behavior flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Options {
    /// Expanding one panel collapses all others
    pub collapse_others: bool,
    /// Leave `display` alone; CSS keys off `aria-hidden` instead
    pub custom_hiding: bool,
    /// Resolve panels through an existing `aria-controls` on the trigger
    pub custom_targets: bool,
    /// Prefix for synthesized panel ids
    pub content_prefix: String,
    /// Expand the first trigger right after setup
    pub open_first: bool,
    /// Keep ARIA state already present in the markup
    pub reflect_static: bool,
    /// Only use triggers that are direct children of the container
    pub flat_search: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            collapse_others: false,
            custom_hiding: false,
            custom_targets: false,
            content_prefix: "accordion".to_string(),
            open_first: false,
            reflect_static: false,
            flat_search: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collapse_others(mut self, on: bool) -> Self {
        self.collapse_others = on;
        self
    }

    pub fn custom_hiding(mut self, on: bool) -> Self {
        self.custom_hiding = on;
        self
    }

    pub fn custom_targets(mut self, on: bool) -> Self {
        self.custom_targets = on;
        self
    }

    pub fn content_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.content_prefix = prefix.into();
        self
    }

    pub fn open_first(mut self, on: bool) -> Self {
        self.open_first = on;
        self
    }

    pub fn reflect_static(mut self, on: bool) -> Self {
        self.reflect_static = on;
        self
    }

    pub fn flat_search(mut self, on: bool) -> Self {
        self.flat_search = on;
        self
    }

    /// Check the options can produce valid markup
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.content_prefix.is_empty() || self.content_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigurationError::InvalidContentPrefix(
                self.content_prefix.clone(),
            ));
        }
        Ok(())
    }

    /// Id given to the panel of the `index`-th matched trigger
    pub fn content_id(&self, index: usize) -> String {
        format!("{}-content-{}", self.content_prefix, index)
    }
}

/// Selectors for locating DOM elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    /// Trigger elements inside the container
    pub trigger: String,
    /// Container, when the accordion locates its own root
    pub body: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            trigger: "button".to_string(),
            body: ".js-accordion".to_string(),
        }
    }
}

impl Selectors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(mut self, selector: impl Into<String>) -> Self {
        self.trigger = selector.into();
        self
    }

    pub fn body(mut self, selector: impl Into<String>) -> Self {
        self.body = selector.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::default();
        assert!(!opts.collapse_others);
        assert!(!opts.flat_search);
        assert_eq!(opts.content_prefix, "accordion");
        assert_eq!(opts.content_id(2), "accordion-content-2");

        let sel = Selectors::default();
        assert_eq!(sel.trigger, "button");
        assert_eq!(sel.body, ".js-accordion");
    }

    #[test]
    fn test_builder() {
        let opts = Options::new().collapse_others(true).content_prefix("faq");
        assert!(opts.collapse_others);
        assert_eq!(opts.content_id(0), "faq-content-0");
        assert_eq!(Selectors::new().trigger(".toggle").trigger, ".toggle");
    }

    #[test]
    fn test_validate_prefix() {
        assert!(Options::default().validate().is_ok());
        assert!(matches!(
            Options::new().content_prefix("my faq").validate(),
            Err(ConfigurationError::InvalidContentPrefix(_))
        ));
        assert!(Options::new().content_prefix("").validate().is_err());
    }
}
