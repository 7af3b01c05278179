//! Accordion errors

use accord_dom::{NodeId, SelectorError};

/// Result alias for accordion operations
pub type Result<T> = std::result::Result<T, AccordionError>;

/// Accordion error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccordionError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("trigger {trigger} has no content panel: {reason}")]
    UnresolvedPanel {
        trigger: NodeId,
        reason: UnresolvedReason,
    },

    #[error("panel id `{id}` for trigger {trigger} is already used by another element")]
    DuplicatePanelId { trigger: NodeId, id: String },

    #[error("{0} is not a trigger of this accordion")]
    UnknownTrigger(NodeId),
}

/// Problems with the container, selectors or options
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("no element matches container selector `{0}`")]
    ContainerNotFound(String),

    #[error("{0} is not an element and cannot contain an accordion")]
    InvalidContainer(NodeId),

    #[error("no trigger matches `{0}` inside the container")]
    NoTriggers(String),

    #[error("invalid selector: {0}")]
    Selector(#[from] SelectorError),

    #[error("content prefix `{0}` cannot be used in an element id")]
    InvalidContentPrefix(String),
}

/// Why a trigger's panel could not be found
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnresolvedReason {
    #[error("it has no next sibling element")]
    NoSibling,

    #[error("no element has id `{0}`")]
    MissingTarget(String),
}

impl From<SelectorError> for AccordionError {
    fn from(err: SelectorError) -> Self {
        Self::Configuration(err.into())
    }
}

impl AccordionError {
    /// Check if this is a configuration problem
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
