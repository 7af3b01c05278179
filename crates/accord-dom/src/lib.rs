//! Accord DOM - Document Object Model
//!
//! Arena-based DOM tree plus the [`Dom`] capability trait the accordion
//! component is written against. [`Document`] is the in-crate
//! implementation; embedders with their own DOM implement [`Dom`] for it.

mod attributes;
mod document;
mod dom;
mod events;
mod node;
mod selector;
mod serialize;
mod style;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use document::Document;
pub use dom::Dom;
pub use events::{dispatch, Event, EventHandler, EventType, ListenerId, ListenerStore};
pub use node::{ElementData, Node, NodeData};
pub use selector::{AttrTest, Combinator, ComplexSelector, CompoundSelector, Selector, SelectorError};
pub use style::{InlineStyle, StyleError};
pub use tree::{Children, Descendants, DomTree};

use std::fmt;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node" in tree links
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check this is not the sentinel
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Convert a sentinel-based link into an `Option`
    #[inline]
    pub(crate) fn valid(self) -> Option<NodeId> {
        self.is_valid().then_some(self)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}
