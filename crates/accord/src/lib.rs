//! Accord
//!
//! An accessible accordion: trigger elements toggle the visibility of the
//! content panels they control while `aria-controls`, `aria-expanded` and
//! `aria-hidden` stay in sync.
//!
//! The component is written against the [`Dom`](accord_dom::Dom) trait and
//! never reaches for global document state.
//!
//! # Example
//! ```rust,ignore
//! use accord::{Accordion, Options, Selectors};
//!
//! let mut doc = accord_html::parse(markup)?;
//! let mut accordion = Accordion::mount(&mut doc, Selectors::default(), Options::new().open_first(true))?;
//! accordion.click(&mut doc, second_trigger);
//! accordion.destroy(&mut doc);
//! ```

pub mod aria;
mod accordion;
mod error;
mod options;

pub use accordion::{Accordion, Display, Panel};
pub use error::{AccordionError, ConfigurationError, Result, UnresolvedReason};
pub use options::{Options, Selectors};

// Re-export the DOM layer for embedders
pub use accord_dom as dom;
