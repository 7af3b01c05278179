//! Accordion component
//!
//! Discovers trigger/panel pairs under a container, keeps their ARIA state
//! and inline `display` in sync, and toggles them from one delegated click
//! listener on the container.

use crate::aria::{is_true, AriaState, ARIA_CONTROLS, ARIA_EXPANDED, ARIA_HIDDEN};
use crate::error::{AccordionError, ConfigurationError, Result, UnresolvedReason};
use crate::options::{Options, Selectors};
use accord_dom::{dispatch, Dom, Event, EventHandler, EventType, ListenerId, NodeId, Selector};

/// Visual display of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    /// Display matching an `aria-hidden` state
    pub fn for_hidden(hidden: bool) -> Self {
        if hidden { Self::None } else { Self::Block }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

/// One trigger and the content panel it controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub trigger: NodeId,
    pub content: NodeId,
    /// Value of the panel's `id` and the trigger's `aria-controls`
    pub content_id: String,
    /// Whether `content_id` was synthesized rather than found in markup
    pub synthesized_id: bool,
}

/// Accordion component
#[derive(Debug)]
pub struct Accordion {
    container: NodeId,
    selectors: Selectors,
    options: Options,
    panels: Vec<Panel>,
    listeners: Vec<ListenerId>,
}

impl Accordion {
    /// Locate the container with `selectors.body` and set up an accordion on it
    pub fn mount<D: Dom + ?Sized>(dom: &mut D, selectors: Selectors, options: Options) -> Result<Self> {
        let body = Selector::parse(&selectors.body)?;
        let container = dom
            .query_selector(dom.root(), &body)
            .ok_or_else(|| ConfigurationError::ContainerNotFound(selectors.body.clone()))?;
        Self::new(dom, container, selectors, options)
    }

    /// Set up an accordion on `container`
    ///
    /// Every trigger and panel is resolved before the DOM is touched, so a
    /// failed construction leaves the markup unchanged.
    pub fn new<D: Dom + ?Sized>(
        dom: &mut D,
        container: NodeId,
        selectors: Selectors,
        options: Options,
    ) -> Result<Self> {
        if !dom.is_element(container) {
            return Err(ConfigurationError::InvalidContainer(container).into());
        }
        options.validate()?;
        let trigger_selector = Selector::parse(&selectors.trigger)?;

        let panels = find_panels(dom, container, &trigger_selector, &options)?;
        tracing::debug!(%container, triggers = panels.len(), "accordion discovered triggers");

        let mut accordion = Self {
            container,
            selectors,
            options,
            panels,
            listeners: Vec::new(),
        };

        for index in 0..accordion.panels.len() {
            accordion.set_aria(dom, index);
        }

        let listener = dom.add_event_listener(container, EventType::Click);
        accordion.listeners.push(listener);

        if accordion.options.open_first {
            accordion.expand_at(dom, 0, true);
        }

        Ok(accordion)
    }

    fn set_aria<D: Dom + ?Sized>(&self, dom: &mut D, index: usize) {
        let panel = &self.panels[index];

        let (expanded, hidden) = if self.options.reflect_static {
            let existing = |node, name| {
                dom.get_attribute(node, name)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };
            (
                existing(panel.trigger, ARIA_EXPANDED).unwrap_or_else(|| "false".to_string()),
                existing(panel.content, ARIA_HIDDEN).unwrap_or_else(|| "true".to_string()),
            )
        } else {
            ("false".to_string(), "true".to_string())
        };

        if panel.synthesized_id {
            dom.set_attribute(panel.content, "id", &panel.content_id);
        }
        AriaState::Controls(panel.content_id.clone()).apply(dom, panel.trigger);
        dom.set_attribute(panel.trigger, ARIA_EXPANDED, &expanded);
        dom.set_attribute(panel.content, ARIA_HIDDEN, &hidden);
        self.apply_style(dom, panel.content);
    }

    /// Reflect a panel's `aria-hidden` into its inline `display`
    fn apply_style<D: Dom + ?Sized>(&self, dom: &mut D, content: NodeId) {
        if self.options.custom_hiding {
            return;
        }
        let shown = Display::for_hidden(is_true(dom, content, ARIA_HIDDEN));
        tracing::trace!(panel = %content, display = shown.as_css(), "applying panel style");
        dom.set_style_property(content, "display", shown.as_css());
    }

    fn index_of(&self, trigger: NodeId) -> Result<usize> {
        self.panels
            .iter()
            .position(|p| p.trigger == trigger)
            .ok_or(AccordionError::UnknownTrigger(trigger))
    }

    /// Flip a trigger between expanded and collapsed
    pub fn toggle<D: Dom + ?Sized>(&self, dom: &mut D, trigger: NodeId) -> Result<()> {
        let index = self.index_of(trigger)?;
        self.toggle_at(dom, index);
        Ok(())
    }

    /// Expand a trigger's panel, collapsing the rest first in exclusive mode
    pub fn expand<D: Dom + ?Sized>(&self, dom: &mut D, trigger: NodeId) -> Result<()> {
        let index = self.index_of(trigger)?;
        self.expand_at(dom, index, true);
        Ok(())
    }

    /// Collapse a trigger's panel
    pub fn collapse<D: Dom + ?Sized>(&self, dom: &mut D, trigger: NodeId) -> Result<()> {
        let index = self.index_of(trigger)?;
        self.collapse_at(dom, index);
        Ok(())
    }

    /// Expand every panel, even in exclusive mode
    pub fn expand_all<D: Dom + ?Sized>(&self, dom: &mut D) {
        for index in 0..self.panels.len() {
            self.expand_at(dom, index, false);
        }
    }

    /// Collapse every panel
    pub fn collapse_all<D: Dom + ?Sized>(&self, dom: &mut D) {
        for index in 0..self.panels.len() {
            self.collapse_at(dom, index);
        }
    }

    fn toggle_at<D: Dom + ?Sized>(&self, dom: &mut D, index: usize) {
        if is_true(dom, self.panels[index].trigger, ARIA_EXPANDED) {
            self.collapse_at(dom, index);
        } else {
            self.expand_at(dom, index, true);
        }
    }

    fn expand_at<D: Dom + ?Sized>(&self, dom: &mut D, index: usize, exclusive: bool) {
        if exclusive && self.options.collapse_others {
            self.collapse_all(dom);
        }
        let panel = &self.panels[index];
        tracing::debug!(trigger = %panel.trigger, panel = %panel.content_id, "expanding panel");
        AriaState::Expanded(true).apply(dom, panel.trigger);
        AriaState::Hidden(false).apply(dom, panel.content);
        self.apply_style(dom, panel.content);
    }

    fn collapse_at<D: Dom + ?Sized>(&self, dom: &mut D, index: usize) {
        let panel = &self.panels[index];
        tracing::debug!(trigger = %panel.trigger, panel = %panel.content_id, "collapsing panel");
        AriaState::Expanded(false).apply(dom, panel.trigger);
        AriaState::Hidden(true).apply(dom, panel.content);
        self.apply_style(dom, panel.content);
    }

    /// Resolve a click at `target` to the trigger(s) it toggles
    ///
    /// A click on a trigger toggles that trigger. A click inside a trigger
    /// toggles every trigger containing the target, unless the target is a
    /// link or button or controls something itself.
    fn handle_click<D: Dom + ?Sized>(&self, dom: &mut D, target: NodeId) {
        if let Ok(index) = self.index_of(target) {
            self.toggle_at(dom, index);
            return;
        }

        let ignored = matches!(dom.tag_name(target), Some("a" | "button"));
        if ignored || dom.has_attribute(target, ARIA_CONTROLS) {
            return;
        }

        // Overlapping trigger subtrees all toggle on one click
        let hits: Vec<usize> = (0..self.panels.len())
            .filter(|&i| dom.contains(self.panels[i].trigger, target))
            .collect();
        for index in hits {
            self.toggle_at(dom, index);
        }
    }

    /// Dispatch a click at `target` through the DOM to this accordion
    ///
    /// Returns the number of listener deliveries; zero after [`destroy`](Self::destroy).
    pub fn click<D: Dom>(&mut self, dom: &mut D, target: NodeId) -> usize {
        let handler: &mut dyn EventHandler<D> = self;
        dispatch(dom, &Event::click(target), &mut [handler])
    }

    /// Unregister every listener; calling it again does nothing
    pub fn destroy<D: Dom + ?Sized>(&mut self, dom: &mut D) {
        if self.listeners.is_empty() {
            return;
        }
        tracing::debug!(container = %self.container, listeners = self.listeners.len(), "destroying accordion");
        for listener in self.listeners.drain(..) {
            dom.remove_event_listener(listener);
        }
    }

    /// Whether the trigger is currently expanded
    pub fn is_expanded<D: Dom + ?Sized>(&self, dom: &D, trigger: NodeId) -> bool {
        is_true(dom, trigger, ARIA_EXPANDED)
    }

    /// Container element
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Trigger/panel pairs in document order
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Trigger elements in document order
    pub fn triggers(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.panels.iter().map(|p| p.trigger)
    }

    /// Panel controlled by `trigger`
    pub fn panel(&self, trigger: NodeId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.trigger == trigger)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    /// Whether [`destroy`](Self::destroy) has run
    pub fn is_destroyed(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<D: Dom + ?Sized> EventHandler<D> for Accordion {
    fn owns_listener(&self, listener: ListenerId) -> bool {
        self.listeners.contains(&listener)
    }

    fn handle_event(&mut self, dom: &mut D, event: &Event) {
        if event.event_type == EventType::Click && event.current_target == self.container {
            self.handle_click(dom, event.target);
        }
    }
}

/// Resolve triggers and their panels without modifying the DOM
fn find_panels<D: Dom + ?Sized>(
    dom: &D,
    container: NodeId,
    trigger_selector: &Selector,
    options: &Options,
) -> Result<Vec<Panel>> {
    let candidates = dom.query_selector_all(container, trigger_selector);

    let mut panels = Vec::with_capacity(candidates.len());
    // Index counts every match so nested triggers keep their numbering slot
    for (index, trigger) in candidates.into_iter().enumerate() {
        if options.flat_search && dom.parent(trigger) != Some(container) {
            continue;
        }
        panels.push(resolve_panel(dom, trigger, index, options)?);
    }

    if panels.is_empty() {
        return Err(ConfigurationError::NoTriggers(trigger_selector.to_string()).into());
    }
    Ok(panels)
}

fn resolve_panel<D: Dom + ?Sized>(
    dom: &D,
    trigger: NodeId,
    index: usize,
    options: &Options,
) -> Result<Panel> {
    let explicit = if options.custom_targets {
        dom.get_attribute(trigger, ARIA_CONTROLS)
    } else {
        None
    };

    let content = match explicit {
        Some(target) => dom.get_element_by_id(target).ok_or_else(|| {
            AccordionError::UnresolvedPanel {
                trigger,
                reason: UnresolvedReason::MissingTarget(target.to_string()),
            }
        })?,
        None => dom
            .next_element_sibling(trigger)
            .ok_or(AccordionError::UnresolvedPanel {
                trigger,
                reason: UnresolvedReason::NoSibling,
            })?,
    };

    if let Some(id) = dom.get_attribute(content, "id").filter(|id| !id.is_empty()) {
        return Ok(Panel {
            trigger,
            content,
            content_id: id.to_string(),
            synthesized_id: false,
        });
    }

    let content_id = options.content_id(index);
    if let Some(other) = dom.get_element_by_id(&content_id) {
        if other != content {
            return Err(AccordionError::DuplicatePanelId {
                trigger,
                id: content_id,
            });
        }
    }
    Ok(Panel {
        trigger,
        content,
        content_id,
        synthesized_id: true,
    })
}
