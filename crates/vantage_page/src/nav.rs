//! Mobile navigation state
//!
//! Open/close toggle for the collapsible nav link list. Closing is also
//! triggered externally (Escape, anchor navigation), so the machine accepts
//! a dedicated close event from any state.

use vantage_core::{Document, NodeId, StateMachine, Transition};

/// Class of the toggle button.
pub const NAV_TOGGLE_CLASS: &str = "nav-toggle";

/// Class of the link list container.
pub const NAV_LINKS_CLASS: &str = "nav-links";

/// Class applied to the list while open.
pub const OPEN_CLASS: &str = "is-open";

const CLOSED: u32 = 0;
const OPEN: u32 = 1;
const TOGGLE: u32 = 1;
const CLOSE: u32 = 2;

/// The mobile nav open/close toggle.
pub struct NavToggle {
    control: Option<NodeId>,
    list: Option<NodeId>,
    fsm: StateMachine,
}

impl NavToggle {
    /// Inert when either the toggle button or the link list is absent.
    pub fn new(doc: &Document) -> Self {
        Self {
            control: doc.with_class(NAV_TOGGLE_CLASS).first().copied(),
            list: doc.with_class(NAV_LINKS_CLASS).first().copied(),
            fsm: StateMachine::new(
                CLOSED,
                [
                    Transition::new(CLOSED, TOGGLE, OPEN),
                    Transition::new(OPEN, TOGGLE, CLOSED),
                    Transition::new(OPEN, CLOSE, CLOSED),
                ],
            ),
        }
    }

    pub fn control(&self) -> Option<NodeId> {
        self.control
    }

    pub fn is_open(&self) -> bool {
        self.fsm.is_in(OPEN)
    }

    /// Whether a node belongs to the nav: the toggle button, the link list,
    /// or one of the links inside it. Activations elsewhere count as
    /// outside clicks and close an open nav.
    pub fn contains(&self, doc: &Document, node: NodeId) -> bool {
        if self.control == Some(node) || self.list == Some(node) {
            return true;
        }
        doc.get(node)
            .is_some_and(|e| e.has_class(crate::sections::NAV_LINK_CLASS))
    }

    pub fn toggle(&mut self, doc: &mut Document) {
        if self.control.is_none() || self.list.is_none() {
            return;
        }
        self.fsm.send(TOGGLE);
        self.apply(doc);
    }

    pub fn close(&mut self, doc: &mut Document) {
        if self.control.is_none() || self.list.is_none() {
            return;
        }
        self.fsm.send(CLOSE);
        self.apply(doc);
    }

    fn apply(&self, doc: &mut Document) {
        let open = self.is_open();
        if let Some(list) = self.list {
            if let Some(element) = doc.get_mut(list) {
                element.toggle_class(OPEN_CLASS, open);
            }
        }
        if let Some(control) = self.control {
            if let Some(element) = doc.get_mut(control) {
                element.set_attr("aria-expanded", if open { "true" } else { "false" });
                element.set_attr("aria-label", if open { "Close menu" } else { "Open menu" });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::Element;

    fn nav_page() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new();
        let control = doc.insert(
            Element::new()
                .with_class(NAV_TOGGLE_CLASS)
                .with_attr("aria-expanded", "false"),
        );
        let list = doc.insert(Element::new().with_class(NAV_LINKS_CLASS));
        (doc, control, list)
    }

    #[test]
    fn test_toggle_open_and_close() {
        let (mut doc, control, list) = nav_page();
        let mut nav = NavToggle::new(&doc);

        nav.toggle(&mut doc);
        assert!(nav.is_open());
        assert!(doc.get(list).unwrap().has_class(OPEN_CLASS));
        assert_eq!(doc.get(control).unwrap().attr("aria-label"), Some("Close menu"));

        nav.toggle(&mut doc);
        assert!(!nav.is_open());
        assert!(!doc.get(list).unwrap().has_class(OPEN_CLASS));
        assert_eq!(doc.get(control).unwrap().attr("aria-label"), Some("Open menu"));
    }

    #[test]
    fn test_close_while_closed_is_a_noop() {
        let (mut doc, control, _) = nav_page();
        let mut nav = NavToggle::new(&doc);

        nav.close(&mut doc);
        assert!(!nav.is_open());
        assert_eq!(doc.get(control).unwrap().attr("aria-expanded"), Some("false"));
    }

    #[test]
    fn test_contains_covers_toggle_list_and_links() {
        let (mut doc, control, list) = nav_page();
        let link = doc.insert(
            Element::new()
                .with_class(crate::sections::NAV_LINK_CLASS)
                .with_attr("href", "#about"),
        );
        let outside = doc.insert(Element::new());

        let nav = NavToggle::new(&doc);
        assert!(nav.contains(&doc, control));
        assert!(nav.contains(&doc, list));
        assert!(nav.contains(&doc, link));
        assert!(!nav.contains(&doc, outside));
    }

    #[test]
    fn test_inert_without_list() {
        let mut doc = Document::new();
        doc.insert(Element::new().with_class(NAV_TOGGLE_CLASS));

        let mut nav = NavToggle::new(&doc);
        nav.toggle(&mut doc);
        assert!(!nav.is_open());
    }
}
