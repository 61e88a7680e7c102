//! Show more/less toggle for the skills list
//!
//! A pure two-state toggle: collapsed shows the base cards only, expanded
//! also shows the `skill-card-more` cards. Each activation flips the state
//! and mirrors it onto the control's label, `aria-expanded`, and class.

use vantage_core::{Document, NodeId, StateMachine, Transition};

/// Element id of the toggle control.
pub const SHOW_MORE_ID: &str = "showMoreSkills";

/// Class carried by the extra cards.
pub const EXTRA_CARD_CLASS: &str = "skill-card-more";

/// Class applied to extra cards while expanded.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Class applied to the control while expanded.
pub const EXPANDED_CLASS: &str = "is-expanded";

const COLLAPSED: u32 = 0;
const EXPANDED: u32 = 1;
const ACTIVATE: u32 = 1;

/// The show-more/less toggle.
pub struct ShowMoreToggle {
    control: Option<NodeId>,
    cards: Vec<NodeId>,
    fsm: StateMachine,
}

impl ShowMoreToggle {
    /// Inert when the control or the extra cards are absent.
    pub fn new(doc: &Document) -> Self {
        Self {
            control: doc.node_by_id(SHOW_MORE_ID),
            cards: doc.with_class(EXTRA_CARD_CLASS),
            fsm: StateMachine::new(
                COLLAPSED,
                [
                    Transition::new(COLLAPSED, ACTIVATE, EXPANDED),
                    Transition::new(EXPANDED, ACTIVATE, COLLAPSED),
                ],
            ),
        }
    }

    pub fn control(&self) -> Option<NodeId> {
        self.control
    }

    pub fn is_expanded(&self) -> bool {
        self.fsm.is_in(EXPANDED)
    }

    /// Flip the toggle and apply the visual state.
    pub fn activate(&mut self, doc: &mut Document) {
        let Some(control) = self.control else {
            return;
        };
        if self.cards.is_empty() {
            return;
        }

        let expanded = self.fsm.send(ACTIVATE) == EXPANDED;
        tracing::debug!(expanded, "skills toggle");

        for card in &self.cards {
            if let Some(element) = doc.get_mut(*card) {
                element.toggle_class(VISIBLE_CLASS, expanded);
            }
        }
        if let Some(element) = doc.get_mut(control) {
            element.toggle_class(EXPANDED_CLASS, expanded);
            element.set_attr("aria-expanded", if expanded { "true" } else { "false" });
            element.set_text(if expanded { "Show less" } else { "Show more" });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::Element;

    fn skills_page() -> (Document, NodeId, Vec<NodeId>) {
        let mut doc = Document::new();
        let control = doc.insert(
            Element::new()
                .with_id(SHOW_MORE_ID)
                .with_attr("aria-expanded", "false")
                .with_text("Show more"),
        );
        let cards = vec![
            doc.insert(Element::new().with_class(EXTRA_CARD_CLASS)),
            doc.insert(Element::new().with_class(EXTRA_CARD_CLASS)),
        ];
        (doc, control, cards)
    }

    #[test]
    fn test_activation_round_trip() {
        let (mut doc, control, cards) = skills_page();
        let mut toggle = ShowMoreToggle::new(&doc);
        assert!(!toggle.is_expanded());

        toggle.activate(&mut doc);
        assert!(toggle.is_expanded());
        for card in &cards {
            assert!(doc.get(*card).unwrap().has_class(VISIBLE_CLASS));
        }
        let element = doc.get(control).unwrap();
        assert_eq!(element.attr("aria-expanded"), Some("true"));
        assert_eq!(element.text(), "Show less");
        assert!(element.has_class(EXPANDED_CLASS));

        toggle.activate(&mut doc);
        assert!(!toggle.is_expanded());
        for card in &cards {
            assert!(!doc.get(*card).unwrap().has_class(VISIBLE_CLASS));
        }
        let element = doc.get(control).unwrap();
        assert_eq!(element.attr("aria-expanded"), Some("false"));
        assert_eq!(element.text(), "Show more");
        assert!(!element.has_class(EXPANDED_CLASS));
    }

    #[test]
    fn test_state_is_a_pure_two_value_toggle() {
        let (mut doc, _, _) = skills_page();
        let mut toggle = ShowMoreToggle::new(&doc);

        for i in 1..=5 {
            toggle.activate(&mut doc);
            assert_eq!(toggle.is_expanded(), i % 2 == 1);
        }
    }

    #[test]
    fn test_inert_without_control() {
        let mut doc = Document::new();
        doc.insert(Element::new().with_class(EXTRA_CARD_CLASS));

        let mut toggle = ShowMoreToggle::new(&doc);
        toggle.activate(&mut doc);
        assert!(!toggle.is_expanded());
    }

    #[test]
    fn test_inert_without_cards() {
        let mut doc = Document::new();
        let control = doc.insert(Element::new().with_id(SHOW_MORE_ID).with_text("Show more"));

        let mut toggle = ShowMoreToggle::new(&doc);
        toggle.activate(&mut doc);
        assert!(!toggle.is_expanded());
        assert_eq!(doc.get(control).unwrap().text(), "Show more");
    }
}
