//! State machine runtime
//!
//! Flat state machines for interaction toggles (expanded/collapsed,
//! open/closed). A transition fires when the machine is in its `from`
//! state and receives its event; unmatched events leave the state
//! untouched.

use smallvec::SmallVec;

/// Identifier for a state within a state machine
pub type StateId = u32;

/// Identifier for an event type
pub type EventId = u32;

/// A transition in the state machine
#[derive(Clone, Copy, Debug)]
pub struct Transition {
    pub from_state: StateId,
    pub event: EventId,
    pub to_state: StateId,
}

impl Transition {
    pub fn new(from: StateId, event: EventId, to: StateId) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// A state machine instance
pub struct StateMachine {
    current_state: StateId,
    transitions: SmallVec<[Transition; 4]>,
}

impl StateMachine {
    pub fn new(initial_state: StateId, transitions: impl IntoIterator<Item = Transition>) -> Self {
        Self {
            current_state: initial_state,
            transitions: transitions.into_iter().collect(),
        }
    }

    /// Get the current state
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: StateId) -> bool {
        self.current_state == state
    }

    /// Check if an event can trigger a transition from the current state
    pub fn can_send(&self, event: EventId) -> bool {
        self.transitions
            .iter()
            .any(|t| t.from_state == self.current_state && t.event == event)
    }

    /// Send an event, potentially triggering a transition. Returns the
    /// (possibly unchanged) current state.
    pub fn send(&mut self, event: EventId) -> StateId {
        let current = self.current_state;
        let target = self
            .transitions
            .iter()
            .find(|t| t.from_state == current && t.event == event)
            .map(|t| t.to_state);

        if let Some(to_state) = target {
            tracing::trace!(from = current, event, to = to_state, "fsm transition");
            self.current_state = to_state;
        }
        self.current_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLAPSED: StateId = 0;
    const EXPANDED: StateId = 1;

    const ACTIVATE: EventId = 1;
    const DISMISS: EventId = 2;

    #[test]
    fn test_toggle_transitions() {
        let mut fsm = StateMachine::new(
            COLLAPSED,
            [
                Transition::new(COLLAPSED, ACTIVATE, EXPANDED),
                Transition::new(EXPANDED, ACTIVATE, COLLAPSED),
            ],
        );

        assert_eq!(fsm.current_state(), COLLAPSED);
        assert_eq!(fsm.send(ACTIVATE), EXPANDED);
        assert_eq!(fsm.send(ACTIVATE), COLLAPSED);
        assert!(fsm.is_in(COLLAPSED));
    }

    #[test]
    fn test_unmatched_event_keeps_state() {
        let mut fsm =
            StateMachine::new(COLLAPSED, [Transition::new(EXPANDED, DISMISS, COLLAPSED)]);

        assert_eq!(fsm.send(DISMISS), COLLAPSED);
        assert_eq!(fsm.send(ACTIVATE), COLLAPSED);
    }

    #[test]
    fn test_can_send() {
        let fsm = StateMachine::new(COLLAPSED, [Transition::new(COLLAPSED, ACTIVATE, EXPANDED)]);

        assert!(fsm.can_send(ACTIVATE));
        assert!(!fsm.can_send(DISMISS));
    }

    #[test]
    fn test_only_two_states_reachable() {
        let mut fsm = StateMachine::new(
            COLLAPSED,
            [
                Transition::new(COLLAPSED, ACTIVATE, EXPANDED),
                Transition::new(EXPANDED, ACTIVATE, COLLAPSED),
            ],
        );

        for _ in 0..7 {
            fsm.send(ACTIVATE);
        }
        assert_eq!(fsm.current_state(), EXPANDED);
    }
}
