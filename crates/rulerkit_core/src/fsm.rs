//! State Machine Runtime
//!
//! Typed transition tables for widget interaction states. A state type
//! declares its transitions by pattern matching in [`StateTransitions`]; the
//! [`StateMachine`] wrapper tracks the current state and a transition history
//! for debugging.

use crate::events::EventType;

/// Trait for state types that can handle event transitions
///
/// Implement this on a small `Copy` enum and match on `(state, event)` pairs.
/// Returning `None` means the event does not cause a transition from the
/// current state.
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + std::fmt::Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// A state machine instance over a typed state
#[derive(Debug)]
pub struct StateMachine<S: StateTransitions> {
    current: S,
    /// History of state transitions (for debugging)
    history: Vec<(S, EventType, S)>,
}

impl<S: StateTransitions> StateMachine<S> {
    /// Create a new state machine with an initial state
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    /// Get the current state
    pub fn current(&self) -> S {
        self.current
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current == state
    }

    /// Check if an event would trigger a transition from the current state
    pub fn can_send(&self, event: EventType) -> bool {
        self.current.on_event(event).is_some()
    }

    /// Send an event, potentially triggering a transition.
    ///
    /// Returns the new state on a transition, or None if the event was ignored
    /// in the current state.
    pub fn send(&mut self, event: EventType) -> Option<S> {
        let from = self.current;
        let to = from.on_event(event)?;
        self.current = to;
        self.history.push((from, event, to));
        tracing::debug!(?from, ?to, event, "state transition");
        Some(to)
    }

    /// Get transition history
    pub fn history(&self) -> &[(S, EventType, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event_types::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Track {
        Resting,
        Moving,
        Coasting,
    }

    impl StateTransitions for Track {
        fn on_event(&self, event: EventType) -> Option<Self> {
            match (self, event) {
                (Track::Resting, DRAG) => Some(Track::Moving),
                (Track::Moving, DRAG_END) => Some(Track::Coasting),
                (Track::Coasting, SETTLED) => Some(Track::Resting),
                (Track::Coasting, DRAG) => Some(Track::Moving),
                _ => None,
            }
        }
    }

    #[test]
    fn walks_transition_table() {
        let mut machine = StateMachine::new(Track::Resting);
        assert_eq!(machine.send(DRAG), Some(Track::Moving));
        assert_eq!(machine.send(DRAG_END), Some(Track::Coasting));
        assert_eq!(machine.send(SETTLED), Some(Track::Resting));
    }

    #[test]
    fn invalid_event_is_ignored() {
        let mut machine = StateMachine::new(Track::Resting);
        assert_eq!(machine.send(SETTLED), None);
        assert_eq!(machine.current(), Track::Resting);
    }

    #[test]
    fn can_send_consults_the_table() {
        let machine = StateMachine::new(Track::Moving);
        assert!(machine.can_send(DRAG_END));
        assert!(!machine.can_send(SETTLED));
    }

    #[test]
    fn history_records_each_transition() {
        let mut machine = StateMachine::new(Track::Resting);
        machine.send(DRAG);
        machine.send(SETTLED); // ignored, not recorded
        machine.send(DRAG_END);

        let history = machine.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], (Track::Resting, DRAG, Track::Moving));
        assert_eq!(history[1], (Track::Moving, DRAG_END, Track::Coasting));
    }
}
