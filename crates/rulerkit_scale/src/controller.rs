//! Selection controller
//!
//! Owns the current selection and the drag/settle gesture state machine.
//! Live scroll frames recompute the selection silently; the delegate hears
//! about a value exactly once, when a user-driven deceleration settles.
//! Programmatic scrolls never notify.

use rulerkit_core::events::event_types;
use rulerkit_core::fsm::{StateMachine, StateTransitions};

use crate::delegate::ScaleDelegate;
use crate::error::ScaleError;
use crate::mapper::{Tick, ValueMapper};
use crate::snap::SnapPolicy;

/// Gesture phase of the scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// No active gesture; the selection is fixed
    #[default]
    Idle,
    /// Finger down, continuous updates, no notifications
    Dragging,
    /// Deceleration in flight toward a snapped target
    Settling,
}

impl StateTransitions for GestureState {
    fn on_event(&self, event: u32) -> Option<Self> {
        match (self, event) {
            (GestureState::Idle, event_types::DRAG) => Some(GestureState::Dragging),
            (GestureState::Dragging, event_types::DRAG_END) => Some(GestureState::Settling),
            (GestureState::Settling, event_types::SETTLED) => Some(GestureState::Idle),
            // Re-grab during deceleration abandons the settle
            (GestureState::Settling, event_types::DRAG) => Some(GestureState::Dragging),
            _ => None,
        }
    }
}

/// A single programmatic scroll-animation request
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Tick the animation should come to rest on
    pub tick: Tick,
    /// Rest offset of that tick
    pub offset: f32,
}

/// Gesture-driven selection state over a mapper + snap policy
pub struct SelectionController {
    mapper: ValueMapper,
    snap: SnapPolicy,
    machine: StateMachine<GestureState>,
    selection: i32,
    label: String,
    delegate: Box<dyn ScaleDelegate>,
}

impl SelectionController {
    /// Build a controller and seed the selection from the delegate. A seed
    /// outside the domain is clamped to the nearest boundary.
    pub fn new(
        mapper: ValueMapper,
        snap: SnapPolicy,
        label: impl Into<String>,
        delegate: Box<dyn ScaleDelegate>,
    ) -> Self {
        let label = label.into();
        let seed = delegate.initial_value(&label);
        let selection = mapper.clamp(seed);
        if selection != seed {
            let (min, max) = mapper.domain();
            tracing::warn!(seed, selection, min, max, label = %label, "initial value clamped to domain");
        }
        Self {
            mapper,
            snap,
            machine: StateMachine::new(GestureState::Idle),
            selection,
            label,
            delegate,
        }
    }

    pub fn state(&self) -> GestureState {
        self.machine.current()
    }

    pub fn selection(&self) -> i32 {
        self.selection
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mapper(&self) -> &ValueMapper {
        &self.mapper
    }

    pub fn snap_policy(&self) -> &SnapPolicy {
        &self.snap
    }

    /// Finger touched down. Enters `Dragging` from `Idle`, or abandons an
    /// in-flight settle on a re-grab.
    pub fn on_drag_begin(&mut self) {
        self.machine.send(event_types::DRAG);
    }

    /// A raw scroll frame, during either a drag or a deceleration. Updates
    /// the selection from the unsnapped offset so the value label tracks
    /// continuously; never notifies the delegate.
    pub fn on_scroll_frame(&mut self, offset: f32) -> i32 {
        let tick = self.mapper.tick_at_offset(offset, self.snap.tick_height());
        if let Ok(value) = self.mapper.value_at(tick) {
            self.selection = value;
        }
        tracing::trace!(offset, selection = self.selection, "scroll frame");
        self.selection
    }

    /// Finger lifted with the deceleration headed for `proposed_target`.
    /// Returns the corrected, tick-aligned target the host should decelerate
    /// to.
    pub fn on_drag_will_end(&mut self, proposed_target: f32) -> f32 {
        self.machine.send(event_types::DRAG_END);
        let snapped = self.snap.snap(proposed_target);
        tracing::debug!(proposed_target, snapped, "drag ending");
        snapped
    }

    /// Deceleration came to rest at `offset`. Fires the delegate exactly once
    /// per completed gesture; calls outside a settle (double delivery, or a
    /// rest after a programmatic scroll) are ignored.
    pub fn on_settled(&mut self, offset: f32) -> Option<i32> {
        self.machine.send(event_types::SETTLED)?;
        let rest = self.snap.snap(offset);
        let tick = self.mapper.tick_at_offset(rest, self.snap.tick_height());
        if let Ok(value) = self.mapper.value_at(tick) {
            self.selection = value;
        }
        tracing::debug!(selection = self.selection, "settled");
        self.delegate
            .on_value_settled(&self.label, self.selection);
        Some(self.selection)
    }

    /// A wheel host reported its wheel at rest on `row`. The picker collapses
    /// the gesture into this single event, so each call is one settle and one
    /// notification.
    pub fn on_row_settled(&mut self, row: i32) -> Result<i32, ScaleError> {
        let value = self.mapper.value_at(Tick::flat(row))?;
        self.selection = value;
        self.delegate.on_value_settled(&self.label, value);
        Ok(value)
    }

    /// Compute the single scroll-animation request that moves the scale to
    /// `value`. Does not change the gesture state and never notifies; an
    /// out-of-domain value is an error for the widget boundary to resolve.
    pub fn scroll_target(&self, value: i32) -> Result<ScrollRequest, ScaleError> {
        let tick = self.mapper.tick_for(value)?;
        Ok(ScrollRequest {
            tick,
            offset: self.mapper.offset_of(tick, self.snap.tick_height()),
        })
    }

    /// Selection update when a programmatic scroll animation arrives, with no
    /// notification (only user-driven settles notify).
    pub fn on_programmatic_arrival(&mut self, offset: f32) -> i32 {
        let tick = self.mapper.tick_at_offset(offset, self.snap.tick_height());
        if let Ok(value) = self.mapper.value_at(tick) {
            self.selection = value;
        }
        self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::Orientation;
    use crate::range::{RangeModel, ScaleRange};
    use std::sync::{Arc, Mutex};

    struct RecordingDelegate {
        initial: i32,
        settled: Arc<Mutex<Vec<i32>>>,
    }

    impl ScaleDelegate for RecordingDelegate {
        fn initial_value(&self, _label: &str) -> i32 {
            self.initial
        }

        fn on_value_settled(&mut self, _label: &str, value: i32) {
            self.settled.lock().unwrap().push(value);
        }
    }

    fn controller_with(initial: i32) -> (SelectionController, Arc<Mutex<Vec<i32>>>) {
        let settled = Arc::new(Mutex::new(Vec::new()));
        let delegate = RecordingDelegate {
            initial,
            settled: settled.clone(),
        };
        let model = RangeModel::new(ScaleRange::new(0, 1000), 10).unwrap();
        let mapper = ValueMapper::sectioned(model, Orientation::Horizontal);
        let snap = SnapPolicy::new(8.0).unwrap();
        let controller = SelectionController::new(mapper, snap, "cm", Box::new(delegate));
        (controller, settled)
    }

    #[test]
    fn drag_and_settle_notifies_exactly_once() {
        let (mut controller, settled) = controller_with(0);

        controller.on_drag_begin();
        assert_eq!(controller.state(), GestureState::Dragging);

        controller.on_scroll_frame(100.0);
        controller.on_scroll_frame(300.0);
        assert!(settled.lock().unwrap().is_empty());

        // Deceleration headed for 61.4 ticks snaps to tick 61
        let target = controller.on_drag_will_end(491.2);
        assert_eq!(target, 488.0);
        assert_eq!(controller.state(), GestureState::Settling);

        assert_eq!(controller.on_settled(488.0), Some(61));
        assert_eq!(controller.state(), GestureState::Idle);
        assert_eq!(*settled.lock().unwrap(), vec![61]);

        // A stray duplicate settle is ignored
        assert_eq!(controller.on_settled(488.0), None);
        assert_eq!(settled.lock().unwrap().len(), 1);
    }

    #[test]
    fn live_frames_track_raw_offsets_silently() {
        let (mut controller, settled) = controller_with(0);
        controller.on_drag_begin();

        // 500.0 / 8 = 62.5 rounds to tick 63
        assert_eq!(controller.on_scroll_frame(500.0), 63);
        assert_eq!(controller.selection(), 63);
        assert!(settled.lock().unwrap().is_empty());
    }

    #[test]
    fn release_on_a_tick_boundary_needs_no_correction() {
        let (mut controller, settled) = controller_with(0);
        controller.on_drag_begin();
        controller.on_scroll_frame(496.0);

        assert_eq!(controller.on_drag_will_end(496.0), 496.0);
        assert_eq!(controller.on_settled(496.0), Some(62));
        assert_eq!(*settled.lock().unwrap(), vec![62]);
    }

    #[test]
    fn regrab_during_settling_abandons_the_notification() {
        let (mut controller, settled) = controller_with(0);
        controller.on_drag_begin();
        controller.on_scroll_frame(200.0);
        controller.on_drag_will_end(200.0);
        assert_eq!(controller.state(), GestureState::Settling);

        // User grabs the scale mid-deceleration
        controller.on_drag_begin();
        assert_eq!(controller.state(), GestureState::Dragging);

        // The old deceleration's rest event no longer settles anything
        assert_eq!(controller.on_settled(200.0), None);
        assert!(settled.lock().unwrap().is_empty());
    }

    #[test]
    fn scroll_target_requests_without_notifying() {
        let (controller, settled) = controller_with(0);
        let request = controller.scroll_target(62).unwrap();
        assert_eq!(request.tick, Tick::new(6, 2));
        assert_eq!(request.offset, 496.0);
        assert!(settled.lock().unwrap().is_empty());

        assert_eq!(
            controller.scroll_target(1000).unwrap_err(),
            ScaleError::ValueOutOfRange {
                value: 1000,
                min: 0,
                max: 1000
            }
        );
    }

    #[test]
    fn programmatic_arrival_updates_selection_silently() {
        let (mut controller, settled) = controller_with(0);
        assert_eq!(controller.on_programmatic_arrival(496.0), 62);
        assert_eq!(controller.selection(), 62);
        assert_eq!(controller.state(), GestureState::Idle);
        assert!(settled.lock().unwrap().is_empty());
    }

    #[test]
    fn out_of_domain_seed_is_clamped() {
        let (controller, _) = controller_with(5000);
        assert_eq!(controller.selection(), 999);

        let (controller, _) = controller_with(-3);
        assert_eq!(controller.selection(), 0);
    }

    #[test]
    fn wheel_rows_settle_directly() {
        let settled = Arc::new(Mutex::new(Vec::new()));
        let delegate = RecordingDelegate {
            initial: 0,
            settled: settled.clone(),
        };
        let mapper = ValueMapper::flat(1000, Orientation::Vertical).unwrap();
        let snap = SnapPolicy::new(32.0).unwrap();
        let mut controller = SelectionController::new(mapper, snap, "kg", Box::new(delegate));

        assert_eq!(controller.on_row_settled(63).unwrap(), 63);
        assert_eq!(*settled.lock().unwrap(), vec![63]);
        assert!(controller.on_row_settled(1000).is_err());
        assert_eq!(settled.lock().unwrap().len(), 1);
    }
}
