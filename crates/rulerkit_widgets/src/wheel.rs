//! Wheel picker
//!
//! The flat variant of the scale: a spinning wheel host enumerates rows
//! `0..max_value` and reports the row it comes to rest on. There is no
//! continuous offset stream here; each rest report is one settle and one
//! delegate notification. Programmatic selection emits a row request for the
//! host to animate and never notifies.

use rulerkit_core::events::{event_types, Event, EventData};
use rulerkit_scale::{
    Orientation, ScaleDelegate, ScaleError, SelectionController, SnapPolicy, ValueMapper,
};

use crate::config::WheelConfig;
use crate::widget::{Widget, WidgetId, WidgetRegistry};

/// A flat row-indexed value picker
pub struct WheelPicker {
    id: WidgetId,
    config: WheelConfig,
    controller: SelectionController,
    /// Outstanding programmatic row request for the host to animate
    row_request: Option<i32>,
}

impl WheelPicker {
    pub fn new(
        registry: &mut WidgetRegistry,
        config: WheelConfig,
        delegate: Box<dyn ScaleDelegate>,
    ) -> Result<Self, ScaleError> {
        let mapper = ValueMapper::flat(config.max_value, Orientation::Vertical)?;
        let snap = SnapPolicy::new(config.row_height)?;
        let controller = SelectionController::new(mapper, snap, config.label.clone(), delegate);
        Ok(Self {
            id: registry.register("wheel"),
            config,
            controller,
            row_request: None,
        })
    }

    // =========================================================================
    // Wheel host datasource
    // =========================================================================

    pub fn row_count(&self) -> i32 {
        self.config.max_value
    }

    pub fn row_text(&self, row: i32) -> String {
        format!("{} {}", row, self.config.label)
    }

    pub fn row_height(&self) -> f32 {
        self.config.row_height
    }

    // =========================================================================
    // Wheel host events
    // =========================================================================

    /// The wheel came to rest on `row`. One notification per call.
    pub fn on_row_selected(&mut self, row: i32) -> Result<i32, ScaleError> {
        let value = self.controller.on_row_settled(row)?;
        tracing::debug!(row, value, "wheel settled");
        Ok(value)
    }

    // =========================================================================
    // Programmatic navigation
    // =========================================================================

    /// Ask the host to spin to `value`. Does not notify the delegate.
    pub fn select(&mut self, value: i32) -> Result<(), ScaleError> {
        let request = self.controller.scroll_target(value)?;
        self.row_request = Some(request.tick.row);
        tracing::debug!(value, row = request.tick.row, "programmatic selection");
        Ok(())
    }

    /// Boundary policy for out-of-domain targets: clamp, then select.
    /// Returns the value actually used.
    pub fn select_clamped(&mut self, value: i32) -> i32 {
        let clamped = self.controller.mapper().clamp(value);
        if clamped != value {
            tracing::warn!(value, clamped, "selection clamped to domain");
        }
        let _ = self.select(clamped);
        clamped
    }

    /// Take the outstanding row request, if any (the host animates it)
    pub fn take_row_request(&mut self) -> Option<i32> {
        self.row_request.take()
    }

    pub fn selected_value(&self) -> i32 {
        self.controller.selection()
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }
}

impl Widget for WheelPicker {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn handle_event(&mut self, event: &Event) {
        match (event.event_type, &event.data) {
            (event_types::ROW_SELECTED, EventData::Row { index }) => {
                if let Err(err) = self.on_row_selected(*index) {
                    tracing::warn!(%err, "wheel host reported an invalid row");
                }
            }
            _ => {}
        }
    }

    fn update(&mut self, _dt: f32) {}

    fn teardown(&mut self) {
        self.row_request = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct SeedDelegate {
        seed: i32,
        settled: Arc<Mutex<Vec<i32>>>,
    }

    impl ScaleDelegate for SeedDelegate {
        fn initial_value(&self, _label: &str) -> i32 {
            self.seed
        }

        fn on_value_settled(&mut self, _label: &str, value: i32) {
            self.settled.lock().unwrap().push(value);
        }
    }

    fn wheel() -> (WheelPicker, Arc<Mutex<Vec<i32>>>) {
        let settled = Arc::new(Mutex::new(Vec::new()));
        let delegate = SeedDelegate {
            seed: 0,
            settled: settled.clone(),
        };
        let mut registry = WidgetRegistry::new();
        let picker =
            WheelPicker::new(&mut registry, WheelConfig::default(), Box::new(delegate)).unwrap();
        (picker, settled)
    }

    #[test]
    fn rows_map_directly_to_values() {
        let (mut picker, settled) = wheel();
        assert_eq!(picker.row_count(), 1000);
        assert_eq!(picker.on_row_selected(63).unwrap(), 63);
        assert_eq!(picker.selected_value(), 63);
        assert_eq!(*settled.lock().unwrap(), vec![63]);
    }

    #[test]
    fn each_rest_report_notifies_once() {
        let (mut picker, settled) = wheel();
        picker.on_row_selected(10).unwrap();
        picker.on_row_selected(20).unwrap();
        assert_eq!(*settled.lock().unwrap(), vec![10, 20]);
    }

    #[test]
    fn programmatic_selection_requests_without_notifying() {
        let (mut picker, settled) = wheel();
        picker.select(63).unwrap();
        assert_eq!(picker.take_row_request(), Some(63));
        assert_eq!(picker.take_row_request(), None);
        assert!(settled.lock().unwrap().is_empty());

        assert!(matches!(
            picker.select(1000),
            Err(ScaleError::ValueOutOfRange { .. })
        ));
        assert_eq!(picker.select_clamped(1000), 999);
        assert_eq!(picker.take_row_request(), Some(999));
    }

    #[test]
    fn invalid_rows_from_the_host_do_not_notify() {
        let (mut picker, settled) = wheel();
        assert!(picker.on_row_selected(-1).is_err());
        assert!(picker.on_row_selected(1000).is_err());
        assert!(settled.lock().unwrap().is_empty());
    }

    #[test]
    fn row_events_route_through_the_widget_trait() {
        let (mut picker, settled) = wheel();
        picker.handle_event(&Event::row(0, 42));
        assert_eq!(picker.selected_value(), 42);
        assert_eq!(*settled.lock().unwrap(), vec![42]);
    }

    #[test]
    fn rejects_non_positive_row_counts() {
        let mut registry = WidgetRegistry::new();
        let config = WheelConfig::default().max_value(0);
        let result = WheelPicker::new(
            &mut registry,
            config,
            Box::new(SeedDelegate {
                seed: 0,
                settled: Arc::new(Mutex::new(Vec::new())),
            }),
        );
        assert!(result.is_err());
    }
}
