//! Consumer delegate interface
//!
//! The host supplies one delegate per widget. Both methods are required and
//! synchronous; a host with no opinion about the starting value returns a
//! concrete default (typically 0) from [`ScaleDelegate::initial_value`].

/// Capability interface a scale consumer implements
pub trait ScaleDelegate: Send {
    /// Queried once at widget setup to seed the selection. `label` is the
    /// scale's unit label (for example `"cm"`), so one delegate can serve
    /// several scales.
    fn initial_value(&self, label: &str) -> i32;

    /// Invoked exactly once per completed drag-and-settle cycle with the
    /// final snapped value. Never called for live drag frames or
    /// programmatic scrolls.
    fn on_value_settled(&mut self, label: &str, value: i32);
}
