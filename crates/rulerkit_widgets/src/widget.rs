//! Base widget trait and registry

use rulerkit_core::events::Event;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct WidgetId;
}

/// Allocates widget ids and tracks which widgets are alive, so hosts can
/// route events by id
pub struct WidgetRegistry {
    widgets: SlotMap<WidgetId, &'static str>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self {
            widgets: SlotMap::with_key(),
        }
    }

    /// Register a widget of the given kind (for example `"ruler"`)
    pub fn register(&mut self, kind: &'static str) -> WidgetId {
        self.widgets.insert(kind)
    }

    pub fn unregister(&mut self, id: WidgetId) {
        self.widgets.remove(id);
    }

    pub fn is_registered(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    pub fn kind(&self, id: WidgetId) -> Option<&'static str> {
        self.widgets.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Handle a gesture event from the host
    fn handle_event(&mut self, event: &Event);

    /// Advance animations and deferred work by `dt` seconds (called once per
    /// frame)
    fn update(&mut self, dt: f32);

    /// Cancel pending deferred work before the widget is discarded
    fn teardown(&mut self);
}
