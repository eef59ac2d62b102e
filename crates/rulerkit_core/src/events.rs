//! Event dispatch system
//!
//! Unified event handling for the scale widgets. Hosts translate their native
//! scroll/touch callbacks into these events before handing them to a widget.

use rustc_hash::FxHashMap;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    /// Continuous scroll frame while the finger is down
    pub const DRAG: EventType = 6;
    /// Finger lifted, deceleration about to begin
    pub const DRAG_END: EventType = 7;
    /// Deceleration came to rest
    pub const SETTLED: EventType = 8;
    /// Discrete wheel row chosen (flat picker hosts)
    pub const ROW_SELECTED: EventType = 9;

    // Widget lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Target widget id (opaque to this crate)
    pub target: u64,
    pub data: EventData,
    pub timestamp: u64,
    pub propagation_stopped: bool,
}

impl Event {
    /// Create an event carrying a scroll offset
    pub fn scroll(event_type: EventType, target: u64, offset: f32) -> Self {
        Self {
            event_type,
            target,
            data: EventData::Scroll { offset },
            timestamp: 0,
            propagation_stopped: false,
        }
    }

    /// Create an event carrying a wheel row index
    pub fn row(target: u64, index: i32) -> Self {
        Self {
            event_type: event_types::ROW_SELECTED,
            target,
            data: EventData::Row { index },
            timestamp: 0,
            propagation_stopped: false,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
    },
    /// Absolute content offset along the scroll axis. The list hosts report
    /// offsets, not deltas, so the mapper can resolve a tick directly.
    Scroll {
        offset: f32,
    },
    /// Flat row index from a wheel host
    Row {
        index: i32,
    },
    None,
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&Event) + Send + Sync>;

/// Dispatches events to registered handlers
pub struct EventDispatcher {
    handlers: FxHashMap<(u64, EventType), Vec<EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register an event handler for a widget and event type
    pub fn register<F>(&mut self, widget_id: u64, event_type: EventType, handler: F)
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.handlers
            .entry((widget_id, event_type))
            .or_default()
            .push(Box::new(handler));
    }

    /// Dispatch an event to all registered handlers
    pub fn dispatch(&self, event: &mut Event) {
        if let Some(handlers) = self.handlers.get(&(event.target, event.event_type)) {
            for handler in handlers {
                if event.propagation_stopped {
                    break;
                }
                handler(event);
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
