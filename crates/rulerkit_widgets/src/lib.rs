//! RulerKit Widget Library
//!
//! Scale-picker widgets over the RulerKit engine crates:
//!
//! - [`RulerView`](ruler::RulerView): a sectioned tick-mark ruler backed by a
//!   scrolling list host, snapping to discrete values
//! - [`WheelPicker`](wheel::WheelPicker): a flat row-indexed picker variant
//! - [`ScalePointer`](pointer::ScalePointer): the center overlay with the
//!   live value label and the triangular arrow glyph
//!
//! Widgets hold no platform views. A host embeds one, feeds it gesture events
//! (directly or through the [`Widget`](widget::Widget) trait), queries the
//! datasource methods to render rows, and ticks [`update`](widget::Widget::update)
//! every frame.

pub mod config;
pub mod pointer;
pub mod ruler;
pub mod wheel;
pub mod widget;

pub use config::{RulerConfig, WheelConfig};
pub use pointer::{Arrow, PointerDirection, ScalePointer};
pub use ruler::{RulerView, TickMark};
pub use wheel::WheelPicker;
pub use widget::{Widget, WidgetId, WidgetRegistry};
