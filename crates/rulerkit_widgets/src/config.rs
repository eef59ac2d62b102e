//! Widget configuration
//!
//! Set at construction, immutable for the lifetime of a widget instance.
//! Defaults mirror the classic centimeter ruler: 0..1000 in sections of 10,
//! horizontal, 8-unit tick rows.

use rulerkit_paint::Color;
use rulerkit_scale::{Orientation, ScaleRange};
use serde::{Deserialize, Serialize};

/// Configuration for a [`RulerView`](crate::ruler::RulerView)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RulerConfig {
    /// Scale unit label, passed through to the delegate
    pub label: String,
    /// Selectable domain
    pub range: ScaleRange,
    /// Ticks per section
    pub interval: i32,
    /// Scroll axis
    pub orientation: Orientation,
    /// Base font size; the pointer's value label doubles it
    pub font_size: f32,
    /// Section label color
    pub text_color: Color,
    /// Tick mark color
    pub tick_color: Color,
    /// Pointer overlay color
    pub selection_color: Color,
    /// Height of one tick row in layout units
    pub row_height: f32,
    /// Scroll-view deceleration rate
    pub deceleration_rate: f32,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            label: "cm".to_string(),
            range: ScaleRange::new(0, 1000),
            interval: 10,
            orientation: Orientation::Horizontal,
            font_size: 14.0,
            text_color: Color::GREEN,
            tick_color: Color::GREEN,
            selection_color: Color::BLUE,
            row_height: 8.0,
            deceleration_rate: 0.1,
        }
    }
}

impl RulerConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn range(mut self, range: ScaleRange) -> Self {
        self.range = range;
        self
    }

    pub fn interval(mut self, interval: i32) -> Self {
        self.interval = interval;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn tick_color(mut self, color: Color) -> Self {
        self.tick_color = color;
        self
    }

    pub fn selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }

    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = height;
        self
    }

    pub fn deceleration_rate(mut self, rate: f32) -> Self {
        self.deceleration_rate = rate;
        self
    }
}

/// Configuration for a [`WheelPicker`](crate::wheel::WheelPicker)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Scale unit label, passed through to the delegate
    pub label: String,
    /// Rows enumerate `0..max_value`
    pub max_value: i32,
    /// Row text font size
    pub font_size: f32,
    /// Row text color
    pub text_color: Color,
    /// Height of one wheel row in layout units
    pub row_height: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            label: "cm".to_string(),
            max_value: 1000,
            font_size: 14.0,
            text_color: Color::GREEN,
            row_height: 32.0,
        }
    }
}

impl WheelConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn max_value(mut self, max_value: i32) -> Self {
        self.max_value = max_value;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = height;
        self
    }
}
