//! Scale pointer overlay
//!
//! The fixed overlay at the reading line: a live value label, a triangular
//! arrow glyph, the scale-unit label, and a baseline rule. The arrow doubles
//! as a reusable directional glyph rotated by an affine transform.

use rulerkit_paint::{Color, Path, PathBuilder, Rect, Transform2D};
use rulerkit_scale::Orientation;

/// Direction the arrow glyph points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerDirection {
    Left,
    #[default]
    Down,
    Right,
    Up,
}

impl PointerDirection {
    /// Rotation applied to the base (downward) triangle, in radians
    pub fn angle(&self) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI, TAU};
        match self {
            PointerDirection::Left => -FRAC_PI_2,
            PointerDirection::Down => TAU,
            PointerDirection::Right => FRAC_PI_2,
            PointerDirection::Up => PI,
        }
    }
}

/// A small triangular arrow glyph
#[derive(Clone, Debug)]
pub struct Arrow {
    size: f32,
    color: Color,
    direction: PointerDirection,
}

impl Arrow {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            color: Color::BLACK,
            direction: PointerDirection::Down,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn direction(&self) -> PointerDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: PointerDirection) {
        self.direction = direction;
    }

    /// The unrotated triangle: a downward point inset to the quarter lines of
    /// the glyph square
    pub fn path(&self) -> Path {
        let size = self.size;
        let quarter = size / 4.0;
        PathBuilder::new()
            .move_to(0.0, quarter)
            .line_to(size, quarter)
            .line_to(size / 2.0, quarter * 3.0)
            .line_to(0.0, quarter)
            .close()
            .build()
    }

    /// Rotation that orients [`Arrow::path`] toward the current direction
    pub fn transform(&self) -> Transform2D {
        Transform2D::rotate(self.direction.angle())
    }
}

/// Pointer overlay layout constants (from the reference design)
const VALUE_LABEL_X: f32 = 80.0;
const VALUE_LABEL_WIDTH: f32 = 64.0;
const ARROW_SIZE: f32 = 12.0;
const ARROW_GAP: f32 = 4.0;
const UNIT_LABEL_WIDTH: f32 = 24.0;
const UNIT_LABEL_GAP: f32 = 8.0;
const BASELINE_GAP: f32 = 8.0;
const BASELINE_THICKNESS: f32 = 2.0;

/// The full pointer overlay: value label, arrow, unit label, baseline
#[derive(Clone, Debug)]
pub struct ScalePointer {
    frame: Rect,
    color: Color,
    value_text: String,
    unit_text: String,
    font_size: f32,
    arrow: Arrow,
}

impl ScalePointer {
    pub fn new(frame: Rect, color: Color, unit: impl Into<String>, font_size: f32) -> Self {
        let mut arrow = Arrow::new(ARROW_SIZE);
        arrow.set_color(color);
        arrow.set_direction(PointerDirection::Right);
        Self {
            frame,
            color,
            value_text: "0".to_string(),
            unit_text: unit.into(),
            font_size,
            arrow,
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn arrow(&self) -> &Arrow {
        &self.arrow
    }

    pub fn unit_text(&self) -> &str {
        &self.unit_text
    }

    /// Live value text, tracking the raw selection during a drag
    pub fn value_text(&self) -> &str {
        &self.value_text
    }

    pub fn set_value(&mut self, value: i32) {
        self.value_text = value.to_string();
    }

    /// The value label renders at twice the configured font size
    pub fn value_font_size(&self) -> f32 {
        self.font_size * 2.0
    }

    pub fn unit_font_size(&self) -> f32 {
        self.font_size
    }

    /// Counter-rotation for the labels when the ruler lies on its side
    pub fn label_rotation(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => -std::f32::consts::FRAC_PI_2,
            Orientation::Vertical => 0.0,
        }
    }

    pub fn value_label_frame(&self) -> Rect {
        Rect::new(VALUE_LABEL_X, 0.0, VALUE_LABEL_WIDTH, self.frame.height)
    }

    pub fn arrow_frame(&self) -> Rect {
        let value = self.value_label_frame();
        Rect::new(
            value.max_x() + ARROW_GAP,
            self.frame.height / 2.0 - ARROW_SIZE / 2.0,
            ARROW_SIZE,
            ARROW_SIZE,
        )
    }

    pub fn unit_label_frame(&self) -> Rect {
        let arrow = self.arrow_frame();
        Rect::new(
            arrow.max_x() + UNIT_LABEL_GAP,
            0.0,
            UNIT_LABEL_WIDTH,
            self.frame.height,
        )
    }

    /// The thin rule running from the unit label to the scale strip
    pub fn baseline_frame(&self) -> Rect {
        let unit = self.unit_label_frame();
        let x = unit.max_x() + BASELINE_GAP;
        Rect::new(
            x,
            self.frame.height / 2.0 - BASELINE_THICKNESS / 2.0,
            (self.frame.width - x).max(0.0),
            BASELINE_THICKNESS,
        )
    }
}
