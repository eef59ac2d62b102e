//! Snap policy
//!
//! Quantizes the target of an in-flight deceleration to the nearest tick
//! boundary. Live drag positions are reported raw so the value label tracks
//! continuously; only the rest position is snapped.
//!
//! Tie-breaking: an offset exactly halfway between two ticks rounds away from
//! zero (round-half-up for the non-negative offsets the hosts produce).

use crate::error::ScaleError;

/// Snap-to-tick quantization for a fixed tick height
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapPolicy {
    tick_height: f32,
}

impl SnapPolicy {
    pub fn new(tick_height: f32) -> Result<Self, ScaleError> {
        if !tick_height.is_finite() || tick_height <= 0.0 {
            return Err(ScaleError::InvalidTickHeight { tick_height });
        }
        Ok(Self { tick_height })
    }

    pub fn tick_height(&self) -> f32 {
        self.tick_height
    }

    /// Nearest tick-aligned offset
    pub fn snap(&self, offset: f32) -> f32 {
        (offset / self.tick_height).round() * self.tick_height
    }

    /// Index of the tick the offset snaps to
    pub fn tick_index(&self, offset: f32) -> i32 {
        (offset / self.tick_height).round() as i32
    }
}
