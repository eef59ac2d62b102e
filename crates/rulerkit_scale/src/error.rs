//! Scale engine error taxonomy
//!
//! Two families: configuration errors, which are fatal at construction and
//! must be surfaced before any layout happens, and [`ScaleError::ValueOutOfRange`],
//! which reports a programmatic target or delegate-seeded value outside the
//! selectable domain so the widget boundary can decide between clamping and
//! rejecting.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScaleError {
    #[error("interval must be positive (got {interval})")]
    InvalidInterval { interval: i32 },

    #[error("scale range {location}..{length} is empty or inverted")]
    InvalidRange { location: i32, length: i32 },

    #[error("span {span} does not divide into whole sections of interval {interval}")]
    PartialSection { span: i32, interval: i32 },

    #[error("tick height must be positive and finite (got {tick_height})")]
    InvalidTickHeight { tick_height: f32 },

    #[error("value {value} is outside the selectable domain {min}..{max}")]
    ValueOutOfRange { value: i32, min: i32, max: i32 },
}

impl ScaleError {
    /// True for the InvalidConfiguration family (anything a widget must reject
    /// at construction time)
    pub fn is_configuration(&self) -> bool {
        !matches!(self, ScaleError::ValueOutOfRange { .. })
    }
}
