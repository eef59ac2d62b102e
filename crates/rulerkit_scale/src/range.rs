//! Range model
//!
//! A scale covers the half-open domain `location..length`, grouped into
//! sections of `interval` consecutive ticks. The span must divide into whole
//! sections; a partial trailing section is a configuration error rather than
//! silently dropped values.

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;

/// The half-open domain of selectable values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleRange {
    /// First selectable value
    pub location: i32,
    /// Exclusive upper bound
    pub length: i32,
}

impl ScaleRange {
    pub const fn new(location: i32, length: i32) -> Self {
        Self { location, length }
    }

    /// Number of values in the domain
    pub fn span(&self) -> i32 {
        self.length - self.location
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self::new(0, 1000)
    }
}

/// A validated range + interval pair and its derived section layout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeModel {
    range: ScaleRange,
    interval: i32,
}

impl RangeModel {
    /// Validate and build a model. Rejects non-positive intervals, empty or
    /// inverted ranges, and spans that leave a partial trailing section.
    pub fn new(range: ScaleRange, interval: i32) -> Result<Self, ScaleError> {
        if interval <= 0 {
            return Err(ScaleError::InvalidInterval { interval });
        }
        if range.length <= range.location {
            return Err(ScaleError::InvalidRange {
                location: range.location,
                length: range.length,
            });
        }
        let span = range.span();
        if span % interval != 0 {
            return Err(ScaleError::PartialSection { span, interval });
        }
        Ok(Self { range, interval })
    }

    pub fn range(&self) -> ScaleRange {
        self.range
    }

    pub fn interval(&self) -> i32 {
        self.interval
    }

    /// Number of sections on the scale
    pub fn section_count(&self) -> i32 {
        self.range.span() / self.interval
    }

    /// Ticks per section
    pub fn rows_per_section(&self) -> i32 {
        self.interval
    }

    /// Total number of ticks
    pub fn tick_count(&self) -> i32 {
        self.range.span()
    }

    /// First selectable value
    pub fn min_value(&self) -> i32 {
        self.range.location
    }

    /// Exclusive upper bound of the selectable domain
    pub fn end_value(&self) -> i32 {
        self.range.location + self.section_count() * self.interval
    }

    /// Last selectable value
    pub fn last_value(&self) -> i32 {
        self.end_value() - 1
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min_value() && value < self.end_value()
    }

    /// Clamp a value to the nearest domain boundary
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min_value(), self.last_value())
    }
}
