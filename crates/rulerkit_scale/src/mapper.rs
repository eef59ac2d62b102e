//! Value mapping
//!
//! Pure bidirectional mapping between structural ticks (section/row pairs or
//! flat row indices), raw scroll offsets, and domain values. The mapper never
//! mutates state; orientation is carried only so the presentation layer can
//! ask whether the scroll axis is mirrored.

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;
use crate::range::RangeModel;

/// Scroll axis of the widget
///
/// Purely presentational: the horizontal ruler mirrors its list host, the
/// mapping arithmetic is identical in both orientations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Whether the rendering layer mirrors the scroll axis
    pub fn axis_inverted(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }
}

/// A structural position on the scale
///
/// Sectioned scales address ticks as `(section, row)` with
/// `row ∈ [0, interval)`. Flat scales keep `section = 0` and use `row` as the
/// linear index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tick {
    pub section: i32,
    pub row: i32,
}

impl Tick {
    pub const fn new(section: i32, row: i32) -> Self {
        Self { section, row }
    }

    /// A flat-mode tick addressing `index` directly
    pub const fn flat(index: i32) -> Self {
        Self {
            section: 0,
            row: index,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Mode {
    Sectioned(RangeModel),
    Flat { max_value: i32 },
}

/// Bidirectional tick/value/offset mapping
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueMapper {
    mode: Mode,
    orientation: Orientation,
}

impl ValueMapper {
    /// Mapper over a sectioned range model (the list-backed ruler)
    pub fn sectioned(model: RangeModel, orientation: Orientation) -> Self {
        Self {
            mode: Mode::Sectioned(model),
            orientation,
        }
    }

    /// Mapper over a flat `0..max_value` row enumeration (the wheel picker)
    pub fn flat(max_value: i32, orientation: Orientation) -> Result<Self, ScaleError> {
        if max_value <= 0 {
            return Err(ScaleError::InvalidRange {
                location: 0,
                length: max_value,
            });
        }
        Ok(Self {
            mode: Mode::Flat { max_value },
            orientation,
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the rendering layer mirrors the scroll axis
    pub fn axis_inverted(&self) -> bool {
        self.orientation.axis_inverted()
    }

    /// Total number of addressable ticks
    pub fn tick_count(&self) -> i32 {
        match self.mode {
            Mode::Sectioned(model) => model.tick_count(),
            Mode::Flat { max_value } => max_value,
        }
    }

    /// The selectable domain as `(min, exclusive end)`
    pub fn domain(&self) -> (i32, i32) {
        match self.mode {
            Mode::Sectioned(model) => (model.min_value(), model.end_value()),
            Mode::Flat { max_value } => (0, max_value),
        }
    }

    /// Clamp a value to the nearest domain boundary
    pub fn clamp(&self, value: i32) -> i32 {
        let (min, end) = self.domain();
        value.clamp(min, end - 1)
    }

    /// Domain value addressed by a tick
    pub fn value_at(&self, tick: Tick) -> Result<i32, ScaleError> {
        let (min, end) = self.domain();
        match self.mode {
            Mode::Sectioned(model) => {
                let structurally_valid = tick.section >= 0
                    && tick.section < model.section_count()
                    && tick.row >= 0
                    && tick.row < model.rows_per_section();
                let value = model.min_value() + tick.section * model.interval() + tick.row;
                if !structurally_valid {
                    return Err(ScaleError::ValueOutOfRange {
                        value,
                        min,
                        max: end,
                    });
                }
                Ok(value)
            }
            Mode::Flat { max_value } => {
                if tick.section != 0 || tick.row < 0 || tick.row >= max_value {
                    return Err(ScaleError::ValueOutOfRange {
                        value: tick.row,
                        min,
                        max: end,
                    });
                }
                Ok(tick.row)
            }
        }
    }

    /// Tick addressing a domain value (inverse of [`ValueMapper::value_at`])
    pub fn tick_for(&self, value: i32) -> Result<Tick, ScaleError> {
        let (min, end) = self.domain();
        if value < min || value >= end {
            return Err(ScaleError::ValueOutOfRange {
                value,
                min,
                max: end,
            });
        }
        match self.mode {
            Mode::Sectioned(model) => {
                let from_start = value - model.min_value();
                Ok(Tick::new(
                    from_start / model.interval(),
                    from_start % model.interval(),
                ))
            }
            Mode::Flat { .. } => Ok(Tick::flat(value)),
        }
    }

    /// Linear tick index of a structural tick
    pub fn linear_index(&self, tick: Tick) -> i32 {
        match self.mode {
            Mode::Sectioned(model) => tick.section * model.interval() + tick.row,
            Mode::Flat { .. } => tick.row,
        }
    }

    /// Tick addressed by a continuous scroll offset, resolved with
    /// `round(offset / row_height)` and clamped into the tick domain
    pub fn tick_at_offset(&self, offset: f32, row_height: f32) -> Tick {
        if row_height <= f32::EPSILON {
            return self.tick_from_linear(0);
        }
        let index = (offset / row_height).round() as i64;
        let clamped = index.clamp(0, (self.tick_count() - 1) as i64) as i32;
        self.tick_from_linear(clamped)
    }

    /// Rest offset of a tick
    pub fn offset_of(&self, tick: Tick, row_height: f32) -> f32 {
        self.linear_index(tick) as f32 * row_height
    }

    fn tick_from_linear(&self, index: i32) -> Tick {
        match self.mode {
            Mode::Sectioned(model) => {
                Tick::new(index / model.interval(), index % model.interval())
            }
            Mode::Flat { .. } => Tick::flat(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::ScaleRange;

    fn sectioned() -> ValueMapper {
        let model = RangeModel::new(ScaleRange::new(0, 1000), 10).unwrap();
        ValueMapper::sectioned(model, Orientation::Horizontal)
    }

    #[test]
    fn tick_six_three_is_sixty_three() {
        assert_eq!(sectioned().value_at(Tick::new(6, 3)).unwrap(), 63);
    }

    #[test]
    fn mapping_round_trips_across_the_domain() {
        let mapper = sectioned();
        for value in 0..1000 {
            let tick = mapper.tick_for(value).unwrap();
            assert_eq!(mapper.value_at(tick).unwrap(), value);
        }
    }

    #[test]
    fn location_shifts_the_value_not_the_tick() {
        let model = RangeModel::new(ScaleRange::new(100, 300), 10).unwrap();
        let mapper = ValueMapper::sectioned(model, Orientation::Vertical);
        assert_eq!(mapper.tick_for(162).unwrap(), Tick::new(6, 2));
        assert_eq!(mapper.value_at(Tick::new(6, 2)).unwrap(), 162);
    }

    #[test]
    fn flat_rows_map_directly() {
        let mapper = ValueMapper::flat(1000, Orientation::Vertical).unwrap();
        assert_eq!(mapper.value_at(Tick::flat(63)).unwrap(), 63);
        assert_eq!(mapper.tick_for(63).unwrap(), Tick::flat(63));
        assert_eq!(mapper.tick_count(), 1000);
    }

    #[test]
    fn flat_mode_rejects_non_positive_row_counts() {
        assert!(ValueMapper::flat(0, Orientation::Vertical).is_err());
    }

    #[test]
    fn out_of_domain_values_are_errors() {
        let mapper = sectioned();
        assert_eq!(
            mapper.tick_for(1000).unwrap_err(),
            ScaleError::ValueOutOfRange {
                value: 1000,
                min: 0,
                max: 1000
            }
        );
        assert!(mapper.value_at(Tick::new(100, 0)).is_err());
        assert!(mapper.value_at(Tick::new(0, 10)).is_err());
    }

    #[test]
    fn offsets_resolve_to_the_nearest_tick() {
        let mapper = sectioned();
        // 8-unit rows: 500.0 / 8 = 62.5, rounds away from zero to 63
        assert_eq!(mapper.tick_at_offset(500.0, 8.0), Tick::new(6, 3));
        assert_eq!(mapper.tick_at_offset(491.2, 8.0), Tick::new(6, 1));
        // Clamped at the ends
        assert_eq!(mapper.tick_at_offset(-50.0, 8.0), Tick::new(0, 0));
        assert_eq!(mapper.tick_at_offset(1e7, 8.0), Tick::new(99, 9));
    }

    #[test]
    fn offset_of_is_the_tick_rest_position() {
        let mapper = sectioned();
        assert_eq!(mapper.offset_of(Tick::new(6, 2), 8.0), 496.0);
        let flat = ValueMapper::flat(100, Orientation::Vertical).unwrap();
        assert_eq!(flat.offset_of(Tick::flat(62), 8.0), 496.0);
    }

    #[test]
    fn horizontal_mapper_flags_the_mirrored_axis() {
        assert!(sectioned().axis_inverted());
        let model = RangeModel::new(ScaleRange::new(0, 100), 10).unwrap();
        assert!(!ValueMapper::sectioned(model, Orientation::Vertical).axis_inverted());
    }
}
