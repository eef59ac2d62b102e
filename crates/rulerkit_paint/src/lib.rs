//! RulerKit Paint Primitives
//!
//! The minimal 2D drawing vocabulary the scale widgets hand to a renderer:
//!
//! - Flat [`Color`]s for tick marks, labels, and the pointer glyph
//! - [`Point`]/[`Rect`] geometry for frame layout
//! - Straight-edge [`Path`]s (the arrow triangle, the baseline rule)
//! - [`Transform2D`] affines for orientation flips and glyph rotation
//!
//! Rendering itself is owned by the embedding toolkit; these types only
//! describe what to draw.

pub mod color;
pub mod path;
pub mod primitives;
pub mod transform;

pub use color::Color;
pub use path::{Path, PathBuilder, PathCommand};
pub use primitives::{Point, Rect};
pub use transform::Transform2D;
