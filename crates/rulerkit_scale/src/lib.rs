//! RulerKit Scale Engine
//!
//! The pure logic behind the scale widgets:
//!
//! - **RangeModel**: a validated `(location, length, interval)` triple and its
//!   section/row layout
//! - **ValueMapper**: bidirectional mapping between structural ticks (or raw
//!   scroll offsets) and domain values, in sectioned and flat variants
//! - **SnapPolicy**: quantization of a deceleration target to the nearest tick
//! - **SelectionController**: the drag/settle gesture state machine that owns
//!   the current selection and notifies the delegate exactly once per settle
//!
//! Nothing here touches a view hierarchy; the widget crate wires hosts into
//! these types.
//!
//! # Example
//!
//! ```rust
//! use rulerkit_scale::{Orientation, RangeModel, ScaleRange, Tick, ValueMapper};
//!
//! let model = RangeModel::new(ScaleRange::new(0, 1000), 10)?;
//! assert_eq!(model.section_count(), 100);
//!
//! let mapper = ValueMapper::sectioned(model, Orientation::Horizontal);
//! assert_eq!(mapper.value_at(Tick::new(6, 3))?, 63);
//! # Ok::<(), rulerkit_scale::ScaleError>(())
//! ```

pub mod controller;
pub mod delegate;
pub mod error;
pub mod mapper;
pub mod range;
pub mod snap;

pub use controller::{GestureState, ScrollRequest, SelectionController};
pub use delegate::ScaleDelegate;
pub use error::ScaleError;
pub use mapper::{Orientation, Tick, ValueMapper};
pub use range::{RangeModel, ScaleRange};
pub use snap::SnapPolicy;
