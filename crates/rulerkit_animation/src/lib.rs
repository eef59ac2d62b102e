//! RulerKit Animation System
//!
//! Frame-ticked animation for the scale widgets:
//!
//! - **Scroll tweens**: eased offset animation toward a snapped target,
//!   polled by id each frame
//! - **Deferred tasks**: cancellable one-shot timers for staged widget setup
//! - **Easing**: deceleration-style curves matching scroll-view feel
//!
//! Everything runs on the UI thread; the host calls
//! [`AnimationScheduler::tick`] once per frame with the elapsed time.

pub mod easing;
pub mod scheduler;

pub use easing::Easing;
pub use scheduler::{AnimationId, AnimationScheduler, ScrollAnimation, TaskId};
