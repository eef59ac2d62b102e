//! RulerKit Core Runtime
//!
//! Foundational primitives shared by the RulerKit widget crates:
//!
//! - **Gesture Events**: event-type ids and dispatch for the scroll/drag
//!   traffic the scale hosts deliver
//! - **State Machines**: typed transition tables for widget interaction states
//!
//! # Example
//!
//! ```rust
//! use rulerkit_core::events::event_types;
//! use rulerkit_core::fsm::{StateMachine, StateTransitions};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Grip {
//!     Open,
//!     Held,
//! }
//!
//! impl StateTransitions for Grip {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Grip::Open, event_types::POINTER_DOWN) => Some(Grip::Held),
//!             (Grip::Held, event_types::POINTER_UP) => Some(Grip::Open),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut machine = StateMachine::new(Grip::Open);
//! machine.send(event_types::POINTER_DOWN);
//! assert_eq!(machine.current(), Grip::Held);
//! ```

pub mod events;
pub mod fsm;

pub use events::{Event, EventData, EventDispatcher, EventType};
pub use fsm::{StateMachine, StateTransitions};
