//! Tablefsm: a table-driven finite state machine engine
//!
//! Declare states, one initial state and a table of
//! (state, event type) → handler bindings, then feed the machine events one
//! at a time. Every binding lists the states its handler may return, so the
//! table is checked once at build time and a handler returning anything else
//! is rejected at dispatch instead of corrupting the machine.
//!
//! # Core Concepts
//!
//! - **State / EventType**: opaque, comparable identifiers
//! - **Event**: anything that reports an `EventType`; payloads are recovered
//!   by handlers through `downcast_ref`
//! - **Builder**: accumulates declarations, validates them in `build`
//! - **Machine**: holds the current state and dispatches events
//!
//! # Example
//!
//! ```rust
//! use tablefsm::core::{Event, EventType, State};
//! use tablefsm::{impl_event, ErrorKind, StateMachine, StateMachineBuilder};
//!
//! const LOCKED: State = State::from_static("Locked");
//! const UNLOCKED: State = State::from_static("Unlocked");
//! const COIN: EventType = EventType::from_static("Coin");
//! const PUSH: EventType = EventType::from_static("Push");
//!
//! struct Coin;
//! struct Push;
//!
//! impl_event! {
//!     Coin => COIN,
//!     Push => PUSH,
//! }
//!
//! let mut turnstile: StateMachine = StateMachineBuilder::new()
//!     .add_initial_state(LOCKED)
//!     .add_states([UNLOCKED])
//!     .add_simple_transition(LOCKED, COIN, UNLOCKED)
//!     .add_simple_transition(UNLOCKED, PUSH, LOCKED)
//!     .build()
//!     .unwrap();
//!
//! turnstile.handle(&Coin).unwrap();
//! assert_eq!(turnstile.current_state(), &UNLOCKED);
//!
//! let err = turnstile.handle(&Coin).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidTransition);
//! assert_eq!(turnstile.current_state(), &UNLOCKED);
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::core::{Event, EventType, State};
pub use crate::error::ErrorKind;
pub use crate::machine::{HandleError, SharedMachine, StateMachine, TransitionTable};
