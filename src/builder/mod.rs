//! Builder API for declaring transition tables.
//!
//! Declarations accumulate on a [`StateMachineBuilder`]; `build` validates
//! them as a whole and produces a machine or a [`BuildError`].
//!
//! # Example
//!
//! ```rust
//! use tablefsm::builder::StateMachineBuilder;
//! use tablefsm::core::{EventType, State};
//!
//! const RED: State = State::from_static("Red");
//! const GREEN: State = State::from_static("Green");
//! const YELLOW: State = State::from_static("Yellow");
//! const TICK: EventType = EventType::from_static("tick");
//!
//! let machine: tablefsm::StateMachine = StateMachineBuilder::new()
//!     .add_initial_state(RED)
//!     .add_states([GREEN, YELLOW])
//!     .add_simple_transition(RED, TICK, GREEN)
//!     .add_simple_transition(GREEN, TICK, YELLOW)
//!     .add_simple_transition(YELLOW, TICK, RED)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(machine.current_state(), &RED);
//! ```

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
