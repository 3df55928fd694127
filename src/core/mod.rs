//! Core value types shared by the builder and the machine.
//!
//! - `State` and `EventType`: opaque, comparable identifiers
//! - `Event`: the capability of reporting an `EventType`
//! - `TransitionHistory`: optional record of applied transitions

mod event;
mod history;
mod state;

pub use event::{AsAny, Event, EventType};
pub use history::{TransitionHistory, TransitionRecord};
pub use state::State;
