//! Runtime dispatch of events against a frozen transition table.
//!
//! - [`TransitionTable`]: immutable (state, event type) → [`Binding`] map,
//!   shareable across machines and threads
//! - [`StateMachine`]: current state plus dispatch
//! - [`SharedMachine`]: mutex-guarded handle for multi-threaded callers

mod error;
mod shared;
mod state_machine;
mod transition;

pub use error::HandleError;
pub use shared::SharedMachine;
pub use state_machine::StateMachine;
pub use transition::{Binding, Handler, TransitionTable};
