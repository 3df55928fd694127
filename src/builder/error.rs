//! Build errors for transition tables.

use crate::core::{EventType, State};
use crate::error::ErrorKind;
use thiserror::Error;

/// Errors that can occur when validating a declared transition table.
///
/// Every variant is of kind [`ErrorKind::Build`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("build failed: initial state not specified. Call .add_initial_state(state) before .build()")]
    MissingInitialState,

    #[error("build failed: initial state declared more than once ({})", join(.states))]
    MultipleInitialStates { states: Vec<State> },

    #[error("build failed: transition on '{event_type}' leaves undeclared source state '{source_state}'")]
    UndeclaredSource {
        source_state: State,
        event_type: EventType,
    },

    #[error("build failed: transition from '{source_state}' on '{event_type}' targets undeclared state '{destination}'")]
    UndeclaredDestination {
        source_state: State,
        event_type: EventType,
        destination: State,
    },
}

impl BuildError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Build
    }
}

fn join(states: &[State]) -> String {
    states
        .iter()
        .map(State::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
