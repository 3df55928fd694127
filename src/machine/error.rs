//! Errors returned when dispatching an event.

use crate::core::{EventType, State};
use crate::error::ErrorKind;
use thiserror::Error;

/// Errors that can occur while handling an event.
///
/// `E` is the handler's own error type. Handler errors are carried unchanged
/// in [`HandleError::Handler`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HandleError<E> {
    #[error("invalid transition: no transition from state '{state}' on event '{event_type}'")]
    NoTransition { state: State, event_type: EventType },

    #[error("invalid transition: handler for '{from}' on '{event_type}' returned undeclared destination '{to}'")]
    UndeclaredDestination {
        from: State,
        event_type: EventType,
        to: State,
    },

    #[error(transparent)]
    Handler(E),
}

impl<E> HandleError<E> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoTransition { .. } | Self::UndeclaredDestination { .. } => {
                ErrorKind::InvalidTransition
            }
            Self::Handler(_) => ErrorKind::Handler,
        }
    }

    pub fn is_invalid_transition(&self) -> bool {
        self.kind() == ErrorKind::InvalidTransition
    }

    /// The handler's error, if this is one.
    pub fn handler_error(&self) -> Option<&E> {
        match self {
            Self::Handler(e) => Some(e),
            _ => None,
        }
    }

    /// Take the handler's error, if this is one.
    pub fn into_handler_error(self) -> Option<E> {
        match self {
            Self::Handler(e) => Some(e),
            _ => None,
        }
    }
}
