//! Thread-safe handle around a single state machine.

use crate::core::{Event, State};
use crate::machine::error::HandleError;
use crate::machine::state_machine::StateMachine;
use parking_lot::Mutex;
use std::convert::Infallible;
use std::sync::Arc;

/// Cloneable handle that serializes `handle` calls on one machine.
///
/// The lock is held from the lookup of the current state until the new state
/// is stored, so no dispatch ever runs against a stale source state.
/// Handlers must not call back into the same machine; doing so deadlocks.
pub struct SharedMachine<E = Infallible> {
    inner: Arc<Mutex<StateMachine<E>>>,
}

impl<E> SharedMachine<E> {
    pub fn new(machine: StateMachine<E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    /// Snapshot of the current state.
    pub fn current_state(&self) -> State {
        self.inner.lock().current_state().clone()
    }

    /// Handle one event while holding the machine lock.
    pub fn handle(&self, event: &dyn Event) -> Result<(), HandleError<E>> {
        self.inner.lock().handle(event)
    }

    /// Run `f` with exclusive access to the machine.
    pub fn with_machine<R>(&self, f: impl FnOnce(&mut StateMachine<E>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<E> Clone for SharedMachine<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> From<StateMachine<E>> for SharedMachine<E> {
    fn from(machine: StateMachine<E>) -> Self {
        Self::new(machine)
    }
}
