//! State machine that dispatches events against a transition table.

use crate::core::{Event, EventType, State, TransitionHistory, TransitionRecord};
use crate::machine::error::HandleError;
use crate::machine::transition::TransitionTable;
use chrono::Utc;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, trace};

/// State machine driven one event at a time.
///
/// Holds a shared, immutable [`TransitionTable`] and the current state.
/// `handle` takes `&mut self`, so at most one dispatch is ever in flight per
/// machine; see [`SharedMachine`](crate::SharedMachine) for use across threads.
pub struct StateMachine<E = Infallible> {
    table: Arc<TransitionTable<E>>,
    current: State,
    history: Option<TransitionHistory>,
}

impl<E> StateMachine<E> {
    /// Create a machine in the table's initial state.
    pub fn new(table: Arc<TransitionTable<E>>) -> Self {
        let current = table.initial_state().clone();
        Self {
            table,
            current,
            history: None,
        }
    }

    /// Create a machine that records every applied transition.
    pub fn with_history(table: Arc<TransitionTable<E>>) -> Self {
        let mut machine = Self::new(table);
        machine.history = Some(TransitionHistory::new(machine.current.clone()));
        machine
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &State {
        &self.current
    }

    pub fn initial_state(&self) -> &State {
        self.table.initial_state()
    }

    /// Check if an event of `event_type` has a binding from the current state (pure)
    pub fn can_handle(&self, event_type: &EventType) -> bool {
        self.table.binding(&self.current, event_type).is_some()
    }

    /// The table this machine dispatches against.
    pub fn table(&self) -> &Arc<TransitionTable<E>> {
        &self.table
    }

    /// Applied transitions, when history recording is enabled.
    pub fn history(&self) -> Option<&TransitionHistory> {
        self.history.as_ref()
    }

    /// Handle one event.
    ///
    /// Looks up the binding for the current state and the event's type, runs
    /// its handler and moves to the returned state if the binding declares it
    /// as a destination. On any error the current state is left unchanged.
    pub fn handle(&mut self, event: &dyn Event) -> Result<(), HandleError<E>> {
        let event_type = event.event_type();
        trace!(state = %self.current, event_type = %event_type, "dispatching event");

        let Some(binding) = self.table.binding(&self.current, &event_type) else {
            return Err(HandleError::NoTransition {
                state: self.current.clone(),
                event_type,
            });
        };

        let next = binding.invoke(event).map_err(HandleError::Handler)?;

        if !binding.permits(&next) {
            return Err(HandleError::UndeclaredDestination {
                from: self.current.clone(),
                event_type,
                to: next,
            });
        }

        debug!(from = %self.current, event_type = %event_type, to = %next, "transition applied");

        let from = std::mem::replace(&mut self.current, next);
        if let Some(history) = self.history.as_mut() {
            history.record(TransitionRecord {
                from,
                event_type,
                to: self.current.clone(),
                timestamp: Utc::now(),
            });
        }

        Ok(())
    }
}

impl<E> std::fmt::Debug for StateMachine<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}
