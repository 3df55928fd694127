//! Transition bindings and the immutable transition table.

use crate::core::{Event, EventType, State};
use std::collections::{BTreeSet, HashMap};
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

/// Action run when a bound (state, event type) pair fires.
///
/// Returns the proposed next state, or the handler's own error.
pub type Handler<E> = Arc<dyn Fn(&dyn Event) -> Result<State, E> + Send + Sync>;

/// A transition from one source state on one event type.
///
/// `destinations` is the exhaustive set of states the handler may return.
pub struct Binding<E> {
    pub source: State,
    pub event_type: EventType,
    pub handler: Handler<E>,
    pub destinations: BTreeSet<State>,
}

impl<E> Binding<E> {
    /// Check if `state` is a legal result for this binding (pure)
    pub fn permits(&self, state: &State) -> bool {
        self.destinations.contains(state)
    }

    pub(crate) fn invoke(&self, event: &dyn Event) -> Result<State, E> {
        (self.handler)(event)
    }
}

impl<E> Clone for Binding<E> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            event_type: self.event_type.clone(),
            handler: Arc::clone(&self.handler),
            destinations: self.destinations.clone(),
        }
    }
}

impl<E> fmt::Debug for Binding<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("source", &self.source)
            .field("event_type", &self.event_type)
            .field("destinations", &self.destinations)
            .finish_non_exhaustive()
    }
}

/// Validated, immutable mapping from (source state, event type) to a binding.
///
/// Produced by [`StateMachineBuilder::build_table`](crate::builder::StateMachineBuilder::build_table).
/// Every source and destination is a declared state, and so is the initial
/// state. A table can back any number of machines at once.
pub struct TransitionTable<E = Infallible> {
    initial: State,
    states: BTreeSet<State>,
    bindings: HashMap<State, HashMap<EventType, Binding<E>>>,
}

impl<E> TransitionTable<E> {
    /// Assemble a table from already-validated parts.
    pub(crate) fn new(
        initial: State,
        states: BTreeSet<State>,
        bindings: impl IntoIterator<Item = Binding<E>>,
    ) -> Self {
        let mut by_source: HashMap<State, HashMap<EventType, Binding<E>>> = HashMap::new();
        for binding in bindings {
            by_source
                .entry(binding.source.clone())
                .or_default()
                .insert(binding.event_type.clone(), binding);
        }

        Self {
            initial,
            states,
            bindings: by_source,
        }
    }

    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    /// All declared states, in sorted order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    pub fn is_declared(&self, state: &State) -> bool {
        self.states.contains(state)
    }

    /// The binding for `event_type` out of `source`, if any.
    pub fn binding(&self, source: &State, event_type: &EventType) -> Option<&Binding<E>> {
        self.bindings.get(source)?.get(event_type)
    }

    /// Declared destinations for `event_type` out of `source`.
    pub fn destinations(
        &self,
        source: &State,
        event_type: &EventType,
    ) -> Option<impl Iterator<Item = &State>> {
        self.binding(source, event_type)
            .map(|binding| binding.destinations.iter())
    }

    /// Event types accepted in `source`.
    pub fn event_types(&self, source: &State) -> impl Iterator<Item = &EventType> {
        self.bindings
            .get(source)
            .into_iter()
            .flat_map(|by_event| by_event.keys())
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> fmt::Debug for TransitionTable<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("initial", &self.initial)
            .field("states", &self.states)
            .field("bindings", &self.len())
            .finish()
    }
}
