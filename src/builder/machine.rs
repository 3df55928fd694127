//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Event, EventType, State};
use crate::machine::{Binding, StateMachine, TransitionTable};
use std::collections::{BTreeMap, BTreeSet};
use std::convert::Infallible;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, trace};

/// Builder for declaring states and transitions with a fluent API.
///
/// Declarations are accumulated as given; nothing is checked until
/// [`build`](Self::build), which validates the whole table at once.
pub struct StateMachineBuilder<E = Infallible> {
    initial_states: Vec<State>,
    states: BTreeSet<State>,
    bindings: BTreeMap<(State, EventType), Binding<E>>,
    record_history: bool,
}

impl<E> StateMachineBuilder<E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial_states: Vec::new(),
            states: BTreeSet::new(),
            bindings: BTreeMap::new(),
            record_history: false,
        }
    }

    /// Set the initial state (required, exactly once).
    /// The state is also declared. Calling this twice makes `build` fail.
    pub fn add_initial_state(mut self, state: State) -> Self {
        self.states.insert(state.clone());
        self.initial_states.push(state);
        self
    }

    /// Declare states. Already declared states are ignored.
    pub fn add_states(mut self, states: impl IntoIterator<Item = State>) -> Self {
        self.states.extend(states);
        self
    }

    /// Bind `handler` to events of `event_type` in state `source`.
    ///
    /// `destinations` lists every state the handler may return. A later call
    /// for the same source and event type replaces this one.
    pub fn add_transition<F>(
        mut self,
        source: State,
        event_type: EventType,
        handler: F,
        destinations: impl IntoIterator<Item = State>,
    ) -> Self
    where
        F: Fn(&dyn Event) -> Result<State, E> + Send + Sync + 'static,
    {
        let binding = Binding {
            source: source.clone(),
            event_type: event_type.clone(),
            handler: Arc::new(handler),
            destinations: destinations.into_iter().collect(),
        };

        if self
            .bindings
            .insert((source, event_type), binding)
            .is_some()
        {
            trace!("replaced previously declared transition");
        }
        self
    }

    /// Bind an unconditional transition from `source` to `destination`.
    pub fn add_simple_transition(
        self,
        source: State,
        event_type: EventType,
        destination: State,
    ) -> Self {
        let target = destination.clone();
        self.add_transition(
            source,
            event_type,
            move |_: &dyn Event| Ok(target.clone()),
            [destination],
        )
    }

    /// Record applied transitions on the built machine.
    pub fn record_history(mut self) -> Self {
        self.record_history = true;
        self
    }

    /// Check every rule, collecting all violations instead of stopping at
    /// the first. Violations are listed in the order `build` checks them.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = self
            .violations()
            .map(|violation| Validation::fail(violation))
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate the declarations and freeze them into a transition table.
    pub fn build_table(self) -> Result<TransitionTable<E>, BuildError> {
        if let Some(violation) = self.violations().next() {
            return Err(violation);
        }

        let Some(initial) = self.initial_states.into_iter().next() else {
            return Err(BuildError::MissingInitialState);
        };

        debug!(
            initial = %initial,
            states = self.states.len(),
            transitions = self.bindings.len(),
            "transition table built"
        );

        Ok(TransitionTable::new(
            initial,
            self.states,
            self.bindings.into_values(),
        ))
    }

    /// Build the state machine.
    /// Returns an error if the declarations are inconsistent.
    pub fn build(self) -> Result<StateMachine<E>, BuildError> {
        let record_history = self.record_history;
        let table = Arc::new(self.build_table()?);

        Ok(if record_history {
            StateMachine::with_history(table)
        } else {
            StateMachine::new(table)
        })
    }

    /// All rule violations, most fundamental first: initial state, then
    /// sources, then destinations.
    fn violations(&self) -> impl Iterator<Item = BuildError> + '_ {
        let initial = match self.initial_states.as_slice() {
            [_] => None,
            [] => Some(BuildError::MissingInitialState),
            states => Some(BuildError::MultipleInitialStates {
                states: states.to_vec(),
            }),
        };

        let sources = self
            .bindings
            .values()
            .filter(move |binding| !self.states.contains(&binding.source))
            .map(|binding| BuildError::UndeclaredSource {
                source_state: binding.source.clone(),
                event_type: binding.event_type.clone(),
            });

        let destinations = self.bindings.values().flat_map(move |binding| {
            binding
                .destinations
                .iter()
                .filter(move |destination| !self.states.contains(*destination))
                .map(move |destination| BuildError::UndeclaredDestination {
                    source_state: binding.source.clone(),
                    event_type: binding.event_type.clone(),
                    destination: destination.clone(),
                })
        });

        initial.into_iter().chain(sources).chain(destinations)
    }
}

impl<E> Default for StateMachineBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
