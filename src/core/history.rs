//! Transition history tracking.
//!
//! A machine built with history enabled appends one record per applied
//! transition. Rejected events never appear here.

use super::event::EventType;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: State,
    /// The event type that selected the transition
    pub event_type: EventType,
    /// The state being transitioned to
    pub to: State,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of the transitions a machine has applied.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::{EventType, State, TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let start = State::from_static("Start");
/// let end = State::from_static("End");
///
/// let mut history = TransitionHistory::new(start.clone());
/// history.record(TransitionRecord {
///     from: start,
///     event_type: EventType::from_static("finish"),
///     to: end,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.path();
/// assert_eq!(path.len(), 2); // Start -> End
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionHistory {
    initial: State,
    records: Vec<TransitionRecord>,
}

impl TransitionHistory {
    /// Create an empty history for a machine starting in `initial`.
    pub fn new(initial: State) -> Self {
        Self {
            initial,
            records: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, record: TransitionRecord) {
        self.records.push(record);
    }

    /// States visited, starting with the initial state.
    pub fn path(&self) -> Vec<&State> {
        std::iter::once(&self.initial)
            .chain(self.records.iter().map(|r| &r.to))
            .collect()
    }

    /// Time between the first and the last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All recorded transitions in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
