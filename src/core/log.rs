//! Audit trail of state changes.
//!
//! The log records every time a machine moves between two distinct states.
//! It is append-only and independent of the undo/redo history: undoing a
//! snapshot is itself a state change and shows up here. A bounded log drops
//! its oldest records once full.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single change of state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Name of the event (or `"restore"`) that caused the change
    pub trigger: Cow<'static, str>,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of state changes.
///
/// # Example
///
/// ```rust
/// use rewind::core::{State, StateTransition, TransitionLog};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door { Closed, Open }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// let mut log = TransitionLog::new();
/// log.record(StateTransition {
///     from: Door::Closed,
///     to: Door::Open,
///     trigger: "push".into(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.path(), vec![&Door::Closed, &Door::Open]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    #[serde(default)]
    capacity: Option<usize>,
}

impl<S: State> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionLog<S> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity: None,
        }
    }

    /// Create a log keeping at most `capacity` records.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Append a transition, evicting the oldest if the log is full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            while self.transitions.len() >= capacity {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// States traversed, starting with the `from` of the first record.
    ///
    /// Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Elapsed time between the first and last record.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.front()?;
        let last = self.transitions.back()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All retained transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition<S>> {
        &self.transitions
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
