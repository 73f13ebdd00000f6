//! Immutable, sequenced snapshots.

use serde::{Deserialize, Serialize};

/// Sequence number carried by a history's baseline snapshot.
pub const BASELINE_SEQUENCE: u64 = 0;

/// A memento tagged with its position in commit order.
///
/// Fields are private; a snapshot cannot be altered once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    sequence: u64,
    state: T,
}

impl<T> Snapshot<T> {
    pub(crate) fn new(sequence: u64, state: T) -> Self {
        Self { sequence, state }
    }

    /// Commit order. Strictly increasing across a history. The initial
    /// baseline carries [`BASELINE_SEQUENCE`].
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The captured memento.
    pub fn state(&self) -> &T {
        &self.state
    }

    pub fn into_state(self) -> T {
        self.state
    }
}
