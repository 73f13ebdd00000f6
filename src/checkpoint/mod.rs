//! Checkpoint and resume for snapshot histories.
//!
//! A [`Checkpoint`] is a serializable image of a [`HistoryManager`]: every
//! snapshot, the cursor, the baseline and the sequence counter. It encodes
//! to JSON for readability or bincode for compactness. Where the bytes end
//! up is the caller's concern.
//!
//! Decoding never trusts the input: [`Checkpoint::restore`] checks every
//! history invariant and reports all violations at once.

use crate::memento::{HistoryManager, Snapshot};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::{CheckpointError, CheckpointViolation};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable image of a history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint<T> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Value restored when every snapshot is undone
    pub baseline: Snapshot<T>,

    /// Snapshots oldest first, redo buffer included
    pub snapshots: Vec<Snapshot<T>>,

    pub cursor: usize,

    pub capacity: Option<usize>,

    /// Sequence number the next commit receives
    pub next_sequence: u64,
}

impl<T: Clone> Checkpoint<T> {
    /// Copy the full contents of `history`.
    pub fn capture(history: &HistoryManager<T>) -> Self {
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            baseline: history.baseline().clone(),
            snapshots: history.snapshots().cloned().collect(),
            cursor: history.cursor(),
            capacity: history.capacity(),
            next_sequence: history.next_sequence(),
        };
        debug!(
            id = %checkpoint.id,
            snapshots = checkpoint.snapshots.len(),
            cursor = checkpoint.cursor,
            "captured checkpoint"
        );
        checkpoint
    }
}

impl<T> Checkpoint<T> {
    /// Check every history invariant, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<CheckpointViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<CheckpointViolation>>> = Vec::new();
        let len = self.snapshots.len();

        if self.version != CHECKPOINT_VERSION {
            checks.push(Validation::fail(CheckpointViolation::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            }));
        }

        if self.cursor > len {
            checks.push(Validation::fail(CheckpointViolation::CursorOutOfRange {
                cursor: self.cursor,
                len,
            }));
        }

        match self.capacity {
            Some(0) => checks.push(Validation::fail(CheckpointViolation::ZeroCapacity)),
            Some(capacity) if len > capacity => {
                checks.push(Validation::fail(CheckpointViolation::CapacityExceeded {
                    capacity,
                    len,
                }))
            }
            _ => {}
        }

        let mut previous = self.baseline.sequence();
        for (index, snapshot) in self.snapshots.iter().enumerate() {
            if snapshot.sequence() <= previous {
                checks.push(Validation::fail(
                    CheckpointViolation::SequenceNotIncreasing {
                        index,
                        previous,
                        found: snapshot.sequence(),
                    },
                ));
            }
            previous = previous.max(snapshot.sequence());
        }

        if self.next_sequence <= previous {
            checks.push(Validation::fail(CheckpointViolation::StaleNextSequence {
                next: self.next_sequence,
                highest: previous,
            }));
        }

        if self.next_sequence == u64::MAX {
            checks.push(Validation::fail(CheckpointViolation::SequenceExhausted {
                next: self.next_sequence,
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and rebuild the history.
    pub fn restore(self) -> Result<HistoryManager<T>, CheckpointError> {
        if let Validation::Failure(violations) = self.validate() {
            let violations: Vec<_> = violations.iter().cloned().collect();
            debug!(id = %self.id, count = violations.len(), "rejected checkpoint");
            return Err(CheckpointError::ValidationFailed(violations));
        }

        debug!(id = %self.id, cursor = self.cursor, "restoring checkpoint");
        Ok(HistoryManager::from_parts(
            self.snapshots.into(),
            self.cursor,
            self.baseline,
            self.capacity,
            self.next_sequence,
        ))
    }
}

impl<T: Serialize> Checkpoint<T> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }
}

impl<T: DeserializeOwned> Checkpoint<T> {
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}
