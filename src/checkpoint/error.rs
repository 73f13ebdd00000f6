//! Checkpoint error types.

use thiserror::Error;

/// A single reason a checkpoint cannot be turned back into a history.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckpointViolation {
    #[error("unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("cursor {cursor} is beyond the {len} stored snapshots")]
    CursorOutOfRange { cursor: usize, len: usize },

    #[error("capacity must be at least 1")]
    ZeroCapacity,

    #[error("{len} snapshots exceed capacity {capacity}")]
    CapacityExceeded { capacity: usize, len: usize },

    #[error("snapshot {index} has sequence {found}, not after {previous}")]
    SequenceNotIncreasing {
        index: usize,
        previous: u64,
        found: u64,
    },

    #[error("next sequence {next} does not follow highest stored sequence {highest}")]
    StaleNextSequence { next: u64, highest: u64 },

    #[error("next sequence {next} leaves no room for another commit")]
    SequenceExhausted { next: u64 },
}

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint data failed validation; every violation found is listed
    #[error("Checkpoint validation failed: {}", list(.0))]
    ValidationFailed(Vec<CheckpointViolation>),
}

fn list(violations: &[CheckpointViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
