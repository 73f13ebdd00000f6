//! History boundary errors.

use thiserror::Error;

/// Errors returned when a history operation runs off a boundary: either end
/// of the snapshot sequence, or the end of the sequence counter.
///
/// The history is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Nothing to undo: already at the oldest snapshot")]
    NothingToUndo,

    #[error("Nothing to redo: already at the newest snapshot")]
    NothingToRedo,

    #[error("Sequence counter exhausted: no sequence number left for another commit")]
    SequenceExhausted,
}
