//! Undo/redo over a linear sequence of snapshots.

use super::error::HistoryError;
use super::originator::Originator;
use super::snapshot::{Snapshot, BASELINE_SEQUENCE};
use std::collections::VecDeque;
use tracing::{debug, trace, warn};

/// Ordered snapshots plus a cursor.
///
/// The cursor points one past the snapshot currently applied. Entries at or
/// beyond the cursor form the redo buffer. With the cursor at `0` the
/// baseline is the applied value.
///
/// Invariant: `0 <= cursor <= len`.
///
/// # Example
///
/// ```rust
/// use rewind::memento::HistoryManager;
///
/// let mut history = HistoryManager::new(String::new());
/// history.commit("First edit".to_string()).unwrap();
/// history.commit("Second edit".to_string()).unwrap();
///
/// assert_eq!(history.undo().unwrap().state(), "First edit");
/// assert_eq!(history.redo().unwrap().state(), "Second edit");
/// assert!(history.redo().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct HistoryManager<T> {
    entries: VecDeque<Snapshot<T>>,
    cursor: usize,
    baseline: Snapshot<T>,
    capacity: Option<usize>,
    next_sequence: u64,
}

impl<T: Default> Default for HistoryManager<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> HistoryManager<T> {
    /// Create an empty, unbounded history.
    ///
    /// `baseline` is what undo hands back once the cursor reaches `0`.
    pub fn new(baseline: T) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            baseline: Snapshot::new(BASELINE_SEQUENCE, baseline),
            capacity: None,
            next_sequence: BASELINE_SEQUENCE + 1,
        }
    }

    /// Create an empty history that keeps at most `capacity` snapshots.
    ///
    /// Callers go through `HistoryBuilder`, which rejects a zero capacity.
    pub(crate) fn bounded(baseline: T, capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new(baseline)
        }
    }

    /// Rebuild a history from already validated parts.
    pub(crate) fn from_parts(
        entries: VecDeque<Snapshot<T>>,
        cursor: usize,
        baseline: Snapshot<T>,
        capacity: Option<usize>,
        next_sequence: u64,
    ) -> Self {
        Self {
            entries,
            cursor,
            baseline,
            capacity,
            next_sequence,
        }
    }

    /// Record `memento` as the newest snapshot.
    ///
    /// Anything in the redo buffer is discarded first, so a commit after an
    /// undo abandons the undone branch. When a capacity is set and exceeded,
    /// the oldest snapshot is evicted and becomes the new baseline.
    ///
    /// Fails with [`HistoryError::SequenceExhausted`], leaving the history
    /// untouched, once the sequence counter has no successor.
    pub fn commit(&mut self, memento: T) -> Result<&Snapshot<T>, HistoryError> {
        let sequence = self.next_sequence;
        let Some(next_sequence) = sequence.checked_add(1) else {
            warn!(sequence, "sequence counter exhausted, commit refused");
            return Err(HistoryError::SequenceExhausted);
        };

        let discarded = self.entries.len() - self.cursor;
        if discarded > 0 {
            self.entries.truncate(self.cursor);
            debug!(discarded, cursor = self.cursor, "discarded redo branch");
        }

        self.next_sequence = next_sequence;
        self.entries.push_back(Snapshot::new(sequence, memento));
        self.cursor += 1;

        if let Some(capacity) = self.capacity {
            if self.entries.len() > capacity {
                if let Some(oldest) = self.entries.pop_front() {
                    warn!(
                        capacity,
                        evicted = oldest.sequence(),
                        "history full, evicting oldest snapshot"
                    );
                    self.baseline = oldest;
                    self.cursor -= 1;
                }
            }
        }

        trace!(sequence, cursor = self.cursor, len = self.entries.len(), "committed snapshot");
        Ok(self.current())
    }

    /// Capture `source` and commit it.
    pub fn commit_from<O>(&mut self, source: &O) -> Result<&Snapshot<T>, HistoryError>
    where
        O: Originator<Memento = T>,
    {
        self.commit(source.snapshot())
    }

    /// Step back one snapshot and return the one now applied.
    ///
    /// Returns the baseline when stepping back past the oldest committed
    /// snapshot. Fails with [`HistoryError::NothingToUndo`] when the cursor
    /// is already at `0`.
    pub fn undo(&mut self) -> Result<&Snapshot<T>, HistoryError> {
        if self.cursor == 0 {
            debug!("undo requested with empty undo buffer");
            return Err(HistoryError::NothingToUndo);
        }

        self.cursor -= 1;
        debug!(cursor = self.cursor, "undo");
        Ok(self.current())
    }

    /// Step forward one snapshot and return it.
    ///
    /// Fails with [`HistoryError::NothingToRedo`] when the redo buffer is
    /// empty.
    pub fn redo(&mut self) -> Result<&Snapshot<T>, HistoryError> {
        let Some(snapshot) = self.entries.get(self.cursor) else {
            debug!("redo requested with empty redo buffer");
            return Err(HistoryError::NothingToRedo);
        };

        self.cursor += 1;
        debug!(cursor = self.cursor, "redo");
        Ok(snapshot)
    }

    /// Undo and restore the result onto `target`.
    ///
    /// `target` is untouched when undo fails.
    pub fn undo_into<O>(&mut self, target: &mut O) -> Result<&Snapshot<T>, HistoryError>
    where
        O: Originator<Memento = T>,
    {
        let snapshot = self.undo()?;
        target.restore(snapshot.state());
        Ok(snapshot)
    }

    /// Redo and restore the result onto `target`.
    ///
    /// `target` is untouched when redo fails.
    pub fn redo_into<O>(&mut self, target: &mut O) -> Result<&Snapshot<T>, HistoryError>
    where
        O: Originator<Memento = T>,
    {
        let snapshot = self.redo()?;
        target.restore(snapshot.state());
        Ok(snapshot)
    }

    /// The applied snapshot: the one just before the cursor, or the
    /// baseline.
    pub fn current(&self) -> &Snapshot<T> {
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .unwrap_or(&self.baseline)
    }

    /// Drop every snapshot. The baseline and sequence counter are kept.
    pub fn clear(&mut self) {
        debug!(dropped = self.entries.len(), "clearing history");
        self.entries.clear();
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    pub fn baseline(&self) -> &Snapshot<T> {
        &self.baseline
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Committed snapshots, oldest first, including the redo buffer.
    pub fn snapshots(&self) -> impl ExactSizeIterator<Item = &Snapshot<T>> + '_ {
        self.entries.iter()
    }

    /// Sequence number the next commit will receive.
    pub(crate) fn next_sequence(&self) -> u64 {
        self.next_sequence
    }
}
