//! Builder for configuring snapshot histories.

use crate::builder::error::BuildError;
use crate::memento::HistoryManager;

/// Builder for a [`HistoryManager`] with a fluent API.
pub struct HistoryBuilder<T> {
    baseline: Option<T>,
    capacity: Option<usize>,
}

impl<T> HistoryBuilder<T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            baseline: None,
            capacity: None,
        }
    }

    /// Set the value undo returns once every snapshot is undone (required).
    pub fn baseline(mut self, value: T) -> Self {
        self.baseline = Some(value);
        self
    }

    /// Keep at most `n` snapshots, evicting the oldest beyond that.
    pub fn capacity(mut self, n: usize) -> Self {
        self.capacity = Some(n);
        self
    }

    /// Build the history.
    /// Returns an error if required fields are missing or the capacity is zero.
    pub fn build(self) -> Result<HistoryManager<T>, BuildError> {
        let baseline = self.baseline.ok_or(BuildError::MissingBaseline)?;

        match self.capacity {
            Some(0) => Err(BuildError::ZeroCapacity),
            Some(capacity) => Ok(HistoryManager::bounded(baseline, capacity)),
            None => Ok(HistoryManager::new(baseline)),
        }
    }
}

impl<T> Default for HistoryBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
