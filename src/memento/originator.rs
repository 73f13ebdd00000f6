//! The capture/restore contract between a mutable record and its history.

/// A type that can hand out immutable copies of its own state and later
/// overwrite itself from one.
///
/// Mementos are plain values. The history manager stores them but never
/// reaches into the originator's fields.
///
/// # Example
///
/// ```rust
/// use rewind::memento::Originator;
///
/// struct Counter(u32);
///
/// impl Originator for Counter {
///     type Memento = u32;
///
///     fn snapshot(&self) -> u32 {
///         self.0
///     }
///
///     fn restore(&mut self, memento: &u32) {
///         self.0 = *memento;
///     }
/// }
///
/// let mut counter = Counter(3);
/// let saved = counter.snapshot();
/// counter.0 = 10;
/// counter.restore(&saved);
/// assert_eq!(counter.0, 3);
/// ```
pub trait Originator {
    type Memento: Clone;

    /// Copy the relevant fields. Must not mutate `self`.
    fn snapshot(&self) -> Self::Memento;

    /// Overwrite the relevant fields from `memento`.
    fn restore(&mut self, memento: &Self::Memento);
}
