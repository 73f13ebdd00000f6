//! Snapshot-based undo/redo.
//!
//! An [`Originator`] hands out mementos of its own state. The caller decides
//! when a mutation is worth keeping and commits the memento to a
//! [`HistoryManager`], which stamps it with a sequence number. Undo and redo
//! return snapshots for the caller to restore; the manager never touches the
//! originator on its own.
//!
//! # Example
//!
//! ```rust
//! use rewind::memento::{Editor, HistoryManager, Originator};
//!
//! let mut editor = Editor::new("Initial content");
//! let mut history = HistoryManager::new(editor.snapshot());
//!
//! for text in ["First edit", "Second edit", "Third edit"] {
//!     editor.set_content(text);
//!     history.commit_from(&editor).unwrap();
//! }
//!
//! history.undo_into(&mut editor).unwrap();
//! assert_eq!(editor.content(), "Second edit");
//!
//! history.redo_into(&mut editor).unwrap();
//! assert_eq!(editor.content(), "Third edit");
//! ```

mod editor;
mod error;
mod manager;
mod originator;
mod snapshot;

pub use editor::Editor;
pub use error::HistoryError;
pub use manager::HistoryManager;
pub use originator::Originator;
pub use snapshot::{Snapshot, BASELINE_SEQUENCE};
