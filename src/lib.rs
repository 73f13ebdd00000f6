//! Rewind: a deterministic state machine with reversible history
//!
//! Rewind pairs a small, total state machine (a coin-operated vending
//! machine) with a snapshot-based undo/redo manager. Transitions are pure
//! functions over closed enums; history is a linear sequence of immutable
//! snapshots with a cursor.
//!
//! # Core Concepts
//!
//! - **Machine**: `VendingMachine` applies events and reports a `Diagnostic`
//! - **Originator**: anything that can snapshot and restore itself
//! - **History**: `HistoryManager` commits, undoes and redoes snapshots
//! - **Checkpoint**: a validated, serializable image of a history
//!
//! The machine never commits on its own. The caller decides which
//! mutations are worth keeping.
//!
//! # Example
//!
//! ```rust
//! use rewind::machine::{Diagnostic, VendingMachine};
//! use rewind::memento::{HistoryManager, Originator};
//!
//! let mut machine = VendingMachine::new();
//! let mut history = HistoryManager::new(machine.snapshot());
//!
//! machine.insert_money(30);
//! history.commit_from(&machine).unwrap();
//! machine.insert_money(20);
//! history.commit_from(&machine).unwrap();
//!
//! assert_eq!(machine.dispense_product().diagnostic, Diagnostic::Dispensed);
//!
//! // Take the purchase back: restore the last committed snapshot.
//! machine.restore(history.current().state());
//! assert_eq!(machine.balance(), 50);
//!
//! history.undo_into(&mut machine).unwrap();
//! assert_eq!(machine.balance(), 30);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod machine;
pub mod memento;

// Re-export commonly used types
pub use builder::{BuildError, HistoryBuilder, VendingMachineBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use self::core::{State, StateTransition, TransitionLog};
pub use machine::{Diagnostic, Event, Outcome, VendingMachine, VendingState};
pub use memento::{Editor, HistoryError, HistoryManager, Originator, Snapshot};
