//! Vending machine state machine.
//!
//! - `VendingState` and `Diagnostic`: the closed state set and outcome codes
//! - `Event`: customer actions
//! - `transition`: the pure (state, balance, event) function
//! - `VendingMachine`: applies events and keeps the transition log

mod error;
mod event;
mod state;
mod transition;
mod vending;

pub use error::MementoError;
pub use event::{Event, DEFAULT_PRICE};
pub use state::{Diagnostic, VendingState};
pub use transition::{transition, Transition};
pub use vending::{MachineMemento, Outcome, VendingMachine};
