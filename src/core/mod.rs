//! Core types shared by every machine in the crate.
//!
//! - State definitions via the `State` trait
//! - An append-only `TransitionLog` of state changes

mod log;
mod state;

pub use log::{StateTransition, TransitionLog};
pub use state::State;
