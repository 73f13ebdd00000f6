//! Machine error types.

use super::state::VendingState;
use thiserror::Error;

/// Reasons a captured machine image cannot describe a real machine.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MementoError {
    #[error("machine in {state} cannot hold a balance of {balance}")]
    CreditWithoutMoney { state: VendingState, balance: u64 },
}
