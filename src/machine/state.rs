//! Vending machine states and diagnostics.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two states of the coin mechanism.
///
/// The set is closed: every transition is an exhaustive `match` over
/// these variants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum VendingState {
    /// No credit is held. Initial state.
    #[default]
    NoMoney,
    /// Some credit has been inserted. The balance may still be zero if a
    /// zero amount was inserted.
    HasMoney,
}

impl State for VendingState {
    fn name(&self) -> &str {
        match self {
            Self::NoMoney => "NoMoney",
            Self::HasMoney => "HasMoney",
        }
    }
}

impl fmt::Display for VendingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-fatal outcome of applying an event.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Diagnostic {
    /// The event was applied.
    Ok,
    /// A product was dispensed and its price deducted.
    Dispensed,
    /// Eject was requested while no credit was held.
    NothingToEject,
    /// Dispense was requested without enough credit.
    InsufficientFunds,
}

impl Diagnostic {
    /// Whether the event was rejected by machine policy.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::NothingToEject | Self::InsufficientFunds)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Dispensed => write!(f, "dispensing product"),
            Self::NothingToEject => write!(f, "no money to eject"),
            Self::InsufficientFunds => write!(f, "not enough money to dispense product"),
        }
    }
}
