//! Events accepted by the vending machine.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;

/// Default product price in cents.
pub const DEFAULT_PRICE: NonZeroU64 = match NonZeroU64::new(50) {
    Some(price) => price,
    None => unreachable!(),
};

/// Something the customer does to the machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    /// Coins inserted, in cents.
    InsertMoney { amount: u64 },
    /// Coin-return lever pulled.
    EjectMoney,
    /// Product button pressed for an item costing `price` cents.
    DispenseProduct { price: NonZeroU64 },
}

impl Event {
    /// Stable name used as the trigger in the transition log.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertMoney { .. } => "InsertMoney",
            Self::EjectMoney => "EjectMoney",
            Self::DispenseProduct { .. } => "DispenseProduct",
        }
    }
}
