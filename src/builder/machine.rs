//! Builder for configuring vending machines.

use crate::builder::error::BuildError;
use crate::machine::{VendingMachine, DEFAULT_PRICE};
use std::num::NonZeroU64;

/// Builder for a [`VendingMachine`] with a fluent API.
#[derive(Clone, Debug)]
pub struct VendingMachineBuilder {
    default_price: u64,
    initial_balance: u64,
    log_capacity: Option<usize>,
}

impl VendingMachineBuilder {
    /// Create a builder with the stock price and an empty coin box.
    pub fn new() -> Self {
        Self {
            default_price: DEFAULT_PRICE.get(),
            initial_balance: 0,
            log_capacity: None,
        }
    }

    /// Price charged by `dispense_product()`, in cents.
    pub fn default_price(mut self, cents: u64) -> Self {
        self.default_price = cents;
        self
    }

    /// Credit already in the machine. Non-zero starts in `HasMoney`.
    pub fn initial_balance(mut self, cents: u64) -> Self {
        self.initial_balance = cents;
        self
    }

    /// Keep only the newest `records` state changes in the transition log.
    pub fn log_capacity(mut self, records: usize) -> Self {
        self.log_capacity = Some(records);
        self
    }

    /// Build the machine.
    /// Returns an error if the default price or the log capacity is zero.
    pub fn build(self) -> Result<VendingMachine, BuildError> {
        let price = NonZeroU64::new(self.default_price).ok_or(BuildError::ZeroPrice)?;
        if self.log_capacity == Some(0) {
            return Err(BuildError::ZeroCapacity);
        }
        Ok(VendingMachine::with_config(
            self.initial_balance,
            price,
            self.log_capacity,
        ))
    }
}

impl Default for VendingMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
