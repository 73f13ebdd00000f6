//! The vending machine: current state, balance and their transition log.

use super::error::MementoError;
use super::event::{Event, DEFAULT_PRICE};
use super::state::{Diagnostic, VendingState};
use super::transition::transition;
use crate::builder::VendingMachineBuilder;
use crate::core::{State, StateTransition, TransitionLog};
use crate::memento::Originator;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use tracing::{debug, warn};

/// What the caller gets back from every event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// State after the event.
    pub state: VendingState,
    pub diagnostic: Diagnostic,
    /// Credit handed back. Only non-zero for a successful eject.
    pub ejected: u64,
}

/// Captured machine fields. State and balance travel together so a
/// restore can never pair `NoMoney` with leftover credit.
///
/// Decoding goes through [`MachineMemento::new`], so a checkpoint carrying
/// a `NoMoney` image with a balance fails to deserialize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MementoFields")]
pub struct MachineMemento {
    state: VendingState,
    balance: u64,
}

#[derive(Deserialize)]
struct MementoFields {
    state: VendingState,
    balance: u64,
}

impl TryFrom<MementoFields> for MachineMemento {
    type Error = MementoError;

    fn try_from(fields: MementoFields) -> Result<Self, Self::Error> {
        Self::new(fields.state, fields.balance)
    }
}

impl MachineMemento {
    /// Pair `state` with `balance`, refusing `NoMoney` with credit.
    pub fn new(state: VendingState, balance: u64) -> Result<Self, MementoError> {
        if state == VendingState::NoMoney && balance > 0 {
            return Err(MementoError::CreditWithoutMoney { state, balance });
        }
        Ok(Self { state, balance })
    }

    pub fn state(&self) -> VendingState {
        self.state
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }
}

/// Coin-operated vending machine.
///
/// Owns its balance exclusively. Snapshot history is not managed here;
/// callers commit through [`Originator::snapshot`] after the events they
/// care about.
///
/// # Example
///
/// ```rust
/// use rewind::machine::{Diagnostic, VendingMachine, VendingState};
///
/// let mut machine = VendingMachine::new();
/// machine.insert_money(30);
/// assert_eq!(machine.dispense_product().diagnostic, Diagnostic::InsufficientFunds);
///
/// machine.insert_money(20);
/// let outcome = machine.dispense_product();
/// assert_eq!(outcome.diagnostic, Diagnostic::Dispensed);
/// assert_eq!(outcome.state, VendingState::NoMoney);
/// assert_eq!(machine.balance(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct VendingMachine {
    state: VendingState,
    balance: u64,
    default_price: NonZeroU64,
    log: TransitionLog<VendingState>,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl VendingMachine {
    /// Empty machine in `NoMoney`, charging the default price.
    pub fn new() -> Self {
        Self::with_config(0, DEFAULT_PRICE, None)
    }

    pub fn builder() -> VendingMachineBuilder {
        VendingMachineBuilder::new()
    }

    /// A non-zero opening balance starts the machine in `HasMoney`.
    pub(crate) fn with_config(
        balance: u64,
        default_price: NonZeroU64,
        log_capacity: Option<usize>,
    ) -> Self {
        let state = if balance > 0 {
            VendingState::HasMoney
        } else {
            VendingState::NoMoney
        };
        Self {
            state,
            balance,
            default_price,
            log: log_capacity.map_or_else(TransitionLog::new, TransitionLog::bounded),
        }
    }

    pub fn insert_money(&mut self, amount: u64) -> Outcome {
        self.apply(Event::InsertMoney { amount })
    }

    pub fn eject_money(&mut self) -> Outcome {
        self.apply(Event::EjectMoney)
    }

    /// Dispense at the configured default price.
    pub fn dispense_product(&mut self) -> Outcome {
        self.dispense_product_at(self.default_price)
    }

    pub fn dispense_product_at(&mut self, price: NonZeroU64) -> Outcome {
        self.apply(Event::DispenseProduct { price })
    }

    /// Run `event` through the transition function and apply the result.
    pub fn apply(&mut self, event: Event) -> Outcome {
        let next = transition(self.state, self.balance, event);

        if next.saturated {
            warn!(balance = self.balance, "insertion overflowed, balance clamped");
        }
        debug!(
            event = event.name(),
            from = self.state.name(),
            to = next.state.name(),
            balance = next.balance,
            diagnostic = %next.diagnostic,
            "applied event"
        );

        self.enter(next.state, event.name());
        self.balance = next.balance;

        Outcome {
            state: next.state,
            diagnostic: next.diagnostic,
            ejected: next.ejected,
        }
    }

    fn enter(&mut self, to: VendingState, trigger: &'static str) {
        if to != self.state {
            self.log.record(StateTransition {
                from: self.state,
                to,
                trigger: trigger.into(),
                timestamp: Utc::now(),
            });
        }
        self.state = to;
    }

    pub fn state(&self) -> VendingState {
        self.state
    }

    /// Current credit in cents.
    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn default_price(&self) -> NonZeroU64 {
        self.default_price
    }

    /// Every state change so far, including ones caused by restores.
    pub fn log(&self) -> &TransitionLog<VendingState> {
        &self.log
    }
}

impl Originator for VendingMachine {
    type Memento = MachineMemento;

    fn snapshot(&self) -> MachineMemento {
        MachineMemento {
            state: self.state,
            balance: self.balance,
        }
    }

    fn restore(&mut self, memento: &MachineMemento) {
        debug!(
            state = memento.state().name(),
            balance = memento.balance(),
            "restoring machine"
        );
        self.enter(memento.state(), "restore");
        self.balance = memento.balance();
    }
}
