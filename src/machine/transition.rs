//! Pure transition function.
//!
//! Takes the current state, the current balance and an event, and returns
//! what the machine should look like afterwards. No side effects: applying
//! the result is the caller's job.

use super::event::Event;
use super::state::{Diagnostic, VendingState};

/// Result of a state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The new state.
    pub state: VendingState,
    /// The new balance.
    pub balance: u64,
    /// Outcome code for the caller.
    pub diagnostic: Diagnostic,
    /// Credit returned to the customer. Zero unless an eject succeeded.
    pub ejected: u64,
    /// Whether insertion hit `u64::MAX` and was clamped.
    pub saturated: bool,
}

impl Transition {
    fn new(state: VendingState, balance: u64, diagnostic: Diagnostic) -> Self {
        Self {
            state,
            balance,
            diagnostic,
            ejected: 0,
            saturated: false,
        }
    }
}

/// Compute the effect of `event` on (`state`, `balance`).
///
/// Defined for every (state, event) pair; events are never refused, only
/// their effect differs.
pub fn transition(state: VendingState, balance: u64, event: Event) -> Transition {
    match (state, event) {
        (_, Event::InsertMoney { amount }) => {
            let sum = balance.checked_add(amount);
            Transition {
                saturated: sum.is_none(),
                ..Transition::new(
                    VendingState::HasMoney,
                    sum.unwrap_or(u64::MAX),
                    Diagnostic::Ok,
                )
            }
        }

        (VendingState::NoMoney, Event::EjectMoney) => {
            Transition::new(state, balance, Diagnostic::NothingToEject)
        }

        (VendingState::HasMoney, Event::EjectMoney) => Transition {
            ejected: balance,
            ..Transition::new(VendingState::NoMoney, 0, Diagnostic::Ok)
        },

        (VendingState::NoMoney, Event::DispenseProduct { .. }) => {
            Transition::new(state, balance, Diagnostic::InsufficientFunds)
        }

        (VendingState::HasMoney, Event::DispenseProduct { price }) => {
            match balance.checked_sub(price.get()) {
                Some(0) => Transition::new(VendingState::NoMoney, 0, Diagnostic::Dispensed),
                Some(rest) => Transition::new(VendingState::HasMoney, rest, Diagnostic::Dispensed),
                None => Transition::new(state, balance, Diagnostic::InsufficientFunds),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::event::DEFAULT_PRICE;
    use std::num::NonZeroU64;

    fn price(cents: u64) -> NonZeroU64 {
        NonZeroU64::new(cents).unwrap()
    }

    #[test]
    fn insert_from_no_money_enters_has_money() {
        let next = transition(VendingState::NoMoney, 0, Event::InsertMoney { amount: 30 });
        assert_eq!(next.state, VendingState::HasMoney);
        assert_eq!(next.balance, 30);
        assert_eq!(next.diagnostic, Diagnostic::Ok);
    }

    #[test]
    fn insert_zero_still_enters_has_money() {
        let next = transition(VendingState::NoMoney, 0, Event::InsertMoney { amount: 0 });
        assert_eq!(next.state, VendingState::HasMoney);
        assert_eq!(next.balance, 0);
    }

    #[test]
    fn insert_accumulates_in_has_money() {
        let next = transition(VendingState::HasMoney, 30, Event::InsertMoney { amount: 20 });
        assert_eq!(next.state, VendingState::HasMoney);
        assert_eq!(next.balance, 50);
    }

    #[test]
    fn insert_saturates_at_max() {
        let next = transition(
            VendingState::HasMoney,
            u64::MAX - 1,
            Event::InsertMoney { amount: 10 },
        );
        assert_eq!(next.balance, u64::MAX);
        assert!(next.saturated);
    }

    #[test]
    fn eject_without_money_is_rejected() {
        let next = transition(VendingState::NoMoney, 0, Event::EjectMoney);
        assert_eq!(next.state, VendingState::NoMoney);
        assert_eq!(next.diagnostic, Diagnostic::NothingToEject);
        assert_eq!(next.ejected, 0);
    }

    #[test]
    fn eject_returns_whole_balance() {
        let next = transition(VendingState::HasMoney, 70, Event::EjectMoney);
        assert_eq!(next.state, VendingState::NoMoney);
        assert_eq!(next.balance, 0);
        assert_eq!(next.ejected, 70);
        assert_eq!(next.diagnostic, Diagnostic::Ok);
    }

    #[test]
    fn dispense_without_money_is_rejected() {
        let next = transition(
            VendingState::NoMoney,
            0,
            Event::DispenseProduct {
                price: DEFAULT_PRICE,
            },
        );
        assert_eq!(next.state, VendingState::NoMoney);
        assert_eq!(next.diagnostic, Diagnostic::InsufficientFunds);
    }

    #[test]
    fn dispense_short_of_price_keeps_balance() {
        let next = transition(
            VendingState::HasMoney,
            30,
            Event::DispenseProduct { price: price(50) },
        );
        assert_eq!(next.state, VendingState::HasMoney);
        assert_eq!(next.balance, 30);
        assert_eq!(next.diagnostic, Diagnostic::InsufficientFunds);
    }

    #[test]
    fn dispense_exact_price_returns_to_no_money() {
        let next = transition(
            VendingState::HasMoney,
            50,
            Event::DispenseProduct { price: price(50) },
        );
        assert_eq!(next.state, VendingState::NoMoney);
        assert_eq!(next.balance, 0);
        assert_eq!(next.diagnostic, Diagnostic::Dispensed);
    }

    #[test]
    fn dispense_with_change_stays_in_has_money() {
        let next = transition(
            VendingState::HasMoney,
            80,
            Event::DispenseProduct { price: price(50) },
        );
        assert_eq!(next.state, VendingState::HasMoney);
        assert_eq!(next.balance, 30);
        assert_eq!(next.diagnostic, Diagnostic::Dispensed);
    }

    #[test]
    fn transition_is_deterministic() {
        let event = Event::DispenseProduct { price: price(25) };
        let a = transition(VendingState::HasMoney, 60, event);
        let b = transition(VendingState::HasMoney, 60, event);
        assert_eq!(a, b);
    }
}
