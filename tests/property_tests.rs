//! Property-based tests for the machine and the history.
//!
//! These tests use proptest to check invariants across many randomly
//! generated event and history operation sequences.

use proptest::prelude::*;
use rewind::machine::{Diagnostic, Event, MachineMemento, VendingMachine, VendingState};
use rewind::memento::{HistoryError, HistoryManager, Originator, Snapshot};
use rewind::Checkpoint;
use std::num::NonZeroU64;

#[derive(Clone, Debug)]
enum HistoryOp {
    Commit(u32),
    Undo,
    Redo,
}

prop_compose! {
    fn arbitrary_price()(cents in 1..120u64) -> NonZeroU64 {
        NonZeroU64::new(cents).unwrap_or(NonZeroU64::MIN)
    }
}

fn arbitrary_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (0..200u64).prop_map(|amount| Event::InsertMoney { amount }),
        Just(Event::EjectMoney),
        arbitrary_price().prop_map(|price| Event::DispenseProduct { price }),
    ]
}

fn arbitrary_op() -> impl Strategy<Value = HistoryOp> {
    prop_oneof![
        any::<u32>().prop_map(HistoryOp::Commit),
        Just(HistoryOp::Undo),
        Just(HistoryOp::Redo),
    ]
}

fn boundary_sequence() -> impl Strategy<Value = u64> {
    prop_oneof![
        Just(0),
        Just(1),
        Just(u64::MAX - 1),
        Just(u64::MAX),
        any::<u64>(),
    ]
}

fn baseline_at(sequence: u64) -> Snapshot<u32> {
    serde_json::from_str(&format!(r#"{{"sequence":{sequence},"state":0}}"#)).unwrap()
}

fn run(history: &mut HistoryManager<u32>, op: &HistoryOp) -> Result<(), HistoryError> {
    match op {
        HistoryOp::Commit(value) => history.commit(*value).map(|_| ()),
        HistoryOp::Undo => history.undo().map(|_| ()),
        HistoryOp::Redo => history.redo().map(|_| ()),
    }
}

proptest! {
    #[test]
    fn money_is_conserved(events in prop::collection::vec(arbitrary_event(), 0..50)) {
        let mut machine = VendingMachine::new();
        let mut inserted: u64 = 0;
        let mut ejected: u64 = 0;
        let mut spent: u64 = 0;

        for event in events {
            let before = machine.balance();
            let outcome = machine.apply(event);
            match event {
                Event::InsertMoney { amount } => inserted += amount,
                Event::DispenseProduct { price } if outcome.diagnostic == Diagnostic::Dispensed => {
                    prop_assert!(before >= price.get());
                    spent += price.get();
                }
                _ => {}
            }
            ejected += outcome.ejected;
        }

        prop_assert_eq!(inserted, machine.balance() + ejected + spent);
    }

    #[test]
    fn no_money_state_holds_no_credit(events in prop::collection::vec(arbitrary_event(), 0..50)) {
        let mut machine = VendingMachine::new();

        for event in events {
            let outcome = machine.apply(event);
            prop_assert_eq!(outcome.state, machine.state());
            if machine.state() == VendingState::NoMoney {
                prop_assert_eq!(machine.balance(), 0);
            }
        }
    }

    #[test]
    fn rejected_events_change_nothing(events in prop::collection::vec(arbitrary_event(), 0..50)) {
        let mut machine = VendingMachine::new();

        for event in events {
            let before = machine.snapshot();
            let outcome = machine.apply(event);
            if outcome.diagnostic.is_rejection() {
                prop_assert_eq!(machine.snapshot(), before);
            }
        }
    }

    #[test]
    fn cursor_stays_within_bounds(ops in prop::collection::vec(arbitrary_op(), 0..60)) {
        let mut history = HistoryManager::new(0u32);

        for op in &ops {
            let cursor = history.cursor();
            let len = history.len();
            if run(&mut history, op).is_err() {
                prop_assert_eq!(history.cursor(), cursor);
                prop_assert_eq!(history.len(), len);
            }
            prop_assert!(history.cursor() <= history.len());
        }
    }

    #[test]
    fn undo_then_redo_is_identity(ops in prop::collection::vec(arbitrary_op(), 0..60)) {
        let mut history = HistoryManager::new(0u32);
        for op in &ops {
            let _ = run(&mut history, op);
        }

        let before = history.current().clone();
        if history.undo().is_ok() {
            let redone = history.redo().map(Clone::clone);
            prop_assert_eq!(redone, Ok(before));
        }
    }

    #[test]
    fn commit_always_empties_redo(
        ops in prop::collection::vec(arbitrary_op(), 0..60),
        value in any::<u32>(),
    ) {
        let mut history = HistoryManager::new(0u32);
        for op in &ops {
            let _ = run(&mut history, op);
        }

        history.commit(value).unwrap();
        prop_assert!(!history.can_redo());
        prop_assert_eq!(history.current().state(), &value);
    }

    #[test]
    fn sequences_strictly_increase(ops in prop::collection::vec(arbitrary_op(), 0..60)) {
        let mut history = HistoryManager::new(0u32);
        for op in &ops {
            let _ = run(&mut history, op);
        }

        let mut previous = history.baseline().sequence();
        for snapshot in history.snapshots() {
            prop_assert!(snapshot.sequence() > previous);
            previous = snapshot.sequence();
        }
    }

    #[test]
    fn repeated_undo_at_start_is_idempotent(count in 1..10usize) {
        let mut history = HistoryManager::new(7u32);

        for _ in 0..count {
            prop_assert_eq!(history.undo().map(|s| *s.state()), Err(HistoryError::NothingToUndo));
            prop_assert_eq!(history.cursor(), 0);
            prop_assert_eq!(history.current().state(), &7);
        }
    }

    #[test]
    fn restored_counter_never_overflows(
        baseline in boundary_sequence(),
        next in boundary_sequence(),
        commits in 1..4usize,
    ) {
        let mut checkpoint = Checkpoint::capture(&HistoryManager::new(0u32));
        checkpoint.baseline = baseline_at(baseline);
        checkpoint.next_sequence = next;

        if let Ok(mut history) = checkpoint.restore() {
            prop_assert!(next > baseline);
            prop_assert!(next < u64::MAX);

            let room = u64::MAX - next;
            for i in 0..commits {
                let result = history.commit(i as u32).map(|s| s.sequence());
                if (i as u64) < room {
                    prop_assert_eq!(result, Ok(next + i as u64));
                } else {
                    prop_assert_eq!(result, Err(HistoryError::SequenceExhausted));
                }
            }
        } else {
            prop_assert!(next <= baseline || next == u64::MAX);
        }
    }

    #[test]
    fn machine_mementos_survive_checkpoints(
        events in prop::collection::vec(arbitrary_event(), 0..30),
    ) {
        let mut machine = VendingMachine::new();
        let mut history = HistoryManager::new(machine.snapshot());
        for event in events {
            machine.apply(event);
            history.commit_from(&machine).unwrap();
        }

        let json = Checkpoint::capture(&history).to_json().unwrap();
        let restored = Checkpoint::<MachineMemento>::from_json(&json).unwrap().restore().unwrap();

        for snapshot in restored.snapshots() {
            let memento = snapshot.state();
            if memento.state() == VendingState::NoMoney {
                prop_assert_eq!(memento.balance(), 0);
            }
        }
        prop_assert_eq!(restored.current(), history.current());
    }
}
