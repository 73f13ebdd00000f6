//! Vending Session
//!
//! This example drives the vending machine through a purchase and then
//! rolls the machine back with snapshot history.
//!
//! Key concepts:
//! - Every event returns a diagnostic instead of failing
//! - The caller decides which mutations to commit
//! - Undo hands back a snapshot that the caller restores
//!
//! Run with: cargo run --example vending_session

use rewind::machine::VendingMachine;
use rewind::memento::{HistoryError, HistoryManager, Originator};

fn main() -> Result<(), HistoryError> {
    println!("=== Vending Session Example ===\n");

    let mut machine = VendingMachine::new();
    let mut history = HistoryManager::new(machine.snapshot());

    let outcome = machine.dispense_product();
    println!("Dispense on empty machine: {}", outcome.diagnostic);

    machine.insert_money(30);
    history.commit_from(&machine)?;
    println!("Inserted 30, balance {}", machine.balance());

    let outcome = machine.dispense_product();
    println!("Dispense at 30: {}", outcome.diagnostic);

    machine.insert_money(20);
    history.commit_from(&machine)?;
    println!("Inserted 20, balance {}", machine.balance());

    let outcome = machine.dispense_product();
    println!(
        "Dispense at 50: {} (state {}, balance {})",
        outcome.diagnostic,
        outcome.state,
        machine.balance()
    );

    match history.undo_into(&mut machine) {
        Ok(snapshot) => println!(
            "Undo to snapshot #{}: state {}, balance {}",
            snapshot.sequence(),
            machine.state(),
            machine.balance()
        ),
        Err(e) => println!("Undo failed: {}", e),
    }

    let outcome = machine.eject_money();
    println!("Ejected {} cents", outcome.ejected);

    println!("\nState path:");
    for transition in machine.log().transitions() {
        println!("  {} -> {} ({})", transition.from, transition.to, transition.trigger);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
