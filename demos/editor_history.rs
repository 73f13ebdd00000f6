//! Editor History
//!
//! This example records text edits, walks back and forth through them, and
//! checkpoints the history as JSON.
//!
//! Run with: cargo run --example editor_history

use rewind::checkpoint::Checkpoint;
use rewind::memento::{Editor, HistoryError, HistoryManager, Originator};

fn main() -> Result<(), HistoryError> {
    println!("=== Editor History Example ===\n");

    let mut editor = Editor::new("Initial content");
    let mut history = HistoryManager::new(editor.snapshot());

    for text in ["First edit", "Second edit", "Third edit"] {
        editor.set_content(text);
        history.commit_from(&editor)?;
    }

    if history.undo_into(&mut editor).is_ok() {
        println!("After undo: {}", editor.content());
    }
    if history.redo_into(&mut editor).is_ok() {
        println!("After redo: {}", editor.content());
    }

    match Checkpoint::capture(&history).to_json() {
        Ok(json) => println!("\nCheckpoint ({} bytes):\n{}", json.len(), json),
        Err(e) => println!("Checkpoint failed: {}", e),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
