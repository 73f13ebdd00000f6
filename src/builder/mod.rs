//! Builder API for configuring machines and histories.
//!
//! Both builders validate their settings up front and report mistakes as
//! [`BuildError`], so a built value never carries an impossible
//! configuration (a free product, a history that can hold nothing).

pub mod error;
pub mod history;
pub mod machine;

pub use error::BuildError;
pub use history::HistoryBuilder;
pub use machine::VendingMachineBuilder;
