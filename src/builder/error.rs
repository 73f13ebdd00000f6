//! Build errors for machine and history builders.

use thiserror::Error;

/// Errors that can occur when building a machine or a history.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Default price must be positive. Call .default_price(cents) with cents > 0")]
    ZeroPrice,

    #[error("History baseline not specified. Call .baseline(value) before .build()")]
    MissingBaseline,

    #[error("History capacity must be at least 1")]
    ZeroCapacity,
}
