//! Core State trait for machine states.
//!
//! Every state enum driven by this crate implements [`State`], which exposes
//! pure inspection methods used by the transition log and by diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are small, closed enums. All methods are pure.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition records and snapshots
/// - `PartialEq`: the log only records actual changes of state
/// - `Debug`: states are printed in diagnostics and logs
/// - `Serialize` + `Deserialize`: states travel inside checkpoints
///
/// # Example
///
/// ```rust
/// use rewind::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Turnstile {
///     Locked,
///     Unlocked,
///     Broken,
/// }
///
/// impl State for Turnstile {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked => "Unlocked",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
///
/// assert_eq!(Turnstile::Locked.name(), "Locked");
/// assert!(!Turnstile::Unlocked.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and transition records.
    fn name(&self) -> &str;

    /// Whether the machine stops accepting events in this state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this state represents a failure condition.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Turnstile {
        Locked,
        Unlocked,
        Broken,
    }

    impl State for Turnstile {
        fn name(&self) -> &str {
            match self {
                Self::Locked => "Locked",
                Self::Unlocked => "Unlocked",
                Self::Broken => "Broken",
            }
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[test]
    fn name_matches_variant() {
        assert_eq!(Turnstile::Locked.name(), "Locked");
        assert_eq!(Turnstile::Unlocked.name(), "Unlocked");
        assert_eq!(Turnstile::Broken.name(), "Broken");
    }

    #[test]
    fn default_is_final_is_false() {
        assert!(!Turnstile::Locked.is_final());
        assert!(!Turnstile::Broken.is_final());
    }

    #[test]
    fn error_override_is_respected() {
        assert!(!Turnstile::Locked.is_error());
        assert!(Turnstile::Broken.is_error());
    }

    #[test]
    fn state_survives_json() {
        let json = serde_json::to_string(&Turnstile::Unlocked).unwrap();
        let back: Turnstile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Turnstile::Unlocked);
    }
}
