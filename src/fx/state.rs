//! Engine lifecycle

use std::fmt;

use crate::core::FxError;

/// Lifecycle of an [`Fx`](super::Fx). Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FxState {
    #[default]
    Created,
    Initialized,
    Bootstrapping,
    Bootstrapped,
}

impl FxState {
    /// Move to `next`, failing if the edge is not part of the lifecycle
    pub fn transition(self, next: FxState) -> Result<FxState, FxError> {
        use FxState::*;

        match (self, next) {
            (Created, Initialized)
            | (Initialized, Bootstrapping)
            | (Initialized, Bootstrapped)
            | (Bootstrapping, Bootstrapped) => Ok(next),
            _ => Err(FxError::InvalidStateTransition {
                from: self,
                to: next,
            }),
        }
    }

    pub fn is_initialized(&self) -> bool {
        *self != FxState::Created
    }

    /// Signatures are only checked cryptographically once bootstrapped.
    /// Earlier, the engine is replaying history that was authorized when it
    /// was first accepted.
    pub fn verifies_signatures(&self) -> bool {
        *self == FxState::Bootstrapped
    }
}

impl fmt::Display for FxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FxState::Created => "created",
            FxState::Initialized => "initialized",
            FxState::Bootstrapping => "bootstrapping",
            FxState::Bootstrapped => "bootstrapped",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::FxState::*;
    use super::*;

    const ALL: [FxState; 4] = [Created, Initialized, Bootstrapping, Bootstrapped];

    #[test]
    fn test_legal_transitions() {
        assert_eq!(Created.transition(Initialized).unwrap(), Initialized);
        assert_eq!(Initialized.transition(Bootstrapping).unwrap(), Bootstrapping);
        assert_eq!(Initialized.transition(Bootstrapped).unwrap(), Bootstrapped);
        assert_eq!(Bootstrapping.transition(Bootstrapped).unwrap(), Bootstrapped);
    }

    #[test]
    fn test_no_regression_or_self_loops() {
        for from in ALL {
            for to in ALL {
                if to <= from {
                    assert!(
                        from.transition(to).is_err(),
                        "{} -> {} should be rejected",
                        from,
                        to
                    );
                }
            }
        }
        assert!(Created.transition(Bootstrapping).is_err());
        assert!(Created.transition(Bootstrapped).is_err());
    }

    #[test]
    fn test_only_bootstrapped_verifies_signatures() {
        assert!(!Created.verifies_signatures());
        assert!(!Initialized.verifies_signatures());
        assert!(!Bootstrapping.verifies_signatures());
        assert!(Bootstrapped.verifies_signatures());
        assert!(!Created.is_initialized());
        assert!(Bootstrapping.is_initialized());
    }
}
