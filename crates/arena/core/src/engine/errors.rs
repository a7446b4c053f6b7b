//! Error types for round transitions.

use crate::error::{ErrorSeverity, GameError};
use crate::pool::PoolError;
use crate::state::GamePhase;
use crate::team::SelectionError;

/// Errors surfaced while applying a [`super::RoundAction`].
///
/// A failed transition never mutates the state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("{action} is not allowed during {actual} (expected {expected})")]
    WrongPhase {
        action: &'static str,
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("reset ignored while the battle is being shown")]
    ResetDuringBattle,

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("battle phase reached without a computed outcome")]
    MissingOutcome,
}

impl GameError for TransitionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::WrongPhase { .. } | Self::ResetDuringBattle => ErrorSeverity::Validation,
            Self::Selection(err) => err.severity(),
            Self::Pool(err) => err.severity(),
            Self::MissingOutcome => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WrongPhase { .. } => "TRANSITION_WRONG_PHASE",
            Self::ResetDuringBattle => "TRANSITION_RESET_DURING_BATTLE",
            Self::Selection(err) => err.error_code(),
            Self::Pool(err) => err.error_code(),
            Self::MissingOutcome => "TRANSITION_MISSING_OUTCOME",
        }
    }
}
