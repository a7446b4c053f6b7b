//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, the catalog service, favorites
//! storage and the round reducer so clients can bubble them up with
//! consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use arena_core::{CharacterId, ErrorSeverity, GameError, TransitionError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("round worker command channel closed")]
    CommandChannelClosed,

    #[error("round worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("round worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("pool for round {round} arrived after round {current} started")]
    StaleRound { round: u64, current: u64 },

    #[error("character {0} is neither listed nor a favorite")]
    UnknownCharacter(CharacterId),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Transition(err) => err.severity(),
            Self::Fetch(_) | Self::StaleRound { .. } => ErrorSeverity::Recoverable,
            Self::UnknownCharacter(_) => ErrorSeverity::Validation,
            Self::CommandChannelClosed
            | Self::ReplyChannelClosed(_)
            | Self::WorkerJoin(_)
            | Self::Repository(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
            Self::ReplyChannelClosed(_) => "RUNTIME_REPLY_CHANNEL_CLOSED",
            Self::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
            Self::StaleRound { .. } => "RUNTIME_STALE_ROUND",
            Self::UnknownCharacter(_) => "RUNTIME_UNKNOWN_CHARACTER",
            Self::Transition(err) => err.error_code(),
            Self::Fetch(_) => "CATALOG_FETCH_FAILED",
            Self::Repository(_) => "FAVORITES_STORAGE_FAILED",
        }
    }
}

/// Failures talking to the character catalog service.
///
/// Every variant is non-fatal: callers clear the visible list and let the
/// user retry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("catalog request failed: {0}")]
    Transport(String),

    #[error("catalog responded with status {status}")]
    Status { status: u16 },

    #[error("catalog response could not be decoded: {0}")]
    Decode(String),

    #[error("no characters found")]
    Empty,
}
