//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, content loading and rejected
//! actions so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use spirit_core::{ExecuteError, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("action rejected: {0}")]
    ActionRejected(#[source] ExecuteError),

    #[error("failed to load content: {0:#}")]
    Content(anyhow::Error),
}

impl RuntimeError {
    /// The engine error behind a rejected action, if that is what this is.
    pub fn execute_error(&self) -> Option<&ExecuteError> {
        match self {
            RuntimeError::ActionRejected(error) => Some(error),
            _ => None,
        }
    }

    /// Stable code for rejected actions, e.g. `BATTLE_INSUFFICIENT_MP`.
    pub fn error_code(&self) -> Option<&'static str> {
        self.execute_error().map(GameError::error_code)
    }
}
