//! Error types for the action execution pipeline.

use crate::action::{
    ActionTransition, EnemyTurnAction, StartBattleAction, SubmitAnswerAction, UseItemAction,
    UseSkillAction,
};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("submit answer action failed: {0}")]
    SubmitAnswer(TransitionPhaseError<<SubmitAnswerAction as ActionTransition>::Error>),

    #[error("start battle action failed: {0}")]
    StartBattle(TransitionPhaseError<<StartBattleAction as ActionTransition>::Error>),

    #[error("use skill action failed: {0}")]
    UseSkill(TransitionPhaseError<<UseSkillAction as ActionTransition>::Error>),

    #[error("use item action failed: {0}")]
    UseItem(TransitionPhaseError<<UseItemAction as ActionTransition>::Error>),

    #[error("enemy turn action failed: {0}")]
    EnemyTurn(TransitionPhaseError<<EnemyTurnAction as ActionTransition>::Error>),
}

impl ExecuteError {
    /// Pipeline stage that rejected the action.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::SubmitAnswer(e) => e.phase,
            ExecuteError::StartBattle(e)
            | ExecuteError::UseSkill(e)
            | ExecuteError::UseItem(e)
            | ExecuteError::EnemyTurn(e) => e.phase,
        }
    }

    /// Underlying error as a [`GameError`] trait object.
    pub fn source_error(&self) -> &dyn GameError {
        match self {
            ExecuteError::SubmitAnswer(e) => &e.error,
            ExecuteError::StartBattle(e)
            | ExecuteError::UseSkill(e)
            | ExecuteError::UseItem(e)
            | ExecuteError::EnemyTurn(e) => &e.error,
        }
    }

    /// True when the action was rejected for an enemy turn that no longer
    /// belongs to the current encounter.
    pub fn is_stale_enemy_turn(&self) -> bool {
        matches!(
            self,
            ExecuteError::EnemyTurn(TransitionPhaseError {
                error: crate::action::BattleError::StaleEncounter { .. },
                ..
            })
        )
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.source_error().severity()
    }

    fn error_code(&self) -> &'static str {
        self.source_error().error_code()
    }
}
