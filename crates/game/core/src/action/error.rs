//! Action validation errors.
//!
//! Every rejected action leaves the state untouched; these enums say why.

use crate::error::{ErrorSeverity, GameError};
use crate::personality::PersonalityType;
use crate::state::Phase;

// ============================================================================
// Quiz Errors
// ============================================================================

/// Errors raised while answering quiz questions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuizError {
    /// Answers are only accepted during the quiz.
    #[error("cannot answer during the {phase} phase")]
    WrongPhase { phase: Phase },

    /// Every question already has an answer.
    #[error("all {answered} questions have been answered")]
    QuizComplete { answered: usize },
}

impl GameError for QuizError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            QuizError::WrongPhase { .. } => ErrorSeverity::Validation,
            QuizError::QuizComplete { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            QuizError::WrongPhase { .. } => "QUIZ_WRONG_PHASE",
            QuizError::QuizComplete { .. } => "QUIZ_COMPLETE",
        }
    }
}

// ============================================================================
// Battle Errors
// ============================================================================

/// Errors raised by encounter actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    /// The action is not allowed in the current phase.
    #[error("action not allowed during the {phase} phase")]
    WrongPhase { phase: Phase },

    /// Phase says battle but no encounter is stored.
    #[error("no active encounter")]
    NoBattle,

    #[error("not the player's turn")]
    NotPlayerTurn,

    #[error("not the enemy's turn")]
    NotEnemyTurn,

    /// Enemy action scheduled for an encounter that has since ended or been reset.
    #[error("enemy action for encounter {scheduled} is stale (current encounter {current})")]
    StaleEncounter { scheduled: u64, current: u64 },

    #[error("class has no skill at index {index}")]
    UnknownSkill { index: usize },

    #[error("not enough MP: {required} required, {available} available")]
    InsufficientMp { required: u32, available: u32 },

    #[error("skill '{skill}' is on cooldown for {remaining} more turn(s)")]
    OnCooldown { skill: String, remaining: u32 },

    #[error("unknown item '{item}'")]
    UnknownItem { item: String },

    #[error("no '{item}' left in the inventory")]
    OutOfStock { item: String },

    /// Starting a battle requires a resolved personality.
    #[error("personality has not been resolved yet")]
    PersonalityUnresolved,

    /// Class table has no entry for the resolved type, fallback included.
    #[error("no class defined for {personality}")]
    ClassNotFound { personality: PersonalityType },

    #[error("enemy roster is empty")]
    EmptyRoster,

    /// HP or MP left its `[0, max]` range after an action.
    #[error("player resources out of bounds: hp {hp}/{max_hp}, mp {mp}/{max_mp}")]
    ResourcesOutOfBounds {
        hp: u32,
        max_hp: u32,
        mp: u32,
        max_mp: u32,
    },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        use BattleError::*;
        match self {
            WrongPhase { .. } | NotPlayerTurn | NotEnemyTurn => ErrorSeverity::Validation,
            StaleEncounter { .. } => ErrorSeverity::Validation,
            UnknownSkill { .. } | UnknownItem { .. } => ErrorSeverity::Validation,
            InsufficientMp { .. } | OnCooldown { .. } | OutOfStock { .. } => {
                ErrorSeverity::Recoverable
            }
            PersonalityUnresolved => ErrorSeverity::Validation,
            NoBattle | ResourcesOutOfBounds { .. } => ErrorSeverity::Internal,
            ClassNotFound { .. } | EmptyRoster => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use BattleError::*;
        match self {
            WrongPhase { .. } => "BATTLE_WRONG_PHASE",
            NoBattle => "BATTLE_NO_BATTLE",
            NotPlayerTurn => "BATTLE_NOT_PLAYER_TURN",
            NotEnemyTurn => "BATTLE_NOT_ENEMY_TURN",
            StaleEncounter { .. } => "BATTLE_STALE_ENCOUNTER",
            UnknownSkill { .. } => "BATTLE_UNKNOWN_SKILL",
            InsufficientMp { .. } => "BATTLE_INSUFFICIENT_MP",
            OnCooldown { .. } => "BATTLE_ON_COOLDOWN",
            UnknownItem { .. } => "BATTLE_UNKNOWN_ITEM",
            OutOfStock { .. } => "BATTLE_OUT_OF_STOCK",
            PersonalityUnresolved => "BATTLE_PERSONALITY_UNRESOLVED",
            ClassNotFound { .. } => "BATTLE_CLASS_NOT_FOUND",
            EmptyRoster => "BATTLE_EMPTY_ROSTER",
            ResourcesOutOfBounds { .. } => "BATTLE_RESOURCES_OUT_OF_BOUNDS",
        }
    }
}
