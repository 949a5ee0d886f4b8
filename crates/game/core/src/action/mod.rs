//! Player and scheduler actions.
//!
//! Each action is a small struct implementing [`ActionTransition`]. The
//! [`Action`] enum is what callers hand to the engine; the engine routes each
//! variant through the same three-phase pipeline.
//!
//! # Module Structure
//!
//! - `quiz`: answering questions
//! - `battle`: starting encounters, skills, items and the enemy counter-attack
//! - `reset`: returning to the quiz
//! - `error`: per-family validation errors

pub mod battle;
pub mod error;
pub mod quiz;
pub mod reset;

pub use battle::{EnemyTurnAction, StartBattleAction, UseItemAction, UseSkillAction};
pub use error::{BattleError, QuizError};
pub use quiz::SubmitAnswerAction;
pub use reset::ResetGameAction;

pub use crate::env::OptionChoice;

use crate::env::{GameEnv, RngOracle, Tier};
use crate::personality::{Letter, PersonalityType};
use crate::state::GameState;

/// Defines how a concrete action mutates game state.
///
/// Hooks receive read-only content through [`GameEnv`]. Only `apply` may draw
/// from the random source, and it should assume `pre_validate` already passed.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        rng: &mut dyn RngOracle,
    ) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level action enum accepted by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    SubmitAnswer(SubmitAnswerAction),
    StartBattle(StartBattleAction),
    UseSkill(UseSkillAction),
    UseItem(UseItemAction),
    /// Issued by the scheduler after the enemy turn delay, never by the player.
    EnemyTurn(EnemyTurnAction),
    ResetGame(ResetGameAction),
}

impl Action {
    pub fn submit_answer(choice: OptionChoice) -> Self {
        Self::SubmitAnswer(SubmitAnswerAction::new(choice))
    }

    pub fn start_battle() -> Self {
        Self::StartBattle(StartBattleAction)
    }

    pub fn use_skill(skill: usize) -> Self {
        Self::UseSkill(UseSkillAction::new(skill))
    }

    pub fn use_item(item: impl Into<String>) -> Self {
        Self::UseItem(UseItemAction::new(item))
    }

    pub fn enemy_turn(encounter: u64) -> Self {
        Self::EnemyTurn(EnemyTurnAction::new(encounter))
    }

    pub fn reset_game() -> Self {
        Self::ResetGame(ResetGameAction)
    }

    /// Returns the snake_case name of the action, used as a logging key.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::SubmitAnswer(_) => "submit_answer",
            Action::StartBattle(_) => "start_battle",
            Action::UseSkill(_) => "use_skill",
            Action::UseItem(_) => "use_item",
            Action::EnemyTurn(_) => "enemy_turn",
            Action::ResetGame(_) => "reset_game",
        }
    }
}

impl From<SubmitAnswerAction> for Action {
    fn from(action: SubmitAnswerAction) -> Self {
        Self::SubmitAnswer(action)
    }
}

impl From<UseSkillAction> for Action {
    fn from(action: UseSkillAction) -> Self {
        Self::UseSkill(action)
    }
}

impl From<UseItemAction> for Action {
    fn from(action: UseItemAction) -> Self {
        Self::UseItem(action)
    }
}

impl From<EnemyTurnAction> for Action {
    fn from(action: EnemyTurnAction) -> Self {
        Self::EnemyTurn(action)
    }
}

// ============================================================================
// Action Results
// ============================================================================

/// Action-specific result returned alongside the updated state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Answer(AnswerOutcome),
    Encounter(EncounterStart),
    Player(PlayerOutcome),
    Enemy(EnemyOutcome),
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnswerOutcome {
    /// Zero-based index of the answered question.
    pub question: usize,
    pub picked: Letter,
    /// Set once the last question has been answered.
    pub resolved: Option<PersonalityType>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterStart {
    pub encounter: u64,
    pub enemy: String,
    pub tier: Tier,
}

/// What a skill or item did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerEffect {
    Damage { amount: u32, critical: bool },
    Heal { amount: u32 },
    RestoreMp { amount: u32 },
    Buff,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerOutcome {
    pub effect: PlayerEffect,
    pub enemy_hp: u32,
    /// True when this action defeated the enemy and the phase moved to victory.
    pub victory: bool,
    pub experience_gained: u32,
    /// New level if the victory crossed a level threshold.
    pub level_up: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyOutcome {
    pub evaded: bool,
    pub damage: u32,
    pub critical: bool,
    pub player_hp: u32,
    /// True when the player fell and the phase moved to game over.
    pub defeat: bool,
}
