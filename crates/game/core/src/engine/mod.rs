//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! orchestrates the transition phases and surfaces rich error information
//! for the runtime. Every state change, the scheduled enemy turn included,
//! flows through the same `execute()` pipeline.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionResult};
use crate::env::{GameEnv, RngOracle};
use crate::state::GameState;

/// Enemy counter-attack owed after a player action.
///
/// The rules never wait; the caller schedules [`PendingEnemyAction::action`]
/// after `delay_ms` and may drop it if the encounter changes first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingEnemyAction {
    pub encounter: u64,
    pub delay_ms: u64,
}

impl PendingEnemyAction {
    pub fn action(&self) -> Action {
        Action::enemy_turn(self.encounter)
    }
}

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Action-specific execution result (answer, damage, enemy attack, ...).
    pub result: ActionResult,

    /// Set when the enemy acts next.
    pub pending_enemy_action: Option<PendingEnemyAction>,
}

/// Game engine that manages action execution.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
///
/// The pipeline runs on a working copy which replaces the state only on
/// success, so a rejected action never leaves a partial mutation behind.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes an action by routing it through the matching transition pipeline.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        rng: &mut dyn RngOracle,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let mut working = self.state.clone();

        let result = transition::execute_transition(action, &mut working, &env, rng)?;

        // Increment nonce after successful execution
        working.nonce += 1;

        let pending_enemy_action = working.awaiting_enemy().then(|| PendingEnemyAction {
            encounter: working.encounter,
            delay_ms: env.config().enemy_turn_delay_ms,
        });

        *self.state = working;

        Ok(ExecutionOutcome {
            result,
            pending_enemy_action,
        })
    }
}

/// Pure variant of [`GameEngine::execute`]: returns the next state and leaves
/// `state` untouched.
pub fn step(
    state: &GameState,
    env: GameEnv<'_>,
    rng: &mut dyn RngOracle,
    action: &Action,
) -> Result<(GameState, ExecutionOutcome), ExecuteError> {
    let mut next = state.clone();
    let outcome = GameEngine::new(&mut next).execute(env, rng, action)?;
    Ok((next, outcome))
}
