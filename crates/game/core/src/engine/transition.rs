//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition};
use crate::env::{GameEnv, RngOracle};
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
    rng: &mut dyn RngOracle,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env, rng)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and wraps the result in [`ActionResult`].
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
    rng: &mut dyn RngOracle,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::SubmitAnswer(transition) => drive_transition(transition, state, env, rng)
            .map(ActionResult::Answer)
            .map_err(ExecuteError::SubmitAnswer),
        Action::StartBattle(transition) => drive_transition(transition, state, env, rng)
            .map(ActionResult::Encounter)
            .map_err(ExecuteError::StartBattle),
        Action::UseSkill(transition) => drive_transition(transition, state, env, rng)
            .map(ActionResult::Player)
            .map_err(ExecuteError::UseSkill),
        Action::UseItem(transition) => drive_transition(transition, state, env, rng)
            .map(ActionResult::Player)
            .map_err(ExecuteError::UseItem),
        Action::EnemyTurn(transition) => drive_transition(transition, state, env, rng)
            .map(ActionResult::Enemy)
            .map_err(ExecuteError::EnemyTurn),
        Action::ResetGame(transition) => match drive_transition(transition, state, env, rng) {
            Ok(()) => Ok(ActionResult::Reset),
            Err(TransitionPhaseError { error, .. }) => match error {},
        },
    }
}
