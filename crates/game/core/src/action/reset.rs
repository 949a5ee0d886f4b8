use crate::env::{GameEnv, RngOracle};
use crate::error::NeverError;
use crate::state::{GameState, InventoryState};

use super::ActionTransition;

/// Returns to the quiz, discarding answers, the encounter and progression.
///
/// Accepted from every phase. The encounter serial keeps counting so an enemy
/// action scheduled before the reset is recognised as stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetGameAction;

impl ActionTransition for ResetGameAction {
    type Error = NeverError;
    type Result = ();

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        _rng: &mut dyn RngOracle,
    ) -> Result<Self::Result, Self::Error> {
        *state = GameState {
            inventory: InventoryState::starting(env.items()),
            encounter: state.encounter + 1,
            nonce: state.nonce,
            ..GameState::default()
        };
        Ok(())
    }
}
