//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the quiz progress, the
//! active encounter and the run bookkeeping. Runtime layers clone or query
//! this state but mutate it exclusively through the engine.
mod battle;
mod buffs;
mod inventory;
mod log;

pub use battle::{BattleState, EnemyInstance, Turn};
pub use buffs::{Buffs, PlayerBuffs};
pub use inventory::{InventoryState, ItemStack};
pub use log::{BattleLog, LogEntry};

use crate::env::ItemOracle;
use crate::personality::{Letter, PersonalityType};
use crate::progression::calculate_level;

/// Screen-level phase of the game.
///
/// ```text
/// quiz → result → battle → victory ─┬→ battle (next encounter)
///                        ↘ gameover  └→ quiz   (reset)
/// gameover → quiz (reset)
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    #[default]
    Quiz,
    Result,
    Battle,
    Victory,
    GameOver,
}

/// Canonical snapshot of the game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub phase: Phase,

    /// Letters picked so far, one per answered question.
    pub answers: Vec<Letter>,

    /// Resolved type, set when the last question is answered.
    pub personality: Option<PersonalityType>,

    /// Active or just-finished encounter. Kept after victory/defeat so the
    /// result screens can show the enemy and the log.
    pub battle: Option<BattleState>,

    /// Encounters won since the last reset. Drives enemy tier selection.
    pub battle_count: u32,

    /// Experience accumulated since the last reset.
    pub experience: u32,

    pub inventory: InventoryState,

    /// Serial of the latest encounter. Bumped on every new encounter and on
    /// reset, so enemy actions scheduled for an older encounter are stale.
    pub encounter: u64,

    /// Sequential action identifier, incremented with every executed action.
    pub nonce: u64,
}

impl GameState {
    /// Fresh state at the start of the quiz with the starting inventory.
    pub fn new(items: &(impl ItemOracle + ?Sized)) -> Self {
        Self {
            inventory: InventoryState::starting(items),
            ..Self::default()
        }
    }

    pub fn level(&self) -> u32 {
        calculate_level(self.experience)
    }

    pub fn is_player_turn(&self) -> bool {
        self.phase == Phase::Battle
            && self
                .battle
                .as_ref()
                .is_some_and(|battle| battle.turn == Turn::Player)
    }

    /// True while an enemy counter-attack is owed for the current encounter.
    pub fn awaiting_enemy(&self) -> bool {
        self.phase == Phase::Battle
            && self
                .battle
                .as_ref()
                .is_some_and(|battle| battle.turn == Turn::Enemy)
    }
}
