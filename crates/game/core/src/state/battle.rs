use crate::env::{ClassInfo, EnemyTemplate};
use crate::personality::PersonalityType;

use super::buffs::Buffs;
use super::log::{BattleLog, LogEntry};

/// Whose action is next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    #[default]
    Player,
    Enemy,
}

/// Runtime copy of an [`EnemyTemplate`] with live HP.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyInstance {
    pub template: EnemyTemplate,
    pub hp: u32,
}

impl EnemyInstance {
    pub fn spawn(template: &EnemyTemplate) -> Self {
        Self {
            hp: template.max_hp,
            template: template.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn max_hp(&self) -> u32 {
        self.template.max_hp
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

/// A single encounter, from spawn to victory or defeat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub personality: PersonalityType,
    /// Class snapshot taken when the encounter started.
    pub class: ClassInfo,
    pub player_hp: u32,
    pub player_mp: u32,
    pub enemy: EnemyInstance,
    pub turn: Turn,
    pub log: BattleLog,
    /// Enemy turns left per skill index before it can be used again.
    pub cooldowns: Vec<u32>,
    pub buffs: Buffs,
    /// Serial of this encounter, see [`GameState::encounter`](super::GameState::encounter).
    pub encounter: u64,
}

impl BattleState {
    /// Starts an encounter with full HP/MP and the player acting first.
    pub fn new(
        personality: PersonalityType,
        class: &ClassInfo,
        enemy: &EnemyTemplate,
        encounter: u64,
    ) -> Self {
        let enemy = EnemyInstance::spawn(enemy);
        let mut log = BattleLog::default();
        log.push(LogEntry::Appeared {
            enemy: enemy.name().to_string(),
        });

        Self {
            personality,
            player_hp: class.base_hp,
            player_mp: class.base_mp,
            cooldowns: vec![0; class.skills.len()],
            class: class.clone(),
            enemy,
            turn: Turn::Player,
            log,
            buffs: Buffs::default(),
            encounter,
        }
    }

    pub fn max_hp(&self) -> u32 {
        self.class.base_hp
    }

    pub fn max_mp(&self) -> u32 {
        self.class.base_mp
    }

    pub fn is_player_turn(&self) -> bool {
        self.turn == Turn::Player
    }

    pub fn cooldown(&self, skill: usize) -> u32 {
        self.cooldowns.get(skill).copied().unwrap_or(0)
    }

    /// Counts every cooldown down by one; called once per enemy turn.
    pub fn tick_cooldowns(&mut self) {
        for remaining in &mut self.cooldowns {
            *remaining = remaining.saturating_sub(1);
        }
    }
}
