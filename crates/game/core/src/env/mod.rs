//! Traits describing read-only game content.
//!
//! Oracles expose the quiz, the class table, the enemy roster and item
//! definitions. The [`GameEnv`] aggregate bundles them together with the
//! [`GameConfig`] so the engine can access everything it needs without hard
//! coupling to concrete implementations. Content never appears in game state
//! except as copies taken when an encounter starts.
mod classes;
mod enemies;
mod items;
mod quiz;
mod rng;

pub use classes::{ClassInfo, ClassOracle, Skill, SkillEffect, SkillKind};
pub use enemies::{EnemyOracle, EnemyTemplate, Tier};
pub use items::{ItemDefinition, ItemEffect, ItemOracle};
pub use quiz::{OptionChoice, Question, QuizOption, QuizOracle};
pub use rng::{PcgRng, RngOracle, SequenceRng};

use crate::config::GameConfig;

/// Aggregates read-only oracles required by the action pipeline.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    quiz: &'a dyn QuizOracle,
    classes: &'a dyn ClassOracle,
    enemies: &'a dyn EnemyOracle,
    items: &'a dyn ItemOracle,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        quiz: &'a dyn QuizOracle,
        classes: &'a dyn ClassOracle,
        enemies: &'a dyn EnemyOracle,
        items: &'a dyn ItemOracle,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            quiz,
            classes,
            enemies,
            items,
            config,
        }
    }

    pub fn quiz(&self) -> &'a dyn QuizOracle {
        self.quiz
    }

    pub fn classes(&self) -> &'a dyn ClassOracle {
        self.classes
    }

    pub fn enemies(&self) -> &'a dyn EnemyOracle {
        self.enemies
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("questions", &self.quiz.questions().len())
            .field("enemies", &self.enemies.roster().len())
            .field("items", &self.items.items().len())
            .field("config", &self.config)
            .finish()
    }
}
