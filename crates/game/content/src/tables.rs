//! In-memory content tables implementing the spirit-core oracles.

use std::collections::BTreeMap;

use spirit_core::{
    ClassInfo, ClassOracle, EnemyOracle, EnemyTemplate, GameConfig, GameEnv, ItemDefinition,
    ItemOracle, PersonalityType, Question, QuizOracle,
};

/// Complete set of read-only content for one session.
///
/// A single value serves as all four oracles, so the runtime keeps one
/// `Arc<ContentTables>` and borrows a [`GameEnv`] from it per action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentTables {
    pub questions: Vec<Question>,
    pub classes: BTreeMap<PersonalityType, ClassInfo>,
    pub enemies: Vec<EnemyTemplate>,
    pub items: Vec<ItemDefinition>,
}

impl ContentTables {
    pub fn new(
        questions: Vec<Question>,
        classes: BTreeMap<PersonalityType, ClassInfo>,
        enemies: Vec<EnemyTemplate>,
        items: Vec<ItemDefinition>,
    ) -> Self {
        Self {
            questions,
            classes,
            enemies,
            items,
        }
    }

    /// Bundles the tables with `config` into the engine's oracle view.
    pub fn as_game_env<'a>(&'a self, config: &'a GameConfig) -> GameEnv<'a> {
        GameEnv::new(self, self, self, self, config)
    }
}

impl QuizOracle for ContentTables {
    fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl ClassOracle for ContentTables {
    fn class(&self, code: PersonalityType) -> Option<&ClassInfo> {
        self.classes.get(&code)
    }
}

impl EnemyOracle for ContentTables {
    fn roster(&self) -> &[EnemyTemplate] {
        &self.enemies
    }
}

impl ItemOracle for ContentTables {
    fn items(&self) -> &[ItemDefinition] {
        &self.items
    }
}

#[cfg(feature = "loaders")]
mod builtin {
    use std::collections::HashSet;

    use spirit_core::{GameConfig, Tier};

    use super::ContentTables;
    use crate::loaders::{ClassLoader, ConfigLoader, EnemyLoader, ItemLoader, LoadResult, QuizLoader};

    const QUESTIONS: &str = include_str!("../data/questions.ron");
    const CLASSES: &str = include_str!("../data/classes.ron");
    const ENEMIES: &str = include_str!("../data/enemies.ron");
    const ITEMS: &str = include_str!("../data/items.ron");
    const CONFIG: &str = include_str!("../data/config.toml");

    impl ContentTables {
        /// Parses the tables shipped with the crate.
        pub fn builtin() -> LoadResult<Self> {
            Ok(Self::new(
                QuizLoader::parse(QUESTIONS)?,
                ClassLoader::parse(CLASSES)?,
                EnemyLoader::parse(ENEMIES)?,
                ItemLoader::parse(ITEMS)?,
            ))
        }

        /// Checks the cross-table invariants the engine relies on.
        ///
        /// The engine rejects actions on broken content at runtime; this
        /// surfaces the same problems once, at load time.
        pub fn validate(&self, config: &GameConfig) -> LoadResult<()> {
            if self.questions.is_empty() {
                anyhow::bail!("Quiz has no questions");
            }
            for question in &self.questions {
                let [first, second] = &question.options;
                if first.picks.axis() != second.picks.axis() || first.picks == second.picks {
                    anyhow::bail!(
                        "Question {} must offer both letters of one axis, got {} and {}",
                        question.id,
                        first.picks,
                        second.picks
                    );
                }
            }

            if !self.classes.contains_key(&config.fallback_type) {
                anyhow::bail!(
                    "Fallback type {} has no class entry",
                    config.fallback_type
                );
            }
            for (code, class) in &self.classes {
                if class.skills.is_empty() {
                    anyhow::bail!("Class {} ({}) has no skills", class.name, code);
                }
                if class.base_hp == 0 {
                    anyhow::bail!("Class {} ({}) has zero base HP", class.name, code);
                }
            }

            if self.enemies.is_empty() {
                anyhow::bail!("Enemy roster is empty");
            }
            if let Some(enemy) = self.enemies.iter().find(|enemy| enemy.max_hp == 0) {
                anyhow::bail!("Enemy {} has zero max HP", enemy.name);
            }

            let mut seen = HashSet::new();
            for item in &self.items {
                if !seen.insert(item.id.as_str()) {
                    anyhow::bail!("Duplicate item id {}", item.id);
                }
            }

            Ok(())
        }

        /// Tiers with no enemy; encounters for those fall back to the whole roster.
        pub fn empty_tiers(&self) -> Vec<Tier> {
            [Tier::Weak, Tier::Normal, Tier::Strong]
                .into_iter()
                .filter(|tier| self.enemies.iter().all(|enemy| enemy.tier != *tier))
                .collect()
        }
    }

    /// Parses the configuration shipped with the crate.
    pub fn builtin_config() -> LoadResult<GameConfig> {
        ConfigLoader::parse(CONFIG)
    }
}

#[cfg(feature = "loaders")]
pub use builtin::builtin_config;
