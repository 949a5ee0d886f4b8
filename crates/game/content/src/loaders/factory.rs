//! Content factory for building oracles from data files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use spirit_core::{ClassInfo, EnemyTemplate, GameConfig, ItemDefinition, PersonalityType, Question};

use crate::loaders::{
    ClassLoader, ConfigLoader, EnemyLoader, ItemLoader, LoadResult, QuizLoader,
};
use crate::tables::ContentTables;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── questions.ron
/// ├── classes.ron
/// ├── enemies.ron
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the directory's `config.toml`.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.config_path())
    }

    /// Load quiz questions from `questions.ron`.
    pub fn load_questions(&self) -> LoadResult<Vec<Question>> {
        let path = self.data_dir.join("questions.ron");
        QuizLoader::load(&path)
    }

    /// Load the class table from `classes.ron`.
    pub fn load_classes(&self) -> LoadResult<BTreeMap<PersonalityType, ClassInfo>> {
        let path = self.data_dir.join("classes.ron");
        ClassLoader::load(&path)
    }

    /// Load the enemy roster from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyTemplate>> {
        let path = self.data_dir.join("enemies.ron");
        EnemyLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load every table and bundle them.
    ///
    /// All four files are required; tables are swapped wholesale, never merged
    /// with the built-in ones.
    pub fn load_tables(&self) -> LoadResult<ContentTables> {
        Ok(ContentTables::new(
            self.load_questions()?,
            self.load_classes()?,
            self.load_enemies()?,
            self.load_items()?,
        ))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const DATA_FILES: [(&str, &str); 5] = [
        ("config.toml", include_str!("../../data/config.toml")),
        ("questions.ron", include_str!("../../data/questions.ron")),
        ("classes.ron", include_str!("../../data/classes.ron")),
        ("enemies.ron", include_str!("../../data/enemies.ron")),
        ("items.ron", include_str!("../../data/items.ron")),
    ];

    fn write_data_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in DATA_FILES {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.config_path(), Path::new("/tmp/data/config.toml"));
    }

    #[test]
    fn directory_matches_builtin_tables() {
        let dir = write_data_dir();
        let factory = ContentFactory::new(dir.path());

        let tables = factory.load_tables().unwrap();
        let config = factory.load_config().unwrap();

        assert_eq!(tables, ContentTables::builtin().unwrap());
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn replaced_roster_is_used_wholesale() {
        let dir = write_data_dir();
        fs::write(
            dir.path().join("enemies.ron"),
            r#"(enemies: [(name: "Training Dummy", max_hp: 10, damage: 1, tier: weak, attack_name: "Wobble")])"#,
        )
        .unwrap();

        let tables = ContentFactory::new(dir.path()).load_tables().unwrap();

        assert_eq!(tables.enemies.len(), 1);
        assert_eq!(tables.enemies[0].name, "Training Dummy");
        assert_eq!(tables.enemies[0].exp_reward, 0);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = write_data_dir();
        fs::remove_file(dir.path().join("items.ron")).unwrap();

        let err = ContentFactory::new(dir.path()).load_tables().unwrap_err();

        assert!(err.to_string().contains("items.ron"), "{err}");
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let dir = write_data_dir();
        fs::write(dir.path().join("questions.ron"), "(questions: [(id: 1)])").unwrap();

        let err = ContentFactory::new(dir.path()).load_questions().unwrap_err();

        assert!(err.to_string().contains("question set RON"), "{err}");
    }
}
