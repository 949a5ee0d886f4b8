//! Enemy roster loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spirit_core::EnemyTemplate;

use crate::loaders::{LoadResult, read_file};

/// Enemy roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyRoster {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for the enemy roster from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<EnemyTemplate>> {
        let roster: EnemyRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy roster RON: {}", e))?;

        Ok(roster.enemies)
    }
}
