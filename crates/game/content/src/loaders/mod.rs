//! Content loaders for reading game data from files.
//!
//! Each loader parses one RON/TOML file straight into spirit-core types, and
//! [`ContentFactory`] assembles a whole data directory into [`crate::ContentTables`].

pub mod classes;
pub mod config;
pub mod enemies;
pub mod factory;
pub mod item;
pub mod quiz;

pub use classes::ClassLoader;
pub use config::ConfigLoader;
pub use enemies::EnemyLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use quiz::QuizLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
