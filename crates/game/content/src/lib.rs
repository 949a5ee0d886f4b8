//! Data-driven content definitions and loaders.
//!
//! This crate houses the static game content and provides loaders for RON/TOML data files:
//! - Quiz questions (`questions.ron`)
//! - Personality-to-class table with skill lists (`classes.ron`)
//! - Tiered enemy roster (`enemies.ron`)
//! - Item catalog (`items.ron`)
//! - Game configuration (`config.toml`)
//!
//! The files under `data/` are embedded as the built-in tables; a directory with
//! the same layout can replace them wholesale for localization or balance swaps.
//!
//! Content is consumed through the spirit-core oracle traits and never appears in
//! game state.

pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use tables::ContentTables;

#[cfg(feature = "loaders")]
pub use tables::builtin_config;

#[cfg(feature = "loaders")]
pub use loaders::{
    ClassLoader, ConfigLoader, ContentFactory, EnemyLoader, ItemLoader, LoadResult, QuizLoader,
};
