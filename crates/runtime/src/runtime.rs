//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive a session.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use spirit_content::{ConfigLoader, ContentFactory, ContentTables, builtin_config};
use spirit_core::{GameConfig, GameState, PcgRng};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Seed for the session RNG; a random seed is drawn when unset.
    pub seed: Option<u64>,
    /// Overrides `GameConfig::enemy_turn_delay_ms` after the config is loaded.
    pub enemy_turn_delay_ms: Option<u64>,
    /// Directory with replacement content tables; built-in tables when unset.
    pub content_dir: Option<PathBuf>,
    /// TOML file with game balance. When unset, `config.toml` from
    /// `content_dir` is used if present, then the built-in file.
    pub config_path: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
            seed: None,
            enemy_turn_delay_ms: None,
            content_dir: None,
            config_path: None,
            session_id: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SPIRIT_SEED` - RNG seed for reproducible sessions (default: random)
    /// - `SPIRIT_ENEMY_DELAY_MS` - Pause before the enemy attacks (default: from config)
    /// - `SPIRIT_CONTENT_DIR` - Directory with replacement RON tables (default: built-in)
    /// - `SPIRIT_CONFIG` - Game balance TOML file (default: `config.toml` in the content dir, else built-in)
    /// - `SPIRIT_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `SPIRIT_EVENT_BUFFER` - Event queue size per topic (default: 100)
    /// - `SPIRIT_COMMAND_BUFFER` - Command queue size (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("SPIRIT_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("SPIRIT_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }

        config.seed = read_env::<u64>("SPIRIT_SEED");
        config.enemy_turn_delay_ms = read_env::<u64>("SPIRIT_ENEMY_DELAY_MS");
        config.content_dir = env::var("SPIRIT_CONTENT_DIR").ok().map(PathBuf::from);
        config.config_path = env::var("SPIRIT_CONFIG").ok().map(PathBuf::from);
        config.session_id = env::var("SPIRIT_SESSION_ID").ok();

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that orchestrates a game session
///
/// Runtime owns the worker; [`RuntimeHandle`] provides a cloneable façade
/// for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    tables: Arc<ContentTables>,
    game_config: GameConfig,
    seed: u64,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to events from one topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Content the session was built with, for presentation lookups.
    pub fn tables(&self) -> &Arc<ContentTables> {
        &self.tables
    }

    pub fn game_config(&self) -> &GameConfig {
        &self.game_config
    }

    /// Seed the session RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every [`RuntimeHandle`] clone is dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    tables: Option<Arc<ContentTables>>,
    game_config: Option<GameConfig>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            tables: None,
            game_config: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Use these tables instead of loading them.
    pub fn tables(mut self, tables: impl Into<Arc<ContentTables>>) -> Self {
        self.tables = Some(tables.into());
        self
    }

    /// Use this balance config instead of loading it.
    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = Some(game_config);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the runtime and spawn its worker.
    ///
    /// Tables come from the builder, then `content_dir`, then the built-in
    /// set. The game config comes from the builder, then `config_path`, then
    /// `content_dir/config.toml`, then the built-in file. Loaded content is
    /// validated before the worker starts.
    pub async fn build(self) -> Result<Runtime> {
        let tables = match self.tables {
            Some(tables) => tables,
            None => Arc::new(load_tables(&self.config)?),
        };

        let mut game_config = match self.game_config {
            Some(game_config) => game_config,
            None => load_game_config(&self.config)?,
        };
        if let Some(delay_ms) = self.config.enemy_turn_delay_ms {
            game_config.enemy_turn_delay_ms = delay_ms;
        }

        tables
            .validate(&game_config)
            .map_err(RuntimeError::Content)?;
        for tier in tables.empty_tiers() {
            tracing::warn!(%tier, "No enemy in tier; encounters draw from the whole roster");
        }

        let seed = self.config.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, "Session RNG seeded");

        let initial_state = self
            .state
            .unwrap_or_else(|| GameState::new(tables.as_ref()));

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx.clone(), event_bus.clone());

        let sim_worker = SimulationWorker::new(
            initial_state,
            Arc::clone(&tables),
            game_config.clone(),
            PcgRng::new(seed),
            command_rx,
            command_tx.downgrade(),
            event_bus,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            tables,
            game_config,
            seed,
            sim_worker_handle,
        })
    }
}

fn load_tables(config: &RuntimeConfig) -> Result<ContentTables> {
    match &config.content_dir {
        Some(dir) => {
            tracing::info!("Loading content tables from {}", dir.display());
            ContentFactory::new(dir).load_tables()
        }
        None => ContentTables::builtin(),
    }
    .map_err(RuntimeError::Content)
}

fn load_game_config(config: &RuntimeConfig) -> Result<GameConfig> {
    if let Some(path) = &config.config_path {
        tracing::info!("Loading game config from {}", path.display());
        return ConfigLoader::load(path).map_err(RuntimeError::Content);
    }

    if let Some(dir) = &config.content_dir {
        let factory = ContentFactory::new(dir);
        if factory.config_path().is_file() {
            tracing::info!("Loading game config from {}", factory.config_path().display());
            return factory.load_config().map_err(RuntimeError::Content);
        }
        tracing::info!(
            "No config.toml in {}, using built-in game config",
            dir.display()
        );
    }

    builtin_config().map_err(RuntimeError::Content)
}
