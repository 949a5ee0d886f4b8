//! Runtime orchestration for a quiz-and-battle session.
//!
//! This crate wires the content tables, the rules engine and a worker task
//! into a cohesive runtime API. Consumers embed [`Runtime`] to drive a
//! session, subscribe to events, and submit player input through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - `workers` keeps the simulation task and enemy-turn timer internal
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{BattleEvent, Event, EventBus, GameStateEvent, Topic, TurnEvent};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
