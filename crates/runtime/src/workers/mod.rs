//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the game state and executes commands one at a
//! time; the enemy timer is a short-lived task it spawns per player action.

mod simulation;
mod timer;

pub use simulation::{Command, SimulationWorker};
