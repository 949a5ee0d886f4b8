//! Line-based terminal client for the personality quiz and battle.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ RuntimeConfig::from_env + logging
//!   ├─→ Runtime (worker owning the game state)
//!   └─→ Terminal (reads commands, renders prompts and streamed battle lines)
//! ```
//!
//! The terminal talks to the game only through [`spirit_runtime::RuntimeHandle`],
//! so it never mutates state directly.

pub mod command;
pub mod logging;
pub mod terminal;
pub mod view;

pub use command::{Command, ParseCommandError};
pub use terminal::Terminal;
