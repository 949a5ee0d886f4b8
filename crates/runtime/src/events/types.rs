//! Event payloads grouped by topic.

use serde::{Deserialize, Serialize};

use spirit_core::{Action, ActionResult, LogEntry, Phase, TransitionPhase};

/// Game state events (actions and phase transitions)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// Action executed successfully.
    ActionExecuted {
        /// Nonce the action was executed at.
        nonce: u64,
        action: Action,
        result: ActionResult,
    },
    /// Action rejected by the engine; state is unchanged.
    ActionRejected {
        nonce: u64,
        action: Action,
        phase: TransitionPhase,
        error_code: String,
        message: String,
    },
    PhaseChanged { from: Phase, to: Phase },
}

/// Battle log events, one per appended line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BattleEvent {
    LogAppended {
        encounter: u64,
        /// Position of the entry in the encounter's log.
        index: usize,
        entry: LogEntry,
        line: String,
    },
}

/// Enemy turn scheduling events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TurnEvent {
    EnemyTurnScheduled { encounter: u64, delay_ms: u64 },
    /// A scheduled enemy turn was dropped before it fired.
    EnemyTurnCancelled { encounter: u64 },
}
