//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers one async helper per
//! player entry point, plus state queries and topic subscriptions.
use tokio::sync::{broadcast, mpsc, oneshot};

use spirit_core::{Action, ExecutionOutcome, GameState, OptionChoice};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Answer the current quiz question.
    pub async fn submit_answer(&self, choice: OptionChoice) -> Result<ExecutionOutcome> {
        self.execute_action(Action::submit_answer(choice)).await
    }

    /// Start the next encounter from the result or victory screen.
    pub async fn start_battle(&self) -> Result<ExecutionOutcome> {
        self.execute_action(Action::start_battle()).await
    }

    /// Use the class skill at `skill` (index into the class skill list).
    ///
    /// On success the enemy's counter-attack is scheduled by the runtime; the
    /// returned outcome carries the delay.
    pub async fn use_skill(&self, skill: usize) -> Result<ExecutionOutcome> {
        self.execute_action(Action::use_skill(skill)).await
    }

    pub async fn use_item(&self, item: impl Into<String>) -> Result<ExecutionOutcome> {
        self.execute_action(Action::use_item(item)).await
    }

    /// Return to the quiz, cancelling any pending enemy turn.
    pub async fn reset_game(&self) -> Result<ExecutionOutcome> {
        self.execute_action(Action::reset_game()).await
    }

    async fn execute_action(&self, action: Action) -> Result<ExecutionOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::ExecuteAction {
                action,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::GameState` - Executed and rejected actions, phase changes
    /// - `Topic::Battle` - Battle log lines as they are appended
    /// - `Topic::Turn` - Enemy turn scheduling and cancellation
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
