//! Delayed enemy turn.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use spirit_core::PendingEnemyAction;

use super::Command;

/// A spawned sleep that feeds `Command::EnemyTurn` back to the worker.
///
/// The task holds only a weak sender, so a pending timer never keeps the
/// worker alive after every handle is dropped.
pub(crate) struct EnemyTimer {
    encounter: u64,
    task: JoinHandle<()>,
}

impl EnemyTimer {
    pub(crate) fn spawn(pending: PendingEnemyAction, command_tx: mpsc::WeakSender<Command>) -> Self {
        let encounter = pending.encounter;
        let delay = Duration::from_millis(pending.delay_ms);

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(tx) = command_tx.upgrade()
                && tx.send(Command::EnemyTurn { encounter }).await.is_err()
            {
                tracing::debug!(encounter, "Worker gone before enemy turn fired");
            }
        });

        Self { encounter, task }
    }

    pub(crate) fn encounter(&self) -> u64 {
        self.encounter
    }

    /// Stops the timer. Returns false when it had already fired.
    pub(crate) fn cancel(self) -> bool {
        let pending = !self.task.is_finished();
        self.task.abort();
        pending
    }
}
