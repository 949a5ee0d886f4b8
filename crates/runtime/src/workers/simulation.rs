//! Simulation worker that owns the authoritative [`spirit_core::GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), executes
//! actions via [`spirit_core::GameEngine`], schedules the enemy's
//! counter-attack, and publishes events to the EventBus.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use spirit_content::ContentTables;
use spirit_core::{
    Action, ExecuteError, ExecutionOutcome, GameConfig, GameEngine, GameError, GameState, PcgRng,
    TransitionPhase,
};

use super::timer::EnemyTimer;
use crate::api::{Result, RuntimeError};
use crate::events::{BattleEvent, EventBus, GameStateEvent, TurnEvent};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Execute a player action.
    ExecuteAction {
        action: Action,
        reply: oneshot::Sender<Result<ExecutionOutcome>>,
    },
    /// Fired by the enemy timer once the delay has elapsed.
    EnemyTurn { encounter: u64 },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
}

/// Background task that processes gameplay commands.
///
/// Commands are handled strictly one at a time, so the enemy turn can never
/// interleave with a player action.
pub struct SimulationWorker {
    state: GameState,
    tables: Arc<ContentTables>,
    game_config: GameConfig,
    rng: PcgRng,
    command_rx: mpsc::Receiver<Command>,
    command_tx: mpsc::WeakSender<Command>,
    event_bus: EventBus,
    enemy_timer: Option<EnemyTimer>,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        state: GameState,
        tables: Arc<ContentTables>,
        game_config: GameConfig,
        rng: PcgRng,
        command_rx: mpsc::Receiver<Command>,
        command_tx: mpsc::WeakSender<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            phase = %state.phase,
            questions = tables.questions.len(),
            classes = tables.classes.len(),
            enemies = tables.enemies.len(),
            "SimulationWorker initialized"
        );

        Self {
            state,
            tables,
            game_config,
            rng,
            command_rx,
            command_tx,
            event_bus,
            enemy_timer: None,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }

        if let Some(timer) = self.enemy_timer.take() {
            timer.cancel();
        }
        debug!(target: "runtime::worker", "SimulationWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::ExecuteAction { action, reply } => {
                let result = self.handle_player_action(action);
                if reply.send(result).is_err() {
                    debug!("ExecuteAction reply channel closed (caller dropped)");
                }
            }
            Command::EnemyTurn { encounter } => {
                self.handle_enemy_turn(encounter);
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Executes a player action, then reschedules or cancels the enemy turn.
    fn handle_player_action(&mut self, action: Action) -> Result<ExecutionOutcome> {
        let outcome = match self.execute_action(&action) {
            Ok(outcome) => outcome,
            Err(error) => {
                self.handle_execute_error(&action, &error);
                return Err(RuntimeError::ActionRejected(error));
            }
        };

        if matches!(action, Action::ResetGame(_) | Action::StartBattle(_)) {
            self.cancel_enemy_turn();
        }
        if let Some(pending) = outcome.pending_enemy_action {
            self.cancel_enemy_turn();
            debug!(
                target: "runtime::worker",
                encounter = pending.encounter,
                delay_ms = pending.delay_ms,
                "Enemy turn scheduled"
            );
            self.enemy_timer = Some(EnemyTimer::spawn(pending, self.command_tx.clone()));
            self.event_bus.publish(TurnEvent::EnemyTurnScheduled {
                encounter: pending.encounter,
                delay_ms: pending.delay_ms,
            });
        }

        Ok(outcome)
    }

    fn handle_enemy_turn(&mut self, encounter: u64) {
        if self
            .enemy_timer
            .as_ref()
            .is_some_and(|timer| timer.encounter() == encounter)
        {
            self.enemy_timer = None;
        }

        let action = Action::enemy_turn(encounter);
        match self.execute_action(&action) {
            Ok(_) => {}
            Err(error) if error.is_stale_enemy_turn() => {
                debug!(
                    target: "runtime::worker",
                    encounter,
                    current = self.state.encounter,
                    "Dropped stale enemy turn"
                );
            }
            Err(error) => self.handle_execute_error(&action, &error),
        }
    }

    fn cancel_enemy_turn(&mut self) {
        if let Some(timer) = self.enemy_timer.take() {
            let encounter = timer.encounter();
            if timer.cancel() {
                debug!(target: "runtime::worker", encounter, "Enemy turn cancelled");
                self.event_bus
                    .publish(TurnEvent::EnemyTurnCancelled { encounter });
            }
        }
    }

    /// Executes any action and publishes the resulting events.
    ///
    /// This is the ONLY method that should call `GameEngine::execute()`, so
    /// every transition is reported the same way.
    fn execute_action(
        &mut self,
        action: &Action,
    ) -> std::result::Result<ExecutionOutcome, ExecuteError> {
        let nonce = self.state.nonce;
        let phase_before = self.state.phase;
        let log_before = self
            .state
            .battle
            .as_ref()
            .map(|battle| (battle.encounter, battle.log.len()));

        let env = self.tables.as_game_env(&self.game_config);
        let outcome = GameEngine::new(&mut self.state).execute(env, &mut self.rng, action)?;

        debug!(
            target: "runtime::worker",
            nonce,
            action = action.as_snake_case(),
            phase = %self.state.phase,
            "Action executed"
        );

        // Log lines are published before the ActionExecuted they belong to.
        if let Some(battle) = &self.state.battle {
            let start = match log_before {
                Some((encounter, len)) if encounter == battle.encounter => len,
                _ => 0,
            };
            for (index, entry) in battle.log.entries().iter().enumerate().skip(start) {
                self.event_bus.publish(BattleEvent::LogAppended {
                    encounter: battle.encounter,
                    index,
                    entry: entry.clone(),
                    line: entry.to_string(),
                });
            }
        }

        self.event_bus.publish(GameStateEvent::ActionExecuted {
            nonce,
            action: action.clone(),
            result: outcome.result.clone(),
        });

        if self.state.phase != phase_before {
            info!(
                target: "runtime::worker",
                from = %phase_before,
                to = %self.state.phase,
                "Phase changed"
            );
            self.event_bus.publish(GameStateEvent::PhaseChanged {
                from: phase_before,
                to: self.state.phase,
            });
        }

        Ok(outcome)
    }

    fn handle_execute_error(&self, action: &Action, error: &ExecuteError) {
        let phase = error.phase();
        let message = error.to_string();

        if phase == TransitionPhase::PreValidate {
            warn!(
                target: "runtime::worker",
                action = action.as_snake_case(),
                phase = phase.as_str(),
                code = error.error_code(),
                error = %message,
                "Action rejected during pre-validate"
            );
        } else {
            tracing::error!(
                target: "runtime::worker",
                action = action.as_snake_case(),
                phase = phase.as_str(),
                code = error.error_code(),
                error = %message,
                "Action execution failed"
            );
        }

        self.event_bus.publish(GameStateEvent::ActionRejected {
            nonce: self.state.nonce,
            action: action.clone(),
            phase,
            error_code: error.error_code().to_string(),
            message,
        });
    }
}
