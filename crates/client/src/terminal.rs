//! Line-based game loop between a text stream and the runtime.
//!
//! Commands are read one line at a time and forwarded through the
//! [`RuntimeHandle`]. Screens are rendered in response to runtime events,
//! which covers the enemy's delayed counter-attack as well as the player's
//! own actions.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

use spirit_content::ContentTables;
use spirit_runtime::{BattleEvent, Event, GameStateEvent, RuntimeHandle, Topic};

use crate::command::{Command, ParseCommandError};
use crate::view;

const PROMPT: &str = "> ";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Terminal {
    handle: RuntimeHandle,
    tables: Arc<ContentTables>,
    game_rx: broadcast::Receiver<Event>,
    battle_rx: broadcast::Receiver<Event>,
}

impl Terminal {
    /// Subscribes immediately so no event published after construction is missed.
    pub fn new(handle: RuntimeHandle, tables: Arc<ContentTables>) -> Self {
        let game_rx = handle.subscribe(Topic::GameState);
        let battle_rx = handle.subscribe(Topic::Battle);
        Self {
            handle,
            tables,
            game_rx,
            battle_rx,
        }
    }

    /// Runs until `quit`, end of input, or the runtime going away.
    pub async fn run<R, W>(mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "Discover your personality, then fight as your class.")?;
        writeln!(out, "Type `help` for the list of commands.")?;
        self.show_screen(out).await?;

        let mut lines = input.lines();
        loop {
            tokio::select! {
                // Pending events render before the next command is read.
                biased;
                event = self.game_rx.recv() => {
                    match event {
                        Ok(Event::GameState(event)) => self.on_game_event(event, out).await?,
                        Ok(_) => {}
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!("Dropped {} stale game events", skipped);
                        }
                        Err(RecvError::Closed) => {
                            tracing::warn!("Event stream closed");
                            break;
                        }
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        tracing::info!("Input closed");
                        break;
                    };
                    if self.on_line(&line, out).await? == Flow::Quit {
                        break;
                    }
                }
            }
        }

        writeln!(out, "\nGoodbye.")?;
        out.flush()?;
        Ok(())
    }

    async fn on_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseCommandError::Empty) => {
                prompt(out)?;
                return Ok(Flow::Continue);
            }
            Err(error) => {
                writeln!(out, "{error}")?;
                prompt(out)?;
                return Ok(Flow::Continue);
            }
        };
        tracing::debug!(?command, "Player command");

        let outcome = match command {
            Command::Answer(choice) => self.handle.submit_answer(choice).await,
            Command::Start => self.handle.start_battle().await,
            Command::Skill(index) => self.handle.use_skill(index).await,
            Command::Item(id) => self.handle.use_item(id).await,
            Command::Reset => self.handle.reset_game().await,
            Command::State => {
                self.show_screen(out).await?;
                return Ok(Flow::Continue);
            }
            Command::Help => {
                writeln!(out, "{}", view::HELP)?;
                prompt(out)?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        // Successful actions are rendered from the events they publish.
        if let Err(error) = outcome {
            let Some(rejected) = error.execute_error() else {
                return Err(error.into());
            };
            writeln!(out, "Cannot do that: {}", rejected.source_error())?;
            prompt(out)?;
        }
        Ok(Flow::Continue)
    }

    async fn on_game_event<W: Write>(&mut self, event: GameStateEvent, out: &mut W) -> Result<()> {
        match event {
            GameStateEvent::ActionExecuted { .. } => {
                self.print_battle_log(out)?;
                let state = self.handle.query_state().await?;
                if let Some(screen) = view::screen(&state, &self.tables) {
                    writeln!(out, "{screen}")?;
                    prompt(out)?;
                }
            }
            GameStateEvent::ActionRejected { error_code, .. } => {
                tracing::debug!(code = %error_code, "Action rejected");
            }
            GameStateEvent::PhaseChanged { from, to } => {
                tracing::debug!(%from, %to, "Phase changed");
            }
        }
        Ok(())
    }

    fn print_battle_log<W: Write>(&mut self, out: &mut W) -> Result<()> {
        loop {
            match self.battle_rx.try_recv() {
                Ok(Event::Battle(BattleEvent::LogAppended { line, .. })) => {
                    writeln!(out, "  {line}")?;
                }
                Ok(_) => {}
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!("Dropped {} battle log lines", skipped);
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return Ok(()),
            }
        }
    }

    async fn show_screen<W: Write>(&self, out: &mut W) -> Result<()> {
        let state = self.handle.query_state().await?;
        match view::screen(&state, &self.tables) {
            Some(screen) => writeln!(out, "{screen}")?,
            None => writeln!(out, "The enemy is about to strike...")?,
        }
        prompt(out)
    }
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use spirit_runtime::Runtime;

    use super::*;

    async fn play(script: &str) -> (String, spirit_core::GameState) {
        let runtime = Runtime::builder().seed(7).build().await.unwrap();
        let terminal = Terminal::new(runtime.handle(), Arc::clone(runtime.tables()));

        let mut out = Vec::new();
        terminal.run(script.as_bytes(), &mut out).await.unwrap();

        let state = runtime.handle().query_state().await.unwrap();
        runtime.shutdown().await.unwrap();
        (String::from_utf8(out).unwrap(), state)
    }

    #[tokio::test]
    async fn quiz_then_first_encounter() {
        let script = "a\n".repeat(8) + "start\n";
        let (out, state) = play(&script).await;

        assert!(out.contains("Question 1/8"));
        assert!(out.contains("Question 8/8"));
        assert!(out.contains("ESTJ: Overseer"));
        assert!(out.contains("appeared!"));
        assert!(out.contains("Authoritative Strike"));
        assert!(state.is_player_turn());
    }

    #[tokio::test]
    async fn rejected_commands_are_reported() {
        let (out, state) = play("start\nskill 9\ndance\n").await;

        assert!(out.contains("Cannot do that: action not allowed during the quiz phase"));
        assert!(out.contains("unknown command `dance`"));
        assert!(state.answers.is_empty());
    }

    #[tokio::test]
    async fn quit_stops_reading_input() {
        let (out, state) = play("b\nquit\nb\n").await;

        assert!(out.contains("Question 2/8"));
        assert!(!out.contains("Question 3/8"));
        assert_eq!(state.answers.len(), 1);
        assert!(out.ends_with("Goodbye.\n"));
    }
}
