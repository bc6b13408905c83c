//! Game orchestration between players.

use super::io::Console;
use super::players::{self, Player};
use crate::config::GameConfig;
use crate::games::tictactoe::{Board, Mark, Move, Outcome};
use anyhow::Result;
use tracing::{debug, info, instrument};

const REPLAY_PROMPT: &str = "Do you want to play again? (yes/no): ";

/// Messages sent from the orchestrator to the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Session started.
    Welcome,
    /// Board snapshot to display.
    BoardChanged(Board),
    /// A mark was placed.
    MoveMade(Move),
    /// Human input was rejected; a new prompt follows.
    InvalidMove,
    /// Round ended.
    GameOver(Outcome),
    /// Session ended.
    Goodbye,
}

/// Orchestrates play between the two players.
///
/// Owns the board, the session config and one player per mark.
pub struct Orchestrator<C> {
    config: GameConfig,
    board: Board,
    current: Mark,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    console: C,
}

impl<C: Console> Orchestrator<C> {
    /// Creates an orchestrator with players built from `config`.
    #[instrument(skip(console))]
    pub fn new(config: GameConfig, console: C) -> Self {
        let player_x = players::for_mark(&config, Mark::X);
        let player_o = players::for_mark(&config, Mark::O);
        Self::with_players(config, player_x, player_o, console)
    }

    /// Creates an orchestrator with explicit players.
    pub fn with_players(
        config: GameConfig,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        console: C,
    ) -> Self {
        Self {
            config,
            board: Board::new(),
            current: Mark::X,
            player_x,
            player_o,
            console,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark whose turn it is.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// The console collaborator.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the orchestrator, returning its console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs rounds until the players decline a replay.
    #[instrument(skip(self), fields(mode = %self.config.mode(), difficulty = %self.config.difficulty()))]
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        self.console.emit(&GameEvent::Welcome)?;

        let mut rounds = 0u32;
        loop {
            let outcome = self.play_round()?;
            rounds += 1;
            info!(round = rounds, ?outcome, "Round finished");

            if !self.play_again()? {
                break;
            }
            self.reset();
        }

        self.console.emit(&GameEvent::Goodbye)?;
        info!(rounds, "Session ended");
        Ok(())
    }

    /// Plays the current round to completion and reports its outcome.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<Outcome> {
        self.console.emit(&GameEvent::BoardChanged(self.board))?;

        let outcome = loop {
            self.play_turn()?;
            if let Some(outcome) = Outcome::evaluate(&self.board, self.current) {
                break outcome;
            }
            self.current = self.current.opponent();
        };

        self.console.emit(&GameEvent::GameOver(outcome))?;
        Ok(outcome)
    }

    /// Gets one move from the current player and applies it.
    ///
    /// Does not switch turns; [`Orchestrator::play_round`] does that once
    /// it knows the round continues.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn play_turn(&mut self) -> Result<Move> {
        let mark = self.current;
        let player = match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        };
        debug!(player_type = %player.player_type(), "Waiting for move");

        let cell = player.get_move(&self.board, mark, &mut self.console)?;
        self.board.apply_move(cell, mark)?;

        let mv = Move::new(mark, cell);
        debug!(%mv, "Move applied");
        self.console.emit(&GameEvent::MoveMade(mv))?;
        self.console.emit(&GameEvent::BoardChanged(self.board))?;
        Ok(mv)
    }

    /// Asks whether to play another round. Only `yes` continues.
    pub fn play_again(&mut self) -> Result<bool> {
        let answer = self.console.read_line(REPLAY_PROMPT)?.unwrap_or_default();
        Ok(answer.trim().eq_ignore_ascii_case("yes"))
    }

    /// Clears the board and gives the first move back to X.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Mark::X;
    }
}
