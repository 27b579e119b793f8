//! Line-based terminal front end.
//!
//! Reads commands, drives `GameState`, lets the random engine answer when
//! playing against the computer, and keeps win/loss/draw counts for those
//! games. Output is plain text so the loop can be scripted.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::config::GameConfig;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::MovePolicy;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameOutcome, OutcomeKind};
use crate::game_state::match_stats::MatchStats;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::long_algebraic::long_algebraic_to_move;
use crate::utils::render_game_state::{render_board, render_board_with_marks};

const HELP_TEXT: &str = "commands: <move e.g. e2e4> | moves <square> | undo | new | board | fen \
| stats | reset-stats | help | quit";

pub fn run_stdio_loop(config: GameConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = PlaySession::new(config);

    session.start(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct PlaySession {
    config: GameConfig,
    game: GameState,
    engine: Box<dyn MovePolicy>,
    stats: MatchStats,
}

impl PlaySession {
    pub fn new(config: GameConfig) -> Self {
        let engine = Box::new(RandomEngine::from_seed_option(config.rng_seed));
        Self::with_engine(config, engine)
    }

    /// Uses `engine` for the computer side instead of the random engine.
    pub fn with_engine(config: GameConfig, engine: Box<dyn MovePolicy>) -> Self {
        Self {
            game: GameState::from_config(&config),
            config,
            engine,
            stats: MatchStats::new(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    /// Prints the opening board and lets the computer move first if it
    /// plays White.
    pub fn start(&mut self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_board(self.game.board()))?;
        self.maybe_play_computer(out)?;
        self.write_status(out)
    }

    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut tokens = trimmed.split_whitespace();
        let command = tokens.next().unwrap_or_default();

        match command {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "board" => writeln!(out, "{}", render_board(self.game.board()))?,
            "fen" => writeln!(out, "{}", self.game.to_fen())?,
            "stats" => writeln!(
                out,
                "wins {} losses {} draws {}",
                self.stats.wins, self.stats.losses, self.stats.draws
            )?,
            "reset-stats" => {
                self.stats.reset();
                writeln!(out, "wins 0 losses 0 draws 0")?;
            }
            "new" => {
                self.game.reset();
                writeln!(out, "{}", render_board(self.game.board()))?;
                self.maybe_play_computer(out)?;
                self.write_status(out)?;
            }
            "undo" => {
                let plies = self.game.undo();
                if plies == 0 {
                    writeln!(out, "nothing to undo")?;
                } else {
                    writeln!(out, "{}", render_board(self.game.board()))?;
                    // Popping two plies after a game-ending human move, or past the
                    // computer's opening move, leaves the computer to move.
                    self.maybe_play_computer(out)?;
                    self.write_status(out)?;
                }
            }
            "moves" => self.write_moves(tokens.next(), out)?,
            _ => self.play_human_move(trimmed, out)?,
        }

        Ok(false)
    }

    fn write_moves(&self, square_text: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let Some(square_text) = square_text else {
            return writeln!(out, "usage: moves <square>");
        };
        match algebraic_to_square(square_text) {
            Ok(square) => {
                let targets = self.game.legal_moves(square);
                let listed: Vec<String> = targets.iter().map(|sq| sq.to_string()).collect();
                writeln!(out, "{}", render_board_with_marks(self.game.board(), &targets))?;
                writeln!(out, "moves {}: {}", square, listed.join(" "))
            }
            Err(err) => writeln!(out, "error: {err}"),
        }
    }

    fn play_human_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        if self.is_computer_turn() {
            return writeln!(out, "error: waiting for the computer");
        }

        let mv = match long_algebraic_to_move(text) {
            Ok(mv) => mv,
            Err(err) => return writeln!(out, "error: {err}"),
        };

        if let Err(err) = self.game.apply_move(mv) {
            return writeln!(out, "error: {err}");
        }

        writeln!(out, "{}", render_board(self.game.board()))?;
        self.after_position_reached(out)?;
        self.maybe_play_computer(out)?;
        self.write_status(out)
    }

    fn is_computer_turn(&self) -> bool {
        self.config.opponent_is_automatic
            && !self.game.status().is_game_over()
            && self.game.side_to_move() == self.config.computer_color
    }

    fn maybe_play_computer(&mut self, out: &mut impl Write) -> io::Result<()> {
        if !self.is_computer_turn() {
            return Ok(());
        }

        if self.config.computer_reply_delay_ms > 0 {
            thread::sleep(Duration::from_millis(self.config.computer_reply_delay_ms));
        }

        let Some(mv) = self
            .game
            .choose_move(self.engine.as_mut(), self.config.computer_color)
        else {
            return Ok(());
        };

        if let Err(err) = self.game.apply_move(mv) {
            warn!(%err, engine = self.engine.name(), "engine produced a rejected move");
            return writeln!(out, "error: {err}");
        }

        writeln!(out, "computer plays {mv}")?;
        writeln!(out, "{}", render_board(self.game.board()))?;
        self.after_position_reached(out)
    }

    fn after_position_reached(&mut self, out: &mut impl Write) -> io::Result<()> {
        let Some(outcome) = self.game.outcome() else {
            return Ok(());
        };

        writeln!(out, "{}", describe_outcome(outcome))?;
        if self.config.opponent_is_automatic {
            self.stats.record(outcome, self.config.human_color());
        }
        Ok(())
    }

    fn write_status(&self, out: &mut impl Write) -> io::Result<()> {
        if self.game.status().is_game_over() {
            return writeln!(out, "game over");
        }
        match self.game.king_in_check() {
            Some(square) => writeln!(
                out,
                "{} to move, king on {} is in check",
                self.game.side_to_move(),
                square
            ),
            None => writeln!(out, "{} to move", self.game.side_to_move()),
        }
    }
}

fn describe_outcome(outcome: GameOutcome) -> String {
    match (outcome.kind, outcome.winner) {
        (OutcomeKind::Checkmate, Some(winner)) => format!("checkmate, {winner} wins"),
        (OutcomeKind::Checkmate, None) => "checkmate".to_owned(),
        (OutcomeKind::Stalemate, _) => "stalemate, draw".to_owned(),
    }
}
