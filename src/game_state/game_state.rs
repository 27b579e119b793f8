//! Game state machine.
//!
//! `GameState` owns the board, side to move, terminal status and the undo
//! history. It is the only component that mutates a board it owns; every
//! query and the random policy work on borrowed boards.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engines::engine_trait::MovePolicy;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    all_legal_moves, has_any_legal_move, legal_destinations,
};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_game_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Checkmate,
    Stalemate,
}

/// Terminal result handed to whoever renders it or keeps score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub kind: OutcomeKind,
    pub winner: Option<Color>,
}

/// Position before a move, restored by `undo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    board: Board,
    side_to_move: Color,
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
    history: Vec<Snapshot>,
    // Undo pops two plies when the opponent replies automatically.
    opponent_is_automatic: bool,
    king_in_check: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game(false)
    }
}

impl GameState {
    pub fn new_game(opponent_is_automatic: bool) -> Self {
        let mut game = Self {
            board: Board::starting(),
            side_to_move: Color::White,
            status: GameStatus::InProgress,
            history: Vec::new(),
            opponent_is_automatic,
            king_in_check: None,
        };
        game.refresh_check_indicator();
        game
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new_game(config.opponent_is_automatic)
    }

    /// Starts from an arbitrary position. The terminal evaluator runs at once,
    /// so a mated or stalemated position is reported immediately.
    pub fn from_fen(fen: &str, opponent_is_automatic: bool) -> ChessResult<Self> {
        let (board, side_to_move) = parse_fen(fen)?;
        let mut game = Self {
            board,
            side_to_move,
            status: GameStatus::InProgress,
            history: Vec::new(),
            opponent_is_automatic,
            king_in_check: None,
        };
        game.status = game.evaluate_status();
        game.refresh_check_indicator();
        Ok(game)
    }

    /// Resets to the standard initial position, keeping the opponent mode.
    pub fn reset(&mut self) {
        *self = Self::new_game(self.opponent_is_automatic);
        debug!("new game");
    }

    // -----------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn opponent_is_automatic(&self) -> bool {
        self.opponent_is_automatic
    }

    /// Number of plies that can be undone.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Legal destinations of the piece on `square`. Empty unless that piece
    /// belongs to the side to move and the game is still in progress.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        if self.status.is_game_over() {
            return Vec::new();
        }
        legal_destinations(&self.board, square, self.side_to_move)
    }

    pub fn all_legal_moves(&self) -> Vec<Move> {
        if self.status.is_game_over() {
            return Vec::new();
        }
        all_legal_moves(&self.board, self.side_to_move)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    /// Square of the side-to-move's king while it is attacked.
    #[inline]
    pub fn king_in_check(&self) -> Option<Square> {
        self.king_in_check
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Checkmate { winner } => Some(GameOutcome {
                kind: OutcomeKind::Checkmate,
                winner: Some(winner),
            }),
            GameStatus::Stalemate => Some(GameOutcome {
                kind: OutcomeKind::Stalemate,
                winner: None,
            }),
        }
    }

    pub fn to_fen(&self) -> String {
        generate_fen(&self.board, self.side_to_move)
    }

    /// Asks `policy` for a move on behalf of `color`. Returns `None` unless
    /// it is `color`'s turn in a game still in progress.
    pub fn choose_move<P>(&self, policy: &mut P, color: Color) -> Option<Move>
    where
        P: MovePolicy + ?Sized,
    {
        if self.status.is_game_over() || color != self.side_to_move {
            return None;
        }
        policy.choose_move(&self.board, color)
    }

    // -----------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------

    /// Plays `mv` for the side to move.
    ///
    /// On `Err` the state is unchanged. On success the pre-move position is
    /// pushed to history, the side to move flips, and the terminal evaluator
    /// runs for the new side.
    pub fn apply_move(&mut self, mv: Move) -> ChessResult<GameStatus> {
        if self.status.is_game_over() {
            return Err(ChessError::GameOver(format!("{:?}", self.status)));
        }

        if !legal_destinations(&self.board, mv.from, self.side_to_move).contains(&mv.to) {
            let reason = match self.board.color_at(mv.from) {
                None => "no piece on origin square",
                Some(color) if color != self.side_to_move => {
                    "piece belongs to the side not to move"
                }
                Some(_) => "destination is not a legal move",
            };
            return Err(ChessError::IllegalMove {
                from: mv.from.to_string(),
                to: mv.to.to_string(),
                reason: reason.to_owned(),
            });
        }

        let applied = apply_move(&self.board, mv)?;
        self.history.push(Snapshot {
            board: self.board,
            side_to_move: self.side_to_move,
        });
        self.board = applied.board_after;
        self.side_to_move = self.side_to_move.opposite();

        debug!(
            from = %mv.from,
            to = %mv.to,
            capture = applied.captured_piece.is_some(),
            promoted = applied.promoted,
            side_to_move = %self.side_to_move,
            "move applied"
        );

        self.status = self.evaluate_status();
        self.refresh_check_indicator();

        if let Some(outcome) = self.outcome() {
            info!(kind = ?outcome.kind, winner = ?outcome.winner, "game over");
        }

        Ok(self.status)
    }

    /// Steps back one ply, or two when the opponent is automatic and a
    /// second snapshot exists. Returns the number of plies undone; zero with
    /// an empty history.
    pub fn undo(&mut self) -> usize {
        let plies = if self.opponent_is_automatic { 2 } else { 1 };
        let mut undone = 0;
        while undone < plies {
            let Some(snapshot) = self.history.pop() else {
                break;
            };
            self.board = snapshot.board;
            self.side_to_move = snapshot.side_to_move;
            undone += 1;
        }

        if undone > 0 {
            // A snapshot is always a position where a move was made.
            self.status = GameStatus::InProgress;
            self.refresh_check_indicator();
            debug!(plies = undone, side_to_move = %self.side_to_move, "undo");
        }
        undone
    }

    // -----------------------------------------------------------------
    // Terminal evaluation
    // -----------------------------------------------------------------

    fn evaluate_status(&self) -> GameStatus {
        let side = self.side_to_move;
        if has_any_legal_move(&self.board, side) {
            GameStatus::InProgress
        } else if is_king_in_check(&self.board, side) {
            GameStatus::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    fn refresh_check_indicator(&mut self) {
        self.king_in_check = self
            .board
            .king_square(self.side_to_move)
            .filter(|_| is_king_in_check(&self.board, self.side_to_move));
    }
}
