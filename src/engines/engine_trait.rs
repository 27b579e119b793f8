//! Opponent policy abstraction.
//!
//! A policy is a function of (board, side to move) plus whatever internal
//! state it keeps, such as a random number generator. Stronger engines can
//! be swapped in behind this trait without touching move generation or the
//! game state machine.

use crate::game_state::chess_types::*;

pub trait MovePolicy {
    fn name(&self) -> &str;

    /// Picks a legal move for `side_to_move`, or `None` when it has none.
    fn choose_move(&mut self, board: &Board, side_to_move: Color) -> Option<Move>;
}
