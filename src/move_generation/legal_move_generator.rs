//! Legality filter.
//!
//! Each pseudo-legal candidate is played on its own copy of the board and kept
//! only if the mover's king is not attacked afterwards. Evaluating the
//! post-move position is what catches pinned pieces and king walks into
//! attacked squares.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::simulate_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pseudo_legal_moves::pseudo_legal_destinations;

/// Legal destinations of the piece on `from` for `side_to_move`.
///
/// Empty when `from` is empty or holds a piece of the other side.
pub fn legal_destinations(board: &Board, from: Square, side_to_move: Color) -> Vec<Square> {
    match board.color_at(from) {
        Some(color) if color == side_to_move => {}
        _ => return Vec::new(),
    }

    let mut destinations = pseudo_legal_destinations(board, from);
    destinations.retain(|&to| {
        let next = simulate_move(board, Move::new(from, to));
        !is_king_in_check(&next, side_to_move)
    });
    destinations
}

/// Every legal move of `side_to_move`, grouped by origin in row-major order.
pub fn all_legal_moves(board: &Board, side_to_move: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(side_to_move) {
        moves.extend(
            legal_destinations(board, from, side_to_move)
                .into_iter()
                .map(|to| Move::new(from, to)),
        );
    }
    moves
}

/// Same outcome as `!all_legal_moves(..).is_empty()`, stopping at the first hit.
pub fn has_any_legal_move(board: &Board, side_to_move: Color) -> bool {
    board
        .pieces_of(side_to_move)
        .any(|(from, _)| !legal_destinations(board, from, side_to_move).is_empty())
}
