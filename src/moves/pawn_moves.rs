use crate::game_state::chess_rules::pawn_home_row;
use crate::game_state::chess_types::*;

/// Forward pushes onto empty squares, a double step from the home row, and
/// diagonal captures of enemy pieces. No en passant.
pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = color.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if from.row() == pawn_home_row(color) {
                if let Some(two_step) = one_step.offset(dir, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };
        if board.is_occupied_by(to, color.opposite()) {
            out.push(to);
        }
    }
}
