use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::{generate_sliding_moves, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    generate_sliding_moves(board, from, color, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_on_d4_sees_thirteen_squares() {
        let mut out = Vec::new();
        generate_bishop_moves(&Board::empty(), Square::new(4, 3), Color::White, &mut out);
        assert_eq!(out.len(), 13);
    }
}
