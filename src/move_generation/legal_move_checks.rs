//! Attack and check detection.
//!
//! A square is attacked by a color when any piece of that color has a
//! pseudo-legal move ending on it. This is a full-board scan per query.

use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_legal_moves::generate_pseudo_legal_destinations;

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let mut scratch = Vec::with_capacity(28);
    board.pieces_of(attacker_color).any(|(from, _)| {
        scratch.clear();
        generate_pseudo_legal_destinations(board, from, &mut scratch);
        scratch.contains(&square)
    })
}

/// Squares of every `attacker_color` piece that attacks `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<Square> {
    let mut scratch = Vec::with_capacity(28);
    board
        .pieces_of(attacker_color)
        .filter_map(|(from, _)| {
            scratch.clear();
            generate_pseudo_legal_destinations(board, from, &mut scratch);
            scratch.contains(&square).then_some(from)
        })
        .collect()
}

/// A side without a king on the board is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn starting_position_has_no_checks() {
        let board = Board::starting();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn third_rank_is_attacked_by_white_pawns_and_knights() {
        let board = Board::starting();
        for col in 0..8 {
            assert!(is_square_attacked(&board, Square::new(5, col), Color::White));
            assert!(!is_square_attacked(&board, Square::new(4, col), Color::White));
        }
    }

    #[test]
    fn pawn_pushes_do_not_attack_occupied_squares() {
        // Black king directly in front of a white pawn is not in check.
        let (board, _) = parse_fen("8/8/8/4k3/4P3/8/8/4K3 w").expect("fen should parse");
        assert!(!is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn sliding_check_is_blocked_by_interposed_piece() {
        let (open, _) = parse_fen("4k3/8/8/8/8/8/8/4R1K1 b").expect("fen should parse");
        assert!(is_king_in_check(&open, Color::Black));
        assert_eq!(
            attackers_to_square(&open, Square::new(0, 4), Color::White),
            vec![Square::new(7, 4)]
        );

        let (blocked, _) = parse_fen("4k3/8/8/4n3/8/8/8/4R1K1 b").expect("fen should parse");
        assert!(!is_king_in_check(&blocked, Color::Black));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let (board, _) = parse_fen("8/8/8/8/8/8/8/R3K3 w").expect("fen should parse");
        assert!(!is_king_in_check(&board, Color::Black));
    }
}
