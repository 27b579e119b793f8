//! Long algebraic move text, such as `e2e4`.
//!
//! Promotion is always to a queen, so a fifth character is accepted only
//! when it is `q`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Move;
use crate::utils::algebraic::algebraic_to_square;

pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}

pub fn long_algebraic_to_move(long_algebraic: &str) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMoveText(long_algebraic.to_owned()));
    }

    if text.len() == 5 && !text[4..].eq_ignore_ascii_case("q") {
        return Err(ChessError::InvalidMoveText(format!(
            "{long_algebraic}: only queen promotion is supported"
        )));
    }

    let from = algebraic_to_square(&text[0..2])
        .map_err(|_| ChessError::InvalidMoveText(long_algebraic.to_owned()))?;
    let to = algebraic_to_square(&text[2..4])
        .map_err(|_| ChessError::InvalidMoveText(long_algebraic.to_owned()))?;

    Ok(Move::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;

    #[test]
    fn parses_plain_and_queen_promotion_moves() {
        assert_eq!(
            long_algebraic_to_move("e2e4"),
            Ok(Move::new(Square::new(6, 4), Square::new(4, 4)))
        );
        assert_eq!(
            long_algebraic_to_move("a7a8q"),
            Ok(Move::new(Square::new(1, 0), Square::new(0, 0)))
        );
        assert_eq!(move_to_long_algebraic(Move::new(Square::new(6, 4), Square::new(4, 4))), "e2e4");
    }

    #[test]
    fn rejects_underpromotion_and_garbage() {
        for bad in ["a7a8n", "e2", "e2e9", "zz99", "e2e4e5", "é2e4"] {
            assert!(
                matches!(long_algebraic_to_move(bad), Err(ChessError::InvalidMoveText(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
