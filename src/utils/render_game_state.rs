//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the
//! terminal driver. Rank 8 (row 0) is printed at the top.

use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    render_board_with_marks(board, &[])
}

/// Same as `render_board`, with `marks` drawn as `*` on empty squares and
/// `x` on occupied ones. Used to show the destinations of a selected piece.
pub fn render_board_with_marks(board: &Board, marks: &[Square]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let sq = Square::new(row, col);
            let marked = marks.contains(&sq);
            match (board.piece_at(sq), marked) {
                (Some(_), true) => out.push('x'),
                (Some(piece), false) => out.push(piece_to_unicode(piece)),
                (None, true) => out.push('*'),
                (None, false) => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_board_renders_black_on_top() {
        let text = render_board(&Board::starting());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn marks_show_destinations() {
        let marks = [Square::new(5, 4), Square::new(4, 4)];
        let text = render_board_with_marks(&Board::starting(), &marks);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[5], "4 · · · · * · · · 4");
        assert_eq!(lines[6], "3 · · · · * · · · 3");
    }
}
