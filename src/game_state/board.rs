//! 8x8 mailbox board and pure occupancy queries.
//!
//! `Board` is a small `Copy` value, so legality checks simulate each candidate
//! move on an independent copy rather than making and unmaking in place.

use crate::game_state::chess_types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    // [row][col]
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard initial position.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for col in 0..8u8 {
            let kind = BACK_RANK[col as usize];
            board.set_piece(Square::new(0, col), Piece::new(kind, Color::Black));
            board.set_piece(Square::new(1, col), Piece::new(PieceKind::Pawn, Color::Black));
            board.set_piece(Square::new(6, col), Piece::new(PieceKind::Pawn, Color::White));
            board.set_piece(Square::new(7, col), Piece::new(kind, Color::White));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color)
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn is_occupied_by(&self, square: Square, color: Color) -> bool {
        self.color_at(square) == Some(color)
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.cells[square.row() as usize][square.col() as usize] = Some(piece);
    }

    /// Clears `square`, returning whatever stood there.
    #[inline]
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].take()
    }

    /// Every piece of `color` with its square, in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|piece| piece.color == color)
                .map(|piece| (sq, piece))
        })
    }

    /// First king of `color` in row-major order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_board_has_thirty_two_pieces() {
        let board = Board::starting();
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
        assert_eq!(
            board.piece_at(Square::new(0, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            board.piece_at(Square::new(7, 4)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert!(board.is_empty(Square::new(4, 4)));
    }

    #[test]
    fn king_squares_on_starting_board() {
        let board = Board::starting();
        assert_eq!(board.king_square(Color::White), Some(Square::new(7, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square::new(0, 4)));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn remove_piece_returns_previous_occupant() {
        let mut board = Board::starting();
        let e2 = Square::new(6, 4);
        assert_eq!(
            board.remove_piece(e2),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(board.remove_piece(e2), None);
        assert!(!board.is_occupied_by(e2, Color::White));
    }
}
