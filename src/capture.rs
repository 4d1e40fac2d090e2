use crate::board::Board;
use crate::piece::{Piece, Player};
use crate::square::Square;

/// The occupant of `square`, but only if it belongs to the opponent of
/// `mover`. Empty squares and friendly occupants yield `None`.
pub fn capture_target(board: &Board, square: Square, mover: Player) -> Option<Piece> {
    board.piece_at(square).filter(|p| p.owner != mover)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn enemy_occupant_is_a_target() {
        let pawn = Piece::new(PieceKind::Pawn, Player::Gote);
        let board = Board::empty().place(pawn, sq(5, 5));
        assert_eq!(capture_target(&board, sq(5, 5), Player::Sente), Some(pawn));
    }

    #[test]
    fn friendly_occupant_is_not_a_target() {
        let pawn = Piece::new(PieceKind::Pawn, Player::Sente);
        let board = Board::empty().place(pawn, sq(5, 5));
        assert_eq!(capture_target(&board, sq(5, 5), Player::Sente), None);
        assert_eq!(capture_target(&board, sq(5, 5), Player::Gote), Some(pawn));
    }

    #[test]
    fn empty_square_is_not_a_target() {
        assert_eq!(
            capture_target(&Board::empty(), sq(1, 1), Player::Sente),
            None
        );
    }
}
