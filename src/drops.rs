//! Drop legality, including the double-pawn prohibition (nifu).

use std::fmt;

use crate::board::Board;
use crate::piece::{Piece, PieceKind, Player};
use crate::square::Square;

/// Why a drop was rejected. The façade shows `message_ja` to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropError {
    OutOfBoard,
    SquareOccupied,
    DoublePawn,
    NotInHand,
}

impl DropError {
    pub fn message_ja(self) -> &'static str {
        match self {
            DropError::OutOfBoard => "盤面外には打てません",
            DropError::SquareOccupied => "既に駒があるマスには打てません",
            DropError::DoublePawn => "二歩は反則です",
            DropError::NotInHand => "その駒は持ち駒にありません",
        }
    }
}

impl fmt::Display for DropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            DropError::OutOfBoard => "drop target is outside the board",
            DropError::SquareOccupied => "drop target is already occupied",
            DropError::DoublePawn => "a second unpromoted pawn on the same file",
            DropError::NotInHand => "no such piece in hand",
        };
        write!(f, "{message}")
    }
}

impl std::error::Error for DropError {}

/// True when `owner` already has an unpromoted pawn anywhere on `file`.
/// Promoted pawns do not count against the limit.
pub fn has_unpromoted_pawn_on_file(board: &Board, file: u8, owner: Player) -> bool {
    board.pieces().iter().any(|p| {
        p.piece.kind == PieceKind::Pawn
            && p.piece.owner == owner
            && !p.piece.promoted
            && p.square.file() == file
    })
}

/// Coarse bounds-and-occupancy check, sufficient for non-pawn drops.
pub fn can_drop(board: &Board, file: u8, rank: u8) -> bool {
    Square::new(file, rank).is_some_and(|square| !board.is_occupied(square))
}

/// Full drop validation. Checks bounds, then occupancy, then — for pawns
/// only — the nifu rule, so the reported reason is the outermost failure.
/// Returns the validated square on success.
pub fn validate_drop(
    board: &Board,
    file: u8,
    rank: u8,
    kind: PieceKind,
    owner: Player,
) -> Result<Square, DropError> {
    let square = Square::new(file, rank).ok_or(DropError::OutOfBoard)?;
    if board.is_occupied(square) {
        return Err(DropError::SquareOccupied);
    }
    if kind == PieceKind::Pawn && has_unpromoted_pawn_on_file(board, file, owner) {
        return Err(DropError::DoublePawn);
    }
    Ok(square)
}

/// A new board with an unpromoted piece of (kind, owner) at `square`.
pub fn drop_piece(board: &Board, square: Square, kind: PieceKind, owner: Player) -> Board {
    board.place(Piece::new(kind, owner), square)
}

/// Every square where `owner` may drop a pawn: empty, and on a file
/// without one of their unpromoted pawns. O(81) scan; correctness over
/// speed at this scale.
pub fn valid_pawn_drop_squares(board: &Board, owner: Player) -> Vec<Square> {
    Square::all()
        .filter(|sq| {
            !board.is_occupied(*sq) && !has_unpromoted_pawn_on_file(board, sq.file(), owner)
        })
        .collect()
}
