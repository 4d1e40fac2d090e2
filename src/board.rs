use std::fmt;

use serde::{Deserialize, Serialize};

use crate::piece::{Piece, PieceKind, Player};
use crate::square::Square;

/// A piece standing on a square. Serializes flat, matching the persisted
/// form: `{"type":"歩","player":"sente","promoted":false,"file":5,"rank":3}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedPiece {
    #[serde(flatten)]
    pub piece: Piece,
    #[serde(flatten)]
    pub square: Square,
}

/// A board snapshot: the unordered collection of placed pieces. Never
/// mutated in place; every operation returns a new board.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pieces: Vec<PlacedPiece>,
}

/// Sente's half of the standard setup; Gote's side is the mirror image.
const SENTE_SETUP: [(PieceKind, u8, u8); 20] = [
    (PieceKind::Lance, 1, 1),
    (PieceKind::Knight, 2, 1),
    (PieceKind::Silver, 3, 1),
    (PieceKind::Gold, 4, 1),
    (PieceKind::King, 5, 1),
    (PieceKind::Gold, 6, 1),
    (PieceKind::Silver, 7, 1),
    (PieceKind::Knight, 8, 1),
    (PieceKind::Lance, 9, 1),
    (PieceKind::Bishop, 2, 2),
    (PieceKind::Rook, 8, 2),
    (PieceKind::Pawn, 1, 3),
    (PieceKind::Pawn, 2, 3),
    (PieceKind::Pawn, 3, 3),
    (PieceKind::Pawn, 4, 3),
    (PieceKind::Pawn, 5, 3),
    (PieceKind::Pawn, 6, 3),
    (PieceKind::Pawn, 7, 3),
    (PieceKind::Pawn, 8, 3),
    (PieceKind::Pawn, 9, 3),
];

impl Board {
    /// An empty board. Useful for setting up test positions.
    pub fn empty() -> Board {
        Board { pieces: Vec::new() }
    }

    /// The standard 40-piece starting position.
    pub fn initial() -> Board {
        let mut pieces = Vec::with_capacity(40);
        for &(kind, file, rank) in &SENTE_SETUP {
            if let Some(square) = Square::new(file, rank) {
                pieces.push(PlacedPiece {
                    piece: Piece::new(kind, Player::Sente),
                    square,
                });
            }
            // Gote mirrors through the centre rank; their royal is 玉.
            let gote_kind = if kind == PieceKind::King {
                PieceKind::JeweledKing
            } else {
                kind
            };
            if let Some(square) = Square::new(file, 10 - rank) {
                pieces.push(PlacedPiece {
                    piece: Piece::new(gote_kind, Player::Gote),
                    square,
                });
            }
        }
        Board { pieces }
    }

    pub fn pieces(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pieces
            .iter()
            .find(|p| p.square == square)
            .map(|p| p.piece)
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.pieces.iter().any(|p| p.square == square)
    }

    /// A new board with `piece` added at `square`. The caller is
    /// responsible for occupancy; the engines validate before placing.
    pub fn place(&self, piece: Piece, square: Square) -> Board {
        let mut pieces = self.pieces.clone();
        pieces.push(PlacedPiece { piece, square });
        Board { pieces }
    }

    /// A new board with the exact (piece, square) association removed.
    pub fn without_piece_at(&self, square: Square, piece: Piece) -> Board {
        Board {
            pieces: self
                .pieces
                .iter()
                .filter(|p| !(p.square == square && p.piece == piece))
                .copied()
                .collect(),
        }
    }
}

impl fmt::Display for Board {
    /// Kanji diagram, Gote's edge (rank 9) on top, file 9 on the left.
    /// Gote's pieces are marked with a leading `v`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (1..=9u8).rev() {
            for file in (1..=9u8).rev() {
                let occupant = Square::new(file, rank).and_then(|sq| self.piece_at(sq));
                match occupant {
                    Some(p) if p.owner == Player::Gote => write!(f, "v{}", p.diagram_kanji())?,
                    Some(p) => write!(f, " {}", p.diagram_kanji())?,
                    None => write!(f, " ・")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
