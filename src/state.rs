//! The live game snapshot and its pure move/drop transitions.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::capture::capture_target;
use crate::drops::{drop_piece, validate_drop, DropError};
use crate::hand::Hands;
use crate::history::HistoryEntry;
use crate::movegen::is_legal_move;
use crate::piece::{Piece, PieceKind, Player};
use crate::promotion::{may_promote, must_promote};
use crate::square::Square;

/// Board, hands, side to move, and move counter. The same shape as a
/// history entry; conversions are lossless.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub hands: Hands,
    pub turn: Player,
    pub move_number: u32,
}

impl GameState {
    /// The starting position: 40 pieces, empty hands, Sente to move.
    pub fn initial() -> GameState {
        GameState {
            board: Board::initial(),
            hands: Hands::empty(),
            turn: Player::Sente,
            move_number: 0,
        }
    }

    pub fn as_entry(&self) -> HistoryEntry {
        HistoryEntry {
            board: self.board.clone(),
            hands: self.hands.clone(),
            turn: self.turn,
            move_number: self.move_number,
        }
    }

    pub fn from_entry(entry: &HistoryEntry) -> GameState {
        GameState {
            board: entry.board.clone(),
            hands: entry.hands.clone(),
            turn: entry.turn,
            move_number: entry.move_number,
        }
    }

    /// Apply a board move for the side to move. `None` unless a friendly
    /// piece stands on `from` and the move is legal. Captures credit the
    /// target's base kind to the mover's hand; promotion is applied when
    /// requested and permitted, or unconditionally when forced.
    pub fn apply_move(&self, from: Square, to: Square, promote: bool) -> Option<GameState> {
        let piece = self.board.piece_at(from)?;
        if piece.owner != self.turn {
            return None;
        }
        if !is_legal_move(from, to, piece, &self.board) {
            return None;
        }

        let mut board = self.board.clone();
        let mut hands = self.hands.clone();
        if let Some(target) = capture_target(&board, to, self.turn) {
            hands = hands.with_captured(target, self.turn);
            board = board.without_piece_at(to, target);
        }

        let promoted = piece.promoted
            || must_promote(piece, to.rank())
            || (promote && may_promote(piece, from, to));
        let moved = Piece { promoted, ..piece };
        let board = board.without_piece_at(from, piece).place(moved, to);

        Some(GameState {
            board,
            hands,
            turn: self.turn.opponent(),
            move_number: self.move_number + 1,
        })
    }

    /// Drop a held piece for the side to move. The piece must be in hand;
    /// the target square must pass full drop validation.
    pub fn apply_drop(&self, kind: PieceKind, file: u8, rank: u8) -> Result<GameState, DropError> {
        if self.hands.hand(self.turn).count(kind) == 0 {
            return Err(DropError::NotInHand);
        }
        let square = validate_drop(&self.board, file, rank, kind, self.turn)?;

        Ok(GameState {
            board: drop_piece(&self.board, square, kind, self.turn),
            hands: self.hands.with_removed(kind, self.turn),
            turn: self.turn.opponent(),
            move_number: self.move_number + 1,
        })
    }
}
