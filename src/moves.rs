use serde::{Deserialize, Serialize};

use crate::piece::PieceKind;
use crate::square::Square;
use crate::state::GameState;

/// A move intent: relocate a board piece (optionally promoting) or drop
/// a held piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Normal {
        from: Square,
        to: Square,
        promote: bool,
    },
    Drop {
        to: Square,
        kind: PieceKind,
    },
}

fn fullwidth_file(file: u8) -> &'static str {
    match file {
        1 => "１",
        2 => "２",
        3 => "３",
        4 => "４",
        5 => "５",
        6 => "６",
        7 => "７",
        8 => "８",
        9 => "９",
        _ => "?",
    }
}

fn kanji_rank(rank: u8) -> &'static str {
    match rank {
        1 => "一",
        2 => "二",
        3 => "三",
        4 => "四",
        5 => "五",
        6 => "六",
        7 => "七",
        8 => "八",
        9 => "九",
        _ => "?",
    }
}

impl Move {
    /// Japanese notation for this move played from `state`, e.g.
    /// ☗５五銀, ☗２三歩成, ☖３四歩打.
    pub fn japanese(&self, state: &GameState) -> String {
        let mark = match state.turn {
            crate::piece::Player::Sente => "☗",
            crate::piece::Player::Gote => "☖",
        };
        match *self {
            Move::Normal { from, to, promote } => {
                let name = state.board.piece_at(from).map_or("?", |p| p.kanji());
                let suffix = if promote { "成" } else { "" };
                format!(
                    "{mark}{}{}{name}{suffix}",
                    fullwidth_file(to.file()),
                    kanji_rank(to.rank())
                )
            }
            Move::Drop { to, kind } => format!(
                "{mark}{}{}{}打",
                fullwidth_file(to.file()),
                kanji_rank(to.rank()),
                kind.kanji()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::hand::Hands;
    use crate::piece::{Piece, Player};

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn normal_move_text() {
        let state = GameState::initial();
        let mv = Move::Normal {
            from: sq(5, 3),
            to: sq(5, 4),
            promote: false,
        };
        assert_eq!(mv.japanese(&state), "☗５四歩");
    }

    #[test]
    fn promotion_move_text() {
        let board = Board::empty().place(Piece::new(PieceKind::Silver, Player::Gote), sq(2, 4));
        let state = GameState {
            board,
            hands: Hands::empty(),
            turn: Player::Gote,
            move_number: 3,
        };
        let mv = Move::Normal {
            from: sq(2, 4),
            to: sq(2, 3),
            promote: true,
        };
        assert_eq!(mv.japanese(&state), "☖２三銀成");
    }

    #[test]
    fn drop_move_text() {
        let state = GameState::initial();
        let mv = Move::Drop {
            to: sq(4, 5),
            kind: PieceKind::Pawn,
        };
        assert_eq!(mv.japanese(&state), "☗４五歩打");
    }

    #[test]
    fn promoted_piece_moves_use_the_promoted_name() {
        let dragon = Piece {
            promoted: true,
            ..Piece::new(PieceKind::Rook, Player::Sente)
        };
        let state = GameState {
            board: Board::empty().place(dragon, sq(5, 5)),
            hands: Hands::empty(),
            turn: Player::Sente,
            move_number: 10,
        };
        let mv = Move::Normal {
            from: sq(5, 5),
            to: sq(5, 6),
            promote: false,
        };
        assert_eq!(mv.japanese(&state), "☗５六龍");
    }
}
