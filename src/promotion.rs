//! Promotion eligibility: optional on entering the enemy zone, forced
//! when the piece would otherwise have no further move.

use crate::piece::{Piece, PieceKind, Player};
use crate::square::Square;

/// All kinds promote except the two royals and Gold.
pub fn is_promotable(kind: PieceKind) -> bool {
    !matches!(
        kind,
        PieceKind::Gold | PieceKind::King | PieceKind::JeweledKing
    )
}

/// The three ranks nearest the opponent's home edge.
pub fn is_enemy_zone(rank: u8, owner: Player) -> bool {
    match owner {
        Player::Sente => rank >= 7,
        Player::Gote => rank <= 3,
    }
}

/// Whether the mover may choose to promote on this move: a promotable,
/// not-yet-promoted piece whose origin or destination lies in its enemy
/// zone.
pub fn may_promote(piece: Piece, origin: Square, destination: Square) -> bool {
    if !is_promotable(piece.kind) || piece.promoted {
        return false;
    }
    is_enemy_zone(origin.rank(), piece.owner) || is_enemy_zone(destination.rank(), piece.owner)
}

/// Whether promotion is compulsory: the piece would have no legal future
/// move from `destination_rank`. Pawn and Lance on the far rank; Knight
/// on the two far ranks (Sente: rank >= 8, Gote: rank <= 2 — these exact
/// comparisons are load-bearing and pinned by tests).
pub fn must_promote(piece: Piece, destination_rank: u8) -> bool {
    if piece.promoted {
        return false;
    }

    let sente = piece.owner == Player::Sente;
    let last_rank = if sente { 9 } else { 1 };
    let second_last_rank = if sente { 8 } else { 2 };

    match piece.kind {
        PieceKind::Pawn | PieceKind::Lance => destination_rank == last_rank,
        PieceKind::Knight => {
            if sente {
                destination_rank >= second_last_rank
            } else {
                destination_rank <= second_last_rank
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn royals_and_gold_never_promote() {
        assert!(!is_promotable(PieceKind::King));
        assert!(!is_promotable(PieceKind::JeweledKing));
        assert!(!is_promotable(PieceKind::Gold));
        for kind in [
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Silver,
            PieceKind::Knight,
            PieceKind::Lance,
            PieceKind::Pawn,
        ] {
            assert!(is_promotable(kind), "{kind:?}");
        }
    }

    #[test]
    fn enemy_zone_boundaries() {
        assert!(!is_enemy_zone(6, Player::Sente));
        assert!(is_enemy_zone(7, Player::Sente));
        assert!(is_enemy_zone(9, Player::Sente));
        assert!(is_enemy_zone(1, Player::Gote));
        assert!(is_enemy_zone(3, Player::Gote));
        assert!(!is_enemy_zone(4, Player::Gote));
    }

    #[test]
    fn promotion_offered_when_either_end_is_in_the_zone() {
        let silver = Piece::new(PieceKind::Silver, Player::Sente);
        // Into the zone.
        assert!(may_promote(silver, sq(5, 6), sq(5, 7)));
        // Out of the zone.
        assert!(may_promote(silver, sq(5, 7), sq(5, 6)));
        // Entirely within.
        assert!(may_promote(silver, sq(5, 8), sq(5, 9)));
        // Entirely outside.
        assert!(!may_promote(silver, sq(5, 5), sq(5, 6)));
    }

    #[test]
    fn already_promoted_pieces_cannot_promote_again() {
        let dragon = Piece {
            promoted: true,
            ..Piece::new(PieceKind::Rook, Player::Sente)
        };
        assert!(!may_promote(dragon, sq(5, 7), sq(5, 8)));
        assert!(!must_promote(dragon, 9));
    }

    #[test]
    fn pawn_and_lance_must_promote_on_the_far_rank() {
        for kind in [PieceKind::Pawn, PieceKind::Lance] {
            let sente = Piece::new(kind, Player::Sente);
            assert!(must_promote(sente, 9), "{kind:?}");
            assert!(!must_promote(sente, 8), "{kind:?}");

            let gote = Piece::new(kind, Player::Gote);
            assert!(must_promote(gote, 1), "{kind:?}");
            assert!(!must_promote(gote, 2), "{kind:?}");
        }
    }

    #[test]
    fn knight_must_promote_on_the_two_far_ranks() {
        let sente = Piece::new(PieceKind::Knight, Player::Sente);
        assert!(must_promote(sente, 8));
        assert!(must_promote(sente, 9));
        assert!(!must_promote(sente, 7));

        let gote = Piece::new(PieceKind::Knight, Player::Gote);
        assert!(must_promote(gote, 1));
        assert!(must_promote(gote, 2));
        assert!(!must_promote(gote, 3));
    }

    #[test]
    fn sliders_are_never_forced() {
        assert!(!must_promote(Piece::new(PieceKind::Rook, Player::Sente), 9));
        assert!(!must_promote(Piece::new(PieceKind::Bishop, Player::Gote), 1));
        assert!(!must_promote(Piece::new(PieceKind::Silver, Player::Sente), 9));
        assert!(!must_promote(Piece::new(PieceKind::Gold, Player::Sente), 9));
    }

    #[test]
    fn forced_promotion_holds_even_when_optional_promotion_also_applies() {
        let pawn = Piece::new(PieceKind::Pawn, Player::Sente);
        assert!(may_promote(pawn, sq(5, 8), sq(5, 9)));
        assert!(must_promote(pawn, 9));
    }
}
