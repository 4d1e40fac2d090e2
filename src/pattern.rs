//! Static movement rule data, expressed in Sente orientation. Gote's
//! vectors are derived by negation at lookup time, never stored twice.

use crate::piece::{PieceKind, Player};

/// A movement direction as (file delta, rank delta). Positive `drank`
/// is towards Gote, i.e. forward for Sente.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vector {
    pub dfile: i8,
    pub drank: i8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reach {
    /// One square only.
    Step,
    /// Slide until blocked or off the board.
    Slide,
}

#[derive(Debug)]
pub struct MovePattern {
    pub vectors: &'static [Vector],
    pub reach: Reach,
}

const fn v(dfile: i8, drank: i8) -> Vector {
    Vector { dfile, drank }
}

static PAWN: MovePattern = MovePattern {
    vectors: &[v(0, 1)],
    reach: Reach::Step,
};

static LANCE: MovePattern = MovePattern {
    vectors: &[v(0, 1)],
    reach: Reach::Slide,
};

static KNIGHT: MovePattern = MovePattern {
    vectors: &[v(-1, 2), v(1, 2)],
    reach: Reach::Step,
};

static SILVER: MovePattern = MovePattern {
    vectors: &[v(-1, 1), v(0, 1), v(1, 1), v(-1, -1), v(1, -1)],
    reach: Reach::Step,
};

static GOLD: MovePattern = MovePattern {
    vectors: &[v(-1, 1), v(0, 1), v(1, 1), v(-1, 0), v(1, 0), v(0, -1)],
    reach: Reach::Step,
};

static ROOK: MovePattern = MovePattern {
    vectors: &[v(0, 1), v(0, -1), v(1, 0), v(-1, 0)],
    reach: Reach::Slide,
};

static BISHOP: MovePattern = MovePattern {
    vectors: &[v(1, 1), v(1, -1), v(-1, 1), v(-1, -1)],
    reach: Reach::Slide,
};

static COMPASS: [Vector; 8] = [
    v(-1, 1),
    v(0, 1),
    v(1, 1),
    v(-1, 0),
    v(1, 0),
    v(-1, -1),
    v(0, -1),
    v(1, -1),
];

static ROYAL: MovePattern = MovePattern {
    vectors: &COMPASS,
    reach: Reach::Step,
};

// Dragon (promoted Rook) and Horse (promoted Bishop) list all eight
// directions; the added directions are cut to a single step by
// `effective_reach`.
static DRAGON: MovePattern = MovePattern {
    vectors: &COMPASS,
    reach: Reach::Slide,
};

static HORSE: MovePattern = MovePattern {
    vectors: &COMPASS,
    reach: Reach::Slide,
};

/// Movement pattern for a (kind, promoted) pairing. Total: the promoted
/// flag is ignored for kinds that never promote.
pub fn pattern(kind: PieceKind, promoted: bool) -> &'static MovePattern {
    match (kind, promoted) {
        (PieceKind::Rook, true) => &DRAGON,
        (PieceKind::Bishop, true) => &HORSE,
        (PieceKind::Pawn | PieceKind::Lance | PieceKind::Knight | PieceKind::Silver, true) => {
            &GOLD
        }
        (PieceKind::Pawn, false) => &PAWN,
        (PieceKind::Lance, false) => &LANCE,
        (PieceKind::Knight, false) => &KNIGHT,
        (PieceKind::Silver, false) => &SILVER,
        (PieceKind::Gold, _) => &GOLD,
        (PieceKind::Rook, false) => &ROOK,
        (PieceKind::Bishop, false) => &BISHOP,
        (PieceKind::King | PieceKind::JeweledKing, _) => &ROYAL,
    }
}

/// Per-vector reach. The Dragon slides only in its native orthogonals
/// (diagonals are one step); the Horse the other way round. Every other
/// pairing uses the pattern's uniform reach.
pub fn effective_reach(kind: PieceKind, promoted: bool, vector: Vector) -> Reach {
    let diagonal = vector.dfile != 0 && vector.drank != 0;
    match (kind, promoted) {
        (PieceKind::Rook, true) if diagonal => Reach::Step,
        (PieceKind::Bishop, true) if !diagonal => Reach::Step,
        _ => pattern(kind, promoted).reach,
    }
}

/// Orient a Sente-relative vector for the given owner.
pub fn oriented(vector: Vector, owner: Player) -> Vector {
    match owner {
        Player::Sente => vector,
        Player::Gote => Vector {
            dfile: -vector.dfile,
            drank: -vector.drank,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_counts_per_kind() {
        assert_eq!(pattern(PieceKind::Pawn, false).vectors.len(), 1);
        assert_eq!(pattern(PieceKind::Lance, false).vectors.len(), 1);
        assert_eq!(pattern(PieceKind::Knight, false).vectors.len(), 2);
        assert_eq!(pattern(PieceKind::Silver, false).vectors.len(), 5);
        assert_eq!(pattern(PieceKind::Gold, false).vectors.len(), 6);
        assert_eq!(pattern(PieceKind::Rook, false).vectors.len(), 4);
        assert_eq!(pattern(PieceKind::Bishop, false).vectors.len(), 4);
        assert_eq!(pattern(PieceKind::King, false).vectors.len(), 8);
        assert_eq!(pattern(PieceKind::JeweledKing, false).vectors.len(), 8);
    }

    #[test]
    fn promoted_minor_pieces_move_as_gold() {
        for kind in [
            PieceKind::Pawn,
            PieceKind::Lance,
            PieceKind::Knight,
            PieceKind::Silver,
        ] {
            let promoted = pattern(kind, true);
            let gold = pattern(PieceKind::Gold, false);
            assert_eq!(promoted.vectors, gold.vectors);
            assert_eq!(promoted.reach, gold.reach);
        }
    }

    #[test]
    fn dragon_slides_orthogonally_and_steps_diagonally() {
        for &vec in pattern(PieceKind::Rook, true).vectors {
            let expected = if vec.dfile != 0 && vec.drank != 0 {
                Reach::Step
            } else {
                Reach::Slide
            };
            assert_eq!(effective_reach(PieceKind::Rook, true, vec), expected);
        }
    }

    #[test]
    fn horse_slides_diagonally_and_steps_orthogonally() {
        for &vec in pattern(PieceKind::Bishop, true).vectors {
            let expected = if vec.dfile != 0 && vec.drank != 0 {
                Reach::Slide
            } else {
                Reach::Step
            };
            assert_eq!(effective_reach(PieceKind::Bishop, true, vec), expected);
        }
    }

    #[test]
    fn gote_orientation_negates_both_components() {
        let knight = oriented(v(-1, 2), Player::Gote);
        assert_eq!(knight, v(1, -2));
        // Integer zero has no sign; a sideways vector stays comparable.
        let sideways = oriented(v(1, 0), Player::Gote);
        assert_eq!(sideways, v(-1, 0));
    }

    #[test]
    fn unpromoted_reach_is_uniform() {
        for &vec in pattern(PieceKind::Rook, false).vectors {
            assert_eq!(effective_reach(PieceKind::Rook, false, vec), Reach::Slide);
        }
        for &vec in pattern(PieceKind::Gold, false).vectors {
            assert_eq!(effective_reach(PieceKind::Gold, false, vec), Reach::Step);
        }
    }
}
