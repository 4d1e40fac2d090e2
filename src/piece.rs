use serde::{Deserialize, Serialize};

/// The two players. Sente moves first and sits at the rank-1 edge;
/// Gote sits at the rank-9 edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Sente,
    Gote,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Sente => Player::Gote,
            Player::Gote => Player::Sente,
        }
    }

    /// Turn banner shown by the UI, e.g. 先手の番.
    pub fn turn_label(self) -> &'static str {
        match self {
            Player::Sente => "先手の番",
            Player::Gote => "後手の番",
        }
    }
}

/// The nine base piece kinds. Sente's royal is 王, Gote's is 玉; they are
/// distinct kinds so a board diagram renders both correctly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    #[serde(rename = "王")]
    King,
    #[serde(rename = "玉")]
    JeweledKing,
    #[serde(rename = "飛")]
    Rook,
    #[serde(rename = "角")]
    Bishop,
    #[serde(rename = "金")]
    Gold,
    #[serde(rename = "銀")]
    Silver,
    #[serde(rename = "桂")]
    Knight,
    #[serde(rename = "香")]
    Lance,
    #[serde(rename = "歩")]
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 9] = [
        PieceKind::King,
        PieceKind::JeweledKing,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Gold,
        PieceKind::Silver,
        PieceKind::Knight,
        PieceKind::Lance,
        PieceKind::Pawn,
    ];

    pub fn kanji(self) -> &'static str {
        match self {
            PieceKind::King => "王",
            PieceKind::JeweledKing => "玉",
            PieceKind::Rook => "飛",
            PieceKind::Bishop => "角",
            PieceKind::Gold => "金",
            PieceKind::Silver => "銀",
            PieceKind::Knight => "桂",
            PieceKind::Lance => "香",
            PieceKind::Pawn => "歩",
        }
    }

    /// Notation name of the promoted form, `None` for kinds that never
    /// promote (the two royals and Gold).
    pub fn promoted_kanji(self) -> Option<&'static str> {
        match self {
            PieceKind::Rook => Some("龍"),
            PieceKind::Bishop => Some("馬"),
            PieceKind::Silver => Some("成銀"),
            PieceKind::Knight => Some("成桂"),
            PieceKind::Lance => Some("成香"),
            PieceKind::Pawn => Some("と"),
            _ => None,
        }
    }

    /// Single-width abbreviation used in board diagrams (成銀 → 全 etc.).
    pub fn promoted_abbreviation(self) -> Option<&'static str> {
        match self {
            PieceKind::Rook => Some("龍"),
            PieceKind::Bishop => Some("馬"),
            PieceKind::Silver => Some("全"),
            PieceKind::Knight => Some("圭"),
            PieceKind::Lance => Some("杏"),
            PieceKind::Pawn => Some("と"),
            _ => None,
        }
    }

    pub fn from_kanji(s: &str) -> Option<PieceKind> {
        PieceKind::ALL.iter().copied().find(|k| k.kanji() == s)
    }

    pub fn is_royal(self) -> bool {
        matches!(self, PieceKind::King | PieceKind::JeweledKing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    #[serde(rename = "player")]
    pub owner: Player,
    #[serde(default)]
    pub promoted: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, owner: Player) -> Piece {
        Piece {
            kind,
            owner,
            promoted: false,
        }
    }

    /// Notation name of the piece as it currently stands.
    pub fn kanji(self) -> &'static str {
        if self.promoted {
            self.kind.promoted_kanji().unwrap_or_else(|| self.kind.kanji())
        } else {
            self.kind.kanji()
        }
    }

    /// Single-width name for board diagrams.
    pub fn diagram_kanji(self) -> &'static str {
        if self.promoted {
            self.kind
                .promoted_abbreviation()
                .unwrap_or_else(|| self.kind.kanji())
        } else {
            self.kind.kanji()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips_both_ways() {
        assert_eq!(Player::Sente.opponent(), Player::Gote);
        assert_eq!(Player::Gote.opponent(), Player::Sente);
    }

    #[test]
    fn kanji_round_trips_for_all_kinds() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_kanji(kind.kanji()), Some(kind));
        }
        assert_eq!(PieceKind::from_kanji("と"), None);
    }

    #[test]
    fn royals_and_gold_have_no_promoted_form() {
        assert_eq!(PieceKind::King.promoted_kanji(), None);
        assert_eq!(PieceKind::JeweledKing.promoted_kanji(), None);
        assert_eq!(PieceKind::Gold.promoted_kanji(), None);
        assert_eq!(PieceKind::Pawn.promoted_kanji(), Some("と"));
    }

    #[test]
    fn piece_serializes_with_original_field_names() {
        let piece = Piece::new(PieceKind::Pawn, Player::Sente);
        let json = serde_json::to_string(&piece).unwrap();
        assert_eq!(json, r#"{"type":"歩","player":"sente","promoted":false}"#);
    }

    #[test]
    fn promoted_field_defaults_to_false_on_deserialize() {
        let piece: Piece = serde_json::from_str(r#"{"type":"香","player":"gote"}"#).unwrap();
        assert_eq!(piece.kind, PieceKind::Lance);
        assert!(!piece.promoted);
    }
}
