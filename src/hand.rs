use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::piece::{Piece, PieceKind, Player};

/// One player's captured pieces: base kind → count. Captured pieces
/// always revert to their unpromoted form, so promoted kinds never
/// appear as keys. A kind that drops to zero is removed from the map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    counts: BTreeMap<PieceKind, u8>,
}

impl Hand {
    pub fn count(&self, kind: PieceKind) -> u8 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = (PieceKind, u8)> + '_ {
        self.counts.iter().map(|(&kind, &count)| (kind, count))
    }

    fn adding(&self, kind: PieceKind) -> Hand {
        let mut counts = self.counts.clone();
        *counts.entry(kind).or_insert(0) += 1;
        Hand { counts }
    }

    fn removing(&self, kind: PieceKind) -> Hand {
        let mut counts = self.counts.clone();
        match counts.get_mut(&kind) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                counts.remove(&kind);
            }
            None => {}
        }
        Hand { counts }
    }
}

/// Both players' hands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hands {
    pub sente: Hand,
    pub gote: Hand,
}

impl Hands {
    pub fn empty() -> Hands {
        Hands::default()
    }

    pub fn hand(&self, player: Player) -> &Hand {
        match player {
            Player::Sente => &self.sente,
            Player::Gote => &self.gote,
        }
    }

    /// New hands with the captured piece credited to the capturer, demoted
    /// to its base kind.
    pub fn with_captured(&self, captured: Piece, capturing_owner: Player) -> Hands {
        self.update(capturing_owner, |hand| hand.adding(captured.kind))
    }

    /// New hands with one piece of `kind` taken out of `owner`'s hand.
    /// Saturates at zero.
    pub fn with_removed(&self, kind: PieceKind, owner: Player) -> Hands {
        self.update(owner, |hand| hand.removing(kind))
    }

    fn update(&self, player: Player, f: impl FnOnce(&Hand) -> Hand) -> Hands {
        match player {
            Player::Sente => Hands {
                sente: f(&self.sente),
                gote: self.gote.clone(),
            },
            Player::Gote => Hands {
                sente: self.sente.clone(),
                gote: f(&self.gote),
            },
        }
    }
}
