use std::fmt;

use serde::{Deserialize, Serialize};

/// A board coordinate. `file` runs 1 (right edge) to 9 (left edge),
/// `rank` runs 1 (Sente's home edge) to 9 (Gote's home edge). Both
/// components are always in range for a constructed `Square`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if (1..=9).contains(&file) && (1..=9).contains(&rank) {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// The square reached by shifting this one, or `None` off the edge.
    pub fn offset(self, dfile: i8, drank: i8) -> Option<Square> {
        let file = i16::from(self.file) + i16::from(dfile);
        let rank = i16::from(self.rank) + i16::from(drank);
        if (1..=9).contains(&file) && (1..=9).contains(&rank) {
            Square::new(file as u8, rank as u8)
        } else {
            None
        }
    }

    /// All 81 squares, file-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=9).flat_map(|file| (1..=9).filter_map(move |rank| Square::new(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.file, self.rank)
    }
}

#[derive(Deserialize)]
struct RawSquare {
    file: u8,
    rank: u8,
}

#[derive(Debug)]
pub struct SquareOutOfRange;

impl fmt::Display for SquareOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "square coordinates must be in 1..=9")
    }
}

impl std::error::Error for SquareOutOfRange {}

impl TryFrom<RawSquare> for Square {
    type Error = SquareOutOfRange;

    fn try_from(raw: RawSquare) -> Result<Square, SquareOutOfRange> {
        Square::new(raw.file, raw.rank).ok_or(SquareOutOfRange)
    }
}
