//! Move legality: destination enumeration and path-obstruction checks.

use crate::board::Board;
use crate::pattern::{effective_reach, oriented, pattern, Reach};
use crate::piece::Piece;
use crate::square::Square;

/// Every square `piece` may move to from `origin`. Walks each oriented
/// pattern vector outward: a friendly occupant ends the walk excluded, an
/// enemy occupant ends it included (capture square), an empty square is
/// included and the walk continues only while the vector slides.
pub fn legal_destinations(piece: Piece, origin: Square, board: &Board) -> Vec<Square> {
    let pat = pattern(piece.kind, piece.promoted);
    let mut destinations = Vec::new();

    for &vector in pat.vectors {
        let reach = effective_reach(piece.kind, piece.promoted, vector);
        let vector = oriented(vector, piece.owner);
        let mut current = origin;
        loop {
            let Some(next) = current.offset(vector.dfile, vector.drank) else {
                break;
            };
            match board.piece_at(next) {
                Some(occupant) if occupant.owner == piece.owner => break,
                Some(_) => {
                    destinations.push(next);
                    break;
                }
                None => {
                    destinations.push(next);
                    if reach == Reach::Step {
                        break;
                    }
                    current = next;
                }
            }
        }
    }

    destinations
}

/// True iff `destination` is one of the piece's legal destinations.
pub fn is_legal_move(origin: Square, destination: Square, piece: Piece, board: &Board) -> bool {
    legal_destinations(piece, origin, board).contains(&destination)
}

/// True when no piece stands strictly between `origin` and `destination`.
/// Single-square moves and the Knight's jump have no intermediate squares
/// and are trivially clear.
pub fn is_path_clear(origin: Square, destination: Square, board: &Board) -> bool {
    let dfile = i32::from(destination.file()) - i32::from(origin.file());
    let drank = i32::from(destination.rank()) - i32::from(origin.rank());

    if dfile.abs() <= 1 && drank.abs() <= 1 {
        return true;
    }
    if dfile.abs() == 1 && drank.abs() == 2 {
        return true;
    }

    let step_file = dfile.signum();
    let step_rank = drank.signum();
    let mut file = i32::from(origin.file()) + step_file;
    let mut rank = i32::from(origin.rank()) + step_rank;

    while (file, rank) != (i32::from(destination.file()), i32::from(destination.rank())) {
        if !(1..=9).contains(&file) || !(1..=9).contains(&rank) {
            // Degenerate input (not a straight line); nothing to block.
            return true;
        }
        if let Some(square) = Square::new(file as u8, rank as u8) {
            if board.is_occupied(square) {
                return false;
            }
        }
        file += step_file;
        rank += step_rank;
    }

    true
}
