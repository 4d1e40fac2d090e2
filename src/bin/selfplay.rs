//! Random-playout harness: plays uniformly random legal moves and drops
//! from the initial position, checking the board invariants after every
//! ply. There is no game-end detection, so the run stops at a ply budget
//! (or when the side to move has nothing to play).

use rand::seq::SliceRandom;
use rand::Rng;

use shogiban::drops::valid_pawn_drop_squares;
use shogiban::movegen::legal_destinations;
use shogiban::moves::Move;
use shogiban::piece::{PieceKind, Player};
use shogiban::promotion::{may_promote, must_promote};
use shogiban::square::Square;
use shogiban::state::GameState;

/// Every move and drop the side to move could play.
fn candidate_moves(state: &GameState) -> Vec<Move> {
    let mut moves = Vec::new();

    for placed in state.board.pieces() {
        if placed.piece.owner != state.turn {
            continue;
        }
        for to in legal_destinations(placed.piece, placed.square, &state.board) {
            moves.push(Move::Normal {
                from: placed.square,
                to,
                promote: false,
            });
        }
    }

    for (kind, count) in state.hands.hand(state.turn).kinds() {
        if count == 0 {
            continue;
        }
        let targets: Vec<Square> = if kind == PieceKind::Pawn {
            valid_pawn_drop_squares(&state.board, state.turn)
        } else {
            Square::all()
                .filter(|sq| !state.board.is_occupied(*sq))
                .collect()
        };
        for to in targets {
            moves.push(Move::Drop { to, kind });
        }
    }

    moves
}

fn check_invariants(state: &GameState) {
    let pieces = state.board.pieces();
    for (i, a) in pieces.iter().enumerate() {
        for b in &pieces[i + 1..] {
            assert!(
                a.square != b.square,
                "two pieces on {} after move {}",
                a.square,
                state.move_number
            );
        }
    }
    for owner in [Player::Sente, Player::Gote] {
        for file in 1..=9u8 {
            let pawns = pieces
                .iter()
                .filter(|p| {
                    p.piece.kind == PieceKind::Pawn
                        && p.piece.owner == owner
                        && !p.piece.promoted
                        && p.square.file() == file
                })
                .count();
            assert!(
                pawns <= 1,
                "{owner:?} has {pawns} unpromoted pawns on file {file} after move {}",
                state.move_number
            );
        }
    }
}

fn main() {
    env_logger::init();
    eprintln!("shogiban selfplay (built {})", env!("BUILD_TIMESTAMP"));

    let plies: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(256);

    let mut rng = rand::thread_rng();
    let mut state = GameState::initial();

    for _ in 0..plies {
        let moves = candidate_moves(&state);
        let Some(&chosen) = moves.choose(&mut rng) else {
            eprintln!("no moves available for {:?}", state.turn);
            break;
        };

        let next = match chosen {
            Move::Normal { from, to, .. } => {
                let promote = state.board.piece_at(from).is_some_and(|piece| {
                    may_promote(piece, from, to)
                        && !must_promote(piece, to.rank())
                        && rng.gen_bool(0.5)
                });
                let mv = Move::Normal { from, to, promote };
                log::info!("{:>3} {}", state.move_number + 1, mv.japanese(&state));
                state.apply_move(from, to, promote)
            }
            Move::Drop { to, kind } => {
                log::info!("{:>3} {}", state.move_number + 1, chosen.japanese(&state));
                state.apply_drop(kind, to.file(), to.rank()).ok()
            }
        };

        match next {
            Some(applied) => {
                state = applied;
                check_invariants(&state);
            }
            None => {
                eprintln!("engine rejected a generated move; stopping");
                break;
            }
        }
    }

    println!("{}", state.board);
    println!("plies played: {}", state.move_number);
    println!(
        "sente hand: {} pieces, gote hand: {} pieces",
        state
            .hands
            .hand(Player::Sente)
            .kinds()
            .map(|(_, n)| u32::from(n))
            .sum::<u32>(),
        state
            .hands
            .hand(Player::Gote)
            .kinds()
            .map(|(_, n)| u32::from(n))
            .sum::<u32>()
    );
}
