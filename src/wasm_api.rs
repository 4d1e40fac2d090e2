//! The browser façade: a `Game` object the JS UI drives with click
//! intents and navigation buttons, receiving a serialized view back.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::board::PlacedPiece;
use crate::drops::valid_pawn_drop_squares;
use crate::hand::Hands;
use crate::history::{History, NavigationStatus};
use crate::movegen::{is_legal_move, legal_destinations};
use crate::persistence;
use crate::piece::{PieceKind, Player};
use crate::promotion::{may_promote, must_promote};
use crate::square::Square;
use crate::state::GameState;

/// What the player currently has selected.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Selection {
    None,
    BoardSquare(Square),
    HandPiece(PieceKind),
}

/// A legal move held open while the promotion dialog is up.
#[derive(Clone, Copy)]
struct PendingPromotion {
    from: Square,
    to: Square,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GameView {
    pieces: Vec<PlacedPiece>,
    captured_pieces: Hands,
    current_turn: Player,
    turn_label: &'static str,
    navigation: NavigationStatus,
    highlights: Vec<[u8; 2]>,
    selected_square: Option<[u8; 2]>,
    selected_hand_piece: Option<&'static str>,
    pending_promotion: bool,
    message: Option<&'static str>,
}

#[wasm_bindgen]
pub struct Game {
    history: History,
    selection: Selection,
    pending: Option<PendingPromotion>,
    message: Option<&'static str>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            history: History::new(GameState::initial().as_entry()),
            selection: Selection::None,
            pending: None,
            message: None,
        }
    }

    pub fn state(&self) -> JsValue {
        self.view()
    }

    /// A click on a board square: select an own piece, move or capture to
    /// a legal target (possibly opening the promotion dialog), reselect,
    /// or clear.
    pub fn square_clicked(&mut self, file: u8, rank: u8) -> JsValue {
        self.message = None;
        if self.pending.is_some() {
            // The promotion dialog owns the input until resolved.
            return self.view();
        }
        let Some(square) = Square::new(file, rank) else {
            self.selection = Selection::None;
            return self.view();
        };

        let state = self.current_state();
        match self.selection {
            Selection::BoardSquare(from) if from == square => {
                self.selection = Selection::None;
            }
            Selection::BoardSquare(from) => {
                let mover = state
                    .board
                    .piece_at(from)
                    .filter(|p| p.owner == state.turn);
                match mover {
                    Some(piece) if is_legal_move(from, square, piece, &state.board) => {
                        if may_promote(piece, from, square) && !must_promote(piece, square.rank())
                        {
                            self.pending = Some(PendingPromotion { from, to: square });
                        } else if let Some(next) = state.apply_move(from, square, false) {
                            self.commit(next);
                        }
                    }
                    _ => {
                        if self.own_piece_at(&state, square) {
                            self.selection = Selection::BoardSquare(square);
                        } else {
                            self.selection = Selection::None;
                        }
                    }
                }
            }
            Selection::HandPiece(kind) => match state.apply_drop(kind, file, rank) {
                Ok(next) => self.commit(next),
                Err(err) => {
                    // Keep the selection so the player can pick another
                    // square after reading the rejection.
                    self.message = Some(err.message_ja());
                }
            },
            Selection::None => {
                if self.own_piece_at(&state, square) {
                    self.selection = Selection::BoardSquare(square);
                }
            }
        }

        self.view()
    }

    /// A click on a captured piece (by its kanji name): toggles drop mode
    /// for that kind if the side to move holds one.
    pub fn hand_clicked(&mut self, kind: &str) -> JsValue {
        self.message = None;
        if self.pending.is_some() {
            return self.view();
        }
        let Some(kind) = PieceKind::from_kanji(kind) else {
            return self.view();
        };
        if self.selection == Selection::HandPiece(kind) {
            self.selection = Selection::None;
            return self.view();
        }
        let state = self.current_state();
        self.selection = if state.hands.hand(state.turn).count(kind) > 0 {
            Selection::HandPiece(kind)
        } else {
            Selection::None
        };
        self.view()
    }

    /// The promotion dialog's answer for the move held open.
    pub fn resolve_promotion(&mut self, accept: bool) -> JsValue {
        if let Some(pending) = self.pending.take() {
            let state = self.current_state();
            if let Some(next) = state.apply_move(pending.from, pending.to, accept) {
                self.commit(next);
            }
        }
        self.view()
    }

    pub fn step_back(&mut self) -> JsValue {
        self.navigate(History::step_back)
    }

    pub fn step_forward(&mut self) -> JsValue {
        self.navigate(History::step_forward)
    }

    pub fn jump_to_start(&mut self) -> JsValue {
        self.navigate(History::jump_to_start)
    }

    pub fn jump_to_end(&mut self) -> JsValue {
        self.navigate(History::jump_to_end)
    }

    /// The save blob for the JS side to store; `None` on failure.
    pub fn save(&self) -> Option<String> {
        persistence::encode(&self.history)
    }

    /// Replace the game with a previously saved blob. Returns false (and
    /// leaves the game untouched) when the blob is invalid.
    pub fn load(&mut self, json: &str) -> bool {
        let Some(saved) = persistence::decode(json) else {
            return false;
        };
        let Some(history) = persistence::restore(&saved) else {
            return false;
        };
        self.history = history;
        self.selection = Selection::None;
        self.pending = None;
        self.message = None;
        true
    }
}

impl Game {
    fn current_state(&self) -> GameState {
        GameState::from_entry(self.history.current())
    }

    fn own_piece_at(&self, state: &GameState, square: Square) -> bool {
        state
            .board
            .piece_at(square)
            .is_some_and(|p| p.owner == state.turn)
    }

    fn commit(&mut self, next: GameState) {
        self.history = self.history.record(next.as_entry());
        self.selection = Selection::None;
        self.pending = None;
    }

    fn navigate(&mut self, f: impl Fn(&History) -> History) -> JsValue {
        self.history = f(&self.history);
        self.selection = Selection::None;
        self.pending = None;
        self.message = None;
        self.view()
    }

    fn highlights(&self, state: &GameState) -> Vec<[u8; 2]> {
        let squares = match self.selection {
            Selection::BoardSquare(from) => state
                .board
                .piece_at(from)
                .filter(|p| p.owner == state.turn)
                .map(|p| legal_destinations(p, from, &state.board))
                .unwrap_or_default(),
            Selection::HandPiece(PieceKind::Pawn) => {
                valid_pawn_drop_squares(&state.board, state.turn)
            }
            Selection::HandPiece(_) => Square::all()
                .filter(|sq| !state.board.is_occupied(*sq))
                .collect(),
            Selection::None => Vec::new(),
        };
        squares.into_iter().map(|sq| [sq.file(), sq.rank()]).collect()
    }

    fn view(&self) -> JsValue {
        let state = self.current_state();
        let selected_square = match self.selection {
            Selection::BoardSquare(sq) => Some([sq.file(), sq.rank()]),
            _ => None,
        };
        let selected_hand_piece = match self.selection {
            Selection::HandPiece(kind) => Some(kind.kanji()),
            _ => None,
        };
        let view = GameView {
            pieces: state.board.pieces().to_vec(),
            captured_pieces: state.hands.clone(),
            current_turn: state.turn,
            turn_label: state.turn.turn_label(),
            navigation: self.history.navigation_status(),
            highlights: self.highlights(&state),
            selected_square,
            selected_hand_piece,
            pending_promotion: self.pending.is_some(),
            message: self.message,
        };
        serde_wasm_bindgen::to_value(&view).unwrap_or(JsValue::NULL)
    }
}
