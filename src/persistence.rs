//! The save-blob codec. The storage medium (localStorage on the web)
//! stays outside; this module only maps game state to and from the
//! versioned JSON string the original app persisted.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::hand::Hands;
use crate::history::{History, HistoryEntry};
use crate::piece::Player;

pub const CURRENT_VERSION: &str = "1.0.0";

/// The persisted snapshot: the live position plus the full history and
/// cursor, tagged with a format version and a save timestamp (ms since
/// the Unix epoch).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedGame {
    pub version: String,
    pub timestamp: f64,
    pub pieces: Board,
    #[serde(rename = "capturedPieces")]
    pub hands: Hands,
    #[serde(rename = "currentTurn")]
    pub turn: Player,
    pub history: Vec<Arc<HistoryEntry>>,
    #[serde(rename = "currentIndex")]
    pub current_index: usize,
}

/// Serialize the history (and its current entry) into a save blob.
/// Failures are logged and surface as `None`.
pub fn encode(history: &History) -> Option<String> {
    let current = history.current();
    let saved = SavedGame {
        version: CURRENT_VERSION.to_string(),
        timestamp: now_ms(),
        pieces: current.board.clone(),
        hands: current.hands.clone(),
        turn: current.turn,
        history: history.entries().to_vec(),
        current_index: history.current_index(),
    };
    match serde_json::to_string(&saved) {
        Ok(json) => Some(json),
        Err(err) => {
            log::warn!("failed to serialize game state: {err}");
            None
        }
    }
}

/// Parse and validate a save blob. Malformed JSON, a missing version,
/// an empty history, or an out-of-range cursor all log a warning and
/// yield `None`; the caller falls back to the initial position.
pub fn decode(json: &str) -> Option<SavedGame> {
    let saved: SavedGame = match serde_json::from_str(json) {
        Ok(saved) => saved,
        Err(err) => {
            log::warn!("failed to parse saved game: {err}");
            return None;
        }
    };
    if saved.version.is_empty() {
        log::warn!("saved game has no version tag");
        return None;
    }
    if saved.history.is_empty() {
        log::warn!("saved game has an empty history");
        return None;
    }
    if saved.current_index >= saved.history.len() {
        log::warn!(
            "saved game cursor {} out of range for {} entries",
            saved.current_index,
            saved.history.len()
        );
        return None;
    }
    Some(saved)
}

/// Rebuild the navigable history from a decoded save.
pub fn restore(saved: &SavedGame) -> Option<History> {
    History::from_parts(saved.history.clone(), saved.current_index)
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}
