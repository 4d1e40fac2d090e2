//! The move history: an append-with-truncation log of full snapshots
//! with a cursor for undo/redo navigation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::hand::Hands;
use crate::piece::Player;

/// One full snapshot. Field names in the persisted form follow the
/// original save blob (`pieces`, `capturedPieces`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "pieces")]
    pub board: Board,
    #[serde(rename = "capturedPieces")]
    pub hands: Hands,
    #[serde(rename = "currentTurn")]
    pub turn: Player,
    #[serde(rename = "moveNumber")]
    pub move_number: u32,
}

/// Navigation flags and counters for the UI controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationStatus {
    pub can_step_back: bool,
    pub can_step_forward: bool,
    pub current_move: usize,
    pub total_moves: usize,
}

/// The ordered snapshot log. Entry 0 is always the initial position and
/// `0 <= current_index < entries.len()` holds for every constructed
/// value. Entries are `Arc`-shared, so navigation and recording share
/// unmodified prefixes instead of cloning them.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    entries: Vec<Arc<HistoryEntry>>,
    current_index: usize,
}

impl History {
    pub fn new(initial: HistoryEntry) -> History {
        History {
            entries: vec![Arc::new(initial)],
            current_index: 0,
        }
    }

    /// Rebuild a history from persisted parts. `None` when the entries
    /// are empty or the cursor is out of range.
    pub fn from_parts(entries: Vec<Arc<HistoryEntry>>, current_index: usize) -> Option<History> {
        if entries.is_empty() || current_index >= entries.len() {
            return None;
        }
        Some(History {
            entries,
            current_index,
        })
    }

    /// Truncate everything after the cursor, then append. A move made
    /// while viewing the past discards the undone future.
    pub fn record(&self, entry: HistoryEntry) -> History {
        let mut entries: Vec<Arc<HistoryEntry>> = self.entries[..=self.current_index].to_vec();
        entries.push(Arc::new(entry));
        History {
            current_index: entries.len() - 1,
            entries,
        }
    }

    pub fn step_back(&self) -> History {
        History {
            entries: self.entries.clone(),
            current_index: self.current_index.saturating_sub(1),
        }
    }

    pub fn step_forward(&self) -> History {
        History {
            entries: self.entries.clone(),
            current_index: (self.current_index + 1).min(self.entries.len() - 1),
        }
    }

    pub fn jump_to_start(&self) -> History {
        History {
            entries: self.entries.clone(),
            current_index: 0,
        }
    }

    pub fn jump_to_end(&self) -> History {
        History {
            entries: self.entries.clone(),
            current_index: self.entries.len() - 1,
        }
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn entries(&self) -> &[Arc<HistoryEntry>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        // Entry 0 always exists.
        false
    }

    pub fn navigation_status(&self) -> NavigationStatus {
        NavigationStatus {
            can_step_back: self.current_index > 0,
            can_step_forward: self.current_index < self.entries.len() - 1,
            current_move: self.current_index,
            total_moves: self.entries.len() - 1,
        }
    }
}
