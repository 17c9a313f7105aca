//! Palette state model.
//!
//! The state machine has two top-level phases; all query/result/cursor
//! state lives inside the open phase, so a closed palette structurally
//! cannot carry a stale query or cursor.

use glint_core::SearchEntry;

// =============================================================================
// Palette Phase State Machine
// =============================================================================

/// Top-level state machine. Invalid states are impossible.
#[derive(Debug, Default)]
pub enum PalettePhase {
    /// Palette is closed, nothing visible.
    #[default]
    Closed,
    /// Palette is open with full state.
    Open(OpenState),
}

impl PalettePhase {
    /// Get the open state if the palette is open.
    pub fn open(&self) -> Option<&OpenState> {
        match self {
            PalettePhase::Open(state) => Some(state),
            PalettePhase::Closed => None,
        }
    }

    /// Get mutable open state if the palette is open.
    pub fn open_mut(&mut self) -> Option<&mut OpenState> {
        match self {
            PalettePhase::Open(state) => Some(state),
            PalettePhase::Closed => None,
        }
    }

    /// Check if the palette is open.
    pub fn is_open(&self) -> bool {
        matches!(self, PalettePhase::Open(_))
    }
}

// =============================================================================
// Open State
// =============================================================================

/// State while the palette is visible and interactive.
#[derive(Debug, Default)]
pub struct OpenState {
    /// Current search query, verbatim as typed.
    pub query: String,

    /// Filtered results for the current query, in index order.
    pub results: Vec<SearchEntry>,

    /// Highlighted result index. Only meaningful when `results` is
    /// non-empty; reset to 0 on every query change.
    pub cursor_index: usize,
}

impl OpenState {
    /// Fresh open state: empty query, no results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor down one row, wrapping past the last result.
    ///
    /// No-op with zero results; the modulo is never taken over zero.
    pub fn cursor_down(&mut self) {
        let count = self.results.len();
        if count == 0 {
            return;
        }
        self.cursor_index = (self.cursor_index + 1) % count;
    }

    /// Move the cursor up one row, wrapping from 0 to the last result.
    pub fn cursor_up(&mut self) {
        let count = self.results.len();
        if count == 0 {
            return;
        }
        self.cursor_index = (self.cursor_index + count - 1) % count;
    }

    /// The entry under the cursor.
    pub fn cursor_entry(&self) -> Option<&SearchEntry> {
        self.results.get(self.cursor_index)
    }

    /// Number of results.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Immutable view of the palette state, broadcast after every mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteSnapshot {
    pub is_open: bool,
    pub query: String,
    pub results: Vec<SearchEntry>,
    pub cursor_index: usize,
}

impl PaletteSnapshot {
    /// Snapshot of a closed palette.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Capture the current phase.
    pub fn of(phase: &PalettePhase) -> Self {
        match phase {
            PalettePhase::Closed => Self::closed(),
            PalettePhase::Open(open) => Self {
                is_open: true,
                query: open.query.clone(),
                results: open.results.clone(),
                cursor_index: open.cursor_index,
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
