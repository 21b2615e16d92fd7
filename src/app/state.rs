//! Application state definitions
//!
//! Contains all state-related types for the application: `AppState`,
//! `AppMode`, the focus pane, and the status line.

use std::collections::BTreeSet;

use crate::scrolling::ScrollState;
use crate::store::SelectionStore;

/// Application operating modes.
///
/// `Editor` is only ever entered together with the store's own editor
/// session; the panel the user sees is a rendering of that session, not a
/// separate overlay with its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Set list plus selection summary
    Browse,
    /// Modal editor over the active match set
    Editor,
}

/// Which pane receives navigation keys while browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sets,
    Rows,
}

/// Severity of the status line, for styling only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Focused pane in browse mode
    pub focus: Focus,
    /// The selection store for this session
    pub store: SelectionStore,
    /// Scroll state for the set list
    pub set_scroll: ScrollState,
    /// Scroll state for the summary rows of the highlighted set
    pub row_scroll: ScrollState,
    /// Scroll state for the rows of the open editor
    pub editor_scroll: ScrollState,
    /// Rows marked for a subset switch, indices into the highlighted set
    pub marked_rows: BTreeSet<usize>,
    /// Status message for user feedback
    pub status_message: String,
    /// How to style the status message
    pub status_level: StatusLevel,
    /// Set when the user asks to exit
    pub should_quit: bool,
}

impl AppState {
    pub fn new(store: SelectionStore) -> Self {
        let set_count = store.sets().len();
        let row_count = store.sets().first().map_or(0, |s| s.len());
        Self {
            mode: AppMode::Browse,
            focus: Focus::Sets,
            store,
            set_scroll: ScrollState::new(set_count, 10),
            row_scroll: ScrollState::new(row_count, 10),
            editor_scroll: ScrollState::new(0, 10),
            marked_rows: BTreeSet::new(),
            status_message: "Welcome to matchtui".to_string(),
            status_level: StatusLevel::Info,
            should_quit: false,
        }
    }

    /// Name of the set highlighted in the browse list
    pub fn highlighted_set(&self) -> Option<&str> {
        self.store
            .sets()
            .get(self.set_scroll.selected_index)
            .map(|s| s.name())
    }

    /// Re-sync the row cursor and marks after the highlighted set changed
    pub fn sync_row_pane(&mut self) {
        let rows = self
            .highlighted_set()
            .and_then(|name| self.store.set(name))
            .map_or(0, |s| s.len());
        self.row_scroll.resize(rows);
        self.marked_rows.clear();
    }

    pub fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_level = level;
    }
}
