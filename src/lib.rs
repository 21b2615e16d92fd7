//! matchtui library
//!
//! Core functionality for the match management TUI: the selection store
//! and its editor session, session event dispatch, match-set files, and
//! the rendering layer.

pub mod app;
pub mod cli;
pub mod config_file;
pub mod error;
pub mod scrolling;
pub mod session;
pub mod store;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, Focus, StatusLevel};
pub use config_file::{MatchRowConfig, MatchSetConfig, MatchSetFile};
pub use error::{MatchTuiError, Result};
pub use session::{EventOutcome, SessionEvent};
pub use store::{
    EditorRowView, EditorView, MatchRow, MatchSet, OptionSet, SelectionRow, SelectionStore,
    NOT_SELECTED,
};
