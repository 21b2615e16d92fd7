//! User interface rendering module
//!
//! Organized into submodules:
//! - `header` - title bar, status line, and navigation hints
//! - `summary` - browse screen: set list and selection summary table
//! - `editor` - the modal editor panel over the active match set
//!
//! Rendering is a pure function of `AppState`: drawing the same state
//! twice produces the same screen.

mod editor;
mod header;
mod summary;

use crate::app::{AppMode, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// UI renderer for the application
///
/// Main entry point for rendering; delegates to the submodules per mode.
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &mut AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation hints
            ])
            .split(f.area());

        header::render_title(f, chunks[0]);
        summary::render_browse(f, state, chunks[1]);

        // The editor panel draws on top of the browse screen; the panel is
        // the Open editor state rendered, not a separate overlay with its
        // own lifecycle.
        if state.mode == AppMode::Editor {
            editor::render_editor(f, state);
        }

        header::render_status(f, state, chunks[2]);
        header::render_nav_bar(f, state, chunks[3]);
    }
}
