//! Application module
//!
//! Contains the main event loop and key handling. Each key press maps to a
//! session event against the selection store (or a pure navigation
//! change), followed by one full re-render of the state; there is no
//! background work and no state outside `AppState`.

mod state;

pub use state::{AppMode, AppState, Focus, StatusLevel};

use crate::error::Result;
use crate::scrolling::ScrollState;
use crate::session::{EventOutcome, SessionEvent};
use crate::store::SelectionStore;
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
}

impl App {
    /// Create a new application instance over one session's store
    pub fn new(store: SelectionStore) -> Self {
        info!(sets = store.sets().len(), "creating app instance");
        Self {
            state: AppState::new(store),
            ui_renderer: UiRenderer::new(),
        }
    }

    /// Run the event loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.ui_renderer.render(f, &mut self.state))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.state.should_quit {
                info!("exiting app loop");
                return Ok(());
            }
        }
    }

    /// Read-only view of the state, for the headless paths and tests
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.state.mode {
            AppMode::Browse => self.handle_browse_key(key),
            AppMode::Editor => self.handle_editor_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.state.should_quit = true;
            }
            KeyCode::Esc => {
                if self.state.marked_rows.is_empty() {
                    self.state.should_quit = true;
                } else {
                    self.state.marked_rows.clear();
                    self.state.set_status(StatusLevel::Info, "Marks cleared");
                }
            }
            KeyCode::Tab => {
                self.state.focus = match self.state.focus {
                    Focus::Sets => Focus::Rows,
                    Focus::Rows => Focus::Sets,
                };
            }
            KeyCode::Up => match self.state.focus {
                Focus::Sets => {
                    self.state.set_scroll.move_up();
                    self.state.sync_row_pane();
                }
                Focus::Rows => self.state.row_scroll.move_up(),
            },
            KeyCode::Down => match self.state.focus {
                Focus::Sets => {
                    self.state.set_scroll.move_down();
                    self.state.sync_row_pane();
                }
                Focus::Rows => self.state.row_scroll.move_down(),
            },
            KeyCode::PageUp => match self.state.focus {
                Focus::Sets => {
                    self.state.set_scroll.page_up();
                    self.state.sync_row_pane();
                }
                Focus::Rows => self.state.row_scroll.page_up(),
            },
            KeyCode::PageDown => match self.state.focus {
                Focus::Sets => {
                    self.state.set_scroll.page_down();
                    self.state.sync_row_pane();
                }
                Focus::Rows => self.state.row_scroll.page_down(),
            },
            KeyCode::Char(' ') => {
                if self.state.focus == Focus::Rows {
                    let row = self.state.row_scroll.selected_index;
                    if !self.state.marked_rows.remove(&row) {
                        self.state.marked_rows.insert(row);
                    }
                }
            }
            KeyCode::Char('r') => self.switch_marked_subset(),
            KeyCode::Enter => self.open_editor_on_highlighted(),
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.state.editor_scroll.move_up(),
            KeyCode::Down => self.state.editor_scroll.move_down(),
            KeyCode::PageUp => self.state.editor_scroll.page_up(),
            KeyCode::PageDown => self.state.editor_scroll.page_down(),
            KeyCode::Left => self.cycle_candidate(-1),
            KeyCode::Right => self.cycle_candidate(1),
            KeyCode::Char(' ') => self.stage_shown_candidate(),
            KeyCode::Enter => self.save_editor(),
            KeyCode::Esc => self.cancel_editor(),
            _ => {}
        }
    }

    fn open_editor_on_highlighted(&mut self) {
        let Some(name) = self.state.highlighted_set().map(String::from) else {
            return;
        };
        match self
            .state
            .store
            .apply_event(SessionEvent::SelectMatchSet(name))
        {
            Ok(EventOutcome::EditorOpened(name)) => {
                let rows = self.state.store.set(&name).map_or(0, |s| s.len());
                self.state.editor_scroll = ScrollState::new(rows, 10);
                self.state.mode = AppMode::Editor;
                self.state
                    .set_status(StatusLevel::Info, format!("Editing '{}'", name));
            }
            Ok(_) => {}
            Err(e) => self.state.set_status(StatusLevel::Error, e.to_string()),
        }
    }

    /// Cycle the highlighted editor row's candidate by `step` and stage it
    fn cycle_candidate(&mut self, step: isize) {
        let row = self.state.editor_scroll.selected_index;
        let Ok(view) = self.state.store.editor_view() else {
            return;
        };
        let Some(row_view) = view.rows.get(row) else {
            return;
        };
        let len = row_view.options.len() as isize;
        let pos = row_view
            .options
            .iter()
            .position(|o| *o == row_view.candidate)
            .unwrap_or(0) as isize;
        let next = (pos + step).rem_euclid(len) as usize;
        let value = row_view.options[next].clone();
        self.stage(row, value);
    }

    /// Stage the candidate currently shown for the highlighted row.
    ///
    /// Unselected rows display the first option as a default without it
    /// being staged; this commits the user to that shown value.
    fn stage_shown_candidate(&mut self) {
        let row = self.state.editor_scroll.selected_index;
        let Ok(view) = self.state.store.editor_view() else {
            return;
        };
        let Some(row_view) = view.rows.get(row) else {
            return;
        };
        let value = row_view.candidate.clone();
        self.stage(row, value);
    }

    fn stage(&mut self, row: usize, value: String) {
        match self
            .state
            .store
            .apply_event(SessionEvent::ChooseOption { row, value })
        {
            Ok(_) => {}
            Err(e) => {
                debug!(error = %e, "stage rejected");
                self.state.set_status(StatusLevel::Error, e.to_string());
            }
        }
    }

    fn save_editor(&mut self) {
        match self.state.store.apply_event(SessionEvent::ConfirmSave) {
            Ok(EventOutcome::Saved(set)) => {
                self.state.mode = AppMode::Browse;
                self.state.sync_row_pane();
                // The mutation is already applied; this message is only an
                // acknowledgement.
                self.state.set_status(
                    StatusLevel::Success,
                    format!("Selections saved for '{}'", set.name()),
                );
            }
            Ok(_) => {}
            Err(e) => self.state.set_status(StatusLevel::Error, e.to_string()),
        }
    }

    fn cancel_editor(&mut self) {
        match self.state.store.apply_event(SessionEvent::ConfirmCancel) {
            Ok(_) => {
                self.state.mode = AppMode::Browse;
                self.state.sync_row_pane();
                self.state.set_status(StatusLevel::Info, "Edit cancelled");
            }
            Err(e) => self.state.set_status(StatusLevel::Error, e.to_string()),
        }
    }

    fn switch_marked_subset(&mut self) {
        let Some(name) = self.state.highlighted_set().map(String::from) else {
            return;
        };
        if self.state.marked_rows.is_empty() {
            self.state
                .set_status(StatusLevel::Info, "No rows marked (Space marks a row)");
            return;
        }
        let indices: Vec<usize> = self.state.marked_rows.iter().copied().collect();
        match self.state.store.apply_event(SessionEvent::SwitchSubset {
            set: name.clone(),
            indices,
        }) {
            Ok(_) => {
                let count = self.state.marked_rows.len();
                self.state.marked_rows.clear();
                self.state.set_status(
                    StatusLevel::Success,
                    format!("Reversed selections across {} rows of '{}'", count, name),
                );
            }
            Err(e) => self.state.set_status(StatusLevel::Error, e.to_string()),
        }
    }
}
