//! Title bar, status line, and navigation hint rendering

use crate::app::{AppMode, AppState, Focus, StatusLevel};
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar
pub fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("Match Management")
        .style(Styles::title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, area);
}

/// Render the status line with level-dependent styling
pub fn render_status(f: &mut Frame, state: &AppState, area: Rect) {
    let style = match state.status_level {
        StatusLevel::Info => Styles::hint(),
        StatusLevel::Success => Styles::status_ok(),
        StatusLevel::Error => Styles::status_error(),
    };
    let status = Paragraph::new(state.status_message.as_str()).style(style);
    f.render_widget(status, area);
}

/// Render the bottom navigation hints for the current mode
pub fn render_nav_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let hints = match state.mode {
        AppMode::Browse => match state.focus {
            Focus::Sets => "Up/Down: select set | Enter: edit | Tab: rows | q: quit",
            Focus::Rows => {
                "Up/Down: move | Space: mark | r: reverse marked | Tab: sets | q: quit"
            }
        },
        AppMode::Editor => {
            "Up/Down: row | Left/Right: change target | Space: keep shown | Enter: save | Esc: cancel"
        }
    };
    let bar = Paragraph::new(hints)
        .style(Styles::hint())
        .alignment(Alignment::Center);
    f.render_widget(bar, area);
}
