//! Modal editor panel rendering
//!
//! Draws the open editor session as a centered panel over the browse
//! screen: one line per row with its source and the `< candidate >`
//! selector, plus an instruction footer.

use crate::app::AppState;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Render the editor panel for the store's open session.
///
/// Quietly renders nothing if no editor is open; the app only enters
/// `AppMode::Editor` together with an open store session.
pub fn render_editor(f: &mut Frame, state: &mut AppState) {
    let Ok(view) = state.store.editor_view() else {
        return;
    };

    let area = f.area();
    let panel_width = (area.width * 3 / 4).min(80).max(40).min(area.width);
    let panel_height = (area.height * 3 / 4).min(24).max(8).min(area.height);
    let panel = Rect::new(
        (area.width - panel_width) / 2,
        (area.height - panel_height) / 2,
        panel_width,
        panel_height,
    );

    f.render_widget(Clear, panel);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Edit {} ", view.set_name))
            .border_style(Styles::border(true)),
        panel,
    );

    // Rows area inside the border, reserving the bottom line for hints
    let rows_area = Rect::new(
        panel.x + 2,
        panel.y + 1,
        panel.width.saturating_sub(4),
        panel.height.saturating_sub(3),
    );

    state.editor_scroll.set_visible(rows_area.height.max(1) as usize);
    let (start, end) = state.editor_scroll.visible_range();

    let source_width = view
        .rows
        .iter()
        .map(|r| r.source.chars().count())
        .max()
        .unwrap_or(0)
        .max(6);

    let items: Vec<ListItem> = view
        .rows
        .iter()
        .enumerate()
        .skip(start)
        .take(end - start)
        .map(|(index, row)| {
            let current = index == state.editor_scroll.selected_index;
            let selector = if current {
                format!("< {} >", row.candidate)
            } else {
                row.candidate.clone()
            };
            let marker = if row.staged { "*" } else { " " };
            let value_style = if current {
                Style::default().fg(Colors::SECONDARY)
            } else {
                Style::default().fg(Colors::FG_PRIMARY)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", marker), Styles::status_ok()),
                Span::styled(
                    format!("{:<width$}  ", row.source, width = source_width),
                    if current { Styles::highlight() } else { Styles::hint() },
                ),
                Span::styled(selector, value_style),
            ]))
        })
        .collect();

    f.render_widget(List::new(items), rows_area);

    let hint_area = Rect::new(
        panel.x + 2,
        panel.y + panel.height.saturating_sub(2),
        panel.width.saturating_sub(4),
        1,
    );
    f.render_widget(
        Paragraph::new("Select the best target for each source")
            .style(Styles::hint())
            .alignment(Alignment::Center),
        hint_area,
    );
}
