//! Browse screen rendering: the match-set list and the selection summary
//! for the highlighted set

use crate::app::{AppState, Focus};
use crate::store::NOT_SELECTED;
use crate::theme::Styles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the set list and summary panes side by side
pub fn render_browse(f: &mut Frame, state: &mut AppState, area: Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    render_set_list(f, state, panes[0]);
    render_summary(f, state, panes[1]);
}

fn render_set_list(f: &mut Frame, state: &mut AppState, area: Rect) {
    let inner_height = area.height.saturating_sub(2) as usize;
    state.set_scroll.set_visible(inner_height.max(1));
    let (start, end) = state.set_scroll.visible_range();

    let items: Vec<ListItem> = state
        .store
        .sets()
        .iter()
        .enumerate()
        .skip(start)
        .take(end - start)
        .map(|(index, set)| {
            let style = if index == state.set_scroll.selected_index {
                Styles::highlight()
            } else {
                Styles::hint()
            };
            ListItem::new(set.name().to_string()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Match Sets ")
            .border_style(Styles::border(state.focus == Focus::Sets)),
    );
    f.render_widget(list, area);
}

fn render_summary(f: &mut Frame, state: &mut AppState, area: Rect) {
    let title = state
        .highlighted_set()
        .map(|name| format!(" {} - Current Selections ", name))
        .unwrap_or_else(|| " Current Selections ".to_string());

    let rows = state
        .highlighted_set()
        .map(String::from)
        .and_then(|name| state.store.list_selections(&name).ok())
        .unwrap_or_default();

    let inner_height = area.height.saturating_sub(2) as usize;
    state.row_scroll.set_visible(inner_height.max(1));
    let (start, end) = state.row_scroll.visible_range();

    let source_width = rows
        .iter()
        .map(|r| r.source.chars().count())
        .max()
        .unwrap_or(0)
        .max(6);

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(start)
        .take(end - start)
        .map(|(index, row)| {
            let mark = if state.marked_rows.contains(&index) {
                "[x] "
            } else {
                "[ ] "
            };
            let label = row.selected_label();
            let value_style = if label == NOT_SELECTED {
                Styles::not_selected_value()
            } else {
                Styles::selected_value()
            };
            let cursor = index == state.row_scroll.selected_index && state.focus == Focus::Rows;
            let source_style = if cursor { Styles::highlight() } else { Styles::hint() };

            ListItem::new(Line::from(vec![
                Span::styled(mark, Styles::hint()),
                Span::styled(
                    format!("{:<width$}  ", row.source, width = source_width),
                    source_style,
                ),
                Span::styled(label.to_string(), value_style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Styles::border(state.focus == Focus::Rows)),
    );
    f.render_widget(list, area);
}
