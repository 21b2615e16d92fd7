//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors and common styles so the widgets stay
//! visually consistent. Selected rows read green and unselected rows red,
//! matching the summary-table color coding of the page this tool replaces.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color - borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Rows with a committed selection
    pub const SUCCESS: Color = Color::Green;

    /// Rows without a selection, and error feedback
    pub const ERROR: Color = Color::Red;

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight background
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;
}

/// Pre-built styles for common widget roles
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight() -> Style {
        Style::default()
            .bg(Colors::SELECTED_BG)
            .fg(Colors::SELECTED_FG)
    }

    pub fn selected_value() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn not_selected_value() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    pub fn hint() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn status_error() -> Style {
        Style::default()
            .fg(Colors::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_ok() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn border(active: bool) -> Style {
        if active {
            Style::default().fg(Colors::BORDER_ACTIVE)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        }
    }
}
