//! Modal rendering utilities and implementations
//!
//! Every overlay is drawn centered over the table with `Clear` underneath.

mod confirm;
mod error;
mod help;
mod json_loader;
mod secret;
mod settings;

pub use confirm::render_confirm_overlay;
pub use error::render_error_modal;
pub use help::{help_max_scroll, render_help_overlay};
pub use json_loader::render_json_loader_overlay;
pub use secret::render_secret_browser_overlay;
pub use settings::render_settings_overlay;

use super::colors::{self, Palette};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
};
use unicode_width::UnicodeWidthStr;

/// Create a centered rect with percentage width and absolute height
#[must_use]
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Greedy word wrap at `max_width` terminal cells. Words longer than a line
/// get a line of their own.
#[must_use]
pub fn word_wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Bordered modal frame with a title.
fn modal_block<'a>(title: &'a str, border: Color, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(colors::BORDER_TYPE)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.modal_bg))
}

/// Saturating `usize` to `u16` for layout heights.
fn height_u16(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX)
}
