//! Error modal rendering

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use super::{centered_rect_absolute, height_u16, modal_block, word_wrap};
use crate::tui::render::colors::Palette;

/// Wrap width inside the modal
const MAX_LINE_WIDTH: usize = 44;

/// Render an error modal with word-wrapped message
pub fn render_error_modal(frame: &mut Frame<'_>, palette: &Palette, message: &str) {
    let mut lines: Vec<Line<'_>> = vec![
        Line::from(Span::styled(
            "✖ Error",
            Style::default()
                .fg(palette.negative)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        word_wrap(message, MAX_LINE_WIDTH)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(palette.fg())))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to dismiss",
        Style::default().fg(palette.text_muted),
    )));

    // Content plus borders, at least 7
    let height = height_u16(lines.len() + 2).max(7);
    let area = centered_rect_absolute(50, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(modal_block(" Error ", palette.negative, palette))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
