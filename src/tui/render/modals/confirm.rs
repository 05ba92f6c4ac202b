//! Confirmation modal rendering

use crate::app::ConfirmAction;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use super::{centered_rect_absolute, height_u16, modal_block};
use crate::tui::render::colors::Palette;

fn message_lines(action: ConfirmAction, palette: &Palette) -> Vec<Line<'static>> {
    match action {
        ConfirmAction::ResetAll => vec![
            Line::from(Span::styled(
                "Reset everything?",
                Style::default()
                    .fg(palette.warning)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "The deck, answers and tapes are removed.",
                Style::default().fg(palette.fg()),
            )),
            Line::from(Span::styled(
                "Display settings are kept.",
                Style::default().fg(palette.text_dim),
            )),
        ],
    }
}

/// Render a yes/no confirmation overlay
pub fn render_confirm_overlay(frame: &mut Frame<'_>, palette: &Palette, action: ConfirmAction) {
    let mut lines = message_lines(action, palette);
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "[Y]",
            Style::default()
                .fg(palette.positive)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("es  ", Style::default().fg(palette.fg())),
        Span::styled(
            "[N]",
            Style::default()
                .fg(palette.negative)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("o", Style::default().fg(palette.fg())),
    ]));

    let height = height_u16(lines.len() + 2);
    let area = centered_rect_absolute(50, height, frame.area());

    let paragraph =
        Paragraph::new(lines).block(modal_block(" Confirm ", palette.warning, palette));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
