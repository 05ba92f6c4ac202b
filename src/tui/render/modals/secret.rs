//! Link browser overlay rendering

use crate::app::App;
use crate::secret::GAME_LINKS;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use super::{centered_rect_absolute, height_u16, modal_block};
use crate::tui::render::colors::Palette;

/// Render the link browser overlay
pub fn render_secret_browser_overlay(frame: &mut Frame<'_>, app: &App, palette: &Palette) {
    let mut lines: Vec<Line<'_>> = Vec::new();

    if let Some(link) = app.secret.opened_link() {
        lines.push(Line::from(Span::styled(
            link.title,
            Style::default()
                .fg(palette.fg())
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            link.url,
            Style::default().fg(palette.selected),
        )));
        lines.push(Line::from(""));
        if app.browser_error.is_none() {
            lines.push(Line::from(Span::styled(
                "Opened in your browser",
                Style::default().fg(palette.positive),
            )));
        }
    } else {
        for (idx, link) in GAME_LINKS.iter().enumerate() {
            let is_selected = idx == app.secret.highlighted;
            let style = if is_selected {
                Style::default()
                    .fg(palette.fg())
                    .bg(palette.surface_highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg())
            };
            let prefix = if is_selected { "▶ " } else { "  " };
            lines.push(Line::from(Span::styled(
                format!("{prefix}{}", link.title),
                style,
            )));
        }
    }

    if let Some(error) = &app.browser_error {
        lines.push(Line::from(Span::styled(
            format!("✖ {error}"),
            Style::default().fg(palette.negative),
        )));
    }

    lines.push(Line::from(""));
    let help = if app.secret.opened.is_some() {
        "b back • Esc close"
    } else {
        "↑/↓ select • Enter open • Esc close"
    };
    lines.push(Line::from(Span::styled(
        help,
        Style::default().fg(palette.text_muted),
    )));

    let area = centered_rect_absolute(60, height_u16(lines.len() + 2), frame.area());
    let paragraph = Paragraph::new(lines)
        .block(modal_block(" Secret ", palette.warning, palette))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
