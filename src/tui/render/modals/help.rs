//! Help overlay rendering

use crate::app::App;
use crate::config::{Action, KeyBindings};
use ratatui::layout::{Margin, Rect};
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::{centered_rect_absolute, height_u16, modal_block};
use crate::tui::render::colors::Palette;

/// Split a description with `[x]` mnemonics into spans, the bracketed
/// letter bold and the brackets dimmed.
fn styled_mnemonic_description(description: &str, palette: &Palette) -> Vec<Span<'static>> {
    let text = Style::default().fg(palette.fg());
    let dim = Style::default().fg(palette.text_dim);
    let mut spans = Vec::new();
    let mut remaining = description;

    while let Some(start) = remaining.find('[') {
        let Some(len) = remaining[start..].find(']') else {
            break;
        };
        let end = start + len;
        if start > 0 {
            spans.push(Span::styled(remaining[..start].to_string(), text));
        }
        spans.push(Span::styled("[", dim));
        spans.push(Span::styled(
            remaining[start + 1..end].to_string(),
            text.add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("]", dim));
        remaining = &remaining[end + 1..];
    }
    if !remaining.is_empty() {
        spans.push(Span::styled(remaining.to_string(), text));
    }
    spans
}

fn help_lines(keys: &KeyBindings, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Keybindings",
            Style::default()
                .fg(palette.fg())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let mut current_group = None;
    for &action in Action::ALL_FOR_HELP {
        let group = action.group();
        if current_group != Some(group) {
            if current_group.is_some() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                group.title(),
                Style::default().fg(palette.text_dim),
            )));
            current_group = Some(group);
        }

        let mut spans = vec![Span::styled(
            format!("  {:<12} ", keys.format_keys(action)),
            Style::default().fg(palette.text_dim),
        )];
        spans.extend(styled_mnemonic_description(action.description(), palette));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "JSON loader: Ctrl+S apply, Ctrl+L clear, Esc close",
        Style::default().fg(palette.text_muted),
    )));
    lines.push(Line::from(Span::styled(
        "Scroll: ↑/↓, PgUp/PgDn, g/G • any other key closes",
        Style::default().fg(palette.text_muted),
    )));
    lines
}

fn help_rect(total_lines: usize, frame_area: Rect) -> Rect {
    let max_height = frame_area.height.saturating_sub(4);
    let min_height = 12.min(max_height);
    let height = height_u16(total_lines + 2)
        .min(max_height)
        .max(min_height);
    centered_rect_absolute(60, height, frame_area)
}

/// Largest useful scroll offset for a terminal `frame_height` rows tall.
#[must_use]
pub fn help_max_scroll(keys: &KeyBindings, frame_height: u16) -> usize {
    let total = help_lines(keys, &crate::tui::render::colors::DARK).len();
    let area = help_rect(total, Rect::new(0, 0, 80, frame_height));
    total.saturating_sub(usize::from(area.height.saturating_sub(2)))
}

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame<'_>, app: &App, palette: &Palette) {
    let lines = help_lines(&app.config.keys, palette);
    let total = lines.len();
    let area = help_rect(total, frame.area());
    let visible = usize::from(area.height.saturating_sub(2));
    let max_scroll = total.saturating_sub(visible);
    let scroll = app.help_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(modal_block(" Help ", palette.selected, palette))
        .scroll((height_u16(scroll), 0));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);

    if max_scroll > 0 {
        let mut state = ScrollbarState::new(max_scroll).position(scroll);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut state,
        );
    }
}
