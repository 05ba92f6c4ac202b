//! JSON loader overlay rendering

use crate::app::{App, TextEditor};
use crate::vocab::MIN_STRING_FIELDS;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use super::{centered_rect_absolute, height_u16, modal_block};
use crate::tui::render::colors::Palette;

const MIN_INPUT_HEIGHT: usize = 5;
const MAX_INPUT_HEIGHT: usize = 20;

/// Buffer lines with a `│` cursor marker spliced in.
#[must_use]
pub fn lines_with_cursor(editor: &TextEditor) -> Vec<String> {
    let (cursor_line, cursor_col) = editor.cursor_position();
    editor
        .text()
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            if i != cursor_line {
                return line.to_string();
            }
            let split = line
                .char_indices()
                .nth(cursor_col)
                .map_or(line.len(), |(offset, _)| offset);
            format!("{}│{}", &line[..split], &line[split..])
        })
        .collect()
}

/// First visible line so the cursor stays inside `height` lines.
#[must_use]
pub const fn scroll_for_cursor(cursor_line: usize, height: usize) -> usize {
    if height == 0 || cursor_line < height {
        0
    } else {
        cursor_line + 1 - height
    }
}

/// Render the JSON loader overlay
pub fn render_json_loader_overlay(frame: &mut Frame<'_>, app: &App, palette: &Palette) {
    let input_lines = lines_with_cursor(&app.input);
    let input_height = input_lines
        .len()
        .clamp(MIN_INPUT_HEIGHT, MAX_INPUT_HEIGHT)
        .min(usize::from(frame.area().height.saturating_sub(9)).max(1));
    let error_lines = usize::from(app.json_error.is_some());

    // Borders, prompt, gap, input, gap, error, help
    let total_height = height_u16(input_height + 5 + error_lines);
    let area = centered_rect_absolute(80, total_height, frame.area());

    frame.render_widget(Clear, area);
    let block = modal_block(" Load JSON ", palette.selected, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(height_u16(input_height)),
            Constraint::Length(1),
            Constraint::Length(height_u16(error_lines)),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(
                "Paste an array of objects with at least {MIN_STRING_FIELDS} text fields each"
            ),
            Style::default().fg(palette.text_dim),
        )),
        chunks[0],
    );

    let (cursor_line, _) = app.input.cursor_position();
    let scroll = scroll_for_cursor(cursor_line, input_height);
    let body: Vec<Line<'_>> = input_lines
        .into_iter()
        .skip(scroll)
        .take(input_height)
        .map(|line| Line::from(Span::styled(line, Style::default().fg(palette.fg()))))
        .collect();
    frame.render_widget(
        Paragraph::new(body).style(Style::default().bg(palette.input_bg)),
        chunks[2],
    );

    if let Some(error) = &app.json_error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("✖ {error}"),
                Style::default()
                    .fg(palette.negative)
                    .add_modifier(Modifier::BOLD),
            ))
            .wrap(Wrap { trim: true }),
            chunks[4],
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Ctrl+S apply • Ctrl+L clear • Enter newline • Esc close",
            Style::default().fg(palette.text_muted),
        )),
        chunks[5],
    );
}
