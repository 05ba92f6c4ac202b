//! Main layout rendering: header, stats bar, vocabulary table and status bar

use crate::app::App;
use crate::config::Action;
use crate::session::{AnswerMark, TapeState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::colors::{self, Palette};

const INDEX_WIDTH: usize = 4;
const MARK_WIDTH: usize = 2;

/// Horizontal split of one table line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Row number.
    pub index: usize,
    /// Left field.
    pub left: usize,
    /// Right field.
    pub right: usize,
    /// Answer mark.
    pub mark: usize,
}

impl ColumnWidths {
    /// Split `width` cells: fixed index and mark columns, the two fields
    /// share the rest, one space between columns.
    #[must_use]
    pub const fn for_width(width: usize) -> Self {
        let fields = width.saturating_sub(INDEX_WIDTH + MARK_WIDTH + 3);
        let left = fields / 2;
        Self {
            index: INDEX_WIDTH,
            left,
            right: fields - left,
            mark: MARK_WIDTH,
        }
    }

    /// Offset of the left field from the line start.
    #[must_use]
    pub const fn left_offset(self) -> usize {
        self.index + 1
    }

    /// Offset of the right field from the line start.
    #[must_use]
    pub const fn right_offset(self) -> usize {
        self.index + 1 + self.left + 1
    }
}

/// Truncate or pad `text` to exactly `width` terminal cells.
///
/// Wide characters count as two cells. A truncated cell ends in `…`.
#[must_use]
pub fn fit_cell(text: &str, width: usize) -> String {
    let mut cell = String::with_capacity(width);
    let mut used = text.width();
    if used <= width {
        cell.push_str(text);
    } else {
        used = 0;
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w >= width {
                break;
            }
            cell.push(c);
            used += w;
        }
        if width > 0 {
            cell.push('…');
            used += 1;
        }
    }
    cell.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    cell
}

/// Rows to draw so that `selected` stays visible in `height` lines.
#[must_use]
pub fn visible_rows(selected: usize, total: usize, height: usize) -> Range<usize> {
    if height == 0 || total == 0 {
        return 0..0;
    }
    let start = selected.saturating_sub(height - 1).min(total.saturating_sub(height));
    start..total.min(start + height)
}

/// Render the main area above the status bar
pub fn render_main(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let palette = Palette::for_theme(app.store.settings().theme);
    frame.render_widget(Block::default().style(Style::default().bg(palette.bg())), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    render_header(frame, app, palette, chunks[0]);
    render_stats(frame, app, palette, chunks[1]);
    render_table(frame, app, palette, chunks[2]);
}

fn render_header(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let settings = app.store.settings();
    let line = Line::from(vec![
        Span::styled(
            " vocabtape ",
            Style::default()
                .fg(palette.selected)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " {} / {}  tape on {} ",
                settings.left_key,
                settings.right_key,
                app.store.session().cover()
            ),
            Style::default().fg(palette.text_dim),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_stats(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let counts = app.store.counts();
    let line = Line::from(vec![
        Span::styled(" Total ", Style::default().fg(palette.text_dim)),
        Span::styled(counts.total.to_string(), Style::default().fg(palette.fg())),
        Span::styled("   Known ", Style::default().fg(palette.text_dim)),
        Span::styled(
            counts.known.to_string(),
            Style::default().fg(palette.positive),
        ),
        Span::styled("   Unknown ", Style::default().fg(palette.text_dim)),
        Span::styled(
            counts.unknown.to_string(),
            Style::default().fg(palette.negative),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_table(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(colors::BORDER_TYPE)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let session = app.store.session();
    if session.is_empty() {
        let key = app
            .config
            .keys
            .keys_for_action(Action::OpenJsonLoader)
            .into_iter()
            .next()
            .unwrap_or_else(|| "o".to_string());
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No vocabulary loaded",
                Style::default().fg(palette.fg()),
            )),
            Line::from(Span::styled(
                format!("Press [{key}] to paste a JSON deck"),
                Style::default().fg(palette.text_muted),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(hint, inner);
        return;
    }

    let widths = ColumnWidths::for_width(usize::from(inner.width));
    let mut lines = vec![header_line(app, palette, widths)];

    let height = usize::from(inner.height.saturating_sub(1));
    for index in visible_rows(app.selected, session.len(), height) {
        lines.push(row_line(app, palette, widths, index, inner.x));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn header_line(app: &App, palette: &Palette, widths: ColumnWidths) -> Line<'static> {
    let settings = app.store.settings();
    let cover = app.store.session().cover();
    let title = |key: &str| {
        let style = Style::default()
            .fg(palette.text_dim)
            .add_modifier(Modifier::BOLD);
        if key == cover {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    };
    Line::from(vec![
        Span::styled(
            fit_cell("#", widths.index),
            Style::default().fg(palette.text_muted),
        ),
        Span::raw(" "),
        Span::styled(
            fit_cell(&settings.left_key, widths.left),
            title(&settings.left_key),
        ),
        Span::raw(" "),
        Span::styled(
            fit_cell(&settings.right_key, widths.right),
            title(&settings.right_key),
        ),
        Span::raw(" "),
        Span::raw(fit_cell("", widths.mark)),
    ])
}

fn row_line(
    app: &App,
    palette: &Palette,
    widths: ColumnWidths,
    index: usize,
    origin_x: u16,
) -> Line<'static> {
    let session = app.store.session();
    let settings = app.store.settings();
    let Some(row) = session.rows().get(index) else {
        return Line::from("");
    };
    let selected = index == app.selected;
    let base = if selected {
        Style::default()
            .fg(palette.fg())
            .bg(palette.surface_highlight)
    } else {
        Style::default().fg(palette.fg())
    };

    let tape_opacity = match session.tape(index) {
        TapeState::Covered => settings.tape_opacity_covered,
        TapeState::Peek => settings.tape_opacity_peek,
    };
    let field = |key: &str, width: usize, offset: usize| -> Vec<Span<'static>> {
        let text = fit_cell(row.get(key).unwrap_or_default(), width);
        if key != session.cover() {
            return vec![Span::styled(text, base)];
        }
        let mut column = offset;
        text.chars()
            .map(|c| {
                let x = origin_x.saturating_add(u16::try_from(column).unwrap_or(u16::MAX));
                column += c.width().unwrap_or(0);
                Span::styled(
                    c.to_string(),
                    colors::tape_style(palette, settings.tape_color, tape_opacity, x),
                )
            })
            .collect()
    };

    let (mark, mark_style) = match session.answer(index) {
        Some(AnswerMark::Known) => ("✓", base.fg(palette.positive)),
        Some(AnswerMark::Unknown) => ("✗", base.fg(palette.negative)),
        None => ("", base),
    };
    let number_style = if selected {
        base.fg(palette.selected).add_modifier(Modifier::BOLD)
    } else {
        base.fg(palette.text_muted)
    };

    let mut spans = vec![
        Span::styled(fit_cell(&(index + 1).to_string(), widths.index), number_style),
        Span::styled(" ", base),
    ];
    spans.extend(field(&settings.left_key, widths.left, widths.left_offset()));
    spans.push(Span::styled(" ", base));
    spans.extend(field(&settings.right_key, widths.right, widths.right_offset()));
    spans.push(Span::styled(" ", base));
    spans.push(Span::styled(fit_cell(mark, widths.mark), mark_style));
    Line::from(spans)
}

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let palette = Palette::for_theme(app.store.settings().theme);
    let mut spans = Vec::new();
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {message} "),
            Style::default()
                .fg(palette.selected)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("│", Style::default().fg(palette.border)));
    }
    spans.push(Span::styled(
        format!(" {}", app.config.keys.status_hints()),
        Style::default().fg(palette.text_dim),
    ));

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.input_bg));
    frame.render_widget(paragraph, area);
}
