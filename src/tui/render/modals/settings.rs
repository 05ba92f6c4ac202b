//! Settings overlay rendering

use crate::app::settings::opacity_percent;
use crate::app::{App, Settings, SettingsItem};
use crate::session::TapeState;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use super::{centered_rect_absolute, height_u16, modal_block};
use crate::tui::render::colors::{self, Palette};

const SWATCH_WIDTH: u16 = 16;

/// Current value shown next to a settings row.
#[must_use]
pub fn item_value(settings: &Settings, item: SettingsItem) -> String {
    match item {
        SettingsItem::TapeColor => settings.tape_color.label().to_string(),
        SettingsItem::CoveredOpacity => {
            format!("{}%", opacity_percent(settings.tape_opacity_covered))
        }
        SettingsItem::PeekOpacity => format!("{}%", opacity_percent(settings.tape_opacity_peek)),
        SettingsItem::Theme => settings.theme.label().to_string(),
        SettingsItem::ResetDefaults => String::new(),
    }
}

fn swatch(label: &str, settings: &Settings, state: TapeState, palette: &Palette) -> Line<'static> {
    let opacity = match state {
        TapeState::Covered => settings.tape_opacity_covered,
        TapeState::Peek => settings.tape_opacity_peek,
    };
    let sample: Vec<char> = format!("{label:^width$}", width = usize::from(SWATCH_WIDTH))
        .chars()
        .collect();
    let mut spans = vec![Span::styled(
        format!("  {label:<8}"),
        Style::default().fg(palette.text_dim),
    )];
    spans.extend((0..SWATCH_WIDTH).map(|x| {
        let c = sample.get(usize::from(x)).copied().unwrap_or(' ');
        Span::styled(
            c.to_string(),
            colors::tape_style(palette, settings.tape_color, opacity, x),
        )
    }));
    Line::from(spans)
}

/// Render the settings overlay
pub fn render_settings_overlay(frame: &mut Frame<'_>, app: &App, palette: &Palette) {
    let settings = app.store.settings();
    let selected = app.settings_menu.selected_item();

    let mut lines: Vec<Line<'_>> = Vec::new();
    for &item in SettingsItem::ALL {
        let is_selected = item == selected;
        let style = if is_selected {
            Style::default()
                .fg(palette.fg())
                .bg(palette.surface_highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg())
        };
        let prefix = if is_selected { "▶ " } else { "  " };
        let value = item_value(settings, item);
        let value = if value.is_empty() || !is_selected {
            value
        } else {
            format!("◀ {value} ▶")
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{prefix}{:<18}", item.label()), style),
            Span::styled(value, style.fg(palette.selected)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(swatch("covered", settings, TapeState::Covered, palette));
    lines.push(swatch("peek", settings, TapeState::Peek, palette));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ select • ←/→ change • Enter apply • Esc close",
        Style::default().fg(palette.text_muted),
    )));

    let area = centered_rect_absolute(60, height_u16(lines.len() + 2), frame.area());
    let block = modal_block(" Settings ", palette.selected, palette);
    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
