//! TUI rendering
//!
//! This module contains all rendering logic for the TUI, organized into:
//! - `colors`: Theme palettes and tape blending
//! - `main_layout`: Header, stats, vocabulary table and status bar
//! - `modals`: Overlay rendering

pub mod colors;
pub mod main_layout;
pub mod modals;

use crate::app::{App, Mode, OverlayMode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use colors::Palette;

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    main_layout::render_main(frame, app, chunks[0]);
    main_layout::render_status_bar(frame, app, chunks[1]);

    let palette = Palette::for_theme(app.store.settings().theme);
    if let Mode::Overlay(overlay) = &app.mode {
        match overlay {
            OverlayMode::Help => modals::render_help_overlay(frame, app, palette),
            OverlayMode::JsonLoader => modals::render_json_loader_overlay(frame, app, palette),
            OverlayMode::Settings => modals::render_settings_overlay(frame, app, palette),
            OverlayMode::Confirm(action) => modals::render_confirm_overlay(frame, palette, *action),
            OverlayMode::SecretBrowser => {
                modals::render_secret_browser_overlay(frame, app, palette);
            }
            OverlayMode::Error(message) => modals::render_error_modal(frame, palette, message),
        }
    }
}
