//! Mode-specific key handling
//!
//! Each overlay owns its keys; normal mode maps keys to actions through
//! the configured bindings.

mod confirm;
mod json_loader;
mod normal;
mod secret;
mod settings;


use crate::app::{Actions, App, Mode, OverlayMode};
use crate::tui::render::modals::help_max_scroll;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Handle a key event based on the current mode
///
/// `frame_height` is the terminal height, used to bound help scrolling.
pub fn handle_key_event(
    app: &mut App,
    action_handler: Actions,
    code: KeyCode,
    modifiers: KeyModifiers,
    frame_height: u16,
) {
    match &app.mode {
        Mode::Normal => normal::handle_normal_mode(app, action_handler, code, modifiers),
        Mode::Overlay(OverlayMode::JsonLoader) => {
            json_loader::handle_json_loader_mode(app, action_handler, code, modifiers);
        }
        Mode::Overlay(OverlayMode::Settings) => {
            settings::handle_settings_mode(app, action_handler, code);
        }
        Mode::Overlay(OverlayMode::Confirm(_)) => {
            confirm::handle_confirming_mode(app, action_handler, code);
        }
        Mode::Overlay(OverlayMode::SecretBrowser) => {
            secret::handle_secret_browser_mode(app, action_handler, code);
        }
        Mode::Overlay(OverlayMode::Help) => {
            handle_help_mode(app, code, modifiers, frame_height);
        }
        Mode::Overlay(OverlayMode::Error(_)) => app.dismiss_error(),
    }
}

/// Handle pasted text. Only the JSON loader accepts it.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode == Mode::Overlay(OverlayMode::JsonLoader) {
        app.input.insert_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
        app.json_error = None;
    }
}

fn handle_help_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers, frame_height: u16) {
    let max_scroll = help_max_scroll(&app.config.keys, frame_height);
    let scroll = app.help_scroll.min(max_scroll);
    app.help_scroll = match (code, modifiers) {
        (KeyCode::Up | KeyCode::Char('k'), _) => scroll.saturating_sub(1),
        (KeyCode::Down | KeyCode::Char('j'), _) => scroll.saturating_add(1).min(max_scroll),
        (KeyCode::PageUp, _) => scroll.saturating_sub(10),
        (KeyCode::PageDown, _) => scroll.saturating_add(10).min(max_scroll),
        (KeyCode::Char('u'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            scroll.saturating_sub(5)
        }
        (KeyCode::Char('d'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            scroll.saturating_add(5).min(max_scroll)
        }
        (KeyCode::Char('g') | KeyCode::Home, _) => 0,
        (KeyCode::Char('G') | KeyCode::End, _) => max_scroll,
        // Any other key closes help
        _ => {
            app.exit_mode();
            0
        }
    };
}
