//! Settings overlay key handling

use crate::app::{Actions, App};
use ratatui::crossterm::event::KeyCode;

/// Handle key events in the settings overlay
pub fn handle_settings_mode(app: &mut App, action_handler: Actions, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.settings_menu.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.settings_menu.select_next(),
        KeyCode::Left | KeyCode::Char('h') => action_handler.adjust_setting(app, false),
        KeyCode::Right | KeyCode::Char('l') => action_handler.adjust_setting(app, true),
        KeyCode::Enter | KeyCode::Char(' ') => action_handler.activate_setting(app),
        KeyCode::Esc | KeyCode::Char('q' | ',') => app.exit_mode(),
        _ => {}
    }
}
