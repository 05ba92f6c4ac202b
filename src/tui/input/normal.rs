//! Normal mode key handling
//!
//! Keys are mapped to actions via the configured bindings.

use crate::app::{Actions, App};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Handle key events in Normal mode
pub fn handle_normal_mode(
    app: &mut App,
    action_handler: Actions,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }
    if let Some(action) = app.config.keys.get_action(code, modifiers) {
        app.clear_status();
        action_handler.handle_action(app, action);
    }
}
