//! Confirmation mode key handling

use crate::app::{Actions, App};
use ratatui::crossterm::event::KeyCode;

/// Handle key events in Confirming mode (yes/no)
pub fn handle_confirming_mode(app: &mut App, action_handler: Actions, code: KeyCode) {
    match code {
        KeyCode::Char('y' | 'Y') => action_handler.handle_confirm(app),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => app.exit_mode(),
        _ => {}
    }
}
