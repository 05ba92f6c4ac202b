//! Link browser key handling

use crate::app::{Actions, App};
use ratatui::crossterm::event::KeyCode;

/// Handle key events in the link browser
pub fn handle_secret_browser_mode(app: &mut App, action_handler: Actions, code: KeyCode) {
    let browsing = app.secret.opened.is_none();
    match code {
        KeyCode::Up | KeyCode::Char('k') if browsing => app.secret.select_prev(),
        KeyCode::Down | KeyCode::Char('j') if browsing => app.secret.select_next(),
        KeyCode::Enter if browsing => action_handler.open_secret_link(app),
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => {
            action_handler.secret_back(app);
        }
        KeyCode::Esc | KeyCode::Char('q') => action_handler.close_secret_browser(app),
        _ => {}
    }
}
