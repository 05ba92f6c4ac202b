//! JSON loader key handling

use crate::app::{Actions, App};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Handle key events while the JSON loader is open
pub fn handle_json_loader_mode(
    app: &mut App,
    action_handler: Actions,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    match code {
        KeyCode::Char('s') if ctrl => {
            action_handler.apply_json_input(app);
            return;
        }
        KeyCode::Char('l') if ctrl => {
            action_handler.clear_json_input(app);
            return;
        }
        KeyCode::Esc => {
            app.exit_mode();
            return;
        }
        KeyCode::Char('w') if ctrl => app.input.delete_word(),
        KeyCode::Backspace if ctrl || alt => app.input.delete_word(),
        KeyCode::Char('a') if ctrl => app.input.move_home(),
        KeyCode::Char('e') if ctrl => app.input.move_end(),
        KeyCode::Char(_) if ctrl => return,
        KeyCode::Char(c) => app.input.insert_char(c),
        KeyCode::Enter => app.input.insert_char('\n'),
        KeyCode::Tab => app.input.insert_str("  "),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Up => app.input.move_up(),
        KeyCode::Down => app.input.move_down(),
        KeyCode::Home => app.input.move_home(),
        KeyCode::End => app.input.move_end(),
        _ => return,
    }
    // Editing clears a stale parse error
    app.json_error = None;
}
