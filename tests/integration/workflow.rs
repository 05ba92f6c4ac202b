use crate::common::{TestFixture, deck_json};
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use vocabtape::App;
use vocabtape::app::{Actions, Mode, OverlayMode};
use vocabtape::session::TapeState;
use vocabtape::tui::input::{handle_key_event, handle_paste};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn press(app: &mut App, code: KeyCode) {
    handle_key_event(app, Actions::new(), code, KeyModifiers::NONE, 40);
}

fn type_keys(app: &mut App, keys: &str) {
    for c in keys.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn paste_deck(app: &mut App, rows: usize) {
    press(app, KeyCode::Char('o'));
    handle_paste(app, &deck_json(rows));
    handle_key_event(
        app,
        Actions::new(),
        KeyCode::Char('s'),
        KeyModifiers::CONTROL,
        40,
    );
}

#[test]
fn test_study_session_persists_across_restart() -> TestResult {
    let fixture = TestFixture::new()?;
    let mut app = fixture.app();

    paste_deck(&mut app, 5);
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.status_message.as_deref(), Some("Loaded 5 rows"));

    // Known on row 1, unknown on row 2, peek at row 3
    type_keys(&mut app, "yjnj ");
    assert_eq!(app.selected, 2);
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.store.session().cover(), "de");
    assert_eq!(app.store.session().tape(2), TapeState::Covered);
    press(&mut app, KeyCode::Char(' '));
    drop(app);

    let app = fixture.app();
    let counts = app.store.counts();
    assert_eq!((counts.total, counts.known, counts.unknown), (5, 1, 1));
    assert_eq!(app.store.session().cover(), "de");
    assert_eq!(app.store.session().tape(2), TapeState::Peek);
    assert_eq!(app.selected, 0);
    Ok(())
}

#[test]
fn test_loader_reopens_with_saved_deck() -> TestResult {
    let fixture = TestFixture::new()?;
    let mut app = fixture.app();
    assert!(app.input.text().is_empty());
    paste_deck(&mut app, 2);
    drop(app);

    let mut app = fixture.app();
    press(&mut app, KeyCode::Char('o'));
    assert_eq!(app.mode, Mode::Overlay(OverlayMode::JsonLoader));
    let text = app.input.text().to_string();
    assert!(text.contains(r#""fr": "fr-1""#));

    app.input.set(text.replace("fr-1", "fr-edited"));
    handle_key_event(
        &mut app,
        Actions::new(),
        KeyCode::Char('s'),
        KeyModifiers::CONTROL,
        40,
    );
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.row_count(), 2);
    assert_eq!(app.store.session().rows()[1].get("fr"), Some("fr-edited"));
    Ok(())
}

#[test]
fn test_column_changes_persist() -> TestResult {
    let fixture = TestFixture::new()?;
    let mut app = fixture.app();
    paste_deck(&mut app, 2);

    press(&mut app, KeyCode::Char(']'));
    let right = app.store.settings().right_key.clone();
    assert_ne!(right, "de");
    press(&mut app, KeyCode::Char('s'));
    drop(app);

    let store = fixture.store();
    assert_eq!(store.settings().left_key, right);
    assert_eq!(store.settings().right_key, "fr");
    Ok(())
}

#[test]
fn test_reset_from_keyboard_clears_disk() -> TestResult {
    let fixture = TestFixture::new()?;
    let mut app = fixture.app();
    paste_deck(&mut app, 3);
    type_keys(&mut app, "Ry");
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.status_message.as_deref(), Some("Reset complete"));
    assert!(app.input.text().is_empty());
    drop(app);

    assert!(fixture.store().session().is_empty());
    Ok(())
}

#[test]
fn test_bad_deck_leaves_saved_session_alone() -> TestResult {
    let fixture = TestFixture::new()?;
    let mut app = fixture.app();
    paste_deck(&mut app, 2);

    press(&mut app, KeyCode::Char('o'));
    handle_key_event(
        &mut app,
        Actions::new(),
        KeyCode::Char('l'),
        KeyModifiers::CONTROL,
        40,
    );
    handle_paste(&mut app, r#"[{"fr": "seul"}]"#);
    handle_key_event(
        &mut app,
        Actions::new(),
        KeyCode::Char('s'),
        KeyModifiers::CONTROL,
        40,
    );
    assert_eq!(app.mode, Mode::Overlay(OverlayMode::JsonLoader));
    assert_eq!(
        app.json_error.as_deref(),
        Some("Row 1 must contain at least two string fields")
    );
    drop(app);

    assert_eq!(fixture.store().session().len(), 2);
    Ok(())
}
