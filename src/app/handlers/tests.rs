use super::*;
use crate::app::state::{SettingsItem, TextEditor};
use crate::config::Config;
use crate::session::TapeState;
use crate::storage::{DATA_KEY, KeyValueStore, MemoryStore, SETTINGS_KEY};
use crate::store::Store;
use anyhow::bail;
use pretty_assertions::assert_eq;

const DECK: &str = r#"[
    {"fr": "bonjour", "de": "guten Tag", "en": "hello"},
    {"fr": "merci", "de": "danke", "en": "thanks"},
    {"fr": "oui", "de": "ja", "en": "yes"}
]"#;

/// Store whose writes always fail
#[derive(Debug, Default)]
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: &str) -> anyhow::Result<()> {
        bail!("cannot write {key}")
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        bail!("cannot remove {key}")
    }
}

fn create_test_app() -> App {
    App::new(Config::default(), Store::load(Box::new(MemoryStore::new())))
}

fn loaded_app() -> App {
    let mut app = create_test_app();
    app.input.set(DECK);
    Actions::new().apply_json_input(&mut app);
    app
}

#[test]
fn test_handler_new() {
    let handler = Actions::new();
    assert_eq!(format!("{handler:?}"), format!("{:?}", Actions::default()));
}

#[test]
fn test_open_overlays() {
    let handler = Actions::new();
    let mut app = create_test_app();

    handler.handle_action(&mut app, Action::OpenJsonLoader);
    assert_eq!(app.mode, Mode::Overlay(OverlayMode::JsonLoader));

    handler.handle_action(&mut app, Action::Settings);
    assert_eq!(app.mode, Mode::Overlay(OverlayMode::Settings));

    handler.handle_action(&mut app, Action::Help);
    assert_eq!(app.mode, Mode::Overlay(OverlayMode::Help));

    handler.handle_action(&mut app, Action::ResetAll);
    assert_eq!(
        app.mode,
        Mode::Overlay(OverlayMode::Confirm(ConfirmAction::ResetAll))
    );
}

#[test]
fn test_quit() {
    let mut app = create_test_app();
    Actions::new().handle_action(&mut app, Action::Quit);
    assert!(app.should_quit);
}

#[test]
fn test_apply_json_loads_deck() {
    let mut app = create_test_app();
    app.enter_mode(OverlayMode::JsonLoader.into());
    app.selected = 5;
    app.input.set(DECK);

    Actions::new().apply_json_input(&mut app);

    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.row_count(), 3);
    assert_eq!(app.selected, 0);
    assert_eq!(app.status_message.as_deref(), Some("Loaded 3 rows"));
    assert_eq!(app.input.text(), DECK);
    assert!(app.store.backend().get(DATA_KEY).ok().flatten().is_some());
}

#[test]
fn test_apply_json_rejected_keeps_loader_open() {
    let mut app = loaded_app();
    app.enter_mode(OverlayMode::JsonLoader.into());
    app.input.set(r#"[{"fr": "seul"}]"#);

    Actions::new().apply_json_input(&mut app);

    assert_eq!(app.mode, Mode::Overlay(OverlayMode::JsonLoader));
    assert!(app.json_error.is_some());
    assert_eq!(app.row_count(), 3);
}

#[test]
fn test_apply_json_secret_phrase() {
    let mut app = loaded_app();
    app.enter_mode(OverlayMode::JsonLoader.into());
    app.input.set("  Secret Website ");

    Actions::new().apply_json_input(&mut app);

    assert_eq!(app.mode, Mode::Overlay(OverlayMode::SecretBrowser));
    assert_eq!(app.row_count(), 3);
}

#[test]
fn test_apply_json_write_failure_shows_error() {
    let mut app = App::new(Config::default(), Store::load(Box::new(ReadOnlyStore)));
    app.enter_mode(OverlayMode::JsonLoader.into());
    app.input.set(DECK);

    Actions::new().apply_json_input(&mut app);

    assert!(matches!(app.mode, Mode::Overlay(OverlayMode::Error(_))));
    assert_eq!(app.row_count(), 3);
}

#[test]
fn test_clear_json_input() {
    let mut app = create_test_app();
    app.input.set("[");
    app.json_error = Some("bad".to_string());
    Actions::new().clear_json_input(&mut app);
    assert_eq!(app.input, TextEditor::new());
    assert_eq!(app.json_error, None);
}

#[test]
fn test_mark_toggles() {
    let handler = Actions::new();
    let mut app = loaded_app();
    app.selected = 1;

    handler.handle_action(&mut app, Action::MarkKnown);
    assert_eq!(app.store.session().answer(1), Some(AnswerMark::Known));

    handler.handle_action(&mut app, Action::MarkUnknown);
    assert_eq!(app.store.session().answer(1), Some(AnswerMark::Unknown));

    handler.handle_action(&mut app, Action::MarkUnknown);
    assert_eq!(app.store.session().answer(1), None);
}

#[test]
fn test_mark_on_empty_deck_is_noop() {
    let mut app = create_test_app();
    Actions::new().handle_action(&mut app, Action::MarkKnown);
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.store.counts().known, 0);
}

#[test]
fn test_clear_answers() {
    let handler = Actions::new();
    let mut app = loaded_app();
    handler.handle_action(&mut app, Action::MarkKnown);
    handler.handle_action(&mut app, Action::ClearAnswers);
    assert_eq!(app.store.counts().known, 0);
    assert_eq!(app.status_message.as_deref(), Some("Answers cleared"));
}

#[test]
fn test_cycle_tape_and_cover_all() {
    let handler = Actions::new();
    let mut app = loaded_app();
    app.selected = 2;

    handler.handle_action(&mut app, Action::CycleTape);
    assert_eq!(app.store.session().tape(2), TapeState::Peek);
    assert_eq!(app.store.session().tape(0), TapeState::Covered);

    handler.handle_action(&mut app, Action::ToggleCoverAll);
    assert!(app.store.session().all_covered());

    handler.handle_action(&mut app, Action::ToggleCoverAll);
    assert!(
        app.store
            .session()
            .tapes()
            .iter()
            .all(|t| *t == TapeState::Peek)
    );
}

#[test]
fn test_switch_tapes_moves_cover() {
    let mut app = loaded_app();
    assert_eq!(app.store.session().cover(), "fr");
    Actions::new().handle_action(&mut app, Action::SwitchTapes);
    assert_eq!(app.store.session().cover(), "de");
}

#[test]
fn test_switch_tapes_without_rows_is_noop() {
    let mut app = create_test_app();
    Actions::new().handle_action(&mut app, Action::SwitchTapes);
    assert_eq!(app.store.session().cover(), "fr");
}

#[test]
fn test_swap_and_cycle_columns() {
    let handler = Actions::new();
    let mut app = loaded_app();

    handler.handle_action(&mut app, Action::SwapColumns);
    assert_eq!(app.store.settings().left_key, "de");
    assert_eq!(app.store.settings().right_key, "fr");

    handler.handle_action(&mut app, Action::CycleLeftColumn);
    assert_eq!(app.store.settings().left_key, "en");
    assert_eq!(app.status_message.as_deref(), Some("left column: en"));
}

#[test]
fn test_cycle_column_without_rows() {
    let mut app = create_test_app();
    Actions::new().handle_action(&mut app, Action::CycleRightColumn);
    assert_eq!(
        app.status_message.as_deref(),
        Some("Load a deck with at least two fields")
    );
}

#[test]
fn test_navigation_actions() {
    let handler = Actions::new();
    let mut app = loaded_app();

    handler.handle_action(&mut app, Action::NextRow);
    assert_eq!(app.selected, 1);
    handler.handle_action(&mut app, Action::ScrollBottom);
    assert_eq!(app.selected, 2);
    handler.handle_action(&mut app, Action::NextRow);
    assert_eq!(app.selected, 0);
    handler.handle_action(&mut app, Action::PrevRow);
    assert_eq!(app.selected, 2);
    handler.handle_action(&mut app, Action::ScrollTop);
    assert_eq!(app.selected, 0);
}

#[test]
fn test_confirm_reset_all() {
    let handler = Actions::new();
    let mut app = loaded_app();
    app.selected = 2;
    handler.handle_action(&mut app, Action::ResetAll);

    handler.handle_confirm(&mut app);

    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.row_count(), 0);
    assert_eq!(app.selected, 0);
    assert!(app.input.text().is_empty());
    assert_eq!(app.store.backend().get(DATA_KEY).ok().flatten(), None);
    assert!(app.store.backend().get(SETTINGS_KEY).ok().flatten().is_some());
}

#[test]
fn test_confirm_outside_confirm_mode_is_noop() {
    let mut app = loaded_app();
    Actions::new().handle_confirm(&mut app);
    assert_eq!(app.row_count(), 3);
}

#[test]
fn test_write_failure_opens_error_modal() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(Config::default(), Store::load(Box::new(ReadOnlyStore)));
    Actions::new().handle_action(&mut app, Action::ToggleCoverAll);
    let Mode::Overlay(OverlayMode::Error(message)) = &app.mode else {
        return Err(format!("expected error modal, got {:?}", app.mode).into());
    };
    assert!(message.contains("cannot write"));
    Ok(())
}

#[test]
fn test_adjust_settings() {
    let handler = Actions::new();
    let mut app = create_test_app();
    app.enter_mode(OverlayMode::Settings.into());

    handler.adjust_setting(&mut app, true);
    assert_eq!(app.store.settings().tape_color, crate::app::TapeColor::Blue);

    app.settings_menu.select_next();
    assert_eq!(app.settings_menu.selected_item(), SettingsItem::CoveredOpacity);
    handler.adjust_setting(&mut app, false);
    assert!((app.store.settings().tape_opacity_covered - 0.95).abs() < 1e-9);
    handler.adjust_setting(&mut app, true);
    handler.adjust_setting(&mut app, true);
    assert!((app.store.settings().tape_opacity_covered - 1.0).abs() < 1e-9);

    app.settings_menu.select_next();
    handler.adjust_setting(&mut app, true);
    assert!((app.store.settings().tape_opacity_peek - 0.15).abs() < 1e-9);

    app.settings_menu.select_next();
    let theme = app.store.settings().theme;
    handler.adjust_setting(&mut app, true);
    assert_eq!(app.store.settings().theme, theme.toggled());
}

#[test]
fn test_activate_reset_defaults() {
    let handler = Actions::new();
    let mut app = create_test_app();
    handler.adjust_setting(&mut app, true);
    app.settings_menu.selected = SettingsItem::ALL.len() - 1;

    handler.activate_setting(&mut app);

    assert_eq!(app.store.settings().tape_color, crate::app::TapeColor::Green);
    assert_eq!(app.status_message.as_deref(), Some("Tape defaults restored"));
}

#[cfg(unix)]
#[test]
fn test_open_secret_link() {
    let handler = Actions::new();
    let mut app = create_test_app();
    app.config.browser_command = "true".to_string();
    app.enter_mode(OverlayMode::SecretBrowser.into());

    handler.open_secret_link(&mut app);

    assert_eq!(app.secret.opened, Some(0));
    assert_eq!(app.browser_error, None);

    handler.secret_back(&mut app);
    assert_eq!(app.secret.opened, None);
    assert_eq!(app.mode, Mode::Overlay(OverlayMode::SecretBrowser));

    handler.secret_back(&mut app);
    assert_eq!(app.mode, Mode::Normal);
}

#[test]
fn test_open_secret_link_failure_is_inline() {
    let handler = Actions::new();
    let mut app = create_test_app();
    app.config.browser_command = "\"unbalanced".to_string();
    app.enter_mode(OverlayMode::SecretBrowser.into());

    handler.open_secret_link(&mut app);

    assert!(app.browser_error.is_some());
    assert_eq!(app.mode, Mode::Overlay(OverlayMode::SecretBrowser));

    handler.close_secret_browser(&mut app);
    assert_eq!(app.browser_error, None);
    assert_eq!(app.mode, Mode::Normal);
}
