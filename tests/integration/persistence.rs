use crate::common::{TestFixture, deck_json};
use pretty_assertions::assert_eq;
use vocabtape::ApplyOutcome;
use vocabtape::app::{TapeColor, ThemeMode};
use vocabtape::session::{AnswerMark, TapeState};
use vocabtape::storage::{ANSWERS_KEY, COVER_KEY, DATA_KEY, KeyValueStore, TAPE_STATES_KEY};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn test_session_survives_restart() -> TestResult {
    let fixture = TestFixture::new()?;
    let mut store = fixture.store();
    assert_eq!(store.apply_json(&deck_json(3))?, ApplyOutcome::Loaded(3));
    store.set_answer(0, AnswerMark::Known)?;
    store.set_answer(2, AnswerMark::Unknown)?;
    store.cycle_tape(1)?;
    drop(store);

    let store = fixture.store();
    let session = store.session();
    assert_eq!(session.len(), 3);
    assert_eq!(session.rows()[1].get("de"), Some("de-1"));
    assert_eq!(
        session.answers(),
        [Some(AnswerMark::Known), None, Some(AnswerMark::Unknown)]
    );
    assert_eq!(
        session.tapes(),
        [TapeState::Covered, TapeState::Peek, TapeState::Covered]
    );
    assert_eq!(session.cover(), "fr");
    Ok(())
}

#[test]
fn test_stored_layout_is_plain_json() -> TestResult {
    let fixture = TestFixture::new()?;
    let mut store = fixture.store();
    store.apply_json(&deck_json(2))?;
    store.set_answer(1, AnswerMark::Known)?;
    store.cycle_tape(0)?;

    let files = fixture.file_store();
    assert_eq!(files.get(ANSWERS_KEY)?.as_deref(), Some(r#"[null,"known"]"#));
    assert_eq!(files.get(TAPE_STATES_KEY)?.as_deref(), Some(r#"["semi","covered"]"#));
    assert_eq!(files.get(COVER_KEY)?.as_deref(), Some("fr"));
    assert!(files.key_path(DATA_KEY).starts_with(fixture.state_dir()));
    Ok(())
}

#[test]
fn test_preferences_survive_restart() -> TestResult {
    let fixture = TestFixture::new()?;
    let mut store = fixture.store();
    store.set_tape_color(TapeColor::Violet)?;
    store.set_opacity_peek(35.0)?;
    store.set_theme(ThemeMode::Light)?;
    drop(store);

    let store = fixture.store();
    let settings = store.settings();
    assert_eq!(settings.tape_color, TapeColor::Violet);
    assert!((settings.tape_opacity_peek - 0.35).abs() < 1e-9);
    assert_eq!(settings.theme, ThemeMode::Light);
    Ok(())
}

#[test]
fn test_reset_keeps_preferences() -> TestResult {
    let fixture = TestFixture::new()?;
    let mut store = fixture.store();
    store.apply_json(&deck_json(4))?;
    store.set_tape_color(TapeColor::Blue)?;
    store.reset_all()?;
    drop(store);

    let files = fixture.file_store();
    assert_eq!(files.get(DATA_KEY)?, None);
    assert_eq!(files.get(ANSWERS_KEY)?, None);

    let store = fixture.store();
    assert!(store.session().is_empty());
    assert_eq!(store.settings().tape_color, TapeColor::Blue);
    Ok(())
}

#[test]
fn test_mismatched_arrays_are_replaced() -> TestResult {
    let fixture = TestFixture::new()?;
    let mut store = fixture.store();
    store.apply_json(&deck_json(3))?;
    store.set_answer(0, AnswerMark::Known)?;
    drop(store);

    let mut files = fixture.file_store();
    files.set(ANSWERS_KEY, r#"["known"]"#)?;
    files.set(TAPE_STATES_KEY, "not json")?;

    let store = fixture.store();
    assert_eq!(store.session().answers(), [None::<AnswerMark>; 3]);
    assert_eq!(store.session().tapes(), [TapeState::Covered; 3]);
    Ok(())
}

#[test]
fn test_columns_reconciled_for_new_fields() -> TestResult {
    let fixture = TestFixture::new()?;
    let mut files = fixture.file_store();
    files.set(DATA_KEY, r#"[{"es": "gato", "it": "gatto"}]"#)?;

    let store = fixture.store();
    let settings = store.settings();
    assert_eq!(settings.left_key, "es");
    assert_eq!(settings.right_key, "it");
    assert_eq!(store.session().cover(), "es");

    // Reconciled columns are written back
    assert_eq!(fixture.file_store().get(COVER_KEY)?.as_deref(), Some("es"));
    Ok(())
}
