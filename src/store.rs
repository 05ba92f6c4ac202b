//! Session state store
//!
//! Owns the study [`Session`] and the display [`Settings`], and writes the
//! affected storage keys after every mutation. In-memory state is updated
//! before the write, so a failed write leaves the change visible and the
//! error is returned to the caller.

use crate::app::settings::{Settings, TapeColor, ThemeMode};
use crate::session::{AnswerMark, Counts, Session, TapeState};
use crate::storage::{
    ANSWERS_KEY, COVER_KEY, DATA_KEY, KeyValueStore, SESSION_KEYS, SETTINGS_KEY, TAPE_STATES_KEY,
};
use crate::vocab::{self, NormalizeError, VocabRow};
use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Result of submitting text from the JSON loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The text was the secret phrase; nothing was loaded.
    Secret,
    /// A deck of this many rows replaced the previous one.
    Loaded(usize),
    /// Normalization failed; state is unchanged.
    Rejected(NormalizeError),
}

/// One of the two displayed columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnSide {
    /// Left column.
    Left,
    /// Right column.
    Right,
}

impl ColumnSide {
    /// Lowercase label shown in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Session and display preferences backed by a key-value store.
#[derive(Debug)]
pub struct Store {
    session: Session,
    settings: Settings,
    backend: Box<dyn KeyValueStore>,
}

fn write_json<T: Serialize + ?Sized>(
    backend: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let json = serde_json::to_string(value).with_context(|| format!("Failed to encode {key}"))?;
    backend.set(key, &json)
}

/// Read a key, treating backend errors as a missing value.
fn read_raw(backend: &dyn KeyValueStore, key: &str) -> Option<String> {
    match backend.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored value");
            None
        }
    }
}

fn read_json<T: DeserializeOwned>(backend: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = read_raw(backend, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Discarding unparseable stored value");
            None
        }
    }
}

impl Store {
    /// Rehydrate state from `backend` and write back any column repair.
    ///
    /// Never fails: each slice that is missing, unreadable or malformed falls
    /// back to its default independently.
    #[must_use]
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let mut store = Self::read(backend);
        if store.reconcile_columns()
            && let Err(e) = store.persist_columns()
        {
            warn!(error = %e, "Failed to persist reconciled columns");
        }
        store
    }

    /// Rehydrate state from `backend` without writing to it.
    ///
    /// Columns are repaired in memory only.
    #[must_use]
    pub fn snapshot(backend: Box<dyn KeyValueStore>) -> Self {
        let mut store = Self::read(backend);
        store.reconcile_columns();
        store
    }

    fn read(backend: Box<dyn KeyValueStore>) -> Self {
        let rows: Vec<VocabRow> = read_json(&*backend, DATA_KEY).unwrap_or_default();
        let answers = read_json(&*backend, ANSWERS_KEY);
        let tapes = read_json(&*backend, TAPE_STATES_KEY);
        let cover = read_raw(&*backend, COVER_KEY);
        let settings = read_json::<Value>(&*backend, SETTINGS_KEY)
            .map(|value| Settings::from_stored(&value))
            .unwrap_or_default();

        let session = Session::from_parts(rows, answers, tapes, cover);
        debug!(rows = session.len(), cover = session.cover(), "Loaded session");

        Self {
            session,
            settings,
            backend,
        }
    }

    /// Current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Current display preferences.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Storage backend.
    #[must_use]
    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Field names present in the loaded rows, first-seen order.
    #[must_use]
    pub fn available_keys(&self) -> Vec<String> {
        vocab::available_keys(self.session.rows())
    }

    /// Whether any session key exists in the backend, parseable or not.
    ///
    /// Keys that cannot be read count as present.
    #[must_use]
    pub fn has_stored_session(&self) -> bool {
        SESSION_KEYS
            .iter()
            .any(|key| !matches!(self.backend.get(key), Ok(None)))
    }

    /// Row totals.
    #[must_use]
    pub fn counts(&self) -> Counts {
        self.session.counts()
    }

    fn persist_rows(&mut self) -> Result<()> {
        write_json(self.backend.as_mut(), DATA_KEY, self.session.rows())
    }

    fn persist_answers(&mut self) -> Result<()> {
        write_json(self.backend.as_mut(), ANSWERS_KEY, self.session.answers())
    }

    fn persist_tapes(&mut self) -> Result<()> {
        write_json(self.backend.as_mut(), TAPE_STATES_KEY, self.session.tapes())
    }

    fn persist_cover(&mut self) -> Result<()> {
        self.backend.set(COVER_KEY, self.session.cover())
    }

    fn persist_settings(&mut self) -> Result<()> {
        write_json(self.backend.as_mut(), SETTINGS_KEY, &self.settings)
    }

    /// Columns touch settings, the cover column and (through a cover change)
    /// the tapes.
    fn persist_columns(&mut self) -> Result<()> {
        self.persist_settings()?;
        self.persist_cover()?;
        self.persist_tapes()
    }

    /// Write every slice.
    ///
    /// # Errors
    ///
    /// Returns the first storage write error.
    pub fn persist_all(&mut self) -> Result<()> {
        self.persist_rows()?;
        self.persist_answers()?;
        self.persist_columns()
    }

    /// Submit raw text from the JSON loader.
    ///
    /// The secret phrase is checked first and never touches state. Invalid
    /// input is reported as [`ApplyOutcome::Rejected`] with state unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the new deck cannot be written to storage.
    pub fn apply_json(&mut self, text: &str) -> Result<ApplyOutcome> {
        if vocab::is_secret_command(text) {
            debug!("Secret phrase entered");
            return Ok(ApplyOutcome::Secret);
        }
        match vocab::normalize(text) {
            Ok(rows) => {
                let count = rows.len();
                self.replace_rows(rows)?;
                Ok(ApplyOutcome::Loaded(count))
            }
            Err(e) => {
                debug!(error = %e, "Rejected deck");
                Ok(ApplyOutcome::Rejected(e))
            }
        }
    }

    /// Install a new deck, resetting answers and tapes.
    ///
    /// # Errors
    ///
    /// Returns the first storage write error.
    pub fn replace_rows(&mut self, rows: Vec<VocabRow>) -> Result<()> {
        self.session.replace_rows(rows);
        self.reconcile_columns();
        info!(rows = self.session.len(), "Loaded deck");
        self.persist_all()
    }

    /// Toggle a row's answer between `mark` and unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the answers cannot be written.
    pub fn set_answer(&mut self, index: usize, mark: AnswerMark) -> Result<bool> {
        if !self.session.set_answer(index, mark) {
            return Ok(false);
        }
        self.persist_answers()?;
        Ok(true)
    }

    /// Unset every answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the answers cannot be written.
    pub fn clear_answers(&mut self) -> Result<()> {
        self.session.clear_answers();
        self.persist_answers()
    }

    /// Flip one row's tape.
    ///
    /// # Errors
    ///
    /// Returns an error if the tapes cannot be written.
    pub fn cycle_tape(&mut self, index: usize) -> Result<bool> {
        if !self.session.cycle_tape(index) {
            return Ok(false);
        }
        self.persist_tapes()?;
        Ok(true)
    }

    /// Cover every row.
    ///
    /// # Errors
    ///
    /// Returns an error if the tapes cannot be written.
    pub fn cover_all(&mut self) -> Result<()> {
        self.session.cover_all();
        self.persist_tapes()
    }

    /// Set every row to peek.
    ///
    /// # Errors
    ///
    /// Returns an error if the tapes cannot be written.
    pub fn uncover_all(&mut self) -> Result<()> {
        self.session.uncover_all();
        self.persist_tapes()
    }

    /// Uncover all if all are covered, otherwise cover all.
    ///
    /// # Errors
    ///
    /// Returns an error if the tapes cannot be written.
    pub fn toggle_cover_all(&mut self) -> Result<()> {
        self.session.toggle_cover_all();
        self.persist_tapes()
    }

    /// Move the tape to the other displayed column.
    ///
    /// # Errors
    ///
    /// Returns an error if the cover or tapes cannot be written.
    pub fn switch_tapes(&mut self) -> Result<()> {
        self.session
            .switch_tapes(&self.settings.left_key, &self.settings.right_key);
        debug!(cover = self.session.cover(), "Switched covered column");
        self.persist_cover()?;
        self.persist_tapes()
    }

    /// Exchange the left and right columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    pub fn swap_columns(&mut self) -> Result<()> {
        self.settings.swap_columns();
        self.persist_settings()
    }

    fn side_key(&self, side: ColumnSide) -> &str {
        match side {
            ColumnSide::Left => &self.settings.left_key,
            ColumnSide::Right => &self.settings.right_key,
        }
    }

    /// Show `key` on `side`.
    ///
    /// Picking the field already shown on the other side swaps the columns.
    /// If the replaced field was the covered one, the tape follows the new
    /// field and every row is covered again. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the changed slices cannot be written.
    pub fn select_column(&mut self, side: ColumnSide, key: &str) -> Result<bool> {
        if self.side_key(side) == key || !self.available_keys().iter().any(|k| k == key) {
            return Ok(false);
        }
        let other = match side {
            ColumnSide::Left => ColumnSide::Right,
            ColumnSide::Right => ColumnSide::Left,
        };
        if self.side_key(other) == key {
            self.settings.swap_columns();
            return self.persist_settings().map(|()| true);
        }

        let previous = match side {
            ColumnSide::Left => std::mem::replace(&mut self.settings.left_key, key.to_string()),
            ColumnSide::Right => std::mem::replace(&mut self.settings.right_key, key.to_string()),
        };
        if self.session.cover() == previous {
            self.session.set_cover(key);
        }
        debug!(side = side.label(), key, "Selected column");
        self.persist_columns().map(|()| true)
    }

    /// Step the field shown on `side` through the available keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the changed slices cannot be written.
    pub fn cycle_column(&mut self, side: ColumnSide, forward: bool) -> Result<bool> {
        let keys = self.available_keys();
        if keys.len() < 2 {
            return Ok(false);
        }
        let current = keys
            .iter()
            .position(|k| k == self.side_key(side))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % keys.len()
        } else {
            (current + keys.len() - 1) % keys.len()
        };
        self.select_column(side, &keys[next])
    }

    /// Make the displayed columns valid for the loaded rows.
    ///
    /// Left and right become available keys that differ (when at least two
    /// exist) and the covered column becomes one of them, falling back to
    /// the left. Does nothing without rows. Returns whether anything
    /// changed; nothing is written.
    pub fn reconcile_columns(&mut self) -> bool {
        let keys = self.available_keys();
        let Some(first) = keys.first() else {
            return false;
        };
        let before = (
            self.settings.left_key.clone(),
            self.settings.right_key.clone(),
            self.session.cover().to_string(),
        );

        if !keys.contains(&self.settings.left_key) {
            self.settings.left_key.clone_from(first);
        }
        let distinct = keys.iter().find(|k| **k != self.settings.left_key);
        if !keys.contains(&self.settings.right_key) {
            self.settings.right_key = distinct.unwrap_or(first).clone();
        }
        if self.settings.left_key == self.settings.right_key
            && let Some(alt) = distinct
        {
            self.settings.right_key.clone_from(alt);
        }
        let cover = self.session.cover();
        if cover != self.settings.left_key && cover != self.settings.right_key {
            self.session.set_cover(&self.settings.left_key);
        }

        let changed = before.0 != self.settings.left_key
            || before.1 != self.settings.right_key
            || before.2 != self.session.cover();
        if changed {
            debug!(
                left = %self.settings.left_key,
                right = %self.settings.right_key,
                cover = self.session.cover(),
                "Reconciled columns"
            );
        }
        changed
    }

    /// Remove every session key and start over. Display preferences are
    /// kept.
    ///
    /// # Errors
    ///
    /// Returns the first storage removal error.
    pub fn reset_all(&mut self) -> Result<()> {
        self.session.reset();
        for key in SESSION_KEYS {
            self.backend.remove(key)?;
        }
        info!("Reset all session state");
        Ok(())
    }

    /// Pick a tape color.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    pub fn set_tape_color(&mut self, color: TapeColor) -> Result<()> {
        self.settings.tape_color = color;
        self.persist_settings()
    }

    /// Move through the palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    pub fn cycle_tape_color(&mut self, forward: bool) -> Result<()> {
        let color = self.settings.tape_color;
        self.set_tape_color(if forward { color.next() } else { color.prev() })
    }

    /// Set the covered opacity from a percentage.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    pub fn set_opacity_covered(&mut self, percent: f64) -> Result<()> {
        self.settings.set_opacity_covered(percent);
        self.persist_settings()
    }

    /// Set the peek opacity from a percentage.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    pub fn set_opacity_peek(&mut self, percent: f64) -> Result<()> {
        self.settings.set_opacity_peek(percent);
        self.persist_settings()
    }

    /// Nudge an opacity by `delta` percent.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    pub fn step_opacity(&mut self, state: TapeState, delta: i8) -> Result<()> {
        let current = match state {
            TapeState::Covered => self.settings.tape_opacity_covered,
            TapeState::Peek => self.settings.tape_opacity_peek,
        };
        let percent = current.mul_add(100.0, f64::from(delta));
        match state {
            TapeState::Covered => self.set_opacity_covered(percent),
            TapeState::Peek => self.set_opacity_peek(percent),
        }
    }

    /// Switch between light and dark.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    pub fn toggle_theme(&mut self) -> Result<()> {
        self.settings.theme = self.settings.theme.toggled();
        self.persist_settings()
    }

    /// Set the theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<()> {
        self.settings.theme = theme;
        self.persist_settings()
    }

    /// Restore tape color and opacities.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    pub fn reset_tape_defaults(&mut self) -> Result<()> {
        self.settings.reset_tape_defaults();
        self.persist_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;

    const DECK: &str = r#"[
        {"fr": "bonjour", "de": "guten Tag", "en": "hello"},
        {"fr": "merci", "de": "danke", "en": "thanks"}
    ]"#;

    fn loaded_store() -> Result<Store, Box<dyn std::error::Error>> {
        let mut store = Store::load(Box::new(MemoryStore::new()));
        let outcome = store.apply_json(DECK)?;
        assert_eq!(outcome, ApplyOutcome::Loaded(2));
        Ok(store)
    }

    fn stored(store: &Store, key: &str) -> Result<Option<String>, Box<dyn std::error::Error>> {
        Ok(store.backend().get(key)?)
    }

    #[test]
    fn test_load_empty_backend_uses_defaults() {
        let store = Store::load(Box::new(MemoryStore::new()));
        assert!(store.session().is_empty());
        assert_eq!(store.session().cover(), "fr");
        assert_eq!(store.settings(), &Settings::default());
    }

    #[test]
    fn test_apply_json_persists_slices() -> Result<(), Box<dyn std::error::Error>> {
        let store = loaded_store()?;
        assert_eq!(
            stored(&store, ANSWERS_KEY)?.as_deref(),
            Some("[null,null]")
        );
        assert_eq!(
            stored(&store, TAPE_STATES_KEY)?.as_deref(),
            Some(r#"["covered","covered"]"#)
        );
        assert_eq!(stored(&store, COVER_KEY)?.as_deref(), Some("fr"));
        let data = stored(&store, DATA_KEY)?.ok_or("missing data")?;
        assert!(data.starts_with(r#"[{"fr":"bonjour","de":"guten Tag""#));
        Ok(())
    }

    #[test]
    fn test_apply_json_rejects_without_state_change() -> Result<(), Box<dyn std::error::Error>> {
        let mut store = loaded_store()?;
        store.set_answer(0, AnswerMark::Known)?;

        let outcome = store.apply_json(r#"[{"fr":"x"}]"#)?;
        assert_eq!(
            outcome,
            ApplyOutcome::Rejected(NormalizeError::TooFewStringFields { row: 1 })
        );
        assert_eq!(store.session().len(), 2);
        assert_eq!(store.session().answer(0), Some(AnswerMark::Known));
        Ok(())
    }

    #[test]
    fn test_apply_json_secret_phrase() -> Result<(), Box<dyn std::error::Error>> {
        let mut store = loaded_store()?;
        assert_eq!(
            store.apply_json("  Secret Website\n")?,
            ApplyOutcome::Secret
        );
        assert_eq!(store.session().len(), 2);
        Ok(())
    }

    #[test]
    fn test_roundtrip_through_backend() -> Result<(), Box<dyn std::error::Error>> {
        let mut store = loaded_store()?;
        store.set_answer(1, AnswerMark::Unknown)?;
        store.cycle_tape(0)?;
        store.set_tape_color(TapeColor::Blue)?;
        store.set_opacity_peek(42.0)?;

        let snapshot: MemoryStore = [
            DATA_KEY,
            ANSWERS_KEY,
            COVER_KEY,
            SETTINGS_KEY,
            TAPE_STATES_KEY,
        ]
        .into_iter()
        .filter_map(|key| {
            store
                .backend()
                .get(key)
                .ok()
                .flatten()
                .map(|value| (key, value))
        })
        .collect();

        let reloaded = Store::load(Box::new(snapshot));
        assert_eq!(reloaded.session(), store.session());
        assert_eq!(reloaded.settings(), store.settings());
        Ok(())
    }

    #[test]
    fn test_load_discards_mismatched_tapes() {
        let backend: MemoryStore = [
            (DATA_KEY, r#"[{"fr":"a","de":"b"}]"#),
            (TAPE_STATES_KEY, r#"["semi","semi","semi"]"#),
            (ANSWERS_KEY, "not json"),
        ]
        .into_iter()
        .collect();
        let store = Store::load(Box::new(backend));
        assert_eq!(store.session().tapes(), &[TapeState::Covered]);
        assert_eq!(store.session().answer(0), None);
        assert_eq!(store.session().answers().len(), 1);
    }

    #[test]
    fn test_load_corrupt_rows_falls_back_to_empty() {
        let backend: MemoryStore = [(DATA_KEY, "{oops"), (COVER_KEY, "de")]
            .into_iter()
            .collect();
        let store = Store::load(Box::new(backend));
        assert!(store.session().is_empty());
        assert_eq!(store.session().cover(), "de");
    }

    #[test]
    fn test_snapshot_does_not_write_back() -> Result<(), Box<dyn std::error::Error>> {
        let stale = r#"{"leftKey":"en","rightKey":"es"}"#;
        let backend: MemoryStore = [
            (DATA_KEY, r#"[{"fr":"a","de":"b"}]"#),
            (SETTINGS_KEY, stale),
        ]
        .into_iter()
        .collect();
        let store = Store::snapshot(Box::new(backend.clone()));
        assert_eq!(store.settings().left_key, "fr");
        assert_eq!(store.settings().right_key, "de");
        assert_eq!(stored(&store, SETTINGS_KEY)?.as_deref(), Some(stale));
        assert_eq!(stored(&store, COVER_KEY)?, None);
        assert_eq!(stored(&store, TAPE_STATES_KEY)?, None);

        let store = Store::load(Box::new(backend));
        assert_ne!(stored(&store, SETTINGS_KEY)?.as_deref(), Some(stale));
        assert_eq!(stored(&store, COVER_KEY)?.as_deref(), Some("fr"));
        Ok(())
    }

    #[test]
    fn test_has_stored_session_counts_corrupt_keys() -> Result<(), Box<dyn std::error::Error>> {
        assert!(!Store::load(Box::new(MemoryStore::new())).has_stored_session());

        let backend: MemoryStore = [(DATA_KEY, "{oops"), (ANSWERS_KEY, "[null]")]
            .into_iter()
            .collect();
        let mut store = Store::snapshot(Box::new(backend));
        assert!(store.session().is_empty());
        assert!(store.has_stored_session());

        store.reset_all()?;
        assert!(!store.has_stored_session());
        Ok(())
    }

    #[test]
    fn test_load_partial_settings() {
        let settings = r#"{"theme":"light","tapeOpacityCovered":0.42}"#;
        let backend: MemoryStore = [(SETTINGS_KEY, settings)].into_iter().collect();
        let store = Store::load(Box::new(backend));
        assert_eq!(store.settings().theme, ThemeMode::Light);
        assert!((store.settings().tape_opacity_covered - 0.45).abs() < 1e-9);
        assert_eq!(store.settings().tape_color, TapeColor::Green);
    }

    #[test]
    fn test_reconcile_replaces_unknown_columns() -> Result<(), Box<dyn std::error::Error>> {
        let mut store = Store::load(Box::new(MemoryStore::new()));
        store.apply_json(r#"[{"en":"cat","es":"gato"}]"#)?;
        assert_eq!(store.settings().left_key, "en");
        assert_eq!(store.settings().right_key, "es");
        assert_eq!(store.session().cover(), "en");
        Ok(())
    }

    #[test]
    fn test_reconcile_separates_equal_columns() -> Result<(), Box<dyn std::error::Error>> {
        let backend: MemoryStore = [
            (DATA_KEY, r#"[{"fr":"a","de":"b"}]"#),
            (SETTINGS_KEY, r#"{"leftKey":"de","rightKey":"de"}"#),
            (COVER_KEY, "de"),
        ]
        .into_iter()
        .collect();
        let store = Store::load(Box::new(backend));
        assert_eq!(store.settings().left_key, "de");
        assert_eq!(store.settings().right_key, "fr");
        assert_eq!(store.session().cover(), "de");
        let settings = stored(&store, SETTINGS_KEY)?.ok_or("settings not persisted")?;
        assert!(settings.contains(r#""rightKey":"fr""#));
        Ok(())
    }

    #[test]
    fn test_reconcile_noop_without_rows() {
        let mut store = Store::load(Box::new(MemoryStore::new()));
        assert!(!store.reconcile_columns());
    }

    #[test]
    fn test_switch_tapes_and_swap_columns() -> Result<(), Box<dyn std::error::Error>> {
        let mut store = loaded_store()?;
        store.uncover_all()?;
        store.switch_tapes()?;
        assert_eq!(store.session().cover(), "de");
        assert!(store.session().all_covered());
        assert_eq!(stored(&store, COVER_KEY)?.as_deref(), Some("de"));

        store.swap_columns()?;
        assert_eq!(store.settings().left_key, "de");
        assert_eq!(store.settings().right_key, "fr");
        assert_eq!(store.session().cover(), "de");
        Ok(())
    }

    #[test]
    fn test_select_column_moves_cover_and_resets_tapes() -> Result<(), Box<dyn std::error::Error>>
    {
        let mut store = loaded_store()?;
        store.cycle_tape(1)?;

        assert!(store.select_column(ColumnSide::Left, "en")?);
        assert_eq!(store.settings().left_key, "en");
        assert_eq!(store.session().cover(), "en");
        assert!(store.session().all_covered());
        Ok(())
    }

    #[test]
    fn test_select_column_uncovered_side_keeps_tapes() -> Result<(), Box<dyn std::error::Error>> {
        let mut store = loaded_store()?;
        store.cycle_tape(1)?;

        assert!(store.select_column(ColumnSide::Right, "en")?);
        assert_eq!(store.session().cover(), "fr");
        assert_eq!(store.session().tape(1), TapeState::Peek);
        Ok(())
    }

    #[test]
    fn test_select_column_collision_swaps() -> Result<(), Box<dyn std::error::Error>> {
        let mut store = loaded_store()?;
        assert!(store.select_column(ColumnSide::Left, "de")?);
        assert_eq!(store.settings().left_key, "de");
        assert_eq!(store.settings().right_key, "fr");

        assert!(!store.select_column(ColumnSide::Left, "de")?);
        assert!(!store.select_column(ColumnSide::Left, "xx")?);
        Ok(())
    }

    #[test]
    fn test_cycle_column_wraps() -> Result<(), Box<dyn std::error::Error>> {
        let mut store = loaded_store()?;
        store.cycle_column(ColumnSide::Right, true)?;
        assert_eq!(store.settings().right_key, "en");
        store.cycle_column(ColumnSide::Right, true)?;
        // wrapped onto "fr", which collides with the left column
        assert_eq!(store.settings().left_key, "en");
        assert_eq!(store.settings().right_key, "fr");
        Ok(())
    }

    #[test]
    fn test_reset_all_keeps_settings() -> Result<(), Box<dyn std::error::Error>> {
        let mut store = loaded_store()?;
        store.set_tape_color(TapeColor::Red)?;
        store.reset_all()?;

        assert!(store.session().is_empty());
        for key in SESSION_KEYS {
            assert_eq!(stored(&store, key)?, None, "{key} should be removed");
        }
        assert!(stored(&store, SETTINGS_KEY)?.is_some());
        assert_eq!(store.settings().tape_color, TapeColor::Red);
        Ok(())
    }

    #[test]
    fn test_settings_mutators() -> Result<(), Box<dyn std::error::Error>> {
        let mut store = Store::load(Box::new(MemoryStore::new()));
        store.cycle_tape_color(true)?;
        assert_eq!(store.settings().tape_color, TapeColor::Blue);
        store.cycle_tape_color(false)?;
        store.cycle_tape_color(false)?;
        assert_eq!(store.settings().tape_color, TapeColor::Yellow);

        store.step_opacity(TapeState::Covered, 5)?;
        assert!((store.settings().tape_opacity_covered - 1.0).abs() < 1e-9);
        store.step_opacity(TapeState::Covered, -5)?;
        assert!((store.settings().tape_opacity_covered - 0.95).abs() < 1e-9);
        store.step_opacity(TapeState::Peek, -5)?;
        store.step_opacity(TapeState::Peek, -5)?;
        assert!(store.settings().tape_opacity_peek.abs() < 1e-9);

        store.toggle_theme()?;
        assert_eq!(store.settings().theme, ThemeMode::Light);

        store.reset_tape_defaults()?;
        assert_eq!(store.settings().tape_color, TapeColor::Green);
        assert!((store.settings().tape_opacity_peek - 0.1).abs() < 1e-9);
        assert_eq!(store.settings().theme, ThemeMode::Light);

        let stored_settings = stored(&store, SETTINGS_KEY)?.ok_or("settings not stored")?;
        assert!(stored_settings.contains(r#""theme":"light""#));
        Ok(())
    }

    #[test]
    fn test_answer_and_tape_writes() -> Result<(), Box<dyn std::error::Error>> {
        let mut store = loaded_store()?;
        assert!(store.set_answer(0, AnswerMark::Known)?);
        assert!(!store.set_answer(9, AnswerMark::Known)?);
        assert_eq!(
            stored(&store, ANSWERS_KEY)?.as_deref(),
            Some(r#"["known",null]"#)
        );

        store.toggle_cover_all()?;
        assert_eq!(
            stored(&store, TAPE_STATES_KEY)?.as_deref(),
            Some(r#"["semi","semi"]"#)
        );
        store.cover_all()?;
        assert!(store.session().all_covered());

        store.clear_answers()?;
        assert_eq!(store.counts().known, 0);
        assert_eq!(
            stored(&store, ANSWERS_KEY)?.as_deref(),
            Some("[null,null]")
        );
        Ok(())
    }
}
