//! In-memory study session: rows, answer marks, tape states, covered column.
//!
//! Answer marks and tape states are parallel arrays keyed by row position.
//! Any change to the row list resets both.

use crate::vocab::VocabRow;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Column covered by default before any deck is loaded.
pub const DEFAULT_COVER: &str = "fr";

/// Self-assessment for a row. Unset is represented by `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMark {
    /// The user knew the answer.
    Known,
    /// The user did not know the answer.
    Unknown,
}

/// Visibility of the tape over a row's covered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TapeState {
    /// Fully taped over (covered opacity).
    #[default]
    #[serde(rename = "covered")]
    Covered,
    /// Semi-transparent tape (peek opacity).
    #[serde(rename = "semi")]
    Peek,
}

impl TapeState {
    /// The other state.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::Covered => Self::Peek,
            Self::Peek => Self::Covered,
        }
    }

    /// Parse a stored value; anything unrecognised reads as covered.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        match value {
            "semi" | "peek" => Self::Peek,
            _ => Self::Covered,
        }
    }
}

impl<'de> Deserialize<'de> for TapeState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_stored(&value))
    }
}

/// Row totals shown in the stats bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    /// Number of rows.
    pub total: usize,
    /// Rows marked known.
    pub known: usize,
    /// Rows marked unknown.
    pub unknown: usize,
}

/// All tapes covered, sized to `len`.
#[must_use]
pub fn init_tape_states(len: usize) -> Vec<TapeState> {
    vec![TapeState::Covered; len]
}

/// Study session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    rows: Vec<VocabRow>,
    answers: Vec<Option<AnswerMark>>,
    tapes: Vec<TapeState>,
    cover: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty session covering the default column.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            answers: Vec::new(),
            tapes: Vec::new(),
            cover: DEFAULT_COVER.to_string(),
        }
    }

    /// Rebuild a session from stored slices.
    ///
    /// Missing or length-mismatched answer and tape arrays are replaced with
    /// fresh ones sized to `rows`. An empty cover falls back to the default.
    #[must_use]
    pub fn from_parts(
        rows: Vec<VocabRow>,
        answers: Option<Vec<Option<AnswerMark>>>,
        tapes: Option<Vec<TapeState>>,
        cover: Option<String>,
    ) -> Self {
        let len = rows.len();
        let answers = answers
            .filter(|answers| answers.len() == len)
            .unwrap_or_else(|| vec![None; len]);
        let tapes = tapes
            .filter(|tapes| tapes.len() == len)
            .unwrap_or_else(|| init_tape_states(len));
        let cover = cover
            .filter(|cover| !cover.is_empty())
            .unwrap_or_else(|| DEFAULT_COVER.to_string());
        Self {
            rows,
            answers,
            tapes,
            cover,
        }
    }

    /// Loaded rows.
    #[must_use]
    pub fn rows(&self) -> &[VocabRow] {
        &self.rows
    }

    /// Answer marks, one per row.
    #[must_use]
    pub fn answers(&self) -> &[Option<AnswerMark>] {
        &self.answers
    }

    /// Tape states, one per row.
    #[must_use]
    pub fn tapes(&self) -> &[TapeState] {
        &self.tapes
    }

    /// Name of the covered column.
    #[must_use]
    pub fn cover(&self) -> &str {
        &self.cover
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Answer for a row (`None` when unset or out of range).
    #[must_use]
    pub fn answer(&self, index: usize) -> Option<AnswerMark> {
        self.answers.get(index).copied().flatten()
    }

    /// Tape for a row; missing entries count as covered.
    #[must_use]
    pub fn tape(&self, index: usize) -> TapeState {
        self.tapes.get(index).copied().unwrap_or_default()
    }

    /// Install a new row list, resetting answers and tapes.
    pub fn replace_rows(&mut self, rows: Vec<VocabRow>) {
        let len = rows.len();
        self.rows = rows;
        self.answers = vec![None; len];
        self.tapes = init_tape_states(len);
    }

    /// Toggle a row between `mark` and unset.
    ///
    /// Returns `false` if the index is out of range.
    pub fn set_answer(&mut self, index: usize, mark: AnswerMark) -> bool {
        let Some(slot) = self.answers.get_mut(index) else {
            return false;
        };
        *slot = if *slot == Some(mark) { None } else { Some(mark) };
        true
    }

    /// Unset every answer.
    pub fn clear_answers(&mut self) {
        self.answers = vec![None; self.rows.len()];
    }

    /// Flip a row's tape between covered and peek.
    ///
    /// Returns `false` if the index is out of range.
    pub fn cycle_tape(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        if self.tapes.len() != self.rows.len() {
            self.tapes.resize(self.rows.len(), TapeState::Covered);
        }
        self.tapes[index] = self.tapes[index].cycled();
        true
    }

    /// Cover every row.
    pub fn cover_all(&mut self) {
        self.tapes = init_tape_states(self.rows.len());
    }

    /// Set every row to peek.
    pub fn uncover_all(&mut self) {
        self.tapes = vec![TapeState::Peek; self.rows.len()];
    }

    /// Whether every tape is covered (true when there are no rows).
    #[must_use]
    pub fn all_covered(&self) -> bool {
        self.tapes.iter().all(|tape| *tape == TapeState::Covered)
    }

    /// Uncover all when all are covered, otherwise cover all.
    pub fn toggle_cover_all(&mut self) {
        if self.all_covered() {
            self.uncover_all();
        } else {
            self.cover_all();
        }
    }

    /// Move the tape to the other displayed column and cover every row.
    pub fn switch_tapes(&mut self, left: &str, right: &str) {
        self.cover = if self.cover == left {
            right.to_string()
        } else {
            left.to_string()
        };
        self.cover_all();
    }

    /// Cover a specific column.
    ///
    /// Tapes are reset when the covered column actually changes. Returns
    /// whether it changed.
    pub fn set_cover(&mut self, column: &str) -> bool {
        if self.cover == column {
            return false;
        }
        self.cover = column.to_string();
        self.cover_all();
        true
    }

    /// Known/unknown totals.
    #[must_use]
    pub fn counts(&self) -> Counts {
        let known = self
            .answers
            .iter()
            .filter(|a| **a == Some(AnswerMark::Known))
            .count();
        let unknown = self
            .answers
            .iter()
            .filter(|a| **a == Some(AnswerMark::Unknown))
            .count();
        Counts {
            total: self.rows.len(),
            known,
            unknown,
        }
    }

    /// Drop all rows and return to the default covered column.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
