//! Untrusted JSON text to validated [`VocabRow`]s.

use super::VocabRow;
use serde_json::Value;
use thiserror::Error;

/// Minimum number of string-valued fields a row must carry.
pub const MIN_STRING_FIELDS: usize = 2;

/// Input phrase that opens the secret browser instead of loading data.
pub const SECRET_PHRASE: &str = "secret website";

/// Why a JSON document could not be turned into vocabulary rows.
///
/// Row numbers are 1-based positions in the top-level array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The text is not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    /// The top-level value is not an array.
    #[error("JSON must be an array")]
    NotAnArray,
    /// An array element is not an object.
    #[error("Row {row} is not an object")]
    RowNotObject {
        /// 1-based row position.
        row: usize,
    },
    /// An array element has fewer than two string-valued properties.
    #[error("Row {row} must contain at least two string fields")]
    TooFewStringFields {
        /// 1-based row position.
        row: usize,
    },
}

impl NormalizeError {
    /// 1-based row position for row-level errors.
    #[must_use]
    pub const fn row(&self) -> Option<usize> {
        match self {
            Self::RowNotObject { row } | Self::TooFewStringFields { row } => Some(*row),
            Self::InvalidJson(_) | Self::NotAnArray => None,
        }
    }
}

/// Whether the input is the secret phrase (trimmed, ASCII case-insensitive).
#[must_use]
pub fn is_secret_command(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(SECRET_PHRASE)
}

/// Parse and validate a JSON array of vocabulary objects.
///
/// Either every element normalizes or the whole call fails.
///
/// # Errors
///
/// Returns a [`NormalizeError`] describing the first problem found.
pub fn normalize(input: &str) -> Result<Vec<VocabRow>, NormalizeError> {
    let parsed: Value =
        serde_json::from_str(input).map_err(|e| NormalizeError::InvalidJson(e.to_string()))?;

    let Value::Array(elements) = parsed else {
        return Err(NormalizeError::NotAnArray);
    };

    elements
        .iter()
        .enumerate()
        .map(|(idx, element)| {
            let row = idx + 1;
            let object = element
                .as_object()
                .ok_or(NormalizeError::RowNotObject { row })?;
            let vocab = VocabRow::from_object(object);
            if vocab.len() < MIN_STRING_FIELDS {
                return Err(NormalizeError::TooFewStringFields { row });
            }
            Ok(vocab)
        })
        .collect()
}
