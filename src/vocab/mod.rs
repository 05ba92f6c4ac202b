//! Vocabulary rows and the JSON normalizer that produces them.

mod normalize;

pub use normalize::{MIN_STRING_FIELDS, SECRET_PHRASE, is_secret_command};
pub use normalize::{NormalizeError, normalize};

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One flashcard entry: named string fields in input order.
///
/// Field names are user-defined (`fr`, `de`, `en`, ...). Rows coming out of
/// [`normalize`] always carry at least [`MIN_STRING_FIELDS`] fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabRow {
    fields: Vec<(String, String)>,
}

impl VocabRow {
    /// Build a row from a JSON object, keeping only string-valued properties.
    #[must_use]
    pub fn from_object(object: &Map<String, Value>) -> Self {
        object
            .iter()
            .filter_map(|(key, value)| Some((key.clone(), value.as_str()?.to_string())))
            .collect()
    }

    /// Value of the given field, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Field names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VocabRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields: Vec<(String, String)> = Vec::new();
        for (key, value) in iter {
            let key = key.into();
            let value = value.into();
            // Later duplicates win, matching JSON object semantics
            if let Some(slot) = fields.iter_mut().find(|(name, _)| *name == key) {
                slot.1 = value;
            } else {
                fields.push((key, value));
            }
        }
        Self { fields }
    }
}

impl Serialize for VocabRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VocabRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_object(&object))
    }
}

/// Union of field names across all rows, in first-seen order.
#[must_use]
pub fn available_keys(rows: &[VocabRow]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !keys.iter().any(|known| known == key) {
                keys.push(key.to_string());
            }
        }
    }
    keys
}
