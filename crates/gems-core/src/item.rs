//! Dataset records.
//!
//! Records keep their whole JSON object because the field-suffix convention
//! (`title_en`, `tags_zh`, ...) is open ended; the resolver looks keys up by
//! name instead of deserializing into a fixed struct.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::LoadError;
use crate::facets::UNKNOWN_SOURCE;

/// One content entry, immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    fields: Map<String, Value>,
}

impl Item {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Navigation target. Not unique across reloads.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.string_field("link")
    }

    /// Facet key; records without a usable source are grouped under
    /// [`UNKNOWN_SOURCE`].
    #[must_use]
    pub fn source(&self) -> &str {
        self.string_field("source")
            .map(str::trim)
            .unwrap_or(UNKNOWN_SOURCE)
    }

    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.string_field("date")
    }

    fn string_field(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}

impl From<Map<String, Value>> for Item {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// An ordered, immutable snapshot of items. Replaced wholesale on reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    items: Vec<Item>,
}

impl Dataset {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON payload into a dataset.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] for malformed JSON and
    /// [`LoadError::NotAnArray`] when the top-level value is not an array.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Same as [`Dataset::from_json_slice`] for string input.
    ///
    /// # Errors
    ///
    /// See [`Dataset::from_json_slice`].
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        Self::from_json_slice(text.as_bytes())
    }

    /// Build a dataset from an already decoded JSON value.
    ///
    /// Array entries that are not objects are skipped; the order of the
    /// remaining records is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotAnArray`] when `value` is not an array.
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        let Value::Array(entries) = value else {
            return Err(LoadError::NotAnArray {
                found: json_kind(&value),
            });
        };

        let total = entries.len();
        let items: Vec<Item> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry {
                Value::Object(fields) => Some(Item::new(fields)),
                other => {
                    warn!(index, kind = json_kind(&other), "skipping non-object dataset entry");
                    None
                }
            })
            .collect();

        if items.len() != total {
            warn!(kept = items.len(), total, "dataset contained malformed entries");
        }

        Ok(Self { items })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Distinct source values in order of first appearance.
    #[must_use]
    pub fn sources(&self) -> IndexSet<&str> {
        self.items.iter().map(Item::source).collect()
    }
}

impl FromIterator<Item> for Dataset {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn item(value: Value) -> Item {
        serde_json::from_value(value).expect("item")
    }

    #[test]
    fn accessors_ignore_blank_and_non_string_values() {
        let record = item(json!({
            "link": "  ",
            "source": 42,
            "date": "2024-05-01",
        }));

        assert_eq!(record.link(), None);
        assert_eq!(record.source(), UNKNOWN_SOURCE);
        assert_eq!(record.date(), Some("2024-05-01"));
    }

    #[test]
    fn source_is_trimmed() {
        assert_eq!(item(json!({"source": " blogA "})).source(), "blogA");
    }

    #[test]
    fn non_array_payloads_are_rejected() {
        let err = Dataset::from_json_str(r#"{"items": []}"#).unwrap_err();
        assert_eq!(err, LoadError::NotAnArray { found: "an object" });
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Dataset::from_json_str("[{").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn non_object_entries_are_skipped_in_order() {
        let dataset =
            Dataset::from_json_str(r#"[{"link":"a"}, 3, null, {"link":"b"}, "x"]"#).unwrap();
        let links: Vec<_> = dataset.iter().filter_map(Item::link).collect();
        assert_eq!(links, vec!["a", "b"]);
    }

    #[test]
    fn sources_keep_first_appearance_order() {
        let dataset = Dataset::from_json_str(
            r#"[{"source":"b"},{"source":"a"},{"source":"b"},{}]"#,
        )
        .unwrap();
        let sources: Vec<_> = dataset.sources().into_iter().collect();
        assert_eq!(sources, vec!["b", "a", UNKNOWN_SOURCE]);
    }
}
