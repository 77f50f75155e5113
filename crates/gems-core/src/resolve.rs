//! Language-aware field lookup.
//!
//! Every logical field is resolved through [`candidate_keys`], which is the
//! single definition of the fallback chain: the requested language, then
//! English, then the unsuffixed key. Both searching and display go through
//! this module so they always agree on what text an item shows.

use serde_json::Value;

use crate::item::Item;
use crate::language::Language;

/// Language-independent attributes of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    Title,
    Summary,
    BestQuote,
    Tags,
}

impl LogicalField {
    /// Fields searched by the matcher, in the order they are tested.
    pub const SEARCHABLE: [LogicalField; 4] = [
        LogicalField::Title,
        LogicalField::Summary,
        LogicalField::BestQuote,
        LogicalField::Tags,
    ];

    /// Unsuffixed key in the dataset.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            LogicalField::Title => "title",
            LogicalField::Summary => "summary",
            LogicalField::BestQuote => "best_quote",
            LogicalField::Tags => "tags",
        }
    }
}

/// Outcome of resolving a logical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Text(String),
    Tags(Vec<String>),
}

/// Ordered keys tried when resolving `field` for `lang`.
#[must_use]
pub fn candidate_keys(field: LogicalField, lang: Language) -> Vec<String> {
    let base = field.key();
    let mut keys = Vec::with_capacity(3);
    keys.push(format!("{base}_{}", lang.tag()));
    if lang != Language::En {
        keys.push(format!("{base}_{}", Language::En.tag()));
    }
    keys.push(base.to_string());
    keys
}

/// Resolve any logical field, choosing the representation by field kind.
#[must_use]
pub fn resolve(item: &Item, field: LogicalField, lang: Language) -> Resolved {
    match field {
        LogicalField::Tags => Resolved::Tags(resolve_tags(item, lang)),
        scalar => Resolved::Text(resolve_text(item, scalar, lang)),
    }
}

/// Resolve a scalar field to trimmed text, or `""` when no candidate has any.
///
/// Asking for [`LogicalField::Tags`] yields the tags joined with `", "`.
#[must_use]
pub fn resolve_text(item: &Item, field: LogicalField, lang: Language) -> String {
    if field == LogicalField::Tags {
        return resolve_tags(item, lang).join(", ");
    }

    candidate_keys(field, lang)
        .iter()
        .filter_map(|key| item.get(key))
        .find_map(scalar_text)
        .unwrap_or_default()
}

/// Resolve the tag list, accepting arrays or comma-separated strings.
#[must_use]
pub fn resolve_tags(item: &Item, lang: Language) -> Vec<String> {
    candidate_keys(LogicalField::Tags, lang)
        .iter()
        .filter_map(|key| item.get(key))
        .map(tag_list)
        .find(|tags| !tags.is_empty())
        .unwrap_or_default()
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn tag_list(value: &Value) -> Vec<String> {
    match value {
        Value::String(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Array(entries) => entries.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    }
}
