use crate::item::Item;
use crate::language::Language;
use crate::resolve::{LogicalField, resolve_tags, resolve_text};

/// A search query normalized once: trimmed and lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// Whether this query filters anything out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Boolean containment over the item's resolved title, summary, quote and
    /// tags. An empty query matches everything.
    #[must_use]
    pub fn matches(&self, item: &Item, lang: Language) -> bool {
        if self.is_empty() {
            return true;
        }

        LogicalField::SEARCHABLE.into_iter().any(|field| match field {
            LogicalField::Tags => resolve_tags(item, lang)
                .iter()
                .any(|tag| self.contained_in(tag)),
            scalar => self.contained_in(&resolve_text(item, scalar, lang)),
        })
    }

    fn contained_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

/// Convenience wrapper around [`Query::matches`] for one-off checks.
#[must_use]
pub fn matches(item: &Item, lang: Language, query: &str) -> bool {
    Query::new(query).matches(item, lang)
}
