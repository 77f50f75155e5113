//! Source facets and their live counts.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Key under which the total match count is reported.
pub const ALL_FACET: &str = "all";

/// Facet used for records that carry no usable `source`.
pub const UNKNOWN_SOURCE: &str = "unknown";

/// Which source the visible list is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SourceFilter {
    #[default]
    All,
    Only(String),
}

impl SourceFilter {
    /// Interpret a facet key, treating the `"all"` sentinel (and an empty
    /// value) as no restriction.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        let trimmed = key.trim();
        if trimmed.is_empty() || trimmed == ALL_FACET {
            SourceFilter::All
        } else {
            SourceFilter::Only(trimmed.to_string())
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            SourceFilter::All => ALL_FACET,
            SourceFilter::Only(source) => source,
        }
    }

    #[must_use]
    pub fn admits(&self, source: &str) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Only(wanted) => wanted == source,
        }
    }
}

impl fmt::Display for SourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Represents a single facet row with its key and the number of matches.
///
/// The total row and a source that happens to be named `"all"` share a name,
/// so the row records which one it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetRow {
    pub name: String,
    pub count: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub total: bool,
}

impl FacetRow {
    /// Create a new source [`FacetRow`] with the provided `name` and `count`.
    #[must_use]
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
            total: false,
        }
    }

    /// The `"all"` row carrying the total match count.
    #[must_use]
    pub fn all(count: usize) -> Self {
        Self {
            name: ALL_FACET.to_string(),
            count,
            total: true,
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.total
    }

    /// The filter that selecting this row applies.
    #[must_use]
    pub fn filter(&self) -> SourceFilter {
        if self.total {
            SourceFilter::All
        } else {
            SourceFilter::Only(self.name.clone())
        }
    }
}

/// Per-facet counts of items matching the current query.
///
/// The total is kept apart from the per-source counts. Sources are every
/// source of the full dataset in first appearance order; those with no match
/// stay present with a count of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    all: usize,
    sources: IndexMap<String, usize>,
}

impl FacetCounts {
    /// Zeroed counts for the given sources.
    pub fn with_sources<'a>(sources: impl IntoIterator<Item = &'a str>) -> Self {
        let sources = sources
            .into_iter()
            .map(|source| (source.to_string(), 0))
            .collect();
        Self { all: 0, sources }
    }

    /// Record one query match for `source`.
    pub fn record(&mut self, source: &str) {
        self.all += 1;
        *self.sources.entry(source.to_string()).or_insert(0) += 1;
    }

    /// Count for the source named `source`, zero when it is not offered.
    #[must_use]
    pub fn get(&self, source: &str) -> usize {
        self.sources.get(source).copied().unwrap_or(0)
    }

    /// Number of items matching the query, whatever their source.
    #[must_use]
    pub fn all(&self) -> usize {
        self.all
    }

    #[must_use]
    pub fn offers(&self, source: &str) -> bool {
        self.sources.contains_key(source)
    }

    /// `("all", total)` followed by every source.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        std::iter::once((ALL_FACET, self.all))
            .chain(self.sources.iter().map(|(key, count)| (key.as_str(), *count)))
    }

    /// Facet keys in offered order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    #[must_use]
    pub fn rows(&self) -> Vec<FacetRow> {
        std::iter::once(FacetRow::all(self.all))
            .chain(
                self.sources
                    .iter()
                    .map(|(name, count)| FacetRow::new(name.as_str(), *count)),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_row_uses_provided_values() {
        let row = FacetRow::new("blog", 3);
        assert_eq!(row.name, "blog");
        assert_eq!(row.count, 3);
        assert!(!row.is_all());
    }

    #[test]
    fn default_counts_only_offer_all() {
        let counts = FacetCounts::default();
        assert_eq!(counts.rows(), vec![FacetRow::all(0)]);
    }

    #[test]
    fn recording_updates_total_and_source() {
        let mut counts = FacetCounts::with_sources(["a", "b"]);
        counts.record("b");
        counts.record("b");
        assert_eq!(counts.all(), 2);
        assert_eq!(counts.get("a"), 0);
        assert_eq!(counts.get("b"), 2);
        assert_eq!(counts.get("missing"), 0);
        assert_eq!(counts.keys().collect::<Vec<_>>(), vec!["all", "a", "b"]);
    }

    #[test]
    fn source_filter_treats_all_as_sentinel() {
        assert_eq!(SourceFilter::from_key("all"), SourceFilter::All);
        assert_eq!(SourceFilter::from_key(" "), SourceFilter::All);
        assert_eq!(
            SourceFilter::from_key(" blogA "),
            SourceFilter::Only("blogA".into())
        );
        assert!(SourceFilter::All.admits("anything"));
        assert!(!SourceFilter::Only("a".into()).admits("b"));
    }

    #[test]
    fn source_named_all_is_counted_once() {
        let mut counts = FacetCounts::with_sources(["all", "blogB"]);
        counts.record("all");
        counts.record("blogB");

        assert_eq!(counts.all(), 2);
        assert_eq!(counts.get("all"), 1);
        assert_eq!(
            counts.iter().collect::<Vec<_>>(),
            vec![("all", 2), ("all", 1), ("blogB", 1)]
        );

        let rows = counts.rows();
        assert!(rows[0].is_all());
        assert_eq!(rows[0].filter(), SourceFilter::All);
        assert!(!rows[1].is_all());
        assert_eq!(rows[1].filter(), SourceFilter::Only("all".into()));
    }

    #[test]
    fn only_the_total_row_serializes_its_flag() {
        let rows = FacetCounts::with_sources(["a"]).rows();
        assert_eq!(
            serde_json::to_value(&rows).unwrap(),
            serde_json::json!([
                {"name": "all", "count": 0, "total": true},
                {"name": "a", "count": 0},
            ])
        );
    }
}
