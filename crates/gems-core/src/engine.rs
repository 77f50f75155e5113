//! Filter and facet computation.
//!
//! [`recompute`] is the semantic reference for what a user sees: it is run in
//! full on every state change and holds no state of its own.

use tracing::debug;

use crate::facets::{FacetCounts, SourceFilter};
use crate::item::{Dataset, Item};
use crate::language::Language;
use crate::matcher::Query;

/// Everything that decides the visible list, besides the dataset itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub active_source: SourceFilter,
    pub language: Language,
}

impl FilterState {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: SourceFilter) -> Self {
        self.active_source = source;
        self
    }
}

/// Result of one recompute: the visible items in dataset order and the counts
/// for every offered facet.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    pub items: Vec<&'a Item>,
    pub counts: FacetCounts,
}

impl FilteredView<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Compute the visible items and facet counts for `state`.
///
/// Counts are gated by the query alone, so picking a facet never changes
/// them. Filtering preserves dataset order.
#[must_use]
pub fn recompute<'a>(dataset: &'a Dataset, state: &FilterState) -> FilteredView<'a> {
    let (positions, counts) = scan(dataset, state);
    let items = positions
        .into_iter()
        .map(|position| &dataset.items()[position])
        .collect();
    FilteredView { items, counts }
}

/// Positions of the visible items plus the facet counts.
pub(crate) fn scan(dataset: &Dataset, state: &FilterState) -> (Vec<usize>, FacetCounts) {
    let query = Query::new(&state.query);
    let mut counts = FacetCounts::with_sources(dataset.sources());
    let mut positions = Vec::new();

    for (position, item) in dataset.iter().enumerate() {
        if !query.matches(item, state.language) {
            continue;
        }
        counts.record(item.source());
        if state.active_source.admits(item.source()) {
            positions.push(position);
        }
    }

    debug!(
        visible = positions.len(),
        matched = counts.all(),
        total = dataset.len(),
        source = %state.active_source,
        language = %state.language,
        "recomputed view"
    );

    (positions, counts)
}
