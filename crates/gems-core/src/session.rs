//! The mutable slot an outer layer owns.
//!
//! A [`Session`] holds the current dataset snapshot, the [`FilterState`] and
//! the last computed view. Every state-changing call runs exactly one
//! recompute. Loads are tracked with a generation counter: only the most
//! recently started load may replace the snapshot, and until it resolves the
//! previous snapshot stays authoritative.

use tracing::{debug, info, warn};

use crate::engine::{FilterState, FilteredView, scan};
use crate::error::LoadError;
use crate::facets::{FacetCounts, FacetRow, SourceFilter};
use crate::item::{Dataset, Item};
use crate::language::Language;
use crate::locale;
use crate::projection::{DisplayRecord, project};

/// Handle for one in-flight dataset load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// What the rendering surface should present besides the items themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    /// No load has completed yet.
    Loading,
    /// At least one item is visible.
    Ready,
    /// The dataset loaded but nothing is visible for the current state.
    Empty,
    /// The latest load failed; the view has been emptied.
    LoadFailed(LoadError),
}

impl ViewStatus {
    /// Localized message to show in place of the list, if any.
    #[must_use]
    pub fn message(&self, lang: Language) -> Option<String> {
        match self {
            ViewStatus::Ready => None,
            ViewStatus::Loading => Some(locale::loading_message(lang).to_string()),
            ViewStatus::Empty => Some(locale::empty_message(lang).to_string()),
            ViewStatus::LoadFailed(_) => Some(format!(
                "{}{}",
                locale::error_prefix(lang),
                locale::load_failed_message(lang)
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadState {
    NeverLoaded,
    Loaded,
    Failed(LoadError),
}

#[derive(Debug)]
pub struct Session {
    dataset: Dataset,
    state: FilterState,
    load: LoadState,
    generation: u64,
    pending: Option<u64>,
    visible: Vec<usize>,
    counts: FacetCounts,
    revision: u64,
}

impl Session {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self::with_state(FilterState::new(language))
    }

    #[must_use]
    pub fn with_state(state: FilterState) -> Self {
        let mut session = Self {
            dataset: Dataset::empty(),
            state,
            load: LoadState::NeverLoaded,
            generation: 0,
            pending: None,
            visible: Vec::new(),
            counts: FacetCounts::default(),
            revision: 0,
        };
        session.refresh();
        session
    }

    /// Start a load. The returned ticket supersedes any earlier one.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        if let Some(previous) = self.pending.replace(self.generation) {
            debug!(previous, current = self.generation, "superseding pending load");
        }
        LoadTicket(self.generation)
    }

    /// Apply the outcome of a load started with `ticket`.
    ///
    /// Returns `false` when a newer load has been started since or this ticket
    /// was already finished, in which case the outcome is discarded and the
    /// current snapshot is left untouched.
    pub fn finish_load(&mut self, ticket: LoadTicket, outcome: Result<Dataset, LoadError>) -> bool {
        if self.pending != Some(ticket.generation()) {
            warn!(
                stale = ticket.generation(),
                current = self.generation,
                "discarding outcome of superseded load"
            );
            return false;
        }

        self.pending = None;
        match outcome {
            Ok(dataset) => {
                info!(items = dataset.len(), "dataset loaded");
                self.dataset = dataset;
                self.load = LoadState::Loaded;
            }
            Err(err) => {
                warn!(error = %err, "dataset load failed");
                self.dataset = Dataset::empty();
                self.load = LoadState::Failed(err);
            }
        }
        self.refresh();
        true
    }

    /// Begin and immediately finish a successful load.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        let ticket = self.begin_load();
        self.finish_load(ticket, Ok(dataset));
    }

    pub fn edit_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.refresh();
    }

    pub fn select_source(&mut self, source: SourceFilter) {
        self.state.active_source = source;
        self.refresh();
    }

    /// Select a facet by its key. An offered source key narrows to that
    /// source, even one named `"all"`; otherwise `"all"` and blank keys clear
    /// the restriction.
    pub fn select_facet(&mut self, key: &str) {
        let source = if self.counts.offers(key) {
            SourceFilter::Only(key.to_string())
        } else {
            SourceFilter::from_key(key)
        };
        self.select_source(source);
    }


    /// Switch the display language without reloading the dataset.
    pub fn change_language(&mut self, language: Language) {
        self.state.language = language;
        self.refresh();
    }

    /// Switch language from an external tag, coercing unsupported values.
    pub fn change_language_tag(&mut self, tag: &str) {
        self.change_language(Language::coerce(Some(tag)));
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.state.language
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Whether a load has been started and not yet finished.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of recomputes run so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn status(&self) -> ViewStatus {
        match &self.load {
            LoadState::Failed(err) => ViewStatus::LoadFailed(err.clone()),
            LoadState::NeverLoaded => ViewStatus::Loading,
            LoadState::Loaded if self.visible.is_empty() => ViewStatus::Empty,
            LoadState::Loaded => ViewStatus::Ready,
        }
    }

    #[must_use]
    pub fn counts(&self) -> &FacetCounts {
        &self.counts
    }

    /// Offered facets with their counts, `"all"` first.
    #[must_use]
    pub fn facets(&self) -> Vec<FacetRow> {
        self.counts.rows()
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        let items = self.dataset.items();
        self.visible.iter().map(move |&position| &items[position])
    }

    /// The last computed view.
    #[must_use]
    pub fn view(&self) -> FilteredView<'_> {
        FilteredView {
            items: self.visible_items().collect(),
            counts: self.counts.clone(),
        }
    }

    /// Display records for the visible items in the current language.
    #[must_use]
    pub fn display_records(&self) -> Vec<DisplayRecord> {
        let lang = self.state.language;
        self.visible_items().map(|item| project(item, lang)).collect()
    }

    fn refresh(&mut self) {
        let (visible, counts) = scan(&self.dataset, &self.state);
        self.visible = visible;
        self.counts = counts;
        self.revision += 1;
    }
}
