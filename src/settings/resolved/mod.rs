use std::time::Duration;

use curated_gems::loader::DatasetLocation;
use gems_core::{FilterState, Language, SourceFilter};

use crate::cli::OutputFormat;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub location: DatasetLocation,
    pub timeout: Duration,
    pub language: Language,
    pub query: String,
    pub source: SourceFilter,
    pub output: OutputFormat,
}

impl ResolvedConfig {
    pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        validation::validate(self, sources)
    }

    /// Initial filter state for the session.
    pub fn filter_state(&self) -> FilterState {
        FilterState::new(self.language)
            .with_query(self.query.clone())
            .with_source(self.source.clone())
    }

    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        summary::print_summary(self);
    }
}
