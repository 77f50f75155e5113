use anyhow::{Context, Result};
use curated_gems::loader::{DatasetLoader, DatasetLocation};
use gems_core::{FilterState, Session};
use tracing::error;

use crate::settings::ResolvedConfig;

/// Coordinates loading the dataset into a session primed with the configured
/// filter state.
pub(crate) struct BrowseWorkflow {
    loader: DatasetLoader,
    location: DatasetLocation,
    state: FilterState,
}

impl BrowseWorkflow {
    pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
        let loader =
            DatasetLoader::new(config.timeout).context("failed to build the HTTP client")?;
        Ok(Self {
            loader,
            location: config.location.clone(),
            state: config.filter_state(),
        })
    }

    /// Load the dataset and return the session showing it. A failed load still
    /// yields a session, in the load-failed state.
    pub(crate) async fn run(self) -> Session {
        let mut session = Session::with_state(self.state);
        let ticket = session.begin_load();

        let outcome = self.loader.fetch(&self.location).await;
        if let Err(err) = &outcome {
            error!(location = %self.location, error = %err, "could not load dataset");
        }
        session.finish_load(ticket, outcome);
        session
    }
}
