use std::time::Duration;

use curated_gems::loader::{DEFAULT_TIMEOUT, DatasetLocation};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, SettingSource};

/// Dataset location used when neither the CLI nor a config layer names one.
pub(super) const DEFAULT_LOCATION: &str = "./data.json";

/// `[dataset]` options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DatasetSection {
    pub(super) location: Option<String>,
    pub(super) timeout_secs: Option<u64>,
}

impl DatasetSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(data) = cli.data.clone() {
            self.location = Some(data);
        }
        if let Some(value) = cli.timeout {
            self.timeout_secs = Some(value);
        }
    }

    pub(super) fn resolve(
        self,
        location_source: SettingSource,
    ) -> Result<(DatasetLocation, Duration), ConfigError> {
        let raw = self
            .location
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        let location = DatasetLocation::parse(&raw).map_err(|err| {
            ConfigError::invalid("dataset.location", err.value, location_source, err.reason)
        })?;

        let timeout = self
            .timeout_secs
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

        Ok((location, timeout))
    }
}
