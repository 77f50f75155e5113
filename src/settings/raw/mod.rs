use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod dataset;
mod view;

use dataset::DatasetSection;
use view::ViewSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    dataset: DatasetSection,
    view: ViewSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.dataset.apply_cli_overrides(cli);
        self.view.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            dataset_location: detect_source(
                cli.data.is_some(),
                self.dataset.location.is_some(),
                "GEMS__DATASET__LOCATION",
                "--data",
                "dataset.location",
            ),
            dataset_timeout: detect_source(
                cli.timeout.is_some(),
                self.dataset.timeout_secs.is_some(),
                "GEMS__DATASET__TIMEOUT_SECS",
                "--timeout",
                "dataset.timeout_secs",
            ),
            view_output: detect_source(
                cli.output.is_some(),
                self.view.output.is_some(),
                "GEMS__VIEW__OUTPUT",
                "--output",
                "view.output",
            ),
        };

        let (location, timeout) = self
            .dataset
            .resolve(sources.source_for_location())
            .map_err(Error::new)?;
        let view = self
            .view
            .resolve(sources.source_for_output())
            .map_err(Error::new)?;

        let config = ResolvedConfig {
            location,
            timeout,
            language: view.language,
            query: view.query,
            source: view.source,
            output: view.output,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
