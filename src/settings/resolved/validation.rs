use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
    if config.timeout.is_zero() {
        return Err(ConfigError::invalid(
            "dataset.timeout_secs",
            config.timeout.as_secs().to_string(),
            sources.source_for_timeout(),
            "must be greater than zero",
        ));
    }

    Ok(())
}
