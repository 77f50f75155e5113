use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    pub(crate) dataset_location: Option<SettingSource>,
    pub(crate) dataset_timeout: Option<SettingSource>,
    pub(crate) view_output: Option<SettingSource>,
}

impl ConfigSources {
    pub(crate) fn source_for_location(&self) -> SettingSource {
        or_key(self.dataset_location.as_ref(), "dataset.location")
    }

    pub(crate) fn source_for_timeout(&self) -> SettingSource {
        or_key(self.dataset_timeout.as_ref(), "dataset.timeout_secs")
    }

    pub(crate) fn source_for_output(&self) -> SettingSource {
        or_key(self.view_output.as_ref(), "view.output")
    }
}

fn or_key(source: Option<&SettingSource>, key: &'static str) -> SettingSource {
    source.cloned().unwrap_or(SettingSource::ConfigKey(key))
}
