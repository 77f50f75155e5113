use gems_core::{Language, SourceFilter};
use serde::Deserialize;
use tracing::warn;

use crate::cli::{CliArgs, OutputFormat};

use super::super::resolved::{ConfigError, SettingSource};

/// `[view]` options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ViewSection {
    pub(super) language: Option<String>,
    pub(super) query: Option<String>,
    pub(super) source: Option<String>,
    pub(super) output: Option<String>,
}

/// The view settings after defaults and coercion.
pub(super) struct ViewSettings {
    pub(super) language: Language,
    pub(super) query: String,
    pub(super) source: SourceFilter,
    pub(super) output: OutputFormat,
}

impl ViewSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(lang) = cli.lang.clone() {
            self.language = Some(lang);
        }
        if let Some(query) = cli.query.clone() {
            self.query = Some(query);
        }
        if let Some(source) = cli.source.clone() {
            self.source = Some(source);
        }
        if let Some(output) = cli.output {
            self.output = Some(output.as_str().to_string());
        }
    }

    pub(super) fn resolve(self, output_source: SettingSource) -> Result<ViewSettings, ConfigError> {
        let output = match self.output {
            Some(value) => OutputFormat::from_config(&value).ok_or_else(|| {
                ConfigError::invalid("view.output", value, output_source, "expected `html` or `json`")
            })?,
            None => OutputFormat::default(),
        };

        Ok(ViewSettings {
            language: coerce_language(self.language.as_deref()),
            query: self.query.unwrap_or_default(),
            source: SourceFilter::from_key(self.source.as_deref().unwrap_or_default()),
            output,
        })
    }
}

/// Unsupported languages fall back to the default instead of failing.
fn coerce_language(tag: Option<&str>) -> Language {
    let Some(tag) = tag else {
        return Language::DEFAULT;
    };
    Language::parse(tag).unwrap_or_else(|| {
        warn!(language = tag, fallback = %Language::DEFAULT, "unsupported language");
        Language::DEFAULT
    })
}
