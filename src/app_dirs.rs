//! Locate the per-user configuration directory for `gems`.
//!
//! `GEMS_CONFIG_DIR` wins over the platform location from `directories`.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "curated-gems";
const APPLICATION: &str = "gems";

const CONFIG_DIR_ENV: &str = "GEMS_CONFIG_DIR";

/// Name of the per-user configuration file inside [`get_config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// An empty override is treated the same as an unset one.
fn dir_from_env(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Return the directory searched for [`CONFIG_FILE_NAME`].
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
        return Ok(dir);
    }

    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_local_dir().to_path_buf())
        .ok_or_else(|| anyhow!("unable to determine the configuration directory for gems"))
}

/// Path of the per-user configuration file.
pub fn config_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}
