//! Resolve the configuration and data directories for `reel`.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "reel";

const CONFIG_DIR_ENV: &str = "REEL_CONFIG_DIR";
const DATA_DIR_ENV: &str = "REEL_DATA_DIR";

/// File name of the log written inside the data directory.
pub const LOG_FILE_NAME: &str = "reel.log";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("no home directory to place reel files in"))
}

/// Read a directory override; empty values count as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
    match dir_from_env(CONFIG_DIR_ENV) {
        Some(dir) => Ok(dir),
        None => Ok(project_dirs()?.config_local_dir().to_path_buf()),
    }
}

/// Directory the log file lives in.
pub fn get_data_dir() -> Result<PathBuf> {
    match dir_from_env(DATA_DIR_ENV) {
        Some(dir) => Ok(dir),
        None => Ok(project_dirs()?.data_local_dir().to_path_buf()),
    }
}

/// Log file used when none is configured.
pub fn default_log_file() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(LOG_FILE_NAME))
}
