use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "captext";

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .context("Unable to determine config directory")
}

pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Prefix for the per-request scratch directories.
pub fn scratch_prefix() -> String {
    format!("{}-", APP_DIR)
}
