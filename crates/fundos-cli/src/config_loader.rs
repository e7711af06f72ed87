//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use fundos_core::config::{CliConfigOverrides, LayeredConfig};
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "FUNDOS_DATA_DIR";
const DEFAULT_DATA_DIR: &str = ".fundos";

/// Resolve the data directory: flag, then environment, then `./.fundos`
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| {
        std::env::var(DATA_DIR_ENV).ok().filter(|v| !v.trim().is_empty()).map(PathBuf::from)
    })
    .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Load layered configuration for a data directory
pub fn load_config(data_dir: &Path) -> Result<LayeredConfig> {
    let config_path = data_dir.join("config.toml");

    let config = LayeredConfig::with_defaults()
        .load_from_optional_file(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?
        .load_from_env();

    Ok(config)
}

/// Load layered configuration with CLI overrides
pub fn load_config_with_overrides(
    data_dir: &Path,
    overrides: CliConfigOverrides,
) -> Result<LayeredConfig> {
    let mut config = load_config(data_dir)?;
    config.update_from_cli(overrides);
    Ok(config)
}
