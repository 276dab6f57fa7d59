mod schema;
mod validation;

pub use schema::{Config, DEFAULT_LOG_LEVEL};
pub use validation::validate_config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::assessment::Assessor;
use crate::catalog::{load_catalog, Catalog};
use crate::valuation::{load_industries, IndustryTable, TierTable};

/// Get the config directory path (~/.config/bizval/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("bizval"))
}

/// Get the default config file path (~/.config/bizval/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Where questionnaire progress is saved: `progress_file` from the config,
/// else ~/.config/bizval/progress.json
pub fn progress_path(config: &Config) -> Result<PathBuf> {
    match config.progress_file {
        Some(ref path) => Ok(path.clone()),
        None => Ok(get_config_dir()?.join("progress.json")),
    }
}

/// Load configuration from a YAML file
///
/// With `path` set the file must exist. Without it the default path is used,
/// and a missing default file means built-in defaults.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(path) => path,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    tracing::info!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Build the assessor from configured tables, falling back to the built-in
/// catalog, tier table and industry data for anything not configured.
pub fn load_assessor(config: &Config) -> Result<Assessor> {
    let industries = match config.industries {
        Some(ref path) => {
            tracing::info!(path = %path.display(), "using industry table");
            load_industries(path)?
        }
        None => IndustryTable::default(),
    };

    let catalog = match config.catalog {
        Some(ref path) => {
            tracing::info!(path = %path.display(), "using question catalog");
            load_catalog(path)?
        }
        None => Catalog::builtin(industries.sector_names())?,
    };

    let tiers = match config.tiers {
        Some(ref tiers) => TierTable::new(tiers.clone()).map_err(|errors| {
            anyhow::anyhow!("Invalid tier table:\n  - {}", errors.join("\n  - "))
        })?,
        None => TierTable::default(),
    };

    Ok(Assessor::new(catalog, tiers, industries))
}
