use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::feedback::DEFAULT_FEEDBACK_AREAS;
use crate::valuation::EbitdaTier;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Optional settings file. Every key may be omitted.
///
/// Example YAML:
/// ```yaml
/// log_level: info
/// feedback_areas: 2
/// industries: ./industries.yaml
/// tiers:
///   - { threshold: 1000000, stage: "Established", base_multiple: 3, max_multiple: 4 }
///   - { threshold: 0, stage: "Early", base_multiple: 2, max_multiple: 3 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub log_level: Option<String>,
    /// Number of lowest-scoring areas to give advice on
    #[serde(default)]
    pub feedback_areas: Option<usize>,
    /// Replaces the reference EBITDA tier table
    #[serde(default)]
    pub tiers: Option<Vec<EbitdaTier>>,
    /// YAML industry table replacing the built-in one
    #[serde(default)]
    pub industries: Option<PathBuf>,
    /// YAML question catalog replacing the built-in one
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub progress_file: Option<PathBuf>,
}

impl Config {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn feedback_areas(&self) -> usize {
        self.feedback_areas.unwrap_or(DEFAULT_FEEDBACK_AREAS)
    }
}
