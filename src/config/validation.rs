use super::schema::Config;
use crate::catalog::ScoringArea;
use crate::valuation::validate_tiers;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref level) = config.log_level {
        if level.trim().is_empty() {
            errors.push("log_level: must not be empty".to_string());
        }
    }

    if let Some(n) = config.feedback_areas {
        if n == 0 || n > ScoringArea::COUNT {
            errors.push(format!(
                "feedback_areas: must be between 1 and {}, got {}",
                ScoringArea::COUNT,
                n
            ));
        }
    }

    if let Some(ref tiers) = config.tiers {
        if let Err(tier_errors) = validate_tiers(tiers) {
            errors.extend(tier_errors);
        }
    }

    for (key, path) in [
        ("industries", &config.industries),
        ("catalog", &config.catalog),
        ("progress_file", &config.progress_file),
    ] {
        if let Some(path) = path {
            if path.as_os_str().is_empty() {
                errors.push(format!("{}: path must not be empty", key));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::EbitdaTier;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_feedback_areas_range() {
        for (n, ok) in [(0, false), (1, true), (7, true), (8, false)] {
            let config = Config {
                feedback_areas: Some(n),
                ..Default::default()
            };
            assert_eq!(validate_config(&config).is_ok(), ok, "feedback_areas {}", n);
        }
    }

    #[test]
    fn test_invalid_tiers_are_reported() {
        let config = Config {
            tiers: Some(vec![EbitdaTier::new(0.0, "Startup", 3.0, 2.0)]),
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].contains("exceeds max_multiple"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = Config {
            log_level: Some("  ".to_string()),
            feedback_areas: Some(0),
            tiers: Some(vec![]),
            catalog: Some(PathBuf::new()),
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
