use serde::{Deserialize, Serialize};

/// Stage reported when no tier qualifies (negative or non-finite EBITDA).
pub const BELOW_MINIMUM_STAGE: &str = "Pre-Startup / Negative EBITDA";

/// One EBITDA bracket: the first tier whose threshold is at or below the
/// adjusted EBITDA wins.
///
/// Example YAML:
/// ```yaml
/// tiers:
///   - threshold: 1000000
///     stage: "Mature Start-up"
///     base_multiple: 2.5
///     max_multiple: 3.5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EbitdaTier {
    pub threshold: f64,
    pub stage: String,
    pub base_multiple: f64,
    pub max_multiple: f64,
}

impl EbitdaTier {
    pub fn new(threshold: f64, stage: &str, base_multiple: f64, max_multiple: f64) -> Self {
        Self {
            threshold,
            stage: stage.to_string(),
            base_multiple,
            max_multiple,
        }
    }
}

/// Tiers ordered by descending threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TierTable {
    tiers: Vec<EbitdaTier>,
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            tiers: vec![
                EbitdaTier::new(5_000_000.0, "Mature Scaleup", 5.0, 7.0),
                EbitdaTier::new(3_000_000.0, "Scale Up", 4.0, 6.0),
                EbitdaTier::new(2_000_000.0, "Mature Grow-up", 3.5, 5.0),
                EbitdaTier::new(1_500_000.0, "Grow-up", 3.0, 4.5),
                EbitdaTier::new(1_000_000.0, "Mature Start-up", 2.5, 3.5),
                EbitdaTier::new(0.0, "Startup", 2.0, 3.0),
            ],
        }
    }
}

impl TierTable {
    /// Build a table from configured tiers, reporting every problem at once.
    pub fn new(tiers: Vec<EbitdaTier>) -> Result<Self, Vec<String>> {
        validate_tiers(&tiers)?;
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[EbitdaTier] {
        &self.tiers
    }

    /// First tier with `threshold <= ebitda`. Non-finite EBITDA selects none.
    pub fn lookup(&self, ebitda: f64) -> Option<&EbitdaTier> {
        if !ebitda.is_finite() {
            return None;
        }
        self.tiers.iter().find(|t| ebitda >= t.threshold)
    }
}

/// Validate a tier table: non-empty, thresholds strictly descending,
/// multiples finite and non-negative with base <= max.
pub fn validate_tiers(tiers: &[EbitdaTier]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if tiers.is_empty() {
        errors.push("tiers: at least one tier is required".to_string());
    }

    for (i, tier) in tiers.iter().enumerate() {
        if tier.stage.trim().is_empty() {
            errors.push(format!("tiers[{}].stage: must not be empty", i));
        }
        if !tier.threshold.is_finite() {
            errors.push(format!("tiers[{}].threshold: must be a finite number", i));
        }
        for (field, value) in [
            ("base_multiple", tier.base_multiple),
            ("max_multiple", tier.max_multiple),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!(
                    "tiers[{}].{}: must be a finite non-negative number, got {}",
                    i, field, value
                ));
            }
        }
        if tier.base_multiple > tier.max_multiple {
            errors.push(format!(
                "tiers[{}]: base_multiple {} exceeds max_multiple {}",
                i, tier.base_multiple, tier.max_multiple
            ));
        }
        if i > 0 && tier.threshold >= tiers[i - 1].threshold {
            errors.push(format!(
                "tiers[{}].threshold: {} must be lower than the previous tier's {}",
                i,
                tier.threshold,
                tiers[i - 1].threshold
            ));
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

    #[test]
    fn test_default_table_is_valid() {
        assert!(validate_tiers(TierTable::default().tiers()).is_ok());
    }

    #[test]
    fn test_lookup_inclusive_boundary() {
        let table = TierTable::default();
        let tier = table.lookup(1_000_000.0).unwrap();
        assert_eq!(tier.stage, "Mature Start-up");
        assert_eq!(tier.base_multiple, 2.5);
        assert_eq!(tier.max_multiple, 3.5);
    }

    #[test]
    fn test_lookup_just_below_boundary() {
        let table = TierTable::default();
        let tier = table.lookup(999_999.0).unwrap();
        assert_eq!(tier.stage, "Startup");
        assert_eq!(tier.base_multiple, 2.0);
        assert_eq!(tier.max_multiple, 3.0);
    }

    #[test]
    fn test_lookup_top_and_zero() {
        let table = TierTable::default();
        assert_eq!(table.lookup(50_000_000.0).unwrap().stage, "Mature Scaleup");
        assert_eq!(table.lookup(0.0).unwrap().stage, "Startup");
    }

    #[test]
    fn test_lookup_negative_and_non_finite() {
        let table = TierTable::default();
        assert!(table.lookup(-1.0).is_none());
        assert!(table.lookup(f64::NAN).is_none());
        assert!(table.lookup(f64::INFINITY).is_none());
    }

    #[test]
    fn test_validate_rejects_unordered_tiers() {
        let tiers = vec![
            EbitdaTier::new(0.0, "Startup", 2.0, 3.0),
            EbitdaTier::new(1_000_000.0, "Mature Start-up", 2.5, 3.5),
        ];
        let errors = TierTable::new(tiers).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("tiers[1].threshold"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let tiers = vec![EbitdaTier::new(f64::NAN, "", 4.0, -1.0)];
        let errors = validate_tiers(&tiers).unwrap_err();
        // stage, threshold, max_multiple, base > max
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_validate_empty_table() {
        assert!(validate_tiers(&[]).is_err());
    }
}
