use serde::Serialize;

use super::industry::{IndustryTable, NEUTRAL_ADJUSTMENT};
use super::tiers::{TierTable, BELOW_MINIMUM_STAGE};

/// Stage and industry-adjusted multiple range for an adjusted EBITDA.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationParameters {
    pub stage: String,
    pub base_multiple: f64,
    pub max_multiple: f64,
    pub industry_adjustment: f64,
}

impl ValuationParameters {
    fn below_minimum() -> Self {
        Self {
            stage: BELOW_MINIMUM_STAGE.to_string(),
            base_multiple: 0.0,
            max_multiple: 0.0,
            industry_adjustment: NEUTRAL_ADJUSTMENT,
        }
    }
}

/// Pick the EBITDA tier and scale its multiples by the industry factor.
///
/// No qualifying tier (negative or non-finite EBITDA) yields the
/// below-minimum stage with zero multiples and a neutral adjustment.
pub fn resolve_parameters(
    adjusted_ebitda: f64,
    sector: &str,
    sub_sector: &str,
    tiers: &TierTable,
    industries: &IndustryTable,
) -> ValuationParameters {
    let Some(tier) = tiers.lookup(adjusted_ebitda) else {
        tracing::debug!(adjusted_ebitda, "no EBITDA tier qualifies");
        return ValuationParameters::below_minimum();
    };

    let industry_adjustment = industries.adjustment(sector, sub_sector);
    tracing::debug!(
        stage = %tier.stage,
        industry_adjustment,
        "resolved valuation parameters"
    );

    ValuationParameters {
        stage: tier.stage.clone(),
        base_multiple: tier.base_multiple * industry_adjustment,
        max_multiple: tier.max_multiple * industry_adjustment,
        industry_adjustment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(ebitda: f64, sector: &str, sub_sector: &str) -> ValuationParameters {
        resolve_parameters(
            ebitda,
            sector,
            sub_sector,
            &TierTable::default(),
            &IndustryTable::default(),
        )
    }

    #[test]
    fn test_boundary_selects_higher_tier() {
        let params = resolve(1_000_000.0, "", "");
        assert_eq!(params.stage, "Mature Start-up");
        assert_eq!(params.base_multiple, 2.5);
        assert_eq!(params.max_multiple, 3.5);
    }

    #[test]
    fn test_below_boundary_selects_startup() {
        let params = resolve(999_999.0, "", "");
        assert_eq!(params.stage, "Startup");
        assert_eq!(params.base_multiple, 2.0);
        assert_eq!(params.max_multiple, 3.0);
    }

    #[test]
    fn test_unknown_industry_leaves_multiples_unchanged() {
        let params = resolve(350_000.0, "Nowhere", "Nothing");
        assert_eq!(params.industry_adjustment, 1.0);
        assert_eq!(params.base_multiple, 2.0);
        assert_eq!(params.max_multiple, 3.0);
    }

    #[test]
    fn test_industry_factor_scales_both_multiples() {
        let params = resolve(5_000_000.0, "Retail Trade", "Family Clothing Stores");
        assert_eq!(params.stage, "Mature Scaleup");
        assert_eq!(params.industry_adjustment, 0.8);
        assert!((params.base_multiple - 4.0).abs() < 1e-9);
        assert!((params.max_multiple - 5.6).abs() < 1e-9);
    }

    #[test]
    fn test_negative_ebitda_is_below_minimum() {
        let params = resolve(-50_000.0, "Information", "Software Publishers");
        assert_eq!(params.stage, "Pre-Startup / Negative EBITDA");
        assert_eq!(params.base_multiple, 0.0);
        assert_eq!(params.max_multiple, 0.0);
        assert_eq!(params.industry_adjustment, 1.0);
    }

    #[test]
    fn test_nan_ebitda_is_below_minimum() {
        let params = resolve(f64::NAN, "", "");
        assert_eq!(params.stage, BELOW_MINIMUM_STAGE);
    }
}
