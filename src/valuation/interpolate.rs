use serde::Serialize;

use crate::scoring::ScoreVector;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Valuation {
    pub final_multiple: f64,
    pub estimated_valuation: u64,
    /// Total score over max possible, clamped to [0, 1]
    pub score_percentage: f64,
}

/// Total score as a fraction of `max_possible`, clamped to [0, 1].
/// A zero `max_possible` gives 0.
pub fn score_percentage(scores: &ScoreVector, max_possible: u32) -> f64 {
    if max_possible == 0 {
        return 0.0;
    }
    let raw = f64::from(scores.total()) / f64::from(max_possible);
    raw.clamp(0.0, 1.0)
}

/// Linear position within [base, max] for a score fraction in [0, 1].
///
/// Exactly `base` at 0 and exactly `max` at 1; the result never leaves the
/// range even under floating-point rounding.
pub fn interpolate_multiple(base: f64, max: f64, percentage: f64) -> f64 {
    if percentage >= 1.0 {
        return max;
    }
    if percentage <= 0.0 {
        return base;
    }
    let multiple = base + (max - base) * percentage;
    multiple.clamp(base.min(max), base.max(max))
}

/// Combine the score vector with the multiple range into the final estimate.
/// Negative (or non-finite) adjusted EBITDA values at 0.
pub fn compute_valuation(
    adjusted_ebitda: f64,
    scores: &ScoreVector,
    max_possible: u32,
    base_multiple: f64,
    max_multiple: f64,
) -> Valuation {
    let score_percentage = score_percentage(scores, max_possible);
    let final_multiple = interpolate_multiple(base_multiple, max_multiple, score_percentage);

    let estimate = adjusted_ebitda * final_multiple;
    let estimated_valuation = if adjusted_ebitda >= 0.0 && estimate.is_finite() {
        // Saturating float-to-int conversion
        estimate.round() as u64
    } else {
        0
    };

    Valuation {
        final_multiple,
        estimated_valuation,
        score_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ScoringArea;

    fn scores_totalling(total: u32) -> ScoreVector {
        let mut scores = ScoreVector::new();
        scores.add(ScoringArea::Systems, total);
        scores
    }

    #[test]
    fn test_zero_score_gives_base_multiple() {
        let v = compute_valuation(350_000.0, &ScoreVector::new(), 140, 2.0, 3.0);
        assert_eq!(v.score_percentage, 0.0);
        assert_eq!(v.final_multiple, 2.0);
        assert_eq!(v.estimated_valuation, 700_000);
    }

    #[test]
    fn test_full_score_gives_max_multiple() {
        let v = compute_valuation(350_000.0, &scores_totalling(140), 140, 2.0, 3.0);
        assert_eq!(v.score_percentage, 1.0);
        assert_eq!(v.final_multiple, 3.0);
        assert_eq!(v.estimated_valuation, 1_050_000);
    }

    #[test]
    fn test_half_score_interpolates() {
        let v = compute_valuation(1_000_000.0, &scores_totalling(70), 140, 2.5, 3.5);
        assert_eq!(v.score_percentage, 0.5);
        assert_eq!(v.final_multiple, 3.0);
        assert_eq!(v.estimated_valuation, 3_000_000);
    }

    #[test]
    fn test_score_above_max_is_clamped() {
        let v = compute_valuation(100.0, &scores_totalling(500), 140, 2.0, 3.0);
        assert_eq!(v.score_percentage, 1.0);
        assert_eq!(v.final_multiple, 3.0);
    }

    #[test]
    fn test_zero_max_possible_gives_zero_percentage() {
        let v = compute_valuation(100.0, &ScoreVector::new(), 0, 2.0, 3.0);
        assert_eq!(v.score_percentage, 0.0);
        assert_eq!(v.final_multiple, 2.0);
    }

    #[test]
    fn test_negative_ebitda_values_at_zero() {
        let v = compute_valuation(-10_000.0, &scores_totalling(70), 140, 0.0, 0.0);
        assert_eq!(v.estimated_valuation, 0);
    }

    #[test]
    fn test_valuation_rounds_to_nearest() {
        // 333 * 2.5 = 832.5
        let v = compute_valuation(333.0, &ScoreVector::new(), 140, 2.5, 3.5);
        assert_eq!(v.estimated_valuation, 833);
    }
}
