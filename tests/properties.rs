use proptest::prelude::*;

use bizval::answers::AnswerMap;
use bizval::catalog::{Catalog, ScoringArea};
use bizval::scoring::{compute_scores, ScoreVector};
use bizval::valuation::{
    compute_valuation, interpolate_multiple, score_percentage, IndustryTable, TierTable,
};

fn score_vector(points: &[u32]) -> ScoreVector {
    let mut scores = ScoreVector::new();
    for (area, p) in ScoringArea::ALL.iter().zip(points) {
        scores.add(*area, *p);
    }
    scores
}

fn multiple_range() -> impl Strategy<Value = (f64, f64)> {
    (0.0f64..10.0, 0.0f64..10.0).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

proptest! {
    #[test]
    fn test_score_percentage_is_bounded(
        points in prop::collection::vec(0u32..1000, ScoringArea::COUNT),
        max_possible in 0u32..500,
    ) {
        let p = score_percentage(&score_vector(&points), max_possible);
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_multiple_endpoints_are_exact((base, max) in multiple_range()) {
        prop_assert_eq!(interpolate_multiple(base, max, 0.0), base);
        prop_assert_eq!(interpolate_multiple(base, max, 1.0), max);
    }

    #[test]
    fn test_multiple_is_monotonic_and_in_range(
        (base, max) in multiple_range(),
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let m_lo = interpolate_multiple(base, max, lo);
        let m_hi = interpolate_multiple(base, max, hi);
        prop_assert!(m_lo <= m_hi);
        prop_assert!(m_lo >= base && m_hi <= max);
    }

    #[test]
    fn test_negative_ebitda_values_at_zero(
        ebitda in -1.0e9f64..0.0,
        points in prop::collection::vec(0u32..20, ScoringArea::COUNT),
        (base, max) in multiple_range(),
    ) {
        prop_assume!(ebitda < 0.0);
        let v = compute_valuation(ebitda, &score_vector(&points), 140, base, max);
        prop_assert_eq!(v.estimated_valuation, 0);
    }

    #[test]
    fn test_tier_lookup_picks_highest_qualifying_threshold(ebitda in 0.0f64..1.0e8) {
        let table = TierTable::default();
        let tier = table.lookup(ebitda).unwrap();
        prop_assert!(tier.threshold <= ebitda);
        for other in table.tiers() {
            if other.threshold <= ebitda {
                prop_assert!(other.threshold <= tier.threshold);
            }
        }
    }

    #[test]
    fn test_any_answers_stay_within_area_ceilings(seed in prop::collection::vec(0usize..10, 28)) {
        let industries = IndustryTable::default();
        let catalog = Catalog::builtin(industries.sector_names()).unwrap();
        let mut answers = AnswerMap::new();
        for (question, pick) in catalog.scored_questions().zip(seed.iter().cycle()) {
            // Out-of-range picks leave the question unanswered
            answers.choose(question, *pick);
        }

        let sheet = compute_scores(&answers, catalog.questions());
        prop_assert!(sheet.total <= sheet.max_possible);
        for (area, score) in sheet.scores.iter() {
            prop_assert!(score <= catalog.area_max(area));
        }
        prop_assert!(sheet.unmatched.is_empty());
    }
}
