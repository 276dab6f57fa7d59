use serde::Serialize;

use crate::catalog::ScoringArea;
use crate::scoring::ScoreVector;

pub const DEFAULT_FEEDBACK_AREAS: usize = 3;

pub const IMPROVEMENT_INTRO: &str =
    "Key areas identified for potential value improvement include:";
pub const IMPROVEMENT_CLOSING: &str = "Addressing these could help progress your business and potentially increase its valuation multiple.";
pub const BALANCED: &str = "Your scores indicate a relatively balanced business for this stage across the qualitative areas assessed.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub area: ScoringArea,
    pub score: u32,
    pub advice: &'static str,
    pub timeframe: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovementPlan {
    pub stage_summary: String,
    /// Lowest-scoring areas first
    pub recommendations: Vec<Recommendation>,
    pub closing: &'static str,
}

/// Advice text and estimated time to implement for one area.
fn advice_for(area: ScoringArea) -> (&'static str, &'static str) {
    match area {
        ScoringArea::Expansion => (
            "Build scalable systems, document expansion playbooks (geo/product), and analyze partnership/acquisition opportunities to prepare for future growth.",
            "12-36 months",
        ),
        ScoringArea::Marketing => (
            "Strengthen brand recognition, optimize your digital presence, and implement a systematic, measurable lead generation process.",
            "6-18 months",
        ),
        ScoringArea::Profitability => (
            "Analyze and improve gross margins, focus on recurring revenue streams, and implement rigorous financial planning/forecasting.",
            "6-12 months analysis & implementation",
        ),
        ScoringArea::Offering => (
            "Systematically measure customer satisfaction (e.g., NPS), enhance product/service differentiation, and implement robust quality assurance systems.",
            "ongoing",
        ),
        ScoringArea::Workforce => (
            "Reduce owner dependency by strengthening your management team, clarifying roles/accountability (KPIs), and improving employee retention/development programs.",
            "9-24 months",
        ),
        ScoringArea::Systems => (
            "Focus on documenting core processes (SOPs), leveraging technology (CRM/ERP), and implementing KPI tracking to improve efficiency and scalability.",
            "6-18 months",
        ),
        ScoringArea::Market => (
            "Diversify your customer base to reduce concentration risk, strengthen your competitive differentiation, and assess market resilience.",
            "12-24 months",
        ),
    }
}

/// Advice for the `count` lowest-scoring areas (ties in area order).
/// A zero count yields no recommendations and the balanced closing line.
pub fn improvement_plan(scores: &ScoreVector, stage: &str, count: usize) -> ImprovementPlan {
    let recommendations: Vec<Recommendation> = scores
        .ascending()
        .into_iter()
        .take(count)
        .map(|(area, score)| {
            let (advice, timeframe) = advice_for(area);
            Recommendation {
                area,
                score,
                advice,
                timeframe,
            }
        })
        .collect();

    let closing = if recommendations.is_empty() {
        BALANCED
    } else {
        IMPROVEMENT_CLOSING
    };

    ImprovementPlan {
        stage_summary: format!(
            "Based on your responses, you appear to be operating at the {} stage.",
            stage
        ),
        recommendations,
        closing,
    }
}
