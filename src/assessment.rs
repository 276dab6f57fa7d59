use serde::Serialize;

use crate::answers::AnswerMap;
use crate::catalog::Catalog;
use crate::error::{CatalogError, InputError};
use crate::scoring::{compute_scores, ScoreVector};
use crate::valuation::{compute_valuation, resolve_parameters, IndustryTable, TierTable};

/// Fields that must be non-blank before evaluation, in questionnaire order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "userEmail",
    "naicsSector",
    "naicsSubSector",
    "currentRevenue",
    "ebitda",
];

/// Fields that must parse as finite numbers when present.
pub const NUMERIC_FIELDS: [&str; 3] = ["currentRevenue", "ebitda", "ebitdaAdjustments"];

/// Complete outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationResult {
    pub stage: String,
    pub adjusted_ebitda: f64,
    pub base_multiple: f64,
    pub max_multiple: f64,
    pub industry_adjustment: f64,
    pub final_multiple: f64,
    pub estimated_valuation: u64,
    pub score_vector: ScoreVector,
    pub score_percentage: f64,
    pub total_score: u32,
    pub max_possible_score: u32,
}

/// Financial inputs after validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Financials {
    pub revenue: f64,
    pub ebitda: f64,
    pub adjustments: f64,
}

impl Financials {
    pub fn adjusted_ebitda(&self) -> f64 {
        self.ebitda + self.adjustments
    }
}

/// Check required and numeric fields. Missing fields are reported before
/// invalid numbers, each as one error naming every offending field.
pub fn validate_answers(answers: &AnswerMap) -> Result<Financials, InputError> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|key| !answers.is_answered(key))
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(InputError::MissingFields(missing));
    }

    let invalid: Vec<String> = NUMERIC_FIELDS
        .iter()
        .filter(|key| answers.is_answered(key) && answers.number(key).is_none())
        .map(|key| key.to_string())
        .collect();
    if !invalid.is_empty() {
        return Err(InputError::InvalidNumbers(invalid));
    }

    Ok(Financials {
        revenue: answers.number("currentRevenue").unwrap_or_default(),
        ebitda: answers.number("ebitda").unwrap_or_default(),
        adjustments: answers.number("ebitdaAdjustments").unwrap_or(0.0),
    })
}

/// Read-only reference data plus the evaluation pipeline.
#[derive(Debug, Clone)]
pub struct Assessor {
    catalog: Catalog,
    tiers: TierTable,
    industries: IndustryTable,
}

impl Assessor {
    pub fn new(catalog: Catalog, tiers: TierTable, industries: IndustryTable) -> Self {
        Self {
            catalog,
            tiers,
            industries,
        }
    }

    /// Built-in catalog, reference tier table and default industry data.
    pub fn builtin() -> Result<Self, CatalogError> {
        let industries = IndustryTable::default();
        let catalog = Catalog::builtin(industries.sector_names())?;
        Ok(Self::new(catalog, TierTable::default(), industries))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    pub fn industries(&self) -> &IndustryTable {
        &self.industries
    }

    /// Validate the answers, then score and value them.
    /// Either a full result is returned or an error; nothing is scored when
    /// validation fails.
    pub fn evaluate(&self, answers: &AnswerMap) -> Result<ValuationResult, InputError> {
        let financials = validate_answers(answers)?;
        let adjusted_ebitda = financials.adjusted_ebitda();

        let params = resolve_parameters(
            adjusted_ebitda,
            answers.text("naicsSector").unwrap_or_default(),
            answers.text("naicsSubSector").unwrap_or_default(),
            &self.tiers,
            &self.industries,
        );

        let sheet = compute_scores(answers, self.catalog.questions());
        tracing::debug!(
            total = sheet.total,
            max_possible = sheet.max_possible,
            unmatched = sheet.unmatched.len(),
            "scored answers"
        );

        let valuation = compute_valuation(
            adjusted_ebitda,
            &sheet.scores,
            sheet.max_possible,
            params.base_multiple,
            params.max_multiple,
        );
        tracing::debug!(
            final_multiple = valuation.final_multiple,
            estimated_valuation = valuation.estimated_valuation,
            "computed valuation"
        );

        Ok(ValuationResult {
            stage: params.stage,
            adjusted_ebitda,
            base_multiple: params.base_multiple,
            max_multiple: params.max_multiple,
            industry_adjustment: params.industry_adjustment,
            final_multiple: valuation.final_multiple,
            estimated_valuation: valuation.estimated_valuation,
            score_vector: sheet.scores,
            score_percentage: valuation.score_percentage,
            total_score: sheet.total,
            max_possible_score: sheet.max_possible,
        })
    }
}
