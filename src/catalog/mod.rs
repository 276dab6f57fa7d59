pub mod area;
pub mod builtin;
pub mod question;
pub mod validation;

pub use area::{Priority, ScoringArea, Section};
pub use question::{ChoiceOption, OptionSource, Question, QuestionKind};
pub use validation::validate_catalog;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::answers::AnswerMap;
use crate::error::CatalogError;

/// Validated, read-only question catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
}

/// On-disk catalog layout:
/// ```yaml
/// questions:
///   - id: q9
///     section: systems
///     ...
/// ```
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    questions: Vec<Question>,
}

impl Catalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        validate_catalog(&questions).map_err(CatalogError::Invalid)?;
        Ok(Self { questions })
    }

    /// The canonical nine-section catalog. `sectors` fills the industry
    /// sector dropdown.
    pub fn builtin(sectors: Vec<String>) -> Result<Self, CatalogError> {
        Self::new(builtin::questions(sectors))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, answer_key: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.answer_key == answer_key)
    }

    /// Questions shown on one step, in catalog order.
    pub fn questions_in(&self, section: Section) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.section == section)
    }

    pub fn scored_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.is_scored())
    }

    /// Best achievable score within one area.
    pub fn area_max(&self, area: ScoringArea) -> u32 {
        self.scored_questions()
            .filter(|q| q.scoring_area == Some(area))
            .map(Question::max_score)
            .sum()
    }

    /// Best achievable total across all areas.
    pub fn max_possible_score(&self) -> u32 {
        self.scored_questions().map(Question::max_score).sum()
    }

    /// Option labels a select-style question offers given the current answers.
    /// Dependent selects without a parent answer offer nothing.
    pub fn options_for(
        &self,
        question: &Question,
        answers: &AnswerMap,
        source: &dyn OptionSource,
    ) -> Vec<String> {
        match &question.kind {
            QuestionKind::SingleChoice { options } => {
                options.iter().map(|o| o.label.clone()).collect()
            }
            QuestionKind::Select { options } => options.clone(),
            QuestionKind::DependentSelect { depends_on } => answers
                .text(depends_on)
                .map(|parent| source.options_for(parent))
                .unwrap_or_default(),
            QuestionKind::Number | QuestionKind::Email => Vec::new(),
        }
    }
}

/// Load and validate a catalog from a YAML file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file at {}", path.display()))?;

    let file: CatalogFile = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse catalog: invalid YAML in {}", path.display()))?;

    let catalog = Catalog::new(file.questions)?;
    Ok(catalog)
}
