use serde::{Deserialize, Serialize};

use super::area::{Priority, ScoringArea, Section};

/// One selectable answer of a single-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceOption {
    pub label: String,
    pub score: u32,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>, score: u32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Answer type of a question, carrying whatever option data that type needs.
///
/// Example YAML:
/// ```yaml
/// kind:
///   single_choice:
///     options:
///       - { label: "Very easy", score: 5 }
///       - { label: "Impossible", score: 0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice { options: Vec<ChoiceOption> },
    Number,
    Email,
    Select { options: Vec<String> },
    /// Options depend on the answer stored under `depends_on`.
    DependentSelect { depends_on: String },
}

impl QuestionKind {
    pub fn name(&self) -> &'static str {
        match self {
            QuestionKind::SingleChoice { .. } => "single_choice",
            QuestionKind::Number => "number",
            QuestionKind::Email => "email",
            QuestionKind::Select { .. } => "select",
            QuestionKind::DependentSelect { .. } => "dependent_select",
        }
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: String,
    pub section: Section,
    pub text: String,
    /// Key the answer is stored under in the answer map
    pub answer_key: String,
    pub kind: QuestionKind,
    /// Only single-choice questions with an area contribute to the score
    #[serde(default)]
    pub scoring_area: Option<ScoringArea>,
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Input gating hint for the form; the scoring engine ignores it
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl Question {
    /// Whether this question feeds the qualitative score.
    pub fn is_scored(&self) -> bool {
        self.scoring_area.is_some() && matches!(self.kind, QuestionKind::SingleChoice { .. })
    }

    /// Scored choices, empty for every non-choice question.
    pub fn choices(&self) -> &[ChoiceOption] {
        match &self.kind {
            QuestionKind::SingleChoice { options } => options,
            _ => &[],
        }
    }

    /// Best achievable score: the maximum over the options, never their sum.
    pub fn max_score(&self) -> u32 {
        self.choices().iter().map(|c| c.score).max().unwrap_or(0)
    }

    /// Option whose label equals `label` exactly (case-sensitive).
    pub fn choice(&self, label: &str) -> Option<&ChoiceOption> {
        self.choices().iter().find(|c| c.label == label)
    }

    pub fn choice_at(&self, index: usize) -> Option<&ChoiceOption> {
        self.choices().get(index)
    }

    /// Answer key of the parent question for dependent selects.
    pub fn depends_on(&self) -> Option<&str> {
        match &self.kind {
            QuestionKind::DependentSelect { depends_on } => Some(depends_on),
            _ => None,
        }
    }
}

/// Supplies option labels for dependent selects, keyed by the parent's answer.
pub trait OptionSource {
    fn options_for(&self, parent: &str) -> Vec<String>;
}
