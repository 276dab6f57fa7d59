use super::vector::ScoreVector;
use crate::answers::{AnswerMap, AnswerValue};
use crate::catalog::Question;

/// A scored question whose answer matched none of its options.
#[derive(Debug, Clone, PartialEq)]
pub struct UnmatchedAnswer {
    pub question_id: String,
    pub answer_key: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSheet {
    pub scores: ScoreVector,
    pub total: u32,
    /// Sum of every scored question's best option, independent of the answers
    pub max_possible: u32,
    pub unmatched: Vec<UnmatchedAnswer>,
}

/// Reduce an answer map to per-area scores.
///
/// Only single-choice questions with a scoring area count. Absent or blank
/// answers add nothing; answers that match no option label exactly add
/// nothing and are reported in `unmatched`.
pub fn compute_scores(answers: &AnswerMap, questions: &[Question]) -> ScoreSheet {
    let mut scores = ScoreVector::new();
    let mut max_possible = 0u32;
    let mut unmatched = Vec::new();

    for question in questions.iter().filter(|q| q.is_scored()) {
        let Some(area) = question.scoring_area else {
            continue;
        };
        max_possible = max_possible.saturating_add(question.max_score());

        let Some(value) = answers.get(&question.answer_key) else {
            continue;
        };
        if value.is_blank() {
            continue;
        }

        // Numbers never equal a label
        let matched = match value {
            AnswerValue::Text(label) => question.choice(label),
            _ => None,
        };

        match matched {
            Some(choice) => scores.add(area, choice.score),
            None => {
                tracing::warn!(
                    question = %question.id,
                    answer = %value,
                    "answer matches no option, scoring 0"
                );
                unmatched.push(UnmatchedAnswer {
                    question_id: question.id.clone(),
                    answer_key: question.answer_key.clone(),
                    answer: value.to_string(),
                });
            }
        }
    }

    let total = scores.total();
    debug_assert!(
        max_possible > 0 || total == 0,
        "nonzero score {} with zero max possible",
        total
    );

    ScoreSheet {
        scores,
        total,
        max_possible,
        unmatched,
    }
}
