use std::collections::HashSet;

use super::question::{Question, QuestionKind};

/// Validate a question catalog before it is used for scoring.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(questions: &[Question]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut keys = HashSet::new();

    for (i, q) in questions.iter().enumerate() {
        let at = format!("questions[{}] ({})", i, q.id);

        if q.id.trim().is_empty() {
            errors.push(format!("questions[{}].id: must not be empty", i));
        } else if !ids.insert(q.id.as_str()) {
            errors.push(format!("{}.id: duplicate question id '{}'", at, q.id));
        }

        if q.answer_key.trim().is_empty() {
            errors.push(format!("{}.answer_key: must not be empty", at));
        } else if !keys.insert(q.answer_key.as_str()) {
            errors.push(format!(
                "{}.answer_key: duplicate answer key '{}'",
                at, q.answer_key
            ));
        }

        match &q.kind {
            QuestionKind::SingleChoice { options } => {
                if options.is_empty() {
                    errors.push(format!(
                        "{}.options: single_choice needs at least one option",
                        at
                    ));
                }
                let mut labels = HashSet::new();
                for option in options {
                    if !labels.insert(option.label.as_str()) {
                        errors.push(format!(
                            "{}.options: duplicate option label '{}'",
                            at, option.label
                        ));
                    }
                }
            }
            QuestionKind::Select { options } => {
                if options.is_empty() {
                    errors.push(format!("{}.options: select needs at least one option", at));
                }
            }
            QuestionKind::DependentSelect { depends_on } => {
                if depends_on == &q.answer_key {
                    errors.push(format!("{}.depends_on: cannot depend on itself", at));
                } else if !questions.iter().any(|other| &other.answer_key == depends_on) {
                    errors.push(format!(
                        "{}.depends_on: unknown answer key '{}'",
                        at, depends_on
                    ));
                }
            }
            QuestionKind::Number | QuestionKind::Email => {}
        }

        if let Some(priority) = q.priority {
            if !q.is_scored() {
                errors.push(format!(
                    "{}.priority: only scored single_choice questions carry a priority",
                    at
                ));
            } else if !q.choices().is_empty() && q.max_score() != priority.weight() {
                errors.push(format!(
                    "{}.options: best option scores {} but a {} question tops out at {}",
                    at,
                    q.max_score(),
                    priority,
                    priority.weight()
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
