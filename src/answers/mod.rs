pub mod storage;

pub use storage::load_answers;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::{Catalog, ChoiceOption, Question};

/// Raw response stored under an answer key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Null,
    Number(f64),
    Text(String),
}

impl AnswerValue {
    /// Null or whitespace-only text; treated the same as an absent key.
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::Null => true,
            AnswerValue::Text(s) => s.trim().is_empty(),
            AnswerValue::Number(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }

    /// Finite numeric value. Numeric strings such as `"300000"` are accepted.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            AnswerValue::Number(n) => *n,
            AnswerValue::Text(s) => s.trim().parse::<f64>().ok()?,
            AnswerValue::Null => return None,
        };
        n.is_finite().then_some(n)
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Null => Ok(()),
            AnswerValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{:.0}", n),
            AnswerValue::Number(n) => write!(f, "{}", n),
            AnswerValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        AnswerValue::Text(s)
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

/// Flat mapping from answer key to raw response, one per submission.
/// Missing keys are unanswered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap {
    values: BTreeMap<String, AnswerValue>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<AnswerValue> {
        self.values.remove(key)
    }

    /// Whether the key holds a non-blank value.
    pub fn is_answered(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_blank())
    }

    /// Non-blank text answer under `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_text)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AnswerValue::as_number)
    }

    /// Record an answer and clear every answer that depends on it when the
    /// value changed, e.g. a new industry sector invalidates the sub-sector.
    pub fn update(&mut self, catalog: &Catalog, key: &str, value: impl Into<AnswerValue>) {
        let value = value.into();
        if self.get(key) != Some(&value) {
            for dependent in catalog
                .questions()
                .iter()
                .filter(|q| q.depends_on() == Some(key))
            {
                self.values.remove(&dependent.answer_key);
            }
        }
        self.values.insert(key.to_string(), value);
    }

    /// Select a choice by position, storing its exact label.
    /// Returns `None` (and stores nothing) when the index is out of range.
    pub fn choose<'q>(&mut self, question: &'q Question, index: usize) -> Option<&'q ChoiceOption> {
        let choice = question.choice_at(index)?;
        self.set(question.answer_key.clone(), choice.label.as_str());
        Some(choice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = AnswerMap::new();
        for (k, v) in iter {
            answers.set(k, v);
        }
        answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_strings_are_numbers() {
        assert_eq!(AnswerValue::from("300000").as_number(), Some(300000.0));
        assert_eq!(AnswerValue::from(" 12.5 ").as_number(), Some(12.5));
        assert_eq!(AnswerValue::from("lots").as_number(), None);
        assert_eq!(AnswerValue::from("NaN").as_number(), None);
        assert_eq!(AnswerValue::Number(f64::INFINITY).as_number(), None);
        assert_eq!(AnswerValue::Null.as_number(), None);
    }

    #[test]
    fn test_blank_values() {
        assert!(AnswerValue::Null.is_blank());
        assert!(AnswerValue::from("   ").is_blank());
        assert!(!AnswerValue::Number(0.0).is_blank());

        let mut answers = AnswerMap::new();
        answers.set("userEmail", "");
        assert!(!answers.is_answered("userEmail"));
        assert_eq!(answers.text("userEmail"), None);
        assert!(!answers.is_answered("missing"));
    }

    #[test]
    fn test_display_whole_numbers_without_decimals() {
        assert_eq!(AnswerValue::Number(300000.0).to_string(), "300000");
        assert_eq!(AnswerValue::Number(2.5).to_string(), "2.5");
        assert_eq!(AnswerValue::Null.to_string(), "");
    }

    #[test]
    fn test_deserialize_mixed_json() {
        let json = r#"{"ebitda": 300000, "ownerRole": "CEO", "grossProfit": null}"#;
        let answers: AnswerMap = serde_json::from_str(json).unwrap();
        assert_eq!(answers.number("ebitda"), Some(300000.0));
        assert_eq!(answers.text("ownerRole"), Some("CEO"));
        assert_eq!(answers.get("grossProfit"), Some(&AnswerValue::Null));
    }

    #[test]
    fn test_update_sector_clears_sub_sector() {
        let catalog = Catalog::builtin(vec!["Retail Trade".to_string(), "Construction".to_string()])
            .unwrap();
        let mut answers = AnswerMap::new();
        answers.update(&catalog, "naicsSector", "Retail Trade");
        answers.update(&catalog, "naicsSubSector", "Grocery Stores");

        // Same value keeps the dependent answer
        answers.update(&catalog, "naicsSector", "Retail Trade");
        assert_eq!(answers.text("naicsSubSector"), Some("Grocery Stores"));

        answers.update(&catalog, "naicsSector", "Construction");
        assert_eq!(answers.text("naicsSubSector"), None);
        assert_eq!(answers.text("naicsSector"), Some("Construction"));
    }

    #[test]
    fn test_choose_stores_exact_label() {
        let catalog = Catalog::builtin(vec!["Retail Trade".to_string()]).unwrap();
        let question = catalog.question("customerConcentration").unwrap();
        let mut answers = AnswerMap::new();

        let choice = answers.choose(question, 0).unwrap();
        assert_eq!(choice.score, 0);
        assert_eq!(
            answers.text("customerConcentration"),
            Some("Top customer is >50% of revenue")
        );

        assert!(answers.choose(question, 99).is_none());
    }
}
