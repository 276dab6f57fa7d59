use super::AnswerMap;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Load an answer map from a file: YAML for `.yaml`/`.yml`, JSON otherwise.
pub fn load_answers(path: &Path) -> Result<AnswerMap> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file at {}", path.display()))?;

    let answers = if is_yaml(path) {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse answers: invalid YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse answers: invalid JSON in {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), "loaded answers");
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_answers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        fs::write(&path, r#"{"ebitda": "300000", "naicsSector": "Retail Trade"}"#).unwrap();

        let answers = load_answers(&path).unwrap();
        assert_eq!(answers.number("ebitda"), Some(300000.0));
        assert_eq!(answers.text("naicsSector"), Some("Retail Trade"));
    }

    #[test]
    fn test_load_yaml_answers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.yml");
        fs::write(&path, "ebitda: 300000\nownerRole: \"CEO\"\n").unwrap();

        let answers = load_answers(&path).unwrap();
        assert_eq!(answers.number("ebitda"), Some(300000.0));
        assert_eq!(answers.text("ownerRole"), Some("CEO"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_answers(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read answers file"));
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load_answers(&path).is_err());
    }
}
