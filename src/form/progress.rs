use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

use crate::answers::AnswerMap;
use crate::catalog::Section;

pub const PROGRESS_VERSION: u32 = 1;

/// In-progress questionnaire: the step to resume at plus every answer so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub version: u32,
    pub step: usize,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub answers: AnswerMap,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    pub fn new() -> Self {
        Self {
            version: PROGRESS_VERSION,
            step: 0,
            saved_at: Utc::now(),
            answers: AnswerMap::new(),
        }
    }

    /// Section to resume at.
    pub fn section(&self) -> Section {
        Section::from_step(self.step).unwrap_or(Section::Profile)
    }
}

/// Load saved progress from a JSON file
///
/// Returns `None` if the file doesn't exist.
/// If the file has an unsupported version, returns an error.
/// A step outside the section range restarts at the first section.
pub fn load_progress(path: &Path) -> Result<Option<Progress>> {
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open progress file at {}", path.display()))?;

    let mut progress: Progress =
        serde_json::from_reader(file).context("Failed to load saved progress")?;

    if progress.version != PROGRESS_VERSION {
        anyhow::bail!("Unsupported progress file version: {}", progress.version);
    }

    if progress.step >= Section::COUNT {
        tracing::warn!(step = progress.step, "saved step out of range, restarting");
        progress.step = 0;
    }

    Ok(Some(progress))
}

/// Save progress to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_progress(path: &Path, progress: &Progress) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory at {}", dir.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, progress).context("Failed to serialize progress")?;

    file.commit().context("Failed to save progress")?;

    Ok(())
}

/// Delete saved progress. Returns true if there was any.
pub fn clear_progress(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path)
        .with_context(|| format!("Failed to remove progress file at {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_progress(&dir.path().join("progress.json")).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("progress.json");

        let mut progress = Progress::new();
        progress.step = 4;
        progress.answers.set("ebitda", 300000.0);
        progress.answers.set("naicsSector", "Retail Trade");
        save_progress(&path, &progress).unwrap();

        let loaded = load_progress(&path).unwrap().unwrap();
        assert_eq!(loaded.step, 4);
        assert_eq!(loaded.section(), Section::Offering);
        assert_eq!(loaded.answers, progress.answers);
    }

    #[test]
    fn test_out_of_range_step_restarts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(
            &path,
            r#"{"version": 1, "step": 42, "saved_at": "2024-01-01T00:00:00Z", "answers": {}}"#,
        )
        .unwrap();

        let loaded = load_progress(&path).unwrap().unwrap();
        assert_eq!(loaded.step, 0);
    }

    #[test]
    fn test_unsupported_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(
            &path,
            r#"{"version": 2, "step": 0, "saved_at": "2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let err = load_progress(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported progress file version"));
    }

    #[test]
    fn test_clear_progress() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        save_progress(&path, &Progress::new()).unwrap();

        assert!(clear_progress(&path).unwrap());
        assert!(!path.exists());
        assert!(!clear_progress(&path).unwrap());
    }
}
