use anyhow::{Context, Result};
use chrono::Utc;
use std::io::{BufRead, Write};

use super::progress::Progress;
use crate::answers::{AnswerMap, AnswerValue};
use crate::catalog::{Catalog, OptionSource, Question, QuestionKind, Section};

/// Line-oriented questionnaire over any reader/writer pair.
pub struct Wizard<'a, R, W> {
    input: R,
    output: W,
    catalog: &'a Catalog,
    source: &'a dyn OptionSource,
}

/// Parse a typed amount, tolerating `$`, `,` and `_` separators.
fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '_' | ' '))
        .collect();
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn looks_like_email(input: &str) -> bool {
    match input.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

impl<'a, R: BufRead, W: Write> Wizard<'a, R, W> {
    pub fn new(input: R, output: W, catalog: &'a Catalog, source: &'a dyn OptionSource) -> Self {
        Self {
            input,
            output,
            catalog,
            source,
        }
    }

    /// Prompt with a message and return the trimmed input.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input closed before the questionnaire was finished");
        }
        Ok(line.trim().to_string())
    }

    /// Prompt with an optional default. Returns the default if input is empty.
    fn prompt_with_default(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(default) => {
                let input = self.prompt(&format!("{} [{}]: ", message, default))?;
                if input.is_empty() {
                    Ok(default.to_string())
                } else {
                    Ok(input)
                }
            }
            None => self.prompt(&format!("{}: ", message)),
        }
    }

    /// Numbered menu. Returns the chosen index.
    fn menu(&mut self, labels: &[String], current: Option<usize>) -> Result<usize> {
        for (i, label) in labels.iter().enumerate() {
            writeln!(self.output, "  {:>2}) {}", i + 1, label)?;
        }
        let default = current.map(|i| (i + 1).to_string());
        loop {
            let input = self.prompt_with_default("Choose", default.as_deref())?;
            match input.parse::<usize>() {
                Ok(n) if (1..=labels.len()).contains(&n) => return Ok(n - 1),
                _ => writeln!(self.output, "Enter a number between 1 and {}.", labels.len())?,
            }
        }
    }

    /// Ask one question and record the answer. Existing answers are offered
    /// as defaults.
    pub fn ask(&mut self, question: &Question, answers: &mut AnswerMap) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", question.text)?;

        let current = answers
            .get(&question.answer_key)
            .filter(|v| !v.is_blank())
            .map(AnswerValue::to_string);

        match &question.kind {
            QuestionKind::SingleChoice { options } => {
                let labels: Vec<String> = options.iter().map(|o| o.label.clone()).collect();
                let index = current
                    .as_deref()
                    .and_then(|c| labels.iter().position(|l| l == c));
                let choice = self.menu(&labels, index)?;
                answers.choose(question, choice);
            }
            QuestionKind::Select { .. } | QuestionKind::DependentSelect { .. } => {
                let labels = self.catalog.options_for(question, answers, self.source);
                if labels.is_empty() {
                    writeln!(self.output, "  (no options available, skipping)")?;
                    return Ok(());
                }
                let index = current
                    .as_deref()
                    .and_then(|c| labels.iter().position(|l| l == c));
                let choice = self.menu(&labels, index)?;
                answers.update(self.catalog, &question.answer_key, labels[choice].as_str());
            }
            QuestionKind::Number => {
                let message = match question.placeholder {
                    Some(ref hint) => format!("Amount ({})", hint),
                    None => "Amount".to_string(),
                };
                loop {
                    let input = self.prompt_with_default(&message, current.as_deref())?;
                    if input.is_empty() {
                        if question.required {
                            writeln!(self.output, "This field is required.")?;
                            continue;
                        }
                        break;
                    }
                    match parse_amount(&input) {
                        Some(n) => {
                            answers.set(question.answer_key.clone(), n);
                            break;
                        }
                        None => writeln!(self.output, "Enter a number, e.g. 250000.")?,
                    }
                }
            }
            QuestionKind::Email => loop {
                let input = self.prompt_with_default("Email", current.as_deref())?;
                if looks_like_email(&input) {
                    answers.set(question.answer_key.clone(), input);
                    break;
                }
                writeln!(self.output, "Enter a valid email address.")?;
            },
        }

        Ok(())
    }

    /// Walk the sections from `progress.step` to the end, calling `save`
    /// after each completed section.
    pub fn run<F>(&mut self, progress: &mut Progress, mut save: F) -> Result<()>
    where
        F: FnMut(&Progress) -> Result<()>,
    {
        let catalog = self.catalog;
        while let Some(section) = Section::from_step(progress.step) {
            writeln!(
                self.output,
                "\n== Step {} of {}: {} ==",
                progress.step + 1,
                Section::COUNT,
                section.title()
            )?;

            for question in catalog.questions_in(section) {
                self.ask(question, &mut progress.answers)?;
            }

            progress.step += 1;
            progress.saved_at = Utc::now();
            save(progress)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::IndustryTable;
    use std::io::Cursor;

    fn builtin() -> (Catalog, IndustryTable) {
        let industries = IndustryTable::default();
        let catalog = Catalog::builtin(industries.sector_names()).unwrap();
        (catalog, industries)
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,500,000"), Some(1_500_000.0));
        assert_eq!(parse_amount("-20000"), Some(-20_000.0));
        assert_eq!(parse_amount("lots"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_email_check() {
        assert!(looks_like_email("owner@example.com"));
        assert!(!looks_like_email("owner"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("a@b@c"));
    }

    #[test]
    fn test_choice_reprompts_until_valid() {
        let (catalog, industries) = builtin();
        let question = catalog.question("customerConcentration").unwrap();
        let mut output = Vec::new();
        let mut wizard = Wizard::new(Cursor::new("9\nx\n5\n"), &mut output, &catalog, &industries);

        let mut answers = AnswerMap::new();
        wizard.ask(question, &mut answers).unwrap();
        assert_eq!(
            answers.text("customerConcentration"),
            Some("Highly diversified customer base")
        );
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Enter a number between 1 and 5."));
    }

    #[test]
    fn test_existing_answer_is_default() {
        let (catalog, industries) = builtin();
        let question = catalog.question("ebitda").unwrap();
        let mut answers = AnswerMap::new();
        answers.set("ebitda", 300000.0);

        let mut output = Vec::new();
        let mut wizard = Wizard::new(Cursor::new("\n"), &mut output, &catalog, &industries);
        wizard.ask(question, &mut answers).unwrap();
        assert_eq!(answers.number("ebitda"), Some(300000.0));
        assert!(String::from_utf8(output).unwrap().contains("[300000]"));
    }

    #[test]
    fn test_dependent_select_without_parent_is_skipped() {
        let (catalog, industries) = builtin();
        let question = catalog.question("naicsSubSector").unwrap();
        let mut answers = AnswerMap::new();
        let mut wizard = Wizard::new(Cursor::new(""), Vec::new(), &catalog, &industries);
        wizard.ask(question, &mut answers).unwrap();
        assert!(!answers.is_answered("naicsSubSector"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (catalog, industries) = builtin();
        let question = catalog.question("userEmail").unwrap();
        let mut wizard = Wizard::new(Cursor::new(""), Vec::new(), &catalog, &industries);
        assert!(wizard.ask(question, &mut AnswerMap::new()).is_err());
    }

    #[test]
    fn test_full_run_saves_after_every_section() {
        let (catalog, industries) = builtin();
        let mut lines = vec!["1", "1", "not-an-email", "owner@example.com", "1", "1", "1"];
        lines.extend(std::iter::repeat("1").take(28));
        lines.extend(["500000", "", "300000", "50000"]);
        let input = lines.join("\n") + "\n";

        let mut saves = Vec::new();
        let mut progress = Progress::new();
        let mut wizard = Wizard::new(Cursor::new(input), Vec::new(), &catalog, &industries);
        wizard
            .run(&mut progress, |p| {
                saves.push(p.step);
                Ok(())
            })
            .unwrap();

        assert_eq!(saves, (1..=Section::COUNT).collect::<Vec<_>>());
        let answers = &progress.answers;
        assert_eq!(answers.text("userEmail"), Some("owner@example.com"));
        assert_eq!(answers.text("naicsSector"), Some("Construction"));
        assert_eq!(
            answers.text("naicsSubSector"),
            Some("Commercial and Institutional Building Construction")
        );
        assert_eq!(answers.number("ebitdaAdjustments"), Some(50000.0));
        assert!(!answers.is_answered("grossProfit"));
    }

    #[test]
    fn test_resume_from_saved_step() {
        let (catalog, industries) = builtin();
        let mut progress = Progress::new();
        progress.step = Section::Financials.step();
        let input = "500000\n\n300000\n0\n";

        let mut wizard = Wizard::new(Cursor::new(input), Vec::new(), &catalog, &industries);
        wizard.run(&mut progress, |_| Ok(())).unwrap();
        assert_eq!(progress.step, Section::COUNT);
        assert_eq!(progress.answers.number("currentRevenue"), Some(500000.0));
    }
}
