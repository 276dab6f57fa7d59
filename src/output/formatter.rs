use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::assessment::ValuationResult;
use crate::catalog::{Catalog, QuestionKind, Section};
use crate::feedback::{ImprovementPlan, IMPROVEMENT_INTRO};
use crate::valuation::{IndustryTable, Sector, TierTable};

pub const DISCLAIMER: &str = "This is a preliminary, automated estimate for informational purposes only. Actual valuation requires detailed due diligence, market analysis, negotiation, and professional advice from qualified professionals.";

const BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Whole-dollar amount with thousands separators: "$1,234,567", "-$5,000"
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Multiple with one decimal: "2.5x"
pub fn format_multiple(multiple: f64) -> String {
    format!("{:.1}x", multiple)
}

/// Fraction in [0, 1] as a whole percentage: "43%"
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Fixed-width bar of `score` out of `max`
pub fn format_bar(score: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((f64::from(score.min(max)) / f64::from(max)) * width as f64).round() as usize
    };
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

/// Text report of an evaluation: snapshot, estimate, per-area scores,
/// feedback and disclaimer.
pub fn format_result(
    result: &ValuationResult,
    catalog: &Catalog,
    plan: &ImprovementPlan,
    use_colors: bool,
) -> String {
    let heading = |text: &str| {
        if use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    };

    let mut lines = Vec::new();
    lines.push(heading("Business Snapshot"));
    lines.push(format!("  Stage:                 {}", result.stage));
    lines.push(format!(
        "  Adjusted EBITDA:       {}",
        format_currency(result.adjusted_ebitda)
    ));
    lines.push(format!(
        "  Multiple range:        {} - {} (industry factor {:.2})",
        format_multiple(result.base_multiple),
        format_multiple(result.max_multiple),
        result.industry_adjustment
    ));
    lines.push(format!(
        "  Qualitative score:     {} ({} / {})",
        format_percent(result.score_percentage),
        result.total_score,
        result.max_possible_score
    ));
    lines.push(String::new());

    lines.push(heading("Estimated Valuation"));
    let estimate = format!("~ {}", format_currency(result.estimated_valuation as f64));
    if use_colors {
        lines.push(format!("  {}", estimate.green().bold()));
    } else {
        lines.push(format!("  {}", estimate));
    }
    lines.push(format!(
        "  Based on an estimated multiple of {} applied to your Adjusted EBITDA.",
        format_multiple(result.final_multiple)
    ));
    lines.push(String::new());

    lines.push(heading("Score Summary"));
    let label_width = result
        .score_vector
        .iter()
        .map(|(area, _)| area.label().len())
        .max()
        .unwrap_or(0);
    for (area, score) in result.score_vector.iter() {
        let max = catalog.area_max(area);
        let bar = format_bar(score, max, BAR_WIDTH);
        let bar = if use_colors {
            bar.blue().to_string()
        } else {
            bar
        };
        lines.push(format!(
            "  {:<width$}  {:>3} / {:<3} {}",
            area.label(),
            score,
            max,
            bar,
            width = label_width
        ));
    }
    lines.push(String::new());

    lines.push(heading("Feedback & Next Steps"));
    lines.push(format!("  {}", plan.stage_summary));
    if !plan.recommendations.is_empty() {
        lines.push(format!("  {}", IMPROVEMENT_INTRO));
        for rec in &plan.recommendations {
            lines.push(format!(
                "  - {}: {} (Est. {})",
                rec.area.label(),
                rec.advice,
                rec.timeframe
            ));
        }
    }
    lines.push(format!("  {}", plan.closing));
    lines.push(String::new());

    let disclaimer = format!("Disclaimer: {}", DISCLAIMER);
    if use_colors {
        lines.push(disclaimer.dimmed().to_string());
    } else {
        lines.push(disclaimer);
    }

    lines.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ValuationResult,
    feedback: &'a ImprovementPlan,
}

/// Result record plus feedback as pretty JSON.
pub fn format_json(
    result: &ValuationResult,
    plan: &ImprovementPlan,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        result,
        feedback: plan,
    })
}

/// Sections with their questions and scored options. `section` limits the
/// listing to one step.
pub fn format_questions(
    catalog: &Catalog,
    section: Option<Section>,
    use_colors: bool,
) -> String {
    let term_width = get_terminal_width();
    let fit = |text: &str, indent: usize| match term_width {
        Some(width) if width > indent + 20 => truncate_text(text, width - indent),
        _ => text.to_string(),
    };

    let sections: Vec<Section> = match section {
        Some(s) => vec![s],
        None => Section::ALL.to_vec(),
    };

    let mut lines = Vec::new();
    for section in sections {
        let title = format!("{}. {}", section.step() + 1, section.title());
        lines.push(if use_colors {
            title.bold().to_string()
        } else {
            title
        });

        for q in catalog.questions_in(section) {
            let mut tags = vec![q.kind.name().to_string()];
            if let Some(area) = q.scoring_area.filter(|_| q.is_scored()) {
                tags.push(area.label().to_string());
            }
            if let Some(priority) = q.priority {
                tags.push(priority.to_string());
            }
            let header = format!("  [{}] {} ({})", q.answer_key, q.text, tags.join(", "));
            lines.push(fit(&header, 0));

            match &q.kind {
                QuestionKind::SingleChoice { options } => {
                    for option in options {
                        let score = format!("{:>2}", option.score);
                        let score = if use_colors {
                            score.cyan().to_string()
                        } else {
                            score
                        };
                        lines.push(format!("    {}  {}", score, fit(&option.label, 8)));
                    }
                }
                QuestionKind::Select { options } => {
                    for option in options {
                        lines.push(format!("    -  {}", fit(option, 7)));
                    }
                }
                QuestionKind::DependentSelect { depends_on } => {
                    lines.push(format!("    options depend on [{}]", depends_on));
                }
                QuestionKind::Number | QuestionKind::Email => {}
            }
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "Maximum possible score: {}",
        catalog.max_possible_score()
    ));
    lines.join("\n")
}

/// EBITDA tier table, highest threshold first.
pub fn format_tiers(tiers: &TierTable) -> String {
    let stage_width = tiers
        .tiers()
        .iter()
        .map(|t| t.stage.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut lines = vec![format!(
        "{:>14}  {:<width$}  {:>5}  {:>5}",
        "EBITDA from",
        "Stage",
        "Base",
        "Max",
        width = stage_width
    )];
    for tier in tiers.tiers() {
        lines.push(format!(
            "{:>14}  {:<width$}  {:>5}  {:>5}",
            format_currency(tier.threshold),
            tier.stage,
            format_multiple(tier.base_multiple),
            format_multiple(tier.max_multiple),
            width = stage_width
        ));
    }
    lines.join("\n")
}

/// Sector list with sub-sector counts.
pub fn format_sectors(industries: &IndustryTable) -> String {
    industries
        .sectors()
        .iter()
        .map(|s| format!("{:>6}  {} ({} sub-sectors)", s.code, s.name, s.sub_sectors.len()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One sector's sub-sectors with their adjustment factors.
pub fn format_sub_sectors(sector: &Sector) -> String {
    let mut lines = vec![format!("{} ({})", sector.name, sector.code)];
    for sub in &sector.sub_sectors {
        lines.push(format!(
            "  {}  x{:.2}  {}",
            sub.code, sub.adjustment, sub.name
        ));
    }
    lines.join("\n")
}
