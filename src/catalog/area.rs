use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative category a scored question rolls up into.
///
/// The set is closed: the score vector holds exactly one counter per variant,
/// and catalogs naming any other area fail to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringArea {
    Expansion,
    Marketing,
    Profitability,
    Offering,
    Workforce,
    Systems,
    Market,
}

impl ScoringArea {
    pub const COUNT: usize = 7;

    /// All areas in display order.
    pub const ALL: [ScoringArea; Self::COUNT] = [
        ScoringArea::Expansion,
        ScoringArea::Marketing,
        ScoringArea::Profitability,
        ScoringArea::Offering,
        ScoringArea::Workforce,
        ScoringArea::Systems,
        ScoringArea::Market,
    ];

    /// Position of this area in `ALL`, used to index score counters.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoringArea::Expansion => "Expansion Capability",
            ScoringArea::Marketing => "Marketing & Brand",
            ScoringArea::Profitability => "Profitability Metrics",
            ScoringArea::Offering => "Offering Excellence",
            ScoringArea::Workforce => "Workforce & Leadership",
            ScoringArea::Systems => "Execution Systems",
            ScoringArea::Market => "Robust Market Position",
        }
    }
}

impl fmt::Display for ScoringArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered questionnaire step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Profile,
    Expansion,
    Marketing,
    Profitability,
    Offering,
    Workforce,
    Systems,
    Market,
    Financials,
}

impl Section {
    pub const COUNT: usize = 9;

    pub const ALL: [Section; Self::COUNT] = [
        Section::Profile,
        Section::Expansion,
        Section::Marketing,
        Section::Profitability,
        Section::Offering,
        Section::Workforce,
        Section::Systems,
        Section::Market,
        Section::Financials,
    ];

    /// Zero-based step number.
    pub fn step(self) -> usize {
        self as usize
    }

    /// Section at a zero-based step, if the step is in range.
    pub fn from_step(step: usize) -> Option<Section> {
        Self::ALL.get(step).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Profile => "Your Profile",
            Section::Expansion => "Expansion Capability",
            Section::Marketing => "Marketing & Brand",
            Section::Profitability => "Profitability Metrics",
            Section::Offering => "Offering Excellence",
            Section::Workforce => "Workforce & Leadership",
            Section::Systems => "Execution Systems",
            Section::Market => "Robust Market Position",
            Section::Financials => "Your Financials",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Weight class of a scored question. The best option of a question scores
/// exactly its priority weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Moderate,
}

impl Priority {
    pub fn weight(self) -> u32 {
        match self {
            Priority::Critical => 7,
            Priority::High => 5,
            Priority::Moderate => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Moderate => "Moderate",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_index_matches_all_order() {
        for (i, area) in ScoringArea::ALL.iter().enumerate() {
            assert_eq!(area.index(), i);
        }
    }

    #[test]
    fn test_section_steps_are_sequential() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.step(), i);
            assert_eq!(Section::from_step(i), Some(*section));
        }
        assert_eq!(Section::from_step(Section::COUNT), None);
    }

    #[test]
    fn test_priority_weights() {
        assert_eq!(Priority::Critical.weight(), 7);
        assert_eq!(Priority::High.weight(), 5);
        assert_eq!(Priority::Moderate.weight(), 3);
    }

    #[test]
    fn test_area_parses_from_snake_case() {
        let area: ScoringArea = serde_json::from_str("\"systems\"").unwrap();
        assert_eq!(area, ScoringArea::Systems);
        assert!(serde_json::from_str::<ScoringArea>("\"profile\"").is_err());
    }
}
