use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::catalog::OptionSource;

/// Factor applied when a sector/sub-sector pair is unknown.
pub const NEUTRAL_ADJUSTMENT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubSector {
    /// 6-digit NAICS code
    pub code: String,
    pub name: String,
    /// Multiplier applied to both ends of the tier's multiple range
    pub adjustment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sector {
    /// 2-digit NAICS code
    pub code: String,
    pub name: String,
    pub sub_sectors: Vec<SubSector>,
}

/// Sector to sub-sector reference data, queried by exact label.
///
/// Example YAML:
/// ```yaml
/// sectors:
///   - code: "44-45"
///     name: "Retail Trade"
///     sub_sectors:
///       - { code: "445110", name: "Supermarkets and Grocery Stores", adjustment: 0.85 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndustryTable {
    sectors: Vec<Sector>,
}

fn sub(code: &str, name: &str, adjustment: f64) -> SubSector {
    SubSector {
        code: code.to_string(),
        name: name.to_string(),
        adjustment,
    }
}

fn sector(code: &str, name: &str, sub_sectors: Vec<SubSector>) -> Sector {
    Sector {
        code: code.to_string(),
        name: name.to_string(),
        sub_sectors,
    }
}

impl Default for IndustryTable {
    fn default() -> Self {
        Self {
            sectors: vec![
                sector(
                    "23",
                    "Construction",
                    vec![
                        sub("236220", "Commercial and Institutional Building Construction", 0.9),
                        sub("238210", "Electrical Contractors", 1.0),
                        sub("238220", "Plumbing, Heating, and Air-Conditioning Contractors", 1.05),
                    ],
                ),
                sector(
                    "31-33",
                    "Manufacturing",
                    vec![
                        sub("311811", "Retail Bakeries", 0.85),
                        sub("332710", "Machine Shops", 0.95),
                        sub("334511", "Search, Detection, and Navigation Instruments", 1.2),
                        sub("339112", "Surgical and Medical Instruments", 1.25),
                    ],
                ),
                sector(
                    "42",
                    "Wholesale Trade",
                    vec![
                        sub("423430", "Computer Equipment and Software Wholesalers", 1.0),
                        sub("424410", "General Line Grocery Wholesalers", 0.85),
                    ],
                ),
                sector(
                    "44-45",
                    "Retail Trade",
                    vec![
                        sub("445110", "Supermarkets and Grocery Stores", 0.85),
                        sub("448140", "Family Clothing Stores", 0.8),
                        sub("454110", "Electronic Shopping and Mail-Order Houses", 1.1),
                    ],
                ),
                sector(
                    "48-49",
                    "Transportation and Warehousing",
                    vec![
                        sub("484110", "General Freight Trucking, Local", 0.85),
                        sub("493110", "General Warehousing and Storage", 0.95),
                    ],
                ),
                sector(
                    "51",
                    "Information",
                    vec![
                        sub("511210", "Software Publishers", 1.35),
                        sub("518210", "Data Processing, Hosting, and Related Services", 1.25),
                    ],
                ),
                sector(
                    "52",
                    "Finance and Insurance",
                    vec![
                        sub("523930", "Investment Advice", 1.15),
                        sub("524210", "Insurance Agencies and Brokerages", 1.2),
                    ],
                ),
                sector(
                    "54",
                    "Professional, Scientific, and Technical Services",
                    vec![
                        sub("541211", "Offices of Certified Public Accountants", 1.1),
                        sub("541330", "Engineering Services", 1.05),
                        sub("541511", "Custom Computer Programming Services", 1.15),
                        sub("541613", "Marketing Consulting Services", 0.95),
                    ],
                ),
                sector(
                    "62",
                    "Health Care and Social Assistance",
                    vec![
                        sub("621210", "Offices of Dentists", 1.1),
                        sub("621610", "Home Health Care Services", 1.05),
                        sub("624410", "Child Day Care Services", 0.9),
                    ],
                ),
                sector(
                    "72",
                    "Accommodation and Food Services",
                    vec![
                        sub("721110", "Hotels (except Casino Hotels) and Motels", 0.95),
                        sub("722511", "Full-Service Restaurants", 0.75),
                        sub("722513", "Limited-Service Restaurants", 0.8),
                    ],
                ),
                sector(
                    "81",
                    "Other Services (except Public Administration)",
                    vec![
                        sub("811111", "General Automotive Repair", 0.85),
                        sub("812112", "Beauty Salons", 0.75),
                    ],
                ),
            ],
        }
    }
}

impl IndustryTable {
    pub fn new(sectors: Vec<Sector>) -> Result<Self, Vec<String>> {
        validate_industries(&sectors)?;
        Ok(Self { sectors })
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn sector(&self, name: &str) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.name == name)
    }

    /// Sector labels in table order, for the sector dropdown.
    pub fn sector_names(&self) -> Vec<String> {
        self.sectors.iter().map(|s| s.name.clone()).collect()
    }

    /// Adjustment factor for an exact (sector, sub-sector) label pair;
    /// `NEUTRAL_ADJUSTMENT` on any miss.
    pub fn adjustment(&self, sector: &str, sub_sector: &str) -> f64 {
        self.sector(sector)
            .and_then(|s| s.sub_sectors.iter().find(|sub| sub.name == sub_sector))
            .map(|sub| sub.adjustment)
            .unwrap_or(NEUTRAL_ADJUSTMENT)
    }
}

impl OptionSource for IndustryTable {
    fn options_for(&self, parent: &str) -> Vec<String> {
        self.sector(parent)
            .map(|s| s.sub_sectors.iter().map(|sub| sub.name.clone()).collect())
            .unwrap_or_default()
    }
}

/// Validate industry reference data: unique non-empty labels and finite,
/// positive adjustment factors.
pub fn validate_industries(sectors: &[Sector]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut sector_names = HashSet::new();

    if sectors.is_empty() {
        errors.push("sectors: at least one sector is required".to_string());
    }

    for (i, sector) in sectors.iter().enumerate() {
        if sector.name.trim().is_empty() {
            errors.push(format!("sectors[{}].name: must not be empty", i));
        } else if !sector_names.insert(sector.name.as_str()) {
            errors.push(format!("sectors[{}].name: duplicate sector '{}'", i, sector.name));
        }

        let mut sub_names = HashSet::new();
        for (j, sub) in sector.sub_sectors.iter().enumerate() {
            let at = format!("sectors[{}].sub_sectors[{}]", i, j);
            if sub.name.trim().is_empty() {
                errors.push(format!("{}.name: must not be empty", at));
            } else if !sub_names.insert(sub.name.as_str()) {
                errors.push(format!("{}.name: duplicate sub-sector '{}'", at, sub.name));
            }
            if !sub.adjustment.is_finite() || sub.adjustment <= 0.0 {
                errors.push(format!(
                    "{}.adjustment: must be a finite positive number, got {}",
                    at, sub.adjustment
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

/// Load and validate an industry table from a YAML file.
pub fn load_industries(path: &Path) -> Result<IndustryTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read industry file at {}", path.display()))?;

    let table: IndustryTable = serde_saphyr::from_str(&content).with_context(|| {
        format!("Failed to parse industries: invalid YAML in {}", path.display())
    })?;

    if let Err(errors) = validate_industries(&table.sectors) {
        anyhow::bail!(
            "Invalid industry table in {}:\n  - {}",
            path.display(),
            errors.join("\n  - ")
        );
    }

    Ok(table)
}
