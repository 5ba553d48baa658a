use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use hemerai_calendar::LengthRules;

/// A case file: the double-dated attestations of one year.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseConfig {
    /// Astronomical year of the attestations.
    #[serde(default)]
    pub year: Option<i32>,

    /// Conciliar era, or "auto" to derive it from `year`.
    #[serde(default = "default_prytany_type")]
    pub prytany_type: String,

    /// Equation solver settings.
    #[serde(default)]
    pub solver: SolverToml,

    /// Collation settings.
    #[serde(default)]
    pub collate: CollateToml,

    /// Replacement prytany length rules.
    #[serde(default)]
    pub rules: Option<LengthRules>,

    /// Replacement era table, in any order.
    #[serde(default, rename = "era")]
    pub eras: Vec<EraSpanToml>,

    /// Attestations in chronological order.
    #[serde(default, rename = "attestation")]
    pub attestations: Vec<AttestationToml>,
}

fn default_prytany_type() -> String {
    "auto".to_string()
}

impl CaseConfig {
    /// Reads and parses a case file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read case file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse case file: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverToml {
    #[serde(default = "default_festival_max_diff")]
    pub festival_max_diff: u8,
    #[serde(default)]
    pub conciliar_max_diff: Option<u8>,
    #[serde(default)]
    pub rule_of_aristotle: bool,
}

impl Default for SolverToml {
    fn default() -> Self {
        Self {
            festival_max_diff: default_festival_max_diff(),
            conciliar_max_diff: None,
            rule_of_aristotle: false,
        }
    }
}

fn default_festival_max_diff() -> u8 {
    4
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CollateToml {
    #[serde(default)]
    pub report_failures: bool,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub max_combinations: Option<usize>,
}

/// One row of an era table: `era` applies from `start` until the next row.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EraSpanToml {
    pub start: i32,
    pub era: String,
}

/// A festival date and a conciliar date recorded for the same day.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttestationToml {
    /// Free-form reference, e.g. an inscription number.
    #[serde(default)]
    pub label: Option<String>,
    pub festival: ReadingToml,
    pub conciliar: ReadingToml,
}

/// A single position or a list of alternative readings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ReadingToml {
    Position(PositionToml),
    Group(Vec<ReadingToml>),
}

/// A calendar position. Festival dates set `month`, conciliar dates set
/// `prytany`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PositionToml {
    #[serde(default)]
    pub month: Option<MonthToml>,
    #[serde(default)]
    pub prytany: Option<u8>,
    pub day: u16,
}

/// A month given by name or by ordinal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MonthToml {
    Name(String),
    Ordinal(u8),
}
