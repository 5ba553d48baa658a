//! Pure conversion functions: TOML case structs -> crate API types.

use anyhow::{Context, Result, bail};

use hemerai_calendar::{
    CalendarPosition, ConciliarConfig, Era, EraTable, Month, PrytanyType, Reading,
};
use hemerai_collate::CollateConfig;
use hemerai_equation::SolveConfig;

use crate::config::*;

/// Which calendar a reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Festival,
    Conciliar,
}

/// Parses an era name.
pub fn parse_era(s: &str) -> Result<Era> {
    match s.to_lowercase().as_str() {
        "quasi_solar" => Ok(Era::QuasiSolar),
        "aligned_10" => Ok(Era::Aligned10),
        "aligned_12" => Ok(Era::Aligned12),
        "aligned_13" => Ok(Era::Aligned13),
        other => bail!("unknown era: {other:?}"),
    }
}

/// Parses a prytany type: "auto" or an era name.
pub fn parse_prytany_type(s: &str) -> Result<PrytanyType> {
    if s.eq_ignore_ascii_case("auto") {
        return Ok(PrytanyType::Auto);
    }
    parse_era(s)
        .map(PrytanyType::from)
        .with_context(|| format!("invalid prytany_type {s:?}"))
}

/// Converts a TOML reading into a [`Reading`] for the given side.
pub fn build_reading(reading: &ReadingToml, side: Side) -> Result<Reading> {
    match reading {
        ReadingToml::Position(p) => Ok(Reading::from(build_position(p, side)?)),
        ReadingToml::Group(items) => {
            if items.is_empty() {
                bail!("empty list of alternative readings");
            }
            let children = items
                .iter()
                .map(|r| build_reading(r, side))
                .collect::<Result<Vec<_>>>()?;
            Ok(Reading::Group(children))
        }
    }
}

fn build_position(p: &PositionToml, side: Side) -> Result<CalendarPosition> {
    let unit = match (side, &p.month, p.prytany) {
        (Side::Festival, Some(month), None) => festival_unit(month)?,
        (Side::Conciliar, None, Some(prytany)) => prytany,
        (Side::Festival, _, _) => bail!("festival position needs `month` and no `prytany`"),
        (Side::Conciliar, _, _) => bail!("conciliar position needs `prytany` and no `month`"),
    };
    Ok(CalendarPosition::new(unit, p.day)?)
}

/// Month names map to 1..=12; ordinals may also be 13, the last month of an
/// intercalated year. Range checks happen in `CalendarPosition::new`.
fn festival_unit(month: &MonthToml) -> Result<u8> {
    Ok(match month {
        MonthToml::Name(name) => name.parse::<Month>()?.ordinal(),
        MonthToml::Ordinal(n) => *n,
    })
}

/// Builds an [`EraTable`], falling back to the canonical table when the
/// case file has none.
pub fn build_era_table(spans: &[EraSpanToml]) -> Result<EraTable> {
    if spans.is_empty() {
        return Ok(EraTable::default());
    }
    let spans = spans
        .iter()
        .map(|s| Ok((s.start, parse_era(&s.era)?)))
        .collect::<Result<Vec<_>>>()?;
    EraTable::new(spans).context("era table must not be empty")
}

/// Builds a [`SolveConfig`] from the case file.
pub fn build_solve_config(case: &CaseConfig) -> Result<SolveConfig> {
    let mut conciliar = ConciliarConfig::new()
        .with_eras(build_era_table(&case.eras)?)
        .with_rule_of_aristotle(case.solver.rule_of_aristotle);
    if let Some(rules) = case.rules {
        conciliar = conciliar.with_rules(rules);
    }
    if let Some(max_diff) = case.solver.conciliar_max_diff {
        conciliar = conciliar.with_max_diff(max_diff);
    }
    Ok(SolveConfig::new()
        .with_conciliar(conciliar)
        .with_festival_max_diff(case.solver.festival_max_diff))
}

/// Builds a [`CollateConfig`] from the TOML collate section.
pub fn build_collate_config(collate: &CollateToml) -> CollateConfig {
    let mut cfg = CollateConfig::new()
        .with_report_failures(collate.report_failures)
        .with_parallel(collate.parallel);
    if let Some(limit) = collate.max_combinations {
        cfg = cfg.with_max_combinations(limit);
    }
    cfg
}
