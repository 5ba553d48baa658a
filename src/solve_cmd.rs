//! Solve and era commands.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use hemerai_calendar::{Era, PrytanyType, bce, era_for_year};
use hemerai_equation::{Equation, SolveConfig, solve_equation};

use crate::cli::{CaseArgs, EraArgs};
use crate::config::{AttestationToml, CaseConfig};
use crate::convert::{self, Side};
use crate::output::write_json;

/// Equations found for one attestation.
#[derive(Debug, Serialize)]
pub struct SolvedAttestation<'a> {
    pub label: Option<&'a str>,
    pub equations: Vec<Equation>,
}

/// Solves every attestation of a case.
///
/// `year` overrides the year in the case file.
pub fn solve_case(case: &CaseConfig, year: Option<i32>) -> Result<Vec<SolvedAttestation<'_>>> {
    let prytany_type = convert::parse_prytany_type(&case.prytany_type)?;
    let config = convert::build_solve_config(case)?;
    let year = year.or(case.year);

    case.attestations
        .iter()
        .enumerate()
        .map(|(i, attestation)| {
            let equations = solve_one(attestation, prytany_type, year, &config)
                .with_context(|| format!("attestation {}", describe(i, attestation)))?;
            info!(
                attestation = i,
                n_equations = equations.len(),
                "attestation solved"
            );
            Ok(SolvedAttestation {
                label: attestation.label.as_deref(),
                equations,
            })
        })
        .collect()
}

fn solve_one(
    attestation: &AttestationToml,
    prytany_type: PrytanyType,
    year: Option<i32>,
    config: &SolveConfig,
) -> Result<Vec<Equation>> {
    let festival = convert::build_reading(&attestation.festival, Side::Festival)?;
    let conciliar = convert::build_reading(&attestation.conciliar, Side::Conciliar)?;
    Ok(solve_equation(
        &festival,
        &conciliar,
        prytany_type,
        year,
        config,
    )?)
}

pub(crate) fn describe(index: usize, attestation: &AttestationToml) -> String {
    match &attestation.label {
        Some(label) => format!("#{index} ({label})"),
        None => format!("#{index}"),
    }
}

/// Run the solve command.
pub fn run(args: CaseArgs) -> Result<()> {
    let _cmd = info_span!("solve").entered();
    let case = CaseConfig::load(&args.case)?;
    let solved = solve_case(&case, args.year)?;
    write_json(&solved, args.output.as_deref())
}

#[derive(Debug, Serialize)]
struct EraOutput {
    year: i32,
    era: Era,
    prytanies: u8,
}

/// Run the era command.
pub fn run_era(args: EraArgs) -> Result<()> {
    let year = if args.bce { bce(args.year) } else { args.year };
    let era = era_for_year(year)?;
    write_json(
        &EraOutput {
            year,
            era,
            prytanies: era.prytany_count(),
        },
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASE_319: &str = r#"
        year = -318

        [[attestation]]
        festival = { month = "Maimakterion", day = 11 }
        conciliar = { prytany = 4, day = 21 }

        [[attestation]]
        festival = { month = "Elaphebolion", day = 12 }
        conciliar = { prytany = 7, day = 34 }
    "#;

    #[test]
    fn solves_each_attestation() {
        let case: CaseConfig = toml::from_str(CASE_319).unwrap();
        let solved = solve_case(&case, None).unwrap();
        assert_eq!(solved.len(), 2);
        assert!(solved.iter().all(|s| s.equations.len() == 3));
    }

    #[test]
    fn missing_year_names_attestation() {
        let case: CaseConfig = toml::from_str(CASE_319.replace("year = -318", "").as_str()).unwrap();
        let err = solve_case(&case, None).unwrap_err();
        assert!(format!("{err:#}").contains("attestation #0"));
    }

    #[test]
    fn year_override_wins() {
        let case: CaseConfig = toml::from_str(CASE_319).unwrap();
        let err = solve_case(&case, Some(-600)).unwrap_err();
        assert!(format!("{err:#}").contains("-600"));
    }

    #[test]
    fn thirteenth_month_solves() {
        let case: CaseConfig = toml::from_str(
            r#"
            year = -318

            [[attestation]]
            festival = { month = 13, day = 5 }
            conciliar = { prytany = 10, day = 15 }
            "#,
        )
        .unwrap();
        let solved = solve_case(&case, None).unwrap();
        assert!(!solved[0].equations.is_empty());
        assert!(solved[0].equations.iter().all(|e| e.festival().position().unit() == 13));
    }

    #[test]
    fn prytany_beyond_era_is_an_error() {
        let text = CASE_319.replace("prytany = 7", "prytany = 11");
        let case: CaseConfig = toml::from_str(&text).unwrap();
        let err = solve_case(&case, None).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("attestation #1"));
        assert!(msg.contains("prytany 11 does not exist"));
    }

    #[test]
    fn equations_serialize() {
        let case: CaseConfig = toml::from_str(CASE_319).unwrap();
        let solved = solve_case(&case, None).unwrap();
        let json = serde_json::to_value(&solved).unwrap();
        assert!(json[0]["equations"][0]["festival"]["doy"].is_number());
    }
}
