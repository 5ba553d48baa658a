//! Collate command: solve every attestation, then collate the equation sets.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use hemerai_collate::{CollateResult, collate};

use crate::cli::CaseArgs;
use crate::config::CaseConfig;
use crate::convert;
use crate::output::write_json;
use crate::solve_cmd::{describe, solve_case};

/// Solves and collates a case.
pub fn collate_case(case: &CaseConfig, year: Option<i32>) -> Result<CollateResult> {
    if case.attestations.is_empty() {
        bail!("case file has no [[attestation]] entries");
    }

    let solved = solve_case(case, year)?;
    for (i, s) in solved.iter().enumerate() {
        if s.equations.is_empty() {
            warn!(
                attestation = %describe(i, &case.attestations[i]),
                "no equations; collation will be empty"
            );
        }
    }

    let sets: Vec<_> = solved.into_iter().map(|s| s.equations).collect();
    let config = convert::build_collate_config(&case.collate);
    let result = collate(&sets, &config).context("collation failed")?;
    info!(
        n_combinations = result.n_combinations(),
        n_collations = result.collations().len(),
        "collation complete"
    );
    Ok(result)
}

/// Run the collate command.
pub fn run(args: CaseArgs) -> Result<()> {
    let _cmd = info_span!("collate").entered();
    let case = CaseConfig::load(&args.case)?;
    let result = collate_case(&case, args.year)?;
    write_json(&result, args.output.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASE_319: &str = r#"
        year = -318

        [collate]
        report_failures = true

        [[attestation]]
        festival = { month = "Maimakterion", day = 11 }
        conciliar = { prytany = 4, day = 21 }

        [[attestation]]
        festival = { month = "Elaphebolion", day = 12 }
        conciliar = { prytany = 7, day = 34 }

        [[attestation]]
        festival = { month = "Mounichion", day = 12 }
        conciliar = { prytany = 8, day = 29 }
    "#;

    #[test]
    fn collates_319_bce() {
        let case: CaseConfig = toml::from_str(CASE_319).unwrap();
        let result = collate_case(&case, None).unwrap();
        assert_eq!(result.n_combinations(), 27);
        assert_eq!(result.collations().len(), 8);
        assert_eq!(result.rejected().len(), 19);
    }

    #[test]
    fn limit_surfaces_as_error() {
        let text = CASE_319.replace(
            "report_failures = true",
            "report_failures = true\nmax_combinations = 10",
        );
        let case: CaseConfig = toml::from_str(&text).unwrap();
        let err = collate_case(&case, None).unwrap_err();
        assert!(format!("{err:#}").contains("27 combinations exceed the limit of 10"));
    }

    #[test]
    fn empty_case_is_an_error() {
        let case: CaseConfig = toml::from_str("year = -318").unwrap();
        assert!(collate_case(&case, None).is_err());
    }

    #[test]
    fn result_serializes_with_reasons() {
        let case: CaseConfig = toml::from_str(CASE_319).unwrap();
        let result = collate_case(&case, None).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["collations"].as_array().unwrap().len(), 8);
        assert!(json["rejected"][0]["reason"]["kind"].is_string());
    }

    #[test]
    fn run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let case_path = dir.path().join("case.toml");
        let out_path = dir.path().join("out.json");
        std::fs::write(&case_path, CASE_319).unwrap();
        run(CaseArgs {
            case: case_path,
            output: Some(out_path.clone()),
            year: None,
        })
        .unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out_path).unwrap()).unwrap();
        assert_eq!(json["n_combinations"], 27);
    }
}
