//! Intersection of festival and conciliar candidates.

use std::collections::BTreeMap;

use hemerai_calendar::{
    DoyCandidate, PrytanyType, Reading, festival_candidates, prytany_candidates,
};
use tracing::debug;

use crate::config::SolveConfig;
use crate::equation::{Equation, is_misaligned};
use crate::error::EquationError;

/// Finds every day-of-year on which a festival reading and a conciliar
/// reading could coincide.
///
/// Both readings are flattened depth-first and their candidates pooled in
/// that order. For each day-of-year present on both sides (ascending), one
/// [`Equation`] is emitted per festival/conciliar pair on that day, festival
/// order outermost, skipping misaligned pairs.
///
/// An empty result means the readings cannot denote the same day under this
/// configuration.
///
/// # Errors
///
/// Returns [`EquationError::Calendar`] if the prytany type cannot be resolved
/// (`Auto` without `year`, or a year before the prytanies).
///
/// # Example
///
/// ```
/// use hemerai_calendar::{CalendarPosition, PrytanyType, Reading};
/// use hemerai_equation::{SolveConfig, solve_equation};
///
/// let festival = Reading::from(CalendarPosition::new(2, 10).unwrap());
/// let conciliar = Reading::from(CalendarPosition::new(2, 4).unwrap());
/// let equations = solve_equation(
///     &festival,
///     &conciliar,
///     PrytanyType::Aligned10,
///     None,
///     &SolveConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(equations.len(), 2);
/// ```
#[tracing::instrument(skip(festival, conciliar, config))]
pub fn solve_equation(
    festival: &Reading,
    conciliar: &Reading,
    prytany_type: PrytanyType,
    year: Option<i32>,
    config: &SolveConfig,
) -> Result<Vec<Equation>, EquationError> {
    let festival_pool: Vec<DoyCandidate> = festival
        .flatten()
        .into_iter()
        .flat_map(|position| festival_candidates(position, config.festival()))
        .collect();

    let mut conciliar_pool = Vec::new();
    for position in conciliar.flatten() {
        conciliar_pool.extend(prytany_candidates(
            position,
            prytany_type,
            year,
            config.conciliar(),
        )?);
    }

    let equations = pair_candidates(&festival_pool, &conciliar_pool);
    debug!(
        n_festival = festival_pool.len(),
        n_conciliar = conciliar_pool.len(),
        n_equations = equations.len(),
        "equation solved"
    );
    Ok(equations)
}

/// Pairs two candidate pools on shared days-of-year.
///
/// Within a day, pool order is preserved on both sides.
pub fn pair_candidates(festival: &[DoyCandidate], conciliar: &[DoyCandidate]) -> Vec<Equation> {
    let festival_by_doy = group_by_doy(festival);
    let conciliar_by_doy = group_by_doy(conciliar);

    let mut equations = Vec::new();
    for (doy, fs) in &festival_by_doy {
        let Some(cs) = conciliar_by_doy.get(doy) else {
            continue;
        };
        for f in fs {
            for c in cs {
                if is_misaligned(f, c) {
                    continue;
                }
                equations.extend(Equation::new((*f).clone(), (*c).clone()));
            }
        }
    }
    equations
}

fn group_by_doy(pool: &[DoyCandidate]) -> BTreeMap<u16, Vec<&DoyCandidate>> {
    let mut groups: BTreeMap<u16, Vec<&DoyCandidate>> = BTreeMap::new();
    for candidate in pool {
        groups.entry(candidate.doy()).or_default().push(candidate);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use hemerai_calendar::{CalendarError, CalendarPosition, Intercalation};

    fn leaf(unit: u8, day: u16) -> Reading {
        Reading::from(CalendarPosition::new(unit, day).unwrap())
    }

    fn cand(day: u16, preceding: Vec<u16>, i: Intercalation) -> DoyCandidate {
        DoyCandidate::new(CalendarPosition::new(2, day).unwrap(), preceding, i)
    }

    #[test]
    fn solves_simple_pair() {
        let eqs = solve_equation(
            &leaf(2, 10),
            &leaf(2, 4),
            PrytanyType::Aligned10,
            None,
            &SolveConfig::default(),
        )
        .unwrap();
        assert_eq!(eqs.len(), 2);
        assert_eq!(eqs[0].doy(), 39);
        assert_eq!(eqs[1].doy(), 40);
    }

    #[test]
    fn no_overlap_is_empty_not_error() {
        // Prytany 1 day 1 is doy 1; month 12 is never that early.
        let eqs = solve_equation(
            &leaf(12, 1),
            &leaf(1, 1),
            PrytanyType::Aligned10,
            None,
            &SolveConfig::default(),
        )
        .unwrap();
        assert!(eqs.is_empty());
    }

    #[test]
    fn auto_without_year_propagates() {
        let err = solve_equation(
            &leaf(2, 10),
            &leaf(2, 4),
            PrytanyType::Auto,
            None,
            &SolveConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, EquationError::Calendar(CalendarError::AutoWithoutYear));
    }

    #[test]
    fn pair_cartesian_on_ties() {
        let festival = vec![
            cand(10, vec![30], Intercalation::Ordinary),
            cand(11, vec![29], Intercalation::Ordinary),
        ];
        let conciliar = vec![
            cand(4, vec![36], Intercalation::Ordinary),
            cand(5, vec![35], Intercalation::Ordinary),
        ];
        let eqs = pair_candidates(&festival, &conciliar);
        assert_eq!(eqs.len(), 4);
        assert_eq!(eqs[0].festival(), &festival[0]);
        assert_eq!(eqs[0].conciliar(), &conciliar[0]);
        assert_eq!(eqs[1].festival(), &festival[0]);
        assert_eq!(eqs[1].conciliar(), &conciliar[1]);
        assert_eq!(eqs[2].festival(), &festival[1]);
        assert_eq!(eqs[3].conciliar(), &conciliar[1]);
    }

    #[test]
    fn pair_drops_misaligned() {
        let festival = vec![cand(10, vec![30, 29], Intercalation::Intercalary)];
        let conciliar = vec![
            cand(30, vec![39], Intercalation::Ordinary),
            cand(31, vec![38], Intercalation::Intercalary),
        ];
        let eqs = pair_candidates(&festival, &conciliar);
        assert_eq!(eqs.len(), 1);
        assert!(eqs[0].conciliar().is_intercalary());
    }

    #[test]
    fn pair_output_sorted_by_doy() {
        let festival = vec![
            cand(20, vec![30], Intercalation::Ordinary),
            cand(10, vec![30], Intercalation::Ordinary),
        ];
        let conciliar = vec![
            cand(5, vec![35], Intercalation::Ordinary),
            cand(15, vec![35], Intercalation::Ordinary),
        ];
        let eqs = pair_candidates(&festival, &conciliar);
        let doys: Vec<u16> = eqs.iter().map(Equation::doy).collect();
        assert_eq!(doys, vec![40, 50]);
    }
}
