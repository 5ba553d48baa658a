//! The collation engine: search of the cartesian product of equation sets.

use hemerai_calendar::Intercalation;
use hemerai_equation::Equation;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::collation::{CollateResult, Collation, RejectedCombination, Rejection};
use crate::config::CollateConfig;
use crate::error::CollateError;
use crate::nesting::reveal_segments;

/// Finds every combination of equations, one per attestation, that can hold
/// in the same year.
///
/// `equation_sets[i]` lists the candidate equations of the `i`-th attestation
/// in chronological order. Combinations are enumerated with the first set as
/// the outermost loop. A combination is accepted when
///
/// 1. every conciliar candidate makes the same intercalation assumption,
/// 2. no festival intercalation disappears at a later attestation, and
/// 3. the preceding months (and, separately, prytanies) of each equation
///    contain those of the previous equation as a subsequence.
///
/// The cost is the product of the set sizes; use
/// [`CollateConfig::with_max_combinations`] to bound it. An empty input, or
/// any empty set, yields an empty result.
///
/// # Errors
///
/// Returns [`CollateError::TooManyCombinations`] if the product exceeds the
/// configured limit and [`CollateError::CombinationOverflow`] if it does not
/// fit in `usize`.
#[tracing::instrument(skip_all, fields(n_sets = equation_sets.len()))]
pub fn collate(
    equation_sets: &[Vec<Equation>],
    config: &CollateConfig,
) -> Result<CollateResult, CollateError> {
    let n_combinations = count_combinations(equation_sets)?;
    if let Some(limit) = config.max_combinations() {
        if n_combinations > limit {
            return Err(CollateError::TooManyCombinations {
                count: n_combinations,
                limit,
            });
        }
    }

    let evaluate = |index: usize| -> Option<Result<Collation, RejectedCombination>> {
        let chosen = combination(equation_sets, index);
        match validate(&chosen) {
            Ok(collation) => Some(Ok(collation)),
            Err(reason) => {
                trace!(index, ?reason, "combination rejected");
                config
                    .report_failures()
                    .then(|| Err(RejectedCombination::new(owned(&chosen), reason)))
            }
        }
    };

    let outcomes: Vec<Option<Result<Collation, RejectedCombination>>> = if config.parallel() {
        (0..n_combinations).into_par_iter().map(evaluate).collect()
    } else {
        (0..n_combinations).map(evaluate).collect()
    };

    let mut collations = Vec::new();
    let mut rejected = Vec::new();
    for outcome in outcomes.into_iter().flatten() {
        match outcome {
            Ok(collation) => collations.push(collation),
            Err(failure) => rejected.push(failure),
        }
    }

    debug!(
        n_combinations,
        n_collations = collations.len(),
        n_rejected = n_combinations - collations.len(),
        "collation finished"
    );
    Ok(CollateResult::new(collations, rejected, n_combinations))
}

/// Checks one chosen combination and derives its partitions.
pub(crate) fn validate(chosen: &[&Equation]) -> Result<Collation, Rejection> {
    if let Some((first, rest)) = chosen.split_first() {
        let expected = first.conciliar().intercalation();
        if rest
            .iter()
            .any(|e| e.conciliar().intercalation() != expected)
        {
            return Err(Rejection::MixedConciliarIntercalation);
        }
    }

    if let Some(step) = chosen.windows(2).position(|w| {
        w[0].festival().intercalation() == Intercalation::Intercalary
            && w[1].festival().intercalation() == Intercalation::Ordinary
    }) {
        return Err(Rejection::FestivalIntercalationReverted { step: step + 1 });
    }

    let festival = reveal_segments(chosen.iter().map(|e| e.festival().preceding()))
        .map_err(|step| Rejection::FestivalNesting { step })?;
    let conciliar = reveal_segments(chosen.iter().map(|e| e.conciliar().preceding()))
        .map_err(|step| Rejection::ConciliarNesting { step })?;

    Ok(Collation::new(festival, conciliar, owned(chosen)))
}

fn count_combinations(equation_sets: &[Vec<Equation>]) -> Result<usize, CollateError> {
    if equation_sets.is_empty() {
        return Ok(0);
    }
    equation_sets.iter().try_fold(1usize, |acc, set| {
        acc.checked_mul(set.len())
            .ok_or(CollateError::CombinationOverflow)
    })
}

/// Decodes a combination index, the last set varying fastest.
fn combination(equation_sets: &[Vec<Equation>], mut index: usize) -> Vec<&Equation> {
    let mut chosen = Vec::with_capacity(equation_sets.len());
    for set in equation_sets.iter().rev() {
        chosen.push(&set[index % set.len()]);
        index /= set.len();
    }
    chosen.reverse();
    chosen
}

fn owned(chosen: &[&Equation]) -> Vec<Equation> {
    chosen.iter().map(|&e| e.clone()).collect()
}
