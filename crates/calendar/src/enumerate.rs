//! Enumeration of every day-of-year a calendar position could fall on.

use crate::config::{ConciliarConfig, FestivalConfig};
use crate::doy::{DoyCandidate, Intercalation};
use crate::era::PrytanyType;
use crate::error::CalendarError;
use crate::position::CalendarPosition;
use crate::rules::UnitRule;

/// Lists the possible days-of-year of a festival date.
///
/// Month 1 has a single candidate. Any later month has an ordinary family
/// (`month - 1` preceding months) and an intercalated family (`month`
/// preceding months), one candidate per split of the preceding months into
/// full and hollow ones whose counts differ by at most `config.max_diff()`.
/// Full months are listed before hollow ones in `preceding`.
///
/// The result is sorted by day-of-year.
///
/// # Example
///
/// ```
/// use hemerai_calendar::{CalendarPosition, FestivalConfig, festival_candidates};
///
/// let pos = CalendarPosition::new(2, 10).unwrap();
/// let candidates = festival_candidates(pos, &FestivalConfig::default());
/// assert_eq!(candidates.len(), 5);
/// assert_eq!(candidates[0].doy(), 39);
/// ```
pub fn festival_candidates(position: CalendarPosition, config: &FestivalConfig) -> Vec<DoyCandidate> {
    let ordinary = position.preceding_units();
    let mut families = vec![(ordinary, Intercalation::Ordinary)];
    if position.unit() > 1 {
        families.push((ordinary + 1, Intercalation::Intercalary));
    }

    let max_diff = usize::from(config.max_diff());
    let mut out = Vec::new();
    for (count, intercalation) in families {
        for n_full in 0..=count {
            let n_hollow = count - n_full;
            if n_full.abs_diff(n_hollow) > max_diff {
                continue;
            }
            let preceding = split(config.full(), n_full, config.hollow(), n_hollow);
            out.push(DoyCandidate::new(position, preceding, intercalation));
        }
    }
    out.sort_by_key(DoyCandidate::doy);
    out
}

/// Lists the possible days-of-year of a prytany date.
///
/// The era comes from `prytany_type`, resolving `Auto` through the
/// configured era table. Each era has an ordinary branch and, if it knows
/// intercalation, an intercalary one; a `day` longer than the ordinary long
/// prytany can only fall in the intercalary branch.
///
/// The result is sorted by day-of-year.
///
/// # Errors
///
/// Returns [`CalendarError::AutoWithoutYear`] if `prytany_type` is `Auto`
/// and `year` is `None`, [`CalendarError::NoPrytanies`] if `year`
/// predates the era table, and [`CalendarError::PrytanyOutOfRange`] if the
/// prytany ordinal exceeds the era's prytany count.
pub fn prytany_candidates(
    position: CalendarPosition,
    prytany_type: PrytanyType,
    year: Option<i32>,
    config: &ConciliarConfig,
) -> Result<Vec<DoyCandidate>, CalendarError> {
    let era = prytany_type.resolve(year, config.eras())?;
    if position.unit() > era.prytany_count() {
        return Err(CalendarError::PrytanyOutOfRange {
            prytany: position.unit(),
            era,
            count: era.prytany_count(),
        });
    }
    let rule = config.rules().for_era(era);
    let slack = config.max_diff().unwrap_or(rule.max_diff);

    let mut branches = Vec::with_capacity(2);
    match rule.intercalary {
        Some(intercalary) => {
            if position.day() <= rule.ordinary.longest() {
                branches.push((rule.ordinary, Intercalation::Ordinary));
            }
            branches.push((intercalary, Intercalation::Intercalary));
        }
        None => {
            if position.day() <= rule.ordinary.longest() {
                branches.push((rule.ordinary, Intercalation::Inapplicable));
            }
        }
    }

    let count = position.preceding_units();
    let mut out = Vec::new();
    for (unit_rule, intercalation) in branches {
        for preceding in prytany_splits(unit_rule, count, slack, config.rule_of_aristotle()) {
            out.push(DoyCandidate::new(position, preceding, intercalation));
        }
    }
    out.sort_by_key(DoyCandidate::doy);
    Ok(out)
}

/// Every admissible arrangement of `count` preceding prytanies under `rule`.
fn prytany_splits(rule: UnitRule, count: usize, slack: u8, aristotle: bool) -> Vec<Vec<u16>> {
    match rule {
        UnitRule::Fixed { fixed } => vec![vec![fixed; count]],
        UnitRule::Split {
            long,
            short,
            max_long,
        } => {
            if aristotle {
                let n_long = count.min(usize::from(max_long));
                return vec![split(long, n_long, short, count - n_long)];
            }
            let bound = usize::from(max_long) + usize::from(slack);
            (0..=count.min(bound))
                .map(|n_long| split(long, n_long, short, count - n_long))
                .collect()
        }
    }
}

fn split(long: u16, n_long: usize, short: u16, n_short: usize) -> Vec<u16> {
    let mut lengths = Vec::with_capacity(n_long + n_short);
    lengths.extend(std::iter::repeat_n(long, n_long));
    lengths.extend(std::iter::repeat_n(short, n_short));
    lengths
}
