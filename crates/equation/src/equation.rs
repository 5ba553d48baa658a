//! The equation type: a festival and a conciliar candidate on the same day.

use hemerai_calendar::{DoyCandidate, Intercalation};
use serde::Serialize;

/// A hypothesis that a festival date and a conciliar date denote the same
/// day of the year.
///
/// Both candidates share a day-of-year, and a festival candidate that needs
/// an intercalated month is never paired with an ordinary conciliar year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Equation {
    festival: DoyCandidate,
    conciliar: DoyCandidate,
}

impl Equation {
    /// Pairs two candidates.
    ///
    /// Returns `None` if their days-of-year differ or if the pairing is
    /// misaligned (see [`is_misaligned`]).
    pub fn new(festival: DoyCandidate, conciliar: DoyCandidate) -> Option<Self> {
        if festival.doy() != conciliar.doy() || is_misaligned(&festival, &conciliar) {
            return None;
        }
        Some(Self {
            festival,
            conciliar,
        })
    }

    /// Returns the shared day-of-year.
    pub fn doy(&self) -> u16 {
        self.festival.doy()
    }

    /// Returns the festival side.
    pub fn festival(&self) -> &DoyCandidate {
        &self.festival
    }

    /// Returns the conciliar side.
    pub fn conciliar(&self) -> &DoyCandidate {
        &self.conciliar
    }
}

/// Whether a festival candidate that needs an intercalation is paired with
/// a conciliar candidate that assumes an ordinary year.
pub fn is_misaligned(festival: &DoyCandidate, conciliar: &DoyCandidate) -> bool {
    festival.intercalation() == Intercalation::Intercalary
        && conciliar.intercalation() == Intercalation::Ordinary
}

#[cfg(test)]
mod tests {
    use super::*;
    use hemerai_calendar::CalendarPosition;

    fn cand(unit: u8, day: u16, preceding: Vec<u16>, i: Intercalation) -> DoyCandidate {
        DoyCandidate::new(CalendarPosition::new(unit, day).unwrap(), preceding, i)
    }

    #[test]
    fn pairs_same_doy() {
        let f = cand(2, 10, vec![29], Intercalation::Ordinary);
        let c = cand(2, 4, vec![35], Intercalation::Ordinary);
        let eq = Equation::new(f.clone(), c.clone()).unwrap();
        assert_eq!(eq.doy(), 39);
        assert_eq!(eq.festival(), &f);
        assert_eq!(eq.conciliar(), &c);
    }

    #[test]
    fn rejects_different_doy() {
        let f = cand(2, 10, vec![30], Intercalation::Ordinary);
        let c = cand(2, 4, vec![35], Intercalation::Ordinary);
        assert!(Equation::new(f, c).is_none());
    }

    #[test]
    fn rejects_misaligned() {
        let f = cand(2, 10, vec![30, 29], Intercalation::Intercalary);
        let c = cand(2, 30, vec![39], Intercalation::Ordinary);
        assert_eq!(f.doy(), c.doy());
        assert!(is_misaligned(&f, &c));
        assert!(Equation::new(f, c).is_none());
    }

    #[test]
    fn intercalary_festival_with_inapplicable_conciliar() {
        let f = cand(2, 10, vec![30, 29], Intercalation::Intercalary);
        let c = cand(2, 32, vec![37], Intercalation::Inapplicable);
        assert!(!is_misaligned(&f, &c));
        assert!(Equation::new(f, c).is_some());
    }

    #[test]
    fn ordinary_festival_with_intercalary_conciliar() {
        let f = cand(2, 10, vec![30], Intercalation::Ordinary);
        let c = cand(2, 2, vec![38], Intercalation::Intercalary);
        assert!(Equation::new(f, c).is_some());
    }
}
