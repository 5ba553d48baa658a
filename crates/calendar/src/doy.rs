//! Day-of-year candidates produced by the enumerators.

use serde::Serialize;

use crate::position::CalendarPosition;

/// Whether a candidate presupposes an intercalated year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intercalation {
    /// The candidate assumes an ordinary year.
    Ordinary,
    /// The candidate assumes an extra unit was inserted before it.
    Intercalary,
    /// The calendar has no notion of intercalation (quasi-solar prytanies).
    Inapplicable,
}

/// One possible day-of-year for a calendar position.
///
/// `preceding` holds the lengths of the units before the position in the
/// order they were assumed; `doy` is always `day + sum(preceding)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DoyCandidate {
    position: CalendarPosition,
    doy: u16,
    preceding: Vec<u16>,
    intercalation: Intercalation,
}

impl DoyCandidate {
    /// Creates a candidate, deriving `doy` from the position and `preceding`.
    ///
    /// The sum saturates at `u16::MAX`; only custom length rules far beyond
    /// any real calendar get there.
    pub fn new(
        position: CalendarPosition,
        preceding: Vec<u16>,
        intercalation: Intercalation,
    ) -> Self {
        let doy = preceding
            .iter()
            .fold(position.day(), |acc, &len| acc.saturating_add(len));
        Self {
            position,
            doy,
            preceding,
            intercalation,
        }
    }

    /// Returns the position this candidate was computed for.
    pub fn position(&self) -> CalendarPosition {
        self.position
    }

    /// Returns the 1-based day of the year.
    pub fn doy(&self) -> u16 {
        self.doy
    }

    /// Returns the lengths of the preceding units.
    pub fn preceding(&self) -> &[u16] {
        &self.preceding
    }

    /// Returns the intercalation assumption.
    pub fn intercalation(&self) -> Intercalation {
        self.intercalation
    }

    /// Whether this candidate assumes an intercalated year.
    pub fn is_intercalary(&self) -> bool {
        self.intercalation == Intercalation::Intercalary
    }
}
