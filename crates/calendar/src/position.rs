//! Calendar positions and alternative readings of them.

use serde::Serialize;

use crate::error::CalendarError;

/// Highest unit ordinal: the thirteenth month of an intercalated festival
/// year, or the thirteenth prytany.
pub const MAX_UNIT: u8 = 13;

/// Highest day within a unit: the long intercalary prytany of 39 days.
pub const MAX_DAY: u16 = 39;

/// A position in a calendar: a unit ordinal (month or prytany, 1-based)
/// and a day within that unit (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarPosition {
    unit: u8,
    day: u16,
}

impl CalendarPosition {
    /// Creates a new position.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidUnit`] if `unit` is outside
    /// `1..=MAX_UNIT` and [`CalendarError::InvalidDay`] if `day` is outside
    /// `1..=MAX_DAY`.
    pub fn new(unit: u8, day: u16) -> Result<Self, CalendarError> {
        if !(1..=MAX_UNIT).contains(&unit) {
            return Err(CalendarError::InvalidUnit { unit });
        }
        if !(1..=MAX_DAY).contains(&day) {
            return Err(CalendarError::InvalidDay { day });
        }
        Ok(Self { unit, day })
    }

    /// Returns the unit ordinal (month or prytany).
    pub fn unit(self) -> u8 {
        self.unit
    }

    /// Returns the day within the unit.
    pub fn day(self) -> u16 {
        self.day
    }

    /// Returns the number of units that precede this one in an ordinary year.
    pub fn preceding_units(self) -> usize {
        usize::from(self.unit - 1)
    }
}

/// One or more alternative readings of a calendar date.
///
/// Ambiguous inscriptions ("day 29 or 30") are represented as a `Group`
/// whose members may themselves be groups. [`Reading::flatten`] visits the
/// leaves depth-first in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reading {
    /// A single unambiguous position.
    Leaf(CalendarPosition),
    /// Alternatives, in reading order.
    Group(Vec<Reading>),
}

impl Reading {
    /// Builds a group of leaves from a list of positions.
    pub fn any_of(positions: impl IntoIterator<Item = CalendarPosition>) -> Self {
        Self::Group(positions.into_iter().map(Self::Leaf).collect())
    }

    /// Returns every position in this reading, depth-first.
    pub fn flatten(&self) -> Vec<CalendarPosition> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut Vec<CalendarPosition>) {
        match self {
            Self::Leaf(position) => out.push(*position),
            Self::Group(members) => {
                for member in members {
                    member.collect_into(out);
                }
            }
        }
    }
}

impl From<CalendarPosition> for Reading {
    fn from(position: CalendarPosition) -> Self {
        Self::Leaf(position)
    }
}
