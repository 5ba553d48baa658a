//! Era classification of the conciliar calendar.

use serde::Serialize;

use crate::error::CalendarError;

/// Converts a year BCE to astronomical numbering (1 BCE = 0).
///
/// ```
/// assert_eq!(hemerai_calendar::bce(319), -318);
/// assert_eq!(hemerai_calendar::bce(1), 0);
/// ```
pub fn bce(year: i32) -> i32 {
    1 - year
}

/// A resolved era of the conciliar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    /// Ten prytanies of 36 or 37 days filling a solar year.
    QuasiSolar,
    /// Ten prytanies aligned with the festival year.
    #[serde(rename = "aligned_10")]
    Aligned10,
    /// Twelve prytanies aligned with the festival year.
    #[serde(rename = "aligned_12")]
    Aligned12,
    /// Thirteen prytanies aligned with the festival year.
    #[serde(rename = "aligned_13")]
    Aligned13,
}

impl Era {
    /// Number of prytanies in a year of this era.
    pub fn prytany_count(self) -> u8 {
        match self {
            Self::QuasiSolar | Self::Aligned10 => 10,
            Self::Aligned12 => 12,
            Self::Aligned13 => 13,
        }
    }

    /// Whether the conciliar year of this era follows festival intercalation.
    pub fn is_aligned(self) -> bool {
        !matches!(self, Self::QuasiSolar)
    }
}

/// The prytany arrangement requested by a caller.
///
/// `Auto` defers to an [`EraTable`] keyed on the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrytanyType {
    #[default]
    Auto,
    QuasiSolar,
    Aligned10,
    Aligned12,
    Aligned13,
}

impl PrytanyType {
    /// Resolves this type to a concrete era.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::AutoWithoutYear`] for `Auto` without a year,
    /// or [`CalendarError::NoPrytanies`] if the year predates the table.
    pub fn resolve(self, year: Option<i32>, table: &EraTable) -> Result<Era, CalendarError> {
        match self {
            Self::Auto => {
                let year = year.ok_or(CalendarError::AutoWithoutYear)?;
                table.resolve(year)
            }
            Self::QuasiSolar => Ok(Era::QuasiSolar),
            Self::Aligned10 => Ok(Era::Aligned10),
            Self::Aligned12 => Ok(Era::Aligned12),
            Self::Aligned13 => Ok(Era::Aligned13),
        }
    }
}

impl From<Era> for PrytanyType {
    fn from(era: Era) -> Self {
        match era {
            Era::QuasiSolar => Self::QuasiSolar,
            Era::Aligned10 => Self::Aligned10,
            Era::Aligned12 => Self::Aligned12,
            Era::Aligned13 => Self::Aligned13,
        }
    }
}

/// Year-to-era classification.
///
/// Each span starts at its first astronomical year and runs until the next
/// span begins. Years before the first span have no prytanies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EraTable {
    spans: Vec<(i32, Era)>,
}

impl EraTable {
    /// Builds a table from `(first_year, era)` spans in any order.
    ///
    /// Returns `None` if `spans` is empty.
    pub fn new(mut spans: Vec<(i32, Era)>) -> Option<Self> {
        if spans.is_empty() {
            return None;
        }
        spans.sort_by_key(|&(first, _)| first);
        Some(Self { spans })
    }

    /// The earliest year with prytanies.
    pub fn earliest(&self) -> i32 {
        self.spans[0].0
    }

    /// Returns the `(first_year, era)` spans in ascending order.
    pub fn spans(&self) -> &[(i32, Era)] {
        &self.spans
    }

    /// Classifies an astronomical year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NoPrytanies`] if `year` is earlier than
    /// [`EraTable::earliest`].
    pub fn resolve(&self, year: i32) -> Result<Era, CalendarError> {
        self.spans
            .iter()
            .rev()
            .find(|&&(first, _)| first <= year)
            .map(|&(_, era)| era)
            .ok_or(CalendarError::NoPrytanies {
                year,
                earliest: self.earliest(),
            })
    }
}

impl Default for EraTable {
    /// The canonical table.
    ///
    /// Two published tables disagree on the transitions at -409/-423,
    /// -307/-306, -223/-221 and -222/-220; this one follows the first.
    fn default() -> Self {
        Self {
            spans: vec![
                (-507, Era::QuasiSolar),
                (-409, Era::Aligned10),
                (-307, Era::Aligned12),
                (-222, Era::Aligned13),
                (-199, Era::Aligned12),
                (-99, Era::Aligned10),
            ],
        }
    }
}

/// Classifies an astronomical year with the default [`EraTable`].
///
/// # Errors
///
/// Returns [`CalendarError::NoPrytanies`] for years before -507.
pub fn era_for_year(year: i32) -> Result<Era, CalendarError> {
    EraTable::default().resolve(year)
}
