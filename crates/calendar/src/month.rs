//! Names of the Attic festival months.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// The twelve months of the Athenian festival year, in calendar order.
///
/// An intercalated month repeats one of these names; its position in the
/// year is expressed by the unit ordinal of a [`CalendarPosition`], not by
/// this enum.
///
/// [`CalendarPosition`]: crate::CalendarPosition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Hekatombaion,
    Metageitnion,
    Boedromion,
    Pyanepsion,
    Maimakterion,
    Posideon,
    Gamelion,
    Anthesterion,
    Elaphebolion,
    Mounichion,
    Thargelion,
    Skirophorion,
}

const MONTHS: [Month; 12] = [
    Month::Hekatombaion,
    Month::Metageitnion,
    Month::Boedromion,
    Month::Pyanepsion,
    Month::Maimakterion,
    Month::Posideon,
    Month::Gamelion,
    Month::Anthesterion,
    Month::Elaphebolion,
    Month::Mounichion,
    Month::Thargelion,
    Month::Skirophorion,
];

impl Month {
    /// Returns the month for an ordinal in 1..=12.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for any other ordinal.
    pub fn from_ordinal(month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(MONTHS[usize::from(month - 1)])
    }

    /// Returns the ordinal of this month (Hekatombaion = 1).
    pub fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the transliterated name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hekatombaion => "Hekatombaion",
            Self::Metageitnion => "Metageitnion",
            Self::Boedromion => "Boedromion",
            Self::Pyanepsion => "Pyanepsion",
            Self::Maimakterion => "Maimakterion",
            Self::Posideon => "Posideon",
            Self::Gamelion => "Gamelion",
            Self::Anthesterion => "Anthesterion",
            Self::Elaphebolion => "Elaphebolion",
            Self::Mounichion => "Mounichion",
            Self::Thargelion => "Thargelion",
            Self::Skirophorion => "Skirophorion",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MONTHS
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalendarError::UnknownMonth {
                name: s.to_string(),
            })
    }
}
