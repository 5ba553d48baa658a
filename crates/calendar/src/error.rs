//! Error types for the hemerai-calendar crate.

use crate::era::Era;

/// Error type for all fallible operations in the hemerai-calendar crate.
///
/// Every variant is a configuration error: the caller asked for something
/// the calendar cannot represent. An empty candidate set is never an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the prytany type is `Auto` but no year was supplied.
    #[error("prytany type AUTO requires a year")]
    AutoWithoutYear,

    /// Returned when a year predates the institution of the prytanies.
    #[error("no prytanies existed in year {year} (earliest is {earliest})")]
    NoPrytanies {
        /// The astronomical year that was requested.
        year: i32,
        /// The earliest astronomical year with prytanies.
        earliest: i32,
    },

    /// Returned when a month or prytany ordinal is outside 1..=13.
    #[error("invalid unit ordinal: {unit} (must be 1..=13)")]
    InvalidUnit {
        /// The invalid ordinal.
        unit: u8,
    },

    /// Returned when a day within a month or prytany is outside 1..=39.
    #[error("invalid day: {day} (must be 1..=39)")]
    InvalidDay {
        /// The invalid day.
        day: u16,
    },

    /// Returned when a month name is not one of the twelve Attic months.
    #[error("unknown month name: {name:?}")]
    UnknownMonth {
        /// The name that failed to parse.
        name: String,
    },

    /// Returned when a prytany ordinal exceeds the number of prytanies in
    /// its era.
    #[error("prytany {prytany} does not exist in the {era:?} era ({count} prytanies)")]
    PrytanyOutOfRange {
        /// The requested prytany ordinal.
        prytany: u8,
        /// The resolved era.
        era: Era,
        /// Number of prytanies in that era.
        count: u8,
    },

    /// Returned when a month ordinal is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month ordinal.
        month: u8,
    },
}
