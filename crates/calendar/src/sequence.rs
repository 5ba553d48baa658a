//! Day-by-day layout of a partition of the year.

use serde::Serialize;

/// A restartable counter of days-of-year.
///
/// Yields 1, 2, 3, ... and can be rewound to the start of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoyCursor {
    next: u16,
}

impl DoyCursor {
    /// Creates a cursor positioned on day 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the day the next call to [`Iterator::next`] will yield.
    pub fn peek(&self) -> u16 {
        self.next
    }

    /// Rewinds the cursor to day 1.
    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for DoyCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for DoyCursor {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        let doy = self.next;
        self.next = self.next.checked_add(1)?;
        Some(doy)
    }
}

/// A single day in a laid-out partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDay {
    /// Unit ordinal (1-based).
    pub unit: u8,
    /// Day within the unit (1-based).
    pub day: u16,
    /// Day of the year (1-based).
    pub doy: u16,
}

/// Lays out consecutive units of the given lengths, one entry per day.
///
/// # Example
///
/// ```
/// use hemerai_calendar::unit_sequence;
///
/// let days = unit_sequence(&[30, 29]);
/// assert_eq!(days.len(), 59);
/// assert_eq!((days[30].unit, days[30].day, days[30].doy), (2, 1, 31));
/// ```
pub fn unit_sequence(lengths: &[u16]) -> Vec<CalendarDay> {
    let total: usize = lengths.iter().map(|&l| usize::from(l)).sum();
    let mut days = Vec::with_capacity(total);
    let mut cursor = DoyCursor::new();
    for (unit, &length) in (1u8..).zip(lengths) {
        for day in 1..=length {
            let Some(doy) = cursor.next() else {
                return days;
            };
            days.push(CalendarDay { unit, day, doy });
        }
    }
    days
}

/// Returns the day-of-year on which each unit starts.
pub fn unit_starts(lengths: &[u16]) -> Vec<u16> {
    let mut starts = Vec::with_capacity(lengths.len());
    let mut start = 1u16;
    for &length in lengths {
        starts.push(start);
        start = start.saturating_add(length);
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_counts_from_one() {
        let mut cursor = DoyCursor::new();
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.peek(), 3);
    }

    #[test]
    fn cursor_reset() {
        let mut cursor = DoyCursor::new();
        cursor.by_ref().take(10).for_each(drop);
        assert_eq!(cursor.peek(), 11);
        cursor.reset();
        assert_eq!(cursor.next(), Some(1));
    }

    #[test]
    fn empty() {
        assert!(unit_sequence(&[]).is_empty());
        assert!(unit_starts(&[]).is_empty());
    }

    #[test]
    fn single_unit() {
        let days = unit_sequence(&[29]);
        assert_eq!(days.len(), 29);
        assert_eq!(days[0], CalendarDay { unit: 1, day: 1, doy: 1 });
        assert_eq!(days[28], CalendarDay { unit: 1, day: 29, doy: 29 });
    }

    #[test]
    fn unit_boundary() {
        let days = unit_sequence(&[36, 35]);
        assert_eq!(days[35], CalendarDay { unit: 1, day: 36, doy: 36 });
        assert_eq!(days[36], CalendarDay { unit: 2, day: 1, doy: 37 });
        assert_eq!(days.last().unwrap().doy, 71);
    }

    #[test]
    fn full_ordinary_year() {
        let lengths = [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29];
        let days = unit_sequence(&lengths);
        assert_eq!(days.len(), 354);
        assert_eq!(days.last().unwrap().unit, 12);
    }

    #[test]
    fn starts() {
        assert_eq!(unit_starts(&[30, 29, 30]), vec![1, 31, 60]);
    }
}
