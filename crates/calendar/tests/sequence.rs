use hemerai_calendar::{CalendarDay, DoyCursor, unit_sequence, unit_starts};

#[test]
fn intercalary_year_month_boundaries() {
    // Thirteen months, the sixth repeated.
    let lengths = [30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29];
    let days = unit_sequence(&lengths);
    assert_eq!(days.len(), 384);

    // Index 29: last day of month 1
    assert_eq!(days[29], CalendarDay { unit: 1, day: 30, doy: 30 });

    // Index 30: first day of month 2
    assert_eq!(days[30], CalendarDay { unit: 2, day: 1, doy: 31 });

    // Index 383: last day of the year
    assert_eq!(days[383], CalendarDay { unit: 13, day: 29, doy: 384 });
}

#[test]
fn starts_agree_with_sequence() {
    let lengths = [36, 36, 36, 36, 35, 35, 35, 35, 35, 35];
    let days = unit_sequence(&lengths);
    let starts = unit_starts(&lengths);
    assert_eq!(starts.len(), 10);
    for (i, &start) in starts.iter().enumerate() {
        let day = days[usize::from(start) - 1];
        assert_eq!(day.unit as usize, i + 1, "unit {}", i + 1);
        assert_eq!(day.day, 1, "unit {}", i + 1);
    }
}

#[test]
fn doy_is_contiguous() {
    let lengths = [32; 12];
    let days = unit_sequence(&lengths);
    for (i, day) in days.iter().enumerate() {
        assert_eq!(usize::from(day.doy), i + 1);
    }
}

#[test]
fn cursor_is_restartable() {
    let mut cursor = DoyCursor::default();
    let first: Vec<u16> = cursor.by_ref().take(3).collect();
    cursor.reset();
    let second: Vec<u16> = cursor.take(3).collect();
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(first, second);
}
