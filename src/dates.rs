// File: ./src/dates.rs
// Day-granular date arithmetic shared by the grid builder, the event placer
// and month/week navigation.
//
// Weeks are Sunday-first everywhere in this crate. Every helper that can step
// outside chrono's representable range returns `Option` instead of panicking.
use chrono::{Datelike, Days, Months, NaiveDate};

/// Number of columns in a week row.
pub const DAYS_PER_WEEK: usize = 7;

/// Signed number of days from `origin` to `date` (`date - origin`).
pub fn day_offset(date: NaiveDate, origin: NaiveDate) -> i64 {
    date.signed_duration_since(origin).num_days()
}

/// Number of days in the given month, or `None` if the month is not valid.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = last_of_month(first)?;
    Some(last.day())
}

/// The first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month, so `with_day(1)` cannot fail.
    date.with_day(1).unwrap_or(date)
}

/// The last day of the month containing `date`.
///
/// Works for the final month chrono can represent, where stepping into the
/// following month is not possible.
pub fn last_of_month(date: NaiveDate) -> Option<NaiveDate> {
    (28..=31).rev().find_map(|day| date.with_day(day))
}

/// Shift `date` by `n` months, clamping the day-of-month to the target month.
///
/// Jan 31 shifted by +1 lands on Feb 28 (or 29), never in March.
pub fn shift_months(date: NaiveDate, n: i32) -> Option<NaiveDate> {
    let months = Months::new(n.unsigned_abs());
    if n >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Shift `date` by `n` whole weeks.
pub fn shift_weeks(date: NaiveDate, n: i64) -> Option<NaiveDate> {
    let days = Days::new(n.unsigned_abs().checked_mul(DAYS_PER_WEEK as u64)?);
    if n >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    let back = date.weekday().num_days_from_sunday();
    date.checked_sub_days(Days::new(u64::from(back)))
}

/// The Saturday on or after `date`.
pub fn week_end(date: NaiveDate) -> Option<NaiveDate> {
    let forward = 6 - date.weekday().num_days_from_sunday();
    date.checked_add_days(Days::new(u64::from(forward)))
}

/// Number of days in the inclusive range `[start, end]`.
pub fn inclusive_len(start: NaiveDate, end: NaiveDate) -> i64 {
    day_offset(end, start) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_day_offset_signed() {
        assert_eq!(day_offset(d(2026, 2, 2), d(2026, 1, 30)), 3);
        assert_eq!(day_offset(d(2026, 1, 30), d(2026, 2, 2)), -3);
        assert_eq!(day_offset(d(2026, 1, 30), d(2026, 1, 30)), 0);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(2025, 12), Some(31));
        assert_eq!(days_in_month(2025, 4), Some(30));
        assert_eq!(days_in_month(2025, 13), None);
        assert_eq!(days_in_month(2025, 0), None);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(first_of_month(d(2025, 12, 17)), d(2025, 12, 1));
        assert_eq!(last_of_month(d(2025, 12, 17)), Some(d(2025, 12, 31)));
        assert_eq!(last_of_month(d(2024, 2, 3)), Some(d(2024, 2, 29)));
        assert_eq!(last_of_month(d(2025, 2, 3)), Some(d(2025, 2, 28)));
        assert_eq!(last_of_month(d(2025, 4, 30)), Some(d(2025, 4, 30)));
        assert_eq!(last_of_month(NaiveDate::MAX), Some(NaiveDate::MAX));
    }

    #[test]
    fn test_shift_months_clamps_day() {
        assert_eq!(shift_months(d(2025, 1, 31), 1), Some(d(2025, 2, 28)));
        assert_eq!(shift_months(d(2024, 1, 31), 1), Some(d(2024, 2, 29)));
        assert_eq!(shift_months(d(2025, 3, 31), -1), Some(d(2025, 2, 28)));
        assert_eq!(shift_months(d(2025, 12, 15), 1), Some(d(2026, 1, 15)));
        assert_eq!(shift_months(d(2025, 1, 15), -13), Some(d(2023, 12, 15)));
        assert_eq!(shift_months(d(2025, 5, 31), 0), Some(d(2025, 5, 31)));
    }

    #[test]
    fn test_shift_weeks() {
        assert_eq!(shift_weeks(d(2026, 1, 25), 1), Some(d(2026, 2, 1)));
        assert_eq!(shift_weeks(d(2026, 1, 25), -2), Some(d(2026, 1, 11)));
        assert_eq!(shift_weeks(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn test_week_bounds_are_sunday_and_saturday() {
        // 2025-12-01 is a Monday.
        let start = week_start(d(2025, 12, 1)).unwrap();
        assert_eq!(start, d(2025, 11, 30));
        assert_eq!(start.weekday(), Weekday::Sun);

        // 2025-12-31 is a Wednesday.
        let end = week_end(d(2025, 12, 31)).unwrap();
        assert_eq!(end, d(2026, 1, 3));
        assert_eq!(end.weekday(), Weekday::Sat);

        // Already aligned dates stay put.
        assert_eq!(week_start(d(2026, 2, 1)), Some(d(2026, 2, 1)));
        assert_eq!(week_end(d(2026, 1, 31)), Some(d(2026, 1, 31)));
    }

    #[test]
    fn test_week_bounds_overflow_is_none() {
        assert!(week_start(NaiveDate::MIN).is_none() || NaiveDate::MIN.weekday() == Weekday::Sun);
        assert!(week_end(NaiveDate::MAX).is_none() || NaiveDate::MAX.weekday() == Weekday::Sat);
    }

    #[test]
    fn test_inclusive_len() {
        assert_eq!(inclusive_len(d(2026, 1, 30), d(2026, 2, 2)), 4);
        assert_eq!(inclusive_len(d(2026, 1, 30), d(2026, 1, 30)), 1);
    }
}
