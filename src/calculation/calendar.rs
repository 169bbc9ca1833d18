//! Calendar math.
//!
//! Pure date utilities used by cycle resolution and working-day counting.

use chrono::{Datelike, NaiveDate};

use crate::models::WeeklyOffDays;

/// Returns the last calendar day of a month.
///
/// `month0` is zero-based (0 = January, 11 = December). Leap years are
/// handled by chrono's calendar.
///
/// # Panics
///
/// Panics if `month0` is outside 0–11 or the year is outside chrono's
/// supported range. Both are caller programming errors.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::last_day_of_month;
/// use chrono::NaiveDate;
///
/// assert_eq!(last_day_of_month(2024, 1), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(last_day_of_month(2026, 1), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
/// assert_eq!(last_day_of_month(2026, 11), NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
/// ```
pub fn last_day_of_month(year: i32, month0: u32) -> NaiveDate {
    assert!(month0 < 12, "month index {} is outside 0-11", month0);

    let (next_year, next_month) = if month0 == 11 {
        (year + 1, 1)
    } else {
        (year, month0 + 2)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or_else(|| panic!("year {} is outside the supported calendar range", year))
}

/// Returns the number of days in a month (`month0` zero-based).
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    last_day_of_month(year, month0).day()
}

/// Returns true if the date falls on one of the weekly off-days.
pub fn is_weekend(date: NaiveDate, weekly_off_days: WeeklyOffDays) -> bool {
    weekly_off_days.contains(date.weekday())
}

/// Iterates every date from `start` to `end`, inclusive.
///
/// Yields nothing when `start > end`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= end)
}
