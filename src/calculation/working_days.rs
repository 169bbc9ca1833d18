//! Working-day counting.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::WeeklyOffDays;

use super::calendar::{date_range, is_weekend};

/// Counts the working days in an inclusive date range.
///
/// A day is a working day iff its weekday is not a weekly off-day and its
/// date is not a holiday. A holiday falling on an off-day is not subtracted
/// twice. `start > end` yields 0: callers routinely pass ranges clipped to
/// an employee's tenure, which may be empty.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::count_working_days;
/// use payroll_engine::models::WeeklyOffDays;
/// use chrono::NaiveDate;
/// use std::collections::HashSet;
///
/// let start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
/// let holidays: HashSet<NaiveDate> = [NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()].into();
///
/// assert_eq!(count_working_days(start, end, &holidays, WeeklyOffDays::default()), 10);
/// ```
pub fn count_working_days(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &HashSet<NaiveDate>,
    weekly_off_days: WeeklyOffDays,
) -> u32 {
    date_range(start, end)
        .filter(|date| !is_weekend(*date, weekly_off_days) && !holidays.contains(date))
        .count() as u32
}
