//! Salary cycle resolution.
//!
//! Given a reference date and a [`SalaryCycleConfig`], this module determines
//! the concrete period the date falls in, and enumerates all periods of a
//! year. Resolution is a pure function per cycle type:
//!
//! | Cycle | Period |
//! |---|---|
//! | Monthly | `start_day` to `end_day` (or last day) of the reference month |
//! | SemiMonthly | days 1–15, or 16 to month end |
//! | BiWeekly | 14-day blocks anchored on January 1 of the reference year |
//! | Weekly | Monday to Sunday |

use chrono::{Datelike, Days, Months, NaiveDate};
use tracing::debug;

use crate::config::{CycleType, EndDay, SalaryCycleConfig, validate_cycle_config};
use crate::error::{EngineError, EngineResult};
use crate::models::Period;

/// Last day of the first half of a semi-monthly cycle.
pub const SEMI_MONTHLY_SPLIT_DAY: u32 = 15;

/// Length of a bi-weekly period in days.
pub const BI_WEEKLY_DAYS: u64 = 14;

/// Length of a weekly period in days.
pub const WEEKLY_DAYS: u64 = 7;

/// Resolves the salary period a reference date falls in.
///
/// The configuration is validated first; an invalid configuration is
/// rejected before any period is computed.
///
/// For monthly cycles the period is always the configured `start_day` to
/// `end_day` of the reference month (both clamped to the month's length),
/// even when the reference date lies outside that window.
///
/// Bi-weekly periods are never clipped to the year: the last period of a
/// year may end in January of the next year.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::resolve_period;
/// use payroll_engine::config::{CycleType, SalaryCycleConfig};
/// use chrono::NaiveDate;
///
/// let config = SalaryCycleConfig {
///     cycle_type: CycleType::SemiMonthly,
///     ..SalaryCycleConfig::default()
/// };
/// let period = resolve_period(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(), &config).unwrap();
///
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2026, 2, 15).unwrap());
/// assert_eq!(period.label, "February 2026 (1-15)");
/// ```
pub fn resolve_period(date: NaiveDate, config: &SalaryCycleConfig) -> EngineResult<Period> {
    validate_cycle_config(config).into_result("salary_cycle")?;
    resolve_validated(date, config)
}

/// Enumerates every period of a year, in order.
///
/// - Monthly: one period per month (12).
/// - SemiMonthly: two periods per month (24).
/// - BiWeekly: periods starting on January 1 + 14k within the year (27); the
///   last one spills into the next year.
/// - Weekly: every Monday-to-Sunday week overlapping the year, starting with
///   the week containing January 1. This is 53 periods, or 54 for a leap year
///   starting on a Sunday (e.g. 2012): full coverage of the year is kept over
///   a 53-period cap, so callers must not assume at most 53 weekly periods.
///
/// With the default monthly configuration (start day 1, end `last`) and for
/// all other cycle types, consecutive periods are contiguous and together
/// cover every day of the year.
pub fn yearly_periods(year: i32, config: &SalaryCycleConfig) -> EngineResult<Vec<Period>> {
    validate_cycle_config(config).into_result("salary_cycle")?;

    let jan_first = ymd(year, 1, 1)?;
    let dec_last = ymd(year, 12, 31)?;

    let references: Vec<NaiveDate> = match config.cycle_type {
        CycleType::Monthly => (1..=12)
            .map(|month| ymd(year, month, 15))
            .collect::<EngineResult<_>>()?,
        CycleType::SemiMonthly => (1..=12)
            .flat_map(|month| [ymd(year, month, 1), ymd(year, month, SEMI_MONTHLY_SPLIT_DAY + 1)])
            .collect::<EngineResult<_>>()?,
        CycleType::BiWeekly => step_dates(jan_first, dec_last, BI_WEEKLY_DAYS),
        CycleType::Weekly => {
            let first_monday = days_before(jan_first, jan_first.weekday().num_days_from_monday())?;
            step_dates(first_monday, dec_last, WEEKLY_DAYS)
        }
    };

    let periods = references
        .into_iter()
        .map(|reference| resolve_validated(reference, config))
        .collect::<EngineResult<Vec<_>>>()?;

    debug!(
        year,
        cycle_type = %config.cycle_type,
        periods = periods.len(),
        "Enumerated yearly salary periods"
    );
    Ok(periods)
}

fn resolve_validated(date: NaiveDate, config: &SalaryCycleConfig) -> EngineResult<Period> {
    match config.cycle_type {
        CycleType::Monthly => monthly_period(date, config.start_day, config.end_day),
        CycleType::SemiMonthly => semi_monthly_period(date),
        CycleType::BiWeekly => bi_weekly_period(date),
        CycleType::Weekly => weekly_period(date),
    }
}

fn monthly_period(date: NaiveDate, start_day: u32, end_day: EndDay) -> EngineResult<Period> {
    let last = month_end(date)?;
    let start = date.with_day(start_day.min(last.day()));
    let end = match end_day {
        EndDay::Last => Some(last),
        EndDay::Day(day) => date.with_day(day.min(last.day())),
    };

    let (start_date, end_date) = start.zip(end).ok_or_else(|| out_of_range(date))?;

    Ok(Period {
        start_date,
        end_date,
        label: start_date.format("%B %Y").to_string(),
    })
}

fn semi_monthly_period(date: NaiveDate) -> EngineResult<Period> {
    let last = month_end(date)?;
    let (first_day, last_day) = if date.day() <= SEMI_MONTHLY_SPLIT_DAY {
        (1, SEMI_MONTHLY_SPLIT_DAY)
    } else {
        (SEMI_MONTHLY_SPLIT_DAY + 1, last.day())
    };

    let start_date = date.with_day(first_day).ok_or_else(|| out_of_range(date))?;
    let end_date = date.with_day(last_day).ok_or_else(|| out_of_range(date))?;

    Ok(Period {
        start_date,
        end_date,
        label: format!("{} ({}-{})", date.format("%B %Y"), first_day, last_day),
    })
}

fn bi_weekly_period(date: NaiveDate) -> EngineResult<Period> {
    let anchor = ymd(date.year(), 1, 1)?;
    let days_since_anchor = (date - anchor).num_days() as u64;
    let index = days_since_anchor / BI_WEEKLY_DAYS;

    let start_date = days_after(anchor, index * BI_WEEKLY_DAYS)?;
    let end_date = days_after(start_date, BI_WEEKLY_DAYS - 1)?;

    Ok(Period {
        start_date,
        end_date,
        label: format!("Week {}-{}, {}", 2 * index + 1, 2 * index + 2, anchor.year()),
    })
}

fn weekly_period(date: NaiveDate) -> EngineResult<Period> {
    let start_date = days_before(date, date.weekday().num_days_from_monday())?;
    let end_date = days_after(start_date, WEEKLY_DAYS - 1)?;
    let iso_week = start_date.iso_week();

    Ok(Period {
        start_date,
        end_date,
        label: format!("Week {:02}, {}", iso_week.week(), iso_week.year()),
    })
}

/// Dates from `first` stepping by `step` days, while not after `last`.
fn step_dates(first: NaiveDate, last: NaiveDate, step: u64) -> Vec<NaiveDate> {
    std::iter::successors(Some(first), |date| date.checked_add_days(Days::new(step)))
        .take_while(|date| *date <= last)
        .collect()
}

fn ymd(year: i32, month: u32, day: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| EngineError::CalculationError {
        message: format!("invalid date {}-{:02}-{:02}", year, month, day),
    })
}

/// Last day of the month containing `date`.
///
/// Fails for December of the last year chrono can represent.
fn month_end(date: NaiveDate) -> EngineResult<NaiveDate> {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next_first| next_first.pred_opt())
        .ok_or_else(|| out_of_range(date))
}

fn days_after(date: NaiveDate, days: u64) -> EngineResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| out_of_range(date))
}

fn days_before(date: NaiveDate, days: u32) -> EngineResult<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(days)))
        .ok_or_else(|| out_of_range(date))
}

fn out_of_range(date: NaiveDate) -> EngineError {
    EngineError::CalculationError {
        message: format!("salary period for {} is outside the supported date range", date),
    }
}
