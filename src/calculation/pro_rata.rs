//! Pro-rata salary calculation.
//!
//! An employee who joins or exits mid-cycle is paid for the working days
//! they were employed, as a share of the cycle's total working days.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::CycleType;
use crate::models::DateRange;

use super::money::{MONTHS_PER_YEAR, round_money};

const BI_WEEKLY_PERIODS_PER_YEAR: Decimal = Decimal::from_parts(26, 0, 0, false, 0);
const WEEKLY_PERIODS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// Prorates a period salary by working days.
///
/// Returns `round2(period_salary * actual / total)`. A period with zero
/// working days contributes nothing rather than failing the payroll run.
/// Multiplying before dividing keeps `prorate(a, t, t) == round2(a)` exact.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::prorate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Decimal::from_str("30000").unwrap();
/// assert_eq!(prorate(salary, 10, 20), Decimal::from_str("15000").unwrap());
/// assert_eq!(prorate(salary, 20, 20), salary);
/// assert_eq!(prorate(salary, 5, 0), Decimal::ZERO);
/// ```
pub fn prorate(period_salary: Decimal, actual_working_days: u32, total_working_days: u32) -> Decimal {
    if total_working_days == 0 {
        return Decimal::ZERO;
    }
    round_money(
        period_salary * Decimal::from(actual_working_days) / Decimal::from(total_working_days),
    )
}

/// Clips an employee's tenure to a cycle.
///
/// Returns the overlap of `[employee_start, employee_end]` with
/// `[cycle_start, cycle_end]`, or `None` when they do not overlap. No overlap
/// is a normal outcome: the employee is owed nothing for the cycle.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::mid_cycle_period;
/// use chrono::NaiveDate;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
///
/// let clipped = mid_cycle_period(d(2, 10), d(12, 31), d(2, 1), d(2, 28)).unwrap();
/// assert_eq!(clipped.start_date, d(2, 10));
/// assert_eq!(clipped.end_date, d(2, 28));
///
/// assert!(mid_cycle_period(d(3, 1), d(12, 31), d(2, 1), d(2, 28)).is_none());
/// ```
pub fn mid_cycle_period(
    employee_start: NaiveDate,
    employee_end: NaiveDate,
    cycle_start: NaiveDate,
    cycle_end: NaiveDate,
) -> Option<DateRange> {
    let range = DateRange {
        start_date: employee_start.max(cycle_start),
        end_date: employee_end.min(cycle_end),
    };
    (!range.is_empty()).then_some(range)
}

/// Derives the salary for one period from a monthly salary.
///
/// Monthly pays the full amount, semi-monthly half, and bi-weekly and weekly
/// pay the annualized salary split over 26 and 52 periods respectively.
pub fn period_salary(monthly_salary: Decimal, cycle_type: CycleType) -> Decimal {
    let amount = match cycle_type {
        CycleType::Monthly => monthly_salary,
        CycleType::SemiMonthly => monthly_salary / Decimal::TWO,
        CycleType::BiWeekly => monthly_salary * MONTHS_PER_YEAR / BI_WEEKLY_PERIODS_PER_YEAR,
        CycleType::Weekly => monthly_salary * MONTHS_PER_YEAR / WEEKLY_PERIODS_PER_YEAR,
    };
    round_money(amount)
}
