//! Period pay orchestration.
//!
//! Ties the cycle resolver, working-day counter and pro-rata engine together
//! to answer "what does this employee earn for the period containing this
//! date?".

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SalaryCycleConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, DateRange, Employee, Period, WeeklyOffDays};

use super::cycle::resolve_period;
use super::pro_rata::{mid_cycle_period, prorate};
use super::working_days::count_working_days;

/// The pay owed to one employee for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPayResult {
    /// The employee the result belongs to.
    pub employee_id: String,
    /// The period containing the reference date.
    pub period: Period,
    /// The full salary for the period.
    pub period_salary: Decimal,
    /// Working days in the full period.
    pub total_working_days: u32,
    /// The part of the period the employee was employed, if any.
    pub employed_range: Option<DateRange>,
    /// Working days within `employed_range` (0 when there is none).
    pub actual_working_days: u32,
    /// The prorated pay, rounded to 2 decimal places.
    pub amount: Decimal,
    /// The audit trail of the calculation.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates an employee's pay for the period containing `reference_date`.
///
/// The period salary is prorated by the working days the employee was
/// employed within the period. An employee whose tenure does not overlap
/// the period is owed zero; that is not an error.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfig`](crate::error::EngineError::InvalidConfig)
/// if the cycle configuration is out of range.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_period_pay;
/// use payroll_engine::config::SalaryCycleConfig;
/// use payroll_engine::models::{Employee, WeeklyOffDays};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::HashSet;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     joining_date: NaiveDate::from_ymd_opt(2026, 2, 16).unwrap(),
///     exit_date: None,
/// };
///
/// // February 2026 has 20 weekdays; 10 of them fall on or after the 16th.
/// let result = calculate_period_pay(
///     &employee,
///     NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(),
///     Decimal::from(40000),
///     &SalaryCycleConfig::default(),
///     &HashSet::new(),
///     WeeklyOffDays::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.total_working_days, 20);
/// assert_eq!(result.actual_working_days, 10);
/// assert_eq!(result.amount, Decimal::from(20000));
/// ```
pub fn calculate_period_pay(
    employee: &Employee,
    reference_date: NaiveDate,
    period_salary: Decimal,
    config: &SalaryCycleConfig,
    holidays: &HashSet<NaiveDate>,
    weekly_off_days: WeeklyOffDays,
) -> EngineResult<PeriodPayResult> {
    let period = resolve_period(reference_date, config)?;
    let mut steps = Vec::with_capacity(3);

    steps.push(AuditStep {
        step_number: 1,
        rule_id: "resolve_period".to_string(),
        rule_name: "Resolve Period".to_string(),
        input: serde_json::json!({
            "reference_date": reference_date.to_string(),
            "cycle_type": config.cycle_type.as_str()
        }),
        output: serde_json::json!({
            "start_date": period.start_date.to_string(),
            "end_date": period.end_date.to_string(),
            "label": period.label
        }),
        reasoning: format!(
            "{} falls in {} ({} to {})",
            reference_date, period.label, period.start_date, period.end_date
        ),
    });

    let total_working_days =
        count_working_days(period.start_date, period.end_date, holidays, weekly_off_days);

    let tenure = employee.tenure();
    let employed_range = mid_cycle_period(
        tenure.start_date,
        tenure.end_date,
        period.start_date,
        period.end_date,
    );
    let actual_working_days = employed_range
        .map(|r| count_working_days(r.start_date, r.end_date, holidays, weekly_off_days))
        .unwrap_or(0);

    steps.push(AuditStep {
        step_number: 2,
        rule_id: "working_days".to_string(),
        rule_name: "Working Days".to_string(),
        input: serde_json::json!({
            "joining_date": employee.joining_date.to_string(),
            "exit_date": employee.exit_date.map(|d| d.to_string()),
            "weekly_off_days": weekly_off_days.indices(),
            "holidays": holidays.len()
        }),
        output: serde_json::json!({
            "total_working_days": total_working_days,
            "employed_range": employed_range,
            "actual_working_days": actual_working_days
        }),
        reasoning: match employed_range {
            Some(range) => format!(
                "Employed {} to {}: {} of {} working days",
                range.start_date, range.end_date, actual_working_days, total_working_days
            ),
            None => format!("Not employed during {}", period.label),
        },
    });

    let amount = prorate(period_salary, actual_working_days, total_working_days);
    steps.push(AuditStep {
        step_number: 3,
        rule_id: "pro_rata".to_string(),
        rule_name: "Pro-Rata Salary".to_string(),
        input: serde_json::json!({
            "period_salary": period_salary.normalize().to_string(),
            "actual_working_days": actual_working_days,
            "total_working_days": total_working_days
        }),
        output: serde_json::json!({ "amount": amount.to_string() }),
        reasoning: format!(
            "{} x {} / {} = {}",
            period_salary.normalize(),
            actual_working_days,
            total_working_days,
            amount
        ),
    });

    debug!(
        employee_id = %employee.id,
        period = %period.label,
        actual_working_days,
        total_working_days,
        amount = %amount,
        "Calculated period pay"
    );

    Ok(PeriodPayResult {
        employee_id: employee.id.clone(),
        period,
        period_salary,
        total_working_days,
        employed_range,
        actual_working_days,
        amount,
        audit_steps: steps,
    })
}
