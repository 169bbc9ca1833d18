//! Overtime pay calculation.
//!
//! Overtime is paid per hour at a multiple of the employee's hourly rate,
//! where the hourly rate is derived from the monthly salary:
//!
//! ```text
//! hourly_rate = monthly_salary / (working_days_per_month * working_hours_per_day)
//! amount      = round2(hourly_rate * overtime_hours * overtime_multiplier)
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{SalaryCycleConfig, validate_cycle_config};
use crate::error::{EngineResult, ensure_non_negative};
use crate::models::AuditStep;

use super::money::round_money;

/// The result of an overtime calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeResult {
    /// The hourly rate derived from the monthly salary, rounded for display.
    pub hourly_rate: Decimal,
    /// The overtime hours paid.
    pub overtime_hours: Decimal,
    /// The multiplier applied to the hourly rate.
    pub multiplier: Decimal,
    /// The overtime amount, rounded to 2 decimal places.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates overtime pay for a number of overtime hours.
///
/// The amount is computed from the unrounded hourly rate, multiplying before
/// dividing, and rounded once at the end.
///
/// # Arguments
///
/// * `base_monthly_salary` - The monthly salary the hourly rate derives from
/// * `overtime_hours` - Hours of overtime worked (zero yields zero pay)
/// * `config` - The salary cycle configuration (working days, hours, multiplier)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// - [`EngineError::NegativeInput`](crate::error::EngineError::NegativeInput)
///   if `overtime_hours` is negative
/// - [`EngineError::InvalidConfig`](crate::error::EngineError::InvalidConfig)
///   if the cycle configuration is out of range
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_pay;
/// use payroll_engine::config::SalaryCycleConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 26 days x 8 hours = 208 hours; 41600 / 208 = 200 per hour.
/// let result = calculate_overtime_pay(
///     Decimal::from_str("41600").unwrap(),
///     Decimal::from_str("5").unwrap(),
///     &SalaryCycleConfig::default(),
///     1,
/// )
/// .unwrap();
///
/// assert_eq!(result.hourly_rate, Decimal::from_str("200").unwrap());
/// assert_eq!(result.amount, Decimal::from_str("2000").unwrap());
/// ```
pub fn calculate_overtime_pay(
    base_monthly_salary: Decimal,
    overtime_hours: Decimal,
    config: &SalaryCycleConfig,
    step_number: u32,
) -> EngineResult<OvertimeResult> {
    ensure_non_negative("overtime_hours", overtime_hours)?;
    validate_cycle_config(config).into_result("salary_cycle")?;

    let monthly_hours = Decimal::from(config.working_days_per_month) * config.working_hours_per_day;
    let hourly_rate = round_money(base_monthly_salary / monthly_hours);
    let amount = round_money(
        base_monthly_salary * overtime_hours * config.overtime_multiplier / monthly_hours,
    );

    let reasoning = format!(
        "{} / ({} days x {} hours) = {} per hour; {} overtime hours x {} multiplier = {}",
        base_monthly_salary.normalize(),
        config.working_days_per_month,
        config.working_hours_per_day.normalize(),
        hourly_rate,
        overtime_hours.normalize(),
        config.overtime_multiplier.normalize(),
        amount
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "base_monthly_salary": base_monthly_salary.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string(),
            "working_days_per_month": config.working_days_per_month,
            "working_hours_per_day": config.working_hours_per_day.normalize().to_string(),
            "overtime_multiplier": config.overtime_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "hourly_rate": hourly_rate.to_string(),
            "amount": amount.to_string()
        }),
        reasoning,
    };

    Ok(OvertimeResult {
        hourly_rate,
        overtime_hours,
        multiplier: config.overtime_multiplier,
        amount,
        audit_step,
    })
}
