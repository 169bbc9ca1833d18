//! Request types for the Payroll Calculation Engine API.
//!
//! Configuration fields are optional on most requests: when omitted, the
//! handler falls back to the configuration the server has in force. Day
//! counts are accepted as signed integers so that negative values reach the
//! engine's own validation instead of failing deserialization.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{SalaryCycleConfig, SalaryTemplate, TaxConfig};
use crate::error::{EngineResult, non_negative_days};
use crate::models::{Employee, WeeklyOffDays};

/// Request body for `POST /periods/resolve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvePeriodRequest {
    /// The date whose containing period is wanted.
    pub date: NaiveDate,
    /// Cycle to resolve against; defaults to the cycle in force.
    #[serde(default)]
    pub salary_cycle: Option<SalaryCycleConfig>,
}

/// Request body for `POST /periods/yearly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyPeriodsRequest {
    /// The calendar year to enumerate.
    pub year: i32,
    /// Cycle to enumerate; defaults to the cycle in force.
    #[serde(default)]
    pub salary_cycle: Option<SalaryCycleConfig>,
}

/// Holiday selection shared by the working-day and period-pay requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidaySelection {
    /// Explicit holiday dates. When omitted, the configured holiday
    /// calendar is used.
    #[serde(default)]
    pub holidays: Option<Vec<NaiveDate>>,
    /// Jurisdiction used to filter the configured calendar (national
    /// holidays always apply).
    #[serde(default)]
    pub jurisdiction: Option<String>,
    /// Weekly off-days as indices (0 = Sunday .. 6 = Saturday). Defaults to
    /// Saturday and Sunday.
    #[serde(default)]
    pub weekly_off_days: Option<WeeklyOffDays>,
}

/// Request body for `POST /working-days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysRequest {
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Holidays and weekly off-days to exclude.
    #[serde(flatten)]
    pub calendar: HolidaySelection,
}

/// Request body for `POST /prorate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProrateRequest {
    /// The full period salary.
    pub amount: Decimal,
    /// Working days actually employed.
    pub actual_working_days: i64,
    /// Working days in the full period.
    pub total_working_days: i64,
}

impl ProrateRequest {
    /// Returns `(actual, total)` day counts, rejecting negatives.
    pub fn day_counts(&self) -> EngineResult<(u32, u32)> {
        Ok((
            non_negative_days("actual_working_days", self.actual_working_days)?,
            non_negative_days("total_working_days", self.total_working_days)?,
        ))
    }
}

/// Request body for `POST /overtime`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// The monthly salary the hourly rate derives from.
    pub base_monthly_salary: Decimal,
    /// Hours of overtime worked.
    pub overtime_hours: Decimal,
    /// Cycle supplying working days, hours and multiplier; defaults to the
    /// cycle in force.
    #[serde(default)]
    pub salary_cycle: Option<SalaryCycleConfig>,
}

/// Request body for `POST /breakdown`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownRequest {
    /// Annual cost to company.
    pub annual_ctc: Decimal,
    /// Earnings template; defaults to the configured template.
    #[serde(default)]
    pub template: Option<SalaryTemplate>,
    /// Statutory deductions and tax slabs; defaults to the configured ones.
    #[serde(default)]
    pub tax: Option<TaxConfig>,
}

/// Employee information in a period pay request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The first day of employment.
    pub joining_date: NaiveDate,
    /// The last day of employment, if the employee has exited.
    #[serde(default)]
    pub exit_date: Option<NaiveDate>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            joining_date: req.joining_date,
            exit_date: req.exit_date,
        }
    }
}

/// Request body for `POST /period-pay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodPayRequest {
    /// The employee being paid.
    pub employee: EmployeeRequest,
    /// Any date inside the period to pay.
    pub reference_date: NaiveDate,
    /// The employee's monthly salary. The period salary is derived from it
    /// according to the cycle type.
    pub monthly_salary: Decimal,
    /// Cycle to pay against; defaults to the cycle in force.
    #[serde(default)]
    pub salary_cycle: Option<SalaryCycleConfig>,
    /// Holidays and weekly off-days to exclude.
    #[serde(flatten)]
    pub calendar: HolidaySelection,
}

/// Request body for `PUT /config/salary-cycle`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSalaryCycleRequest {
    /// Who is saving the new revision.
    pub author: String,
    /// The new salary cycle.
    pub salary_cycle: SalaryCycleConfig,
}
