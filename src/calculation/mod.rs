//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains the pure calculation functions: calendar math,
//! working-day counting, salary cycle resolution, pro-rata salary,
//! overtime pay, progressive income tax, compensation breakdown, salary
//! template validation, and the period pay orchestration that ties them
//! together.

mod breakdown;
mod calendar;
mod cycle;
mod income_tax;
mod money;
mod overtime;
mod period_pay;
mod pro_rata;
mod template;
mod working_days;

pub use breakdown::compute_breakdown;
pub use calendar::{date_range, days_in_month, is_weekend, last_day_of_month};
pub use cycle::{
    BI_WEEKLY_DAYS, SEMI_MONTHLY_SPLIT_DAY, WEEKLY_DAYS, resolve_period, yearly_periods,
};
pub use income_tax::{IncomeTaxResult, SlabTax, annual_income_tax};
pub use money::{MONEY_DECIMAL_PLACES, MONTHS_PER_YEAR, percent_of, round_money};
pub use overtime::{OvertimeResult, calculate_overtime_pay};
pub use period_pay::{PeriodPayResult, calculate_period_pay};
pub use pro_rata::{mid_cycle_period, period_salary, prorate};
pub use template::{TEMPLATE_TOLERANCE_PCT, TemplateValidation, validate_template};
pub use working_days::count_working_days;
