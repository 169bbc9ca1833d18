//! Configuration validation.
//!
//! Validation collects every violated rule instead of stopping at the first,
//! so an administrator editing a configuration sees all problems at once.
//! A configuration that fails validation is never partially applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::types::{EndDay, SalaryCycleConfig, TaxConfig};

const MAX_DAY_OF_MONTH: u32 = 31;
const MAX_HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// The outcome of validating a configuration section.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{validate_cycle_config, SalaryCycleConfig};
///
/// let mut config = SalaryCycleConfig::default();
/// assert!(validate_cycle_config(&config).valid);
///
/// config.start_day = 0;
/// let result = validate_cycle_config(&config);
/// assert!(!result.valid);
/// assert_eq!(result.errors.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValidation {
    /// True when no rule was violated.
    pub valid: bool,
    /// One message per violated rule.
    pub errors: Vec<String>,
}

impl ConfigValidation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Converts the outcome into a result, tagging failures with `section`.
    pub fn into_result(self, section: &str) -> EngineResult<()> {
        if self.valid {
            Ok(())
        } else {
            Err(EngineError::InvalidConfig {
                section: section.to_string(),
                errors: self.errors,
            })
        }
    }
}

/// Validates a salary cycle configuration.
///
/// Rules:
/// - `start_day` is within 1–31
/// - a numeric `end_day` is within 1–31 and not before `start_day`
/// - `working_days_per_month` is within 1–31
/// - `working_hours_per_day` is within 1–24
/// - `overtime_multiplier` is at least 1
///
/// Unknown cycle types never reach this point: they are rejected when the
/// type is parsed.
pub fn validate_cycle_config(config: &SalaryCycleConfig) -> ConfigValidation {
    let mut errors = Vec::new();

    if !(1..=MAX_DAY_OF_MONTH).contains(&config.start_day) {
        errors.push(format!(
            "start_day must be between 1 and 31, got {}",
            config.start_day
        ));
    }

    if let EndDay::Day(end_day) = config.end_day {
        if !(1..=MAX_DAY_OF_MONTH).contains(&end_day) {
            errors.push(format!(
                "end_day must be \"last\" or between 1 and 31, got {}",
                end_day
            ));
        } else if end_day < config.start_day {
            errors.push(format!(
                "end_day {} is before start_day {}",
                end_day, config.start_day
            ));
        }
    }

    if !(1..=MAX_DAY_OF_MONTH).contains(&config.working_days_per_month) {
        errors.push(format!(
            "working_days_per_month must be between 1 and 31, got {}",
            config.working_days_per_month
        ));
    }

    if config.working_hours_per_day < Decimal::ONE
        || config.working_hours_per_day > MAX_HOURS_PER_DAY
    {
        errors.push(format!(
            "working_hours_per_day must be between 1 and 24, got {}",
            config.working_hours_per_day.normalize()
        ));
    }

    if config.overtime_multiplier < Decimal::ONE {
        errors.push(format!(
            "overtime_multiplier must be at least 1, got {}",
            config.overtime_multiplier.normalize()
        ));
    }

    ConfigValidation::from_errors(errors)
}

/// Validates a tax configuration.
///
/// Rules:
/// - every percentage is within 0–100
/// - wage ceilings, professional tax and the standard deduction are non-negative
/// - slab thresholds are non-negative and strictly ascending
/// - slab rates are within 0–100
pub fn validate_tax_config(config: &TaxConfig) -> ConfigValidation {
    let mut errors = Vec::new();

    let percentages = [
        ("pf_employee_pct", config.pf_employee_pct),
        ("pf_employer_pct", config.pf_employer_pct),
        ("esi_employee_pct", config.esi_employee_pct),
        ("esi_employer_pct", config.esi_employer_pct),
    ];
    for (field, value) in percentages {
        if !is_percentage(value) {
            errors.push(format!(
                "{} must be between 0 and 100, got {}",
                field,
                value.normalize()
            ));
        }
    }

    let amounts = [
        ("pf_wage_ceiling", config.pf_wage_ceiling),
        ("esi_wage_ceiling", config.esi_wage_ceiling),
        ("professional_tax", config.professional_tax),
        ("standard_deduction", config.standard_deduction),
    ];
    for (field, value) in amounts {
        if value < Decimal::ZERO {
            errors.push(format!(
                "{} must not be negative, got {}",
                field,
                value.normalize()
            ));
        }
    }

    for (index, slab) in config.tax_slabs.iter().enumerate() {
        if slab.threshold < Decimal::ZERO {
            errors.push(format!(
                "tax_slabs[{}].threshold must not be negative, got {}",
                index,
                slab.threshold.normalize()
            ));
        }
        if !is_percentage(slab.rate_pct) {
            errors.push(format!(
                "tax_slabs[{}].rate_pct must be between 0 and 100, got {}",
                index,
                slab.rate_pct.normalize()
            ));
        }
    }

    for (index, pair) in config.tax_slabs.windows(2).enumerate() {
        if pair[1].threshold <= pair[0].threshold {
            errors.push(format!(
                "tax_slabs must be sorted ascending by threshold: slab {} ({}) does not exceed slab {} ({})",
                index + 1,
                pair[1].threshold.normalize(),
                index,
                pair[0].threshold.normalize()
            ));
        }
    }

    ConfigValidation::from_errors(errors)
}

fn is_percentage(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED
}
