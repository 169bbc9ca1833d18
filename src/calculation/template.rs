//! Salary template validation.
//!
//! A template may only drive a compensation breakdown once its component
//! percentages sum to 100 within [`TEMPLATE_TOLERANCE_PCT`]. Percentages are
//! never normalized on the caller's behalf.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SalaryTemplate;

/// Allowed deviation of a template's percentage sum from 100.
pub const TEMPLATE_TOLERANCE_PCT: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// The outcome of validating a salary template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateValidation {
    /// True when the percentages sum to 100 within tolerance.
    pub valid: bool,
    /// The actual sum of the component percentages.
    pub total_pct: Decimal,
}

/// Validates that a template's percentages sum to 100 (± 0.1).
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::validate_template;
/// use payroll_engine::config::SalaryTemplate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let template = SalaryTemplate::from_pairs(
///     "rounded",
///     &[("basic", Decimal::from_str("33.33").unwrap()),
///       ("hra", Decimal::from_str("33.33").unwrap()),
///       ("special", Decimal::from_str("33.33").unwrap())],
/// );
/// let result = validate_template(&template);
/// assert!(result.valid);
/// assert_eq!(result.total_pct, Decimal::from_str("99.99").unwrap());
/// ```
pub fn validate_template(template: &SalaryTemplate) -> TemplateValidation {
    let total_pct = template.total_percentage();
    let valid = (total_pct - Decimal::ONE_HUNDRED).abs() <= TEMPLATE_TOLERANCE_PCT;
    TemplateValidation { valid, total_pct }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn template(pcts: &[&str]) -> SalaryTemplate {
        let names = ["basic", "hra", "special", "conveyance", "medical"];
        let pairs: Vec<(&str, Decimal)> = pcts
            .iter()
            .enumerate()
            .map(|(i, pct)| (names[i], dec(pct)))
            .collect();
        SalaryTemplate::from_pairs("test", &pairs)
    }

    #[test]
    fn test_exact_hundred_is_valid() {
        let result = validate_template(&template(&["50", "20", "30"]));
        assert!(result.valid);
        assert_eq!(result.total_pct, dec("100"));
    }

    #[test]
    fn test_tolerance_boundaries_inclusive() {
        assert!(validate_template(&template(&["50", "20", "29.9"])).valid);
        assert!(validate_template(&template(&["50", "20", "30.1"])).valid);
    }

    #[test]
    fn test_outside_tolerance_is_invalid() {
        let low = validate_template(&template(&["50", "20", "29.89"]));
        assert!(!low.valid);
        assert_eq!(low.total_pct, dec("99.89"));

        let high = validate_template(&template(&["50", "20", "30.11"]));
        assert!(!high.valid);
    }

    #[test]
    fn test_empty_template_is_invalid() {
        let result = validate_template(&SalaryTemplate::from_pairs("empty", &[]));
        assert!(!result.valid);
        assert_eq!(result.total_pct, Decimal::ZERO);
    }

    #[test]
    fn test_tolerance_constant() {
        assert_eq!(TEMPLATE_TOLERANCE_PCT, dec("0.1"));
    }
}
