//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every out-of-contract input the engine rejects. Conditions that are
//! normal payroll outcomes (zero overlap with a cycle, ESI ceiling exceeded,
//! negative net pay) are not errors and never appear here.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Payroll Calculation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tax.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tax.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file or value could not be parsed.
    #[error("Failed to parse configuration '{path}': {message}")]
    ConfigParseError {
        /// The path (or field) that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration section failed validation.
    ///
    /// Every violated rule is reported, so callers can surface them all at once.
    #[error("Invalid {section} configuration: {}", .errors.join("; "))]
    InvalidConfig {
        /// The configuration section (e.g. "salary_cycle", "tax").
        section: String,
        /// One message per violated rule.
        errors: Vec<String>,
    },

    /// A salary template's percentages do not sum to 100 within tolerance.
    #[error("Salary template percentages sum to {total_pct}%, expected 100%")]
    InvalidTemplate {
        /// The actual sum of the template percentages.
        total_pct: Decimal,
    },

    /// A negative value was supplied where only non-negative input is allowed.
    #[error("Negative value for '{field}': {value}")]
    NegativeInput {
        /// The name of the offending input.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Builds a [`EngineError::NegativeInput`] for the named field.
    pub fn negative_input(field: impl Into<String>, value: impl Into<Decimal>) -> Self {
        EngineError::NegativeInput {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns true for errors caused by caller-supplied input rather than
    /// by the engine's own configuration files.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidConfig { .. }
                | EngineError::InvalidTemplate { .. }
                | EngineError::NegativeInput { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Rejects a negative value for the named field.
///
/// Returns the value unchanged when it is zero or positive.
pub fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::negative_input(field, value));
    }
    Ok(value)
}

/// Converts a signed day count supplied at a boundary into the engine's
/// unsigned representation, rejecting negatives.
pub fn non_negative_days(field: &str, value: i64) -> EngineResult<u32> {
    if value < 0 {
        return Err(EngineError::negative_input(field, value));
    }
    u32::try_from(value).map_err(|_| EngineError::CalculationError {
        message: format!("'{}' is too large: {}", field, value),
    })
}
