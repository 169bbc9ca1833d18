//! Audit models for the Payroll Calculation Engine.
//!
//! Every figure the engine produces can be traced back through a sequence of
//! [`AuditStep`]s. Non-fatal conditions the caller must review are reported as
//! [`AuditWarning`]s rather than errors.

use serde::{Deserialize, Serialize};

/// Warning code attached when deductions exceed gross salary.
pub const NEGATIVE_NET_PAY_WARNING: &str = "NEGATIVE_NET_PAY";

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "monthly_gross".to_string(),
///     rule_name: "Monthly Gross".to_string(),
///     input: serde_json::json!({"annual_ctc": "600000"}),
///     output: serde_json::json!({"monthly_gross": "50000"}),
///     reasoning: "600000 / 12 = 50000".to_string(),
/// };
/// assert_eq!(step.rule_id, "monthly_gross");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention, such as negative net pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "provident_fund".to_string(),
            rule_name: "Provident Fund".to_string(),
            input: serde_json::json!({"basic": "25000"}),
            output: serde_json::json!({"pf_employee": "1800.00"}),
            reasoning: "PF base capped at wage ceiling".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"provident_fund\""));
        assert!(json.contains("\"rule_name\":\"Provident Fund\""));
    }

    #[test]
    fn test_audit_warning_round_trip() {
        let warning = AuditWarning {
            code: NEGATIVE_NET_PAY_WARNING.to_string(),
            message: "Deductions exceed gross salary".to_string(),
            severity: "high".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"NEGATIVE_NET_PAY\""));

        let back: AuditWarning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, warning);
    }
}
