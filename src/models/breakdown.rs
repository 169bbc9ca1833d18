//! Compensation breakdown models.
//!
//! This module contains the [`CompensationBreakdown`] produced by the breakdown
//! engine: a monthly decomposition of an annual cost-to-company figure into
//! earnings components, statutory deductions, employer contributions and
//! net pay. A breakdown is a pure output value and is never mutated after
//! creation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditStep, AuditWarning, NEGATIVE_NET_PAY_WARNING};

/// The monthly amount of one earnings component.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ComponentAmount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let basic = ComponentAmount {
///     name: "basic".to_string(),
///     percentage: Decimal::from_str("50").unwrap(),
///     amount: Decimal::from_str("25000.00").unwrap(),
/// };
/// assert_eq!(basic.name, "basic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentAmount {
    /// The component name from the salary template (e.g. "basic", "hra").
    pub name: String,
    /// The component's share of monthly gross, in percent.
    pub percentage: Decimal,
    /// The monthly amount, rounded to 2 decimal places.
    pub amount: Decimal,
}

/// Employee-side monthly deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Employee provident-fund contribution.
    pub pf_employee: Decimal,
    /// Employee state-insurance contribution (zero above the ESI ceiling).
    pub esi_employee: Decimal,
    /// Flat monthly professional tax.
    pub professional_tax: Decimal,
    /// Monthly income-tax withholding.
    pub tds: Decimal,
}

impl Deductions {
    /// Returns the sum of all employee-side deductions.
    pub fn total(&self) -> Decimal {
        self.pf_employee + self.esi_employee + self.professional_tax + self.tds
    }
}

/// Employer-side monthly statutory contributions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// Employer provident-fund contribution.
    pub pf_employer: Decimal,
    /// Employer state-insurance contribution (zero above the ESI ceiling).
    pub esi_employer: Decimal,
}

/// The complete monthly breakdown of an annual compensation figure.
///
/// Invariants:
/// - `gross_salary` is exactly the sum of `earnings` amounts.
/// - `total_deductions` is exactly `deductions.total()`.
/// - `net_salary == gross_salary - total_deductions`; a negative value is
///   reported in `warnings`, never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationBreakdown {
    /// The annual CTC the breakdown was computed from.
    pub annual_ctc: Decimal,
    /// `annual_ctc / 12`, rounded to 2 decimal places.
    pub monthly_gross: Decimal,
    /// Monthly earnings per template component, in template order.
    pub earnings: Vec<ComponentAmount>,
    /// Sum of the rounded earnings components.
    pub gross_salary: Decimal,
    /// Employee-side deductions.
    pub deductions: Deductions,
    /// Employer-side contributions.
    pub employer_contributions: EmployerContributions,
    /// Sum of employee-side deductions.
    pub total_deductions: Decimal,
    /// Gross salary less total deductions.
    pub net_salary: Decimal,
    /// Monthly gross plus employer contributions.
    pub employer_monthly_cost: Decimal,
    /// Annual CTC plus twelve months of employer contributions.
    pub annual_cost_to_company: Decimal,
    /// Non-fatal conditions the caller should review.
    pub warnings: Vec<AuditWarning>,
    /// The audit trail of the computation.
    pub audit_steps: Vec<AuditStep>,
}

impl CompensationBreakdown {
    /// Returns the monthly amount of the named earnings component.
    ///
    /// Names are matched case-insensitively.
    pub fn component(&self, name: &str) -> Option<Decimal> {
        self.earnings
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.amount)
    }

    /// Returns true if the net salary came out negative.
    pub fn has_negative_net_pay(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| w.code == NEGATIVE_NET_PAY_WARNING)
    }
}
