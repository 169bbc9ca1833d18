//! Compensation breakdown calculation.
//!
//! Decomposes an annual cost-to-company figure into monthly earnings
//! components, statutory deductions (PF, ESI, professional tax, TDS),
//! employer contributions and net pay.
//!
//! Every leaf amount is rounded exactly once. Aggregates are sums of the
//! already-rounded leaves, so the displayed components always add up to the
//! displayed totals.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{SalaryTemplate, TaxConfig, validate_tax_config};
use crate::error::{EngineError, EngineResult, ensure_non_negative};
use crate::models::{
    AuditStep, AuditWarning, CompensationBreakdown, ComponentAmount, Deductions,
    EmployerContributions, NEGATIVE_NET_PAY_WARNING,
};

use super::income_tax::annual_income_tax;
use super::money::{MONTHS_PER_YEAR, percent_of, round_money};
use super::template::validate_template;

/// Computes the monthly compensation breakdown for an annual CTC.
///
/// The template must pass [`validate_template`] and the tax configuration
/// must pass [`validate_tax_config`]; the computation refuses to run
/// otherwise. A negative net salary is not an error: it is reported as a
/// [`NEGATIVE_NET_PAY_WARNING`] warning on the returned breakdown.
///
/// # Errors
///
/// - [`EngineError::NegativeInput`] if `annual_ctc` is negative
/// - [`EngineError::InvalidTemplate`] if the template percentages do not sum
///   to 100 (within tolerance)
/// - [`EngineError::InvalidConfig`] if the tax configuration is out of range
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::compute_breakdown;
/// use payroll_engine::config::{SalaryTemplate, TaxConfig};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = compute_breakdown(
///     Decimal::from_str("600000").unwrap(),
///     &SalaryTemplate::default(),
///     &TaxConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(breakdown.monthly_gross, Decimal::from_str("50000").unwrap());
/// assert_eq!(breakdown.component("basic"), Some(Decimal::from_str("25000").unwrap()));
/// // PF base is capped at the 15000 wage ceiling.
/// assert_eq!(breakdown.deductions.pf_employee, Decimal::from_str("1800").unwrap());
/// ```
pub fn compute_breakdown(
    annual_ctc: Decimal,
    template: &SalaryTemplate,
    tax: &TaxConfig,
) -> EngineResult<CompensationBreakdown> {
    ensure_non_negative("annual_ctc", annual_ctc)?;

    let template_check = validate_template(template);
    if !template_check.valid {
        warn!(
            template = %template.name,
            total_pct = %template_check.total_pct,
            "Refusing breakdown for invalid salary template"
        );
        return Err(EngineError::InvalidTemplate {
            total_pct: template_check.total_pct,
        });
    }
    validate_tax_config(tax).into_result("tax")?;

    let months = MONTHS_PER_YEAR;
    let mut steps = Vec::new();

    // Monthly gross
    let monthly_gross = round_money(annual_ctc / months);
    steps.push(AuditStep {
        step_number: 1,
        rule_id: "monthly_gross".to_string(),
        rule_name: "Monthly Gross".to_string(),
        input: serde_json::json!({ "annual_ctc": annual_ctc.normalize().to_string() }),
        output: serde_json::json!({ "monthly_gross": monthly_gross.to_string() }),
        reasoning: format!("{} / 12 = {}", annual_ctc.normalize(), monthly_gross),
    });

    // Earnings components, each computed from the unrounded monthly gross
    let earnings: Vec<ComponentAmount> = template
        .components
        .iter()
        .map(|component| ComponentAmount {
            name: component.name.clone(),
            percentage: component.percentage,
            amount: round_money(annual_ctc * component.percentage / (months * Decimal::ONE_HUNDRED)),
        })
        .collect();
    let gross_salary: Decimal = earnings.iter().map(|c| c.amount).sum();
    steps.push(AuditStep {
        step_number: 2,
        rule_id: "earnings_components".to_string(),
        rule_name: "Earnings Components".to_string(),
        input: serde_json::json!({
            "template": template.name,
            "monthly_gross": monthly_gross.to_string()
        }),
        output: serde_json::json!({
            "components": earnings
                .iter()
                .map(|c| serde_json::json!({ "name": c.name, "amount": c.amount.to_string() }))
                .collect::<Vec<_>>(),
            "gross_salary": gross_salary.to_string()
        }),
        reasoning: format!(
            "{} components summed to gross salary {}",
            earnings.len(),
            gross_salary
        ),
    });

    // Provident fund on the capped basic component
    let basic = template
        .basic()
        .and_then(|b| earnings.iter().find(|c| c.name == b.name))
        .map(|c| c.amount)
        .unwrap_or(Decimal::ZERO);
    let pf_base = basic.min(tax.pf_wage_ceiling);
    let pf_employee = round_money(percent_of(pf_base, tax.pf_employee_pct));
    let pf_employer = round_money(percent_of(pf_base, tax.pf_employer_pct));
    steps.push(AuditStep {
        step_number: 3,
        rule_id: "provident_fund".to_string(),
        rule_name: "Provident Fund".to_string(),
        input: serde_json::json!({
            "basic": basic.to_string(),
            "pf_wage_ceiling": tax.pf_wage_ceiling.normalize().to_string(),
            "pf_employee_pct": tax.pf_employee_pct.normalize().to_string(),
            "pf_employer_pct": tax.pf_employer_pct.normalize().to_string()
        }),
        output: serde_json::json!({
            "pf_base": pf_base.to_string(),
            "pf_employee": pf_employee.to_string(),
            "pf_employer": pf_employer.to_string()
        }),
        reasoning: format!(
            "PF base min({}, {}) = {}; employee {}%, employer {}%",
            basic,
            tax.pf_wage_ceiling.normalize(),
            pf_base,
            tax.pf_employee_pct.normalize(),
            tax.pf_employer_pct.normalize()
        ),
    });

    // State insurance: all or nothing at the wage ceiling
    let esi_applies = gross_salary <= tax.esi_wage_ceiling;
    let (esi_employee, esi_employer) = if esi_applies {
        (
            round_money(percent_of(gross_salary, tax.esi_employee_pct)),
            round_money(percent_of(gross_salary, tax.esi_employer_pct)),
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };
    steps.push(AuditStep {
        step_number: 4,
        rule_id: "state_insurance".to_string(),
        rule_name: "Employee State Insurance".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "esi_wage_ceiling": tax.esi_wage_ceiling.normalize().to_string()
        }),
        output: serde_json::json!({
            "applies": esi_applies,
            "esi_employee": esi_employee.to_string(),
            "esi_employer": esi_employer.to_string()
        }),
        reasoning: if esi_applies {
            format!(
                "Gross {} is within the ESI ceiling {}",
                gross_salary,
                tax.esi_wage_ceiling.normalize()
            )
        } else {
            format!(
                "Gross {} exceeds the ESI ceiling {}; no ESI",
                gross_salary,
                tax.esi_wage_ceiling.normalize()
            )
        },
    });

    let professional_tax = tax.professional_tax;
    steps.push(AuditStep {
        step_number: 5,
        rule_id: "professional_tax".to_string(),
        rule_name: "Professional Tax".to_string(),
        input: serde_json::json!({}),
        output: serde_json::json!({ "professional_tax": professional_tax.normalize().to_string() }),
        reasoning: format!("Flat monthly amount {}", professional_tax.normalize()),
    });

    // Income tax withholding
    let (tds, tds_step) = monthly_tds(gross_salary, pf_employee, tax);
    steps.push(tds_step);

    let deductions = Deductions {
        pf_employee,
        esi_employee,
        professional_tax,
        tds,
    };
    let total_deductions = deductions.total();
    let net_salary = gross_salary - total_deductions;

    let employer_contributions = EmployerContributions {
        pf_employer,
        esi_employer,
    };
    let employer_monthly_cost = monthly_gross + pf_employer + esi_employer;
    // From the exact CTC, not the rounded monthly gross.
    let annual_cost_to_company = annual_ctc + (pf_employer + esi_employer) * months;

    steps.push(AuditStep {
        step_number: 7,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "total_deductions": total_deductions.to_string()
        }),
        output: serde_json::json!({
            "net_salary": net_salary.to_string(),
            "employer_monthly_cost": employer_monthly_cost.to_string(),
            "annual_cost_to_company": annual_cost_to_company.to_string()
        }),
        reasoning: format!(
            "{} - {} = {}",
            gross_salary, total_deductions, net_salary
        ),
    });

    let mut warnings = Vec::new();
    if net_salary < Decimal::ZERO {
        warn!(
            annual_ctc = %annual_ctc,
            gross_salary = %gross_salary,
            total_deductions = %total_deductions,
            "Deductions exceed gross salary"
        );
        warnings.push(AuditWarning {
            code: NEGATIVE_NET_PAY_WARNING.to_string(),
            message: format!(
                "Deductions {} exceed gross salary {}; net pay is {}",
                total_deductions, gross_salary, net_salary
            ),
            severity: "high".to_string(),
        });
    }

    debug!(
        annual_ctc = %annual_ctc,
        gross_salary = %gross_salary,
        total_deductions = %total_deductions,
        net_salary = %net_salary,
        "Computed compensation breakdown"
    );

    Ok(CompensationBreakdown {
        annual_ctc,
        monthly_gross,
        earnings,
        gross_salary,
        deductions,
        employer_contributions,
        total_deductions,
        net_salary,
        employer_monthly_cost,
        annual_cost_to_company,
        warnings,
        audit_steps: steps,
    })
}

/// Computes monthly TDS from the annualised gross, returning the amount and
/// its audit step.
fn monthly_tds(gross_salary: Decimal, pf_employee: Decimal, tax: &TaxConfig) -> (Decimal, AuditStep) {
    let months = MONTHS_PER_YEAR;

    if !tax.tds_enabled {
        return (
            Decimal::ZERO,
            AuditStep {
                step_number: 6,
                rule_id: "income_tax".to_string(),
                rule_name: "Income Tax (TDS)".to_string(),
                input: serde_json::json!({ "tds_enabled": false }),
                output: serde_json::json!({ "tds": "0" }),
                reasoning: "TDS disabled".to_string(),
            },
        );
    }

    let taxable_income = gross_salary * months - pf_employee * months - tax.standard_deduction;
    let result = annual_income_tax(taxable_income, &tax.tax_slabs);
    let tds = round_money(result.annual_tax / months);

    let step = AuditStep {
        step_number: 6,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax (TDS)".to_string(),
        input: serde_json::json!({
            "tds_enabled": true,
            "annual_gross": (gross_salary * months).to_string(),
            "annual_pf_employee": (pf_employee * months).to_string(),
            "standard_deduction": tax.standard_deduction.normalize().to_string()
        }),
        output: serde_json::json!({
            "taxable_income": taxable_income.to_string(),
            "annual_tax": result.annual_tax.to_string(),
            "slabs": result
                .slabs
                .iter()
                .map(|s| serde_json::json!({
                    "threshold": s.threshold.normalize().to_string(),
                    "rate_pct": s.rate_pct.normalize().to_string(),
                    "tax": s.tax.to_string()
                }))
                .collect::<Vec<_>>(),
            "tds": tds.to_string()
        }),
        reasoning: format!(
            "Taxable income {} across {} slabs = annual tax {}; / 12 = {}",
            taxable_income,
            result.slabs.len(),
            result.annual_tax,
            tds
        ),
    };

    (tds, step)
}
