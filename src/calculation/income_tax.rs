//! Progressive income tax.
//!
//! Slabs are tagged data, not code: each [`TaxSlab`] taxes the slice of
//! income between its own threshold and the next slab's threshold at its
//! marginal rate. The walk runs from the top slab down, peeling off the
//! income above each threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TaxSlab;

use super::money::percent_of;

/// The tax contributed by one slab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabTax {
    /// The slab's threshold.
    pub threshold: Decimal,
    /// The slab's marginal rate in percent.
    pub rate_pct: Decimal,
    /// The income taxed within this slab.
    pub taxed_income: Decimal,
    /// The tax on that income, unrounded.
    pub tax: Decimal,
}

/// The result of applying progressive slabs to an annual taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxResult {
    /// The annual taxable income the slabs were applied to.
    pub taxable_income: Decimal,
    /// Total annual tax, unrounded.
    pub annual_tax: Decimal,
    /// Per-slab contributions, lowest slab first. Slabs the income does not
    /// reach are omitted.
    pub slabs: Vec<SlabTax>,
}

/// Applies progressive tax slabs to an annual taxable income.
///
/// `slabs` must be sorted ascending by threshold. Income at or below zero
/// yields zero tax: tax is never negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::annual_income_tax;
/// use payroll_engine::config::TaxSlab;
/// use rust_decimal::Decimal;
///
/// let slabs = vec![
///     TaxSlab { threshold: Decimal::from(300_000), rate_pct: Decimal::from(5) },
///     TaxSlab { threshold: Decimal::from(700_000), rate_pct: Decimal::from(10) },
/// ];
///
/// // 5% of 400000 + 10% of 100000
/// let result = annual_income_tax(Decimal::from(800_000), &slabs);
/// assert_eq!(result.annual_tax, Decimal::from(30_000));
/// ```
pub fn annual_income_tax(taxable_income: Decimal, slabs: &[TaxSlab]) -> IncomeTaxResult {
    let mut contributions = Vec::new();
    let mut remaining = taxable_income;

    for slab in slabs.iter().rev() {
        if remaining > slab.threshold {
            let taxed_income = remaining - slab.threshold;
            contributions.push(SlabTax {
                threshold: slab.threshold,
                rate_pct: slab.rate_pct,
                taxed_income,
                tax: percent_of(taxed_income, slab.rate_pct),
            });
            remaining = slab.threshold;
        }
    }
    contributions.reverse();

    let annual_tax = contributions
        .iter()
        .map(|c| c.tax)
        .sum::<Decimal>()
        .max(Decimal::ZERO);

    IncomeTaxResult {
        taxable_income,
        annual_tax,
        slabs: contributions,
    }
}
