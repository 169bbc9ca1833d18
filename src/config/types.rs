//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files or request bodies.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::Holiday;

/// The name of the template component provident fund is computed on.
pub const BASIC_COMPONENT: &str = "basic";

/// Standard deduction applied to annual taxable income when none is configured.
pub const DEFAULT_STANDARD_DEDUCTION: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// The recurring pay-period definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CycleType {
    /// One period per calendar month, bounded by the configured start/end days.
    Monthly,
    /// Two periods per month: days 1–15 and 16–end of month.
    SemiMonthly,
    /// Fourteen-day periods anchored on January 1 of each year.
    BiWeekly,
    /// Seven-day periods starting on Monday.
    Weekly,
}

impl CycleType {
    /// Returns the canonical snake_case name of the cycle type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleType::Monthly => "monthly",
            CycleType::SemiMonthly => "semi_monthly",
            CycleType::BiWeekly => "bi_weekly",
            CycleType::Weekly => "weekly",
        }
    }
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CycleType {
    type Err = EngineError;

    /// Parses a cycle type, accepting snake_case, kebab-case or run-together
    /// spellings in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "monthly" => Ok(CycleType::Monthly),
            "semimonthly" => Ok(CycleType::SemiMonthly),
            "biweekly" => Ok(CycleType::BiWeekly),
            "weekly" => Ok(CycleType::Weekly),
            _ => Err(EngineError::ConfigParseError {
                path: "type".to_string(),
                message: format!(
                    "unknown cycle type '{}' (expected monthly, semi_monthly, bi_weekly or weekly)",
                    s
                ),
            }),
        }
    }
}

impl TryFrom<String> for CycleType {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CycleType> for String {
    fn from(cycle_type: CycleType) -> Self {
        cycle_type.as_str().to_string()
    }
}

/// The last day of a monthly period: either the month's last calendar day
/// or a fixed day number (clamped to the month's length).
///
/// Serialized as the string `"last"` or an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EndDayRepr", into = "EndDayRepr")]
pub enum EndDay {
    /// The last calendar day of the month.
    Last,
    /// A fixed day of the month.
    Day(u32),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum EndDayRepr {
    Day(u32),
    Keyword(String),
}

impl TryFrom<EndDayRepr> for EndDay {
    type Error = String;

    fn try_from(repr: EndDayRepr) -> Result<Self, Self::Error> {
        match repr {
            EndDayRepr::Day(day) => Ok(EndDay::Day(day)),
            EndDayRepr::Keyword(word) if word.trim().eq_ignore_ascii_case("last") => {
                Ok(EndDay::Last)
            }
            EndDayRepr::Keyword(word) => word
                .trim()
                .parse::<u32>()
                .map(EndDay::Day)
                .map_err(|_| format!("end_day must be \"last\" or a day number, got '{}'", word)),
        }
    }
}

impl From<EndDay> for EndDayRepr {
    fn from(end_day: EndDay) -> Self {
        match end_day {
            EndDay::Last => EndDayRepr::Keyword("last".to_string()),
            EndDay::Day(day) => EndDayRepr::Day(day),
        }
    }
}

/// Salary cycle configuration.
///
/// `start_day` and `end_day` only affect [`CycleType::Monthly`]; the other
/// cycle types derive their boundaries from the reference date.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{CycleType, EndDay, SalaryCycleConfig};
///
/// let config = SalaryCycleConfig::default();
/// assert_eq!(config.cycle_type, CycleType::Monthly);
/// assert_eq!(config.start_day, 1);
/// assert_eq!(config.end_day, EndDay::Last);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCycleConfig {
    /// The cycle type.
    #[serde(rename = "type")]
    pub cycle_type: CycleType,
    /// First day of a monthly period (1–31).
    pub start_day: u32,
    /// Last day of a monthly period.
    pub end_day: EndDay,
    /// Working days per month used to derive hourly rates (1–31).
    pub working_days_per_month: u32,
    /// Working hours per day used to derive hourly rates (1–24).
    pub working_hours_per_day: Decimal,
    /// Multiplier applied to the hourly rate for overtime (at least 1).
    pub overtime_multiplier: Decimal,
}

impl Default for SalaryCycleConfig {
    fn default() -> Self {
        Self {
            cycle_type: CycleType::Monthly,
            start_day: 1,
            end_day: EndDay::Last,
            working_days_per_month: 26,
            working_hours_per_day: Decimal::from(8),
            overtime_multiplier: Decimal::TWO,
        }
    }
}

/// One progressive income-tax slab.
///
/// `rate_pct` applies to the part of annual taxable income above `threshold`
/// and below the next slab's threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    /// Annual income above which this slab's rate applies.
    pub threshold: Decimal,
    /// Marginal rate in percent.
    pub rate_pct: Decimal,
}

/// Statutory deduction and income-tax configuration.
///
/// The default slabs are illustrative parameters, not legal truth for any
/// jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Employee provident-fund rate in percent.
    pub pf_employee_pct: Decimal,
    /// Employer provident-fund rate in percent.
    pub pf_employer_pct: Decimal,
    /// Monthly basic salary above which PF is not levied.
    pub pf_wage_ceiling: Decimal,
    /// Employee state-insurance rate in percent.
    pub esi_employee_pct: Decimal,
    /// Employer state-insurance rate in percent.
    pub esi_employer_pct: Decimal,
    /// Monthly gross at or below which ESI applies.
    pub esi_wage_ceiling: Decimal,
    /// Flat monthly professional tax.
    pub professional_tax: Decimal,
    /// Whether income tax is withheld at source.
    pub tds_enabled: bool,
    /// Deduction subtracted from annual income before applying slabs.
    #[serde(default = "default_standard_deduction")]
    pub standard_deduction: Decimal,
    /// Progressive slabs sorted ascending by threshold.
    #[serde(default)]
    pub tax_slabs: Vec<TaxSlab>,
}

fn default_standard_deduction() -> Decimal {
    DEFAULT_STANDARD_DEDUCTION
}

impl Default for TaxConfig {
    fn default() -> Self {
        let slab = |threshold: i64, rate_pct: i64| TaxSlab {
            threshold: Decimal::from(threshold),
            rate_pct: Decimal::from(rate_pct),
        };
        Self {
            pf_employee_pct: Decimal::from(12),
            pf_employer_pct: Decimal::from(12),
            pf_wage_ceiling: Decimal::from(15_000),
            esi_employee_pct: Decimal::new(75, 2),
            esi_employer_pct: Decimal::new(325, 2),
            esi_wage_ceiling: Decimal::from(21_000),
            professional_tax: Decimal::from(200),
            tds_enabled: true,
            standard_deduction: DEFAULT_STANDARD_DEDUCTION,
            tax_slabs: vec![
                slab(0, 0),
                slab(300_000, 5),
                slab(700_000, 10),
                slab(1_000_000, 15),
                slab(1_200_000, 20),
                slab(1_500_000, 30),
            ],
        }
    }
}

/// One percentage-based earnings component of a salary template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateComponent {
    /// Component name, e.g. "basic", "hra", "special".
    pub name: String,
    /// Share of monthly gross in percent.
    pub percentage: Decimal,
}

/// An ordered list of earnings components whose percentages must sum to 100.
///
/// # Example
///
/// ```
/// use payroll_engine::config::SalaryTemplate;
/// use rust_decimal::Decimal;
///
/// let template = SalaryTemplate::from_pairs(
///     "standard",
///     &[("basic", Decimal::from(50)), ("hra", Decimal::from(20)), ("special", Decimal::from(30))],
/// );
/// assert_eq!(template.total_percentage(), Decimal::from(100));
/// assert_eq!(template.basic().unwrap().percentage, Decimal::from(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTemplate {
    /// Display name of the template.
    #[serde(default)]
    pub name: String,
    /// Earnings components in display order.
    pub components: Vec<TemplateComponent>,
}

impl SalaryTemplate {
    /// Builds a template from `(name, percentage)` pairs.
    pub fn from_pairs(name: &str, pairs: &[(&str, Decimal)]) -> Self {
        Self {
            name: name.to_string(),
            components: pairs
                .iter()
                .map(|(component, percentage)| TemplateComponent {
                    name: component.to_string(),
                    percentage: *percentage,
                })
                .collect(),
        }
    }

    /// Returns the sum of all component percentages.
    pub fn total_percentage(&self) -> Decimal {
        self.components.iter().map(|c| c.percentage).sum()
    }

    /// Returns the basic-salary component, matched case-insensitively.
    pub fn basic(&self) -> Option<&TemplateComponent> {
        self.components
            .iter()
            .find(|c| c.name.trim().eq_ignore_ascii_case(BASIC_COMPONENT))
    }
}

impl Default for SalaryTemplate {
    fn default() -> Self {
        Self::from_pairs(
            "standard",
            &[
                (BASIC_COMPONENT, Decimal::from(50)),
                ("hra", Decimal::from(20)),
                ("special", Decimal::from(30)),
            ],
        )
    }
}

/// Holidays file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidaysConfig {
    /// The holiday calendar.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// The complete payroll configuration for one batch of computations.
///
/// A `PayrollConfig` is an immutable snapshot: every employee in a batch is
/// evaluated against the same rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollConfig {
    salary_cycle: SalaryCycleConfig,
    tax: TaxConfig,
    template: SalaryTemplate,
    holidays: Vec<Holiday>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    ///
    /// Holidays are sorted by date.
    pub fn new(
        salary_cycle: SalaryCycleConfig,
        tax: TaxConfig,
        template: SalaryTemplate,
        holidays: Vec<Holiday>,
    ) -> Self {
        let mut sorted_holidays = holidays;
        sorted_holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Self {
            salary_cycle,
            tax,
            template,
            holidays: sorted_holidays,
        }
    }

    /// Returns the salary cycle configuration.
    pub fn salary_cycle(&self) -> &SalaryCycleConfig {
        &self.salary_cycle
    }

    /// Returns the tax configuration.
    pub fn tax(&self) -> &TaxConfig {
        &self.tax
    }

    /// Returns the salary template.
    pub fn template(&self) -> &SalaryTemplate {
        &self.template
    }

    /// Returns the holiday calendar, sorted by date.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self::new(
            SalaryCycleConfig::default(),
            TaxConfig::default(),
            SalaryTemplate::default(),
            Vec::new(),
        )
    }
}
