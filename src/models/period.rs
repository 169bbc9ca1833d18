//! Salary periods, date ranges and holidays.
//!
//! This module contains the [`Period`] produced by cycle resolution, the
//! [`DateRange`] used when clipping an employee's tenure to a cycle, and the
//! [`Holiday`] reference data supplied by callers.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Jurisdiction tag for holidays observed everywhere.
pub const NATIONAL_JURISDICTION: &str = "national";

/// A concrete salary period with an inclusive date range and a display label.
///
/// Periods are produced by cycle resolution and never mutated.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let period = Period {
///     start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
///     label: "February 2026".to_string(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()));
/// assert_eq!(period.calendar_days(), 28);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Human-readable label, e.g. "February 2026".
    pub label: String,
}

impl Period {
    /// Checks if a given date falls within this period (inclusive on both ends).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of calendar days in the period.
    pub fn calendar_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Returns the period's dates as a [`DateRange`].
    pub fn range(&self) -> DateRange {
        DateRange {
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// An inclusive date range without a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Returns true if the range contains no days (`start_date > end_date`).
    pub fn is_empty(&self) -> bool {
        self.start_date > self.end_date
    }
}

/// A holiday observed in one jurisdiction (or nationally).
///
/// # Example
///
/// ```
/// use payroll_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     name: "Republic Day".to_string(),
///     jurisdiction: "national".to_string(),
/// };
/// assert!(holiday.applies_to("KA"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// Where the holiday applies ("national", or a region code).
    #[serde(default = "default_jurisdiction")]
    pub jurisdiction: String,
}

fn default_jurisdiction() -> String {
    NATIONAL_JURISDICTION.to_string()
}

impl Holiday {
    /// Returns true if this holiday is observed in the given jurisdiction.
    pub fn applies_to(&self, jurisdiction: &str) -> bool {
        self.jurisdiction == NATIONAL_JURISDICTION || self.jurisdiction == jurisdiction
    }
}

/// Collects the holiday dates observed in a jurisdiction.
///
/// With `None`, every holiday's date is included.
pub fn holiday_dates(holidays: &[Holiday], jurisdiction: Option<&str>) -> HashSet<NaiveDate> {
    holidays
        .iter()
        .filter(|h| jurisdiction.is_none_or(|j| h.applies_to(j)))
        .map(|h| h.date)
        .collect()
}
