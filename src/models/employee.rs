//! Employee tenure model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DateRange;

/// An employee as seen by the period-pay calculation: an identifier and the
/// dates their employment starts and (optionally) ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The first day of employment.
    pub joining_date: NaiveDate,
    /// The last day of employment, if the employee has exited.
    #[serde(default)]
    pub exit_date: Option<NaiveDate>,
}

impl Employee {
    /// Returns the employee's tenure as an inclusive range.
    ///
    /// An employee without an exit date is treated as employed through
    /// `NaiveDate::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     joining_date: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
    ///     exit_date: None,
    /// };
    /// assert_eq!(employee.tenure().end_date, NaiveDate::MAX);
    /// ```
    pub fn tenure(&self) -> DateRange {
        DateRange {
            start_date: self.joining_date,
            end_date: self.exit_date.unwrap_or(NaiveDate::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee_without_exit() {
        let json = r#"{"id": "emp_001", "joining_date": "2026-02-10"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(
            employee.joining_date,
            NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()
        );
        assert!(employee.exit_date.is_none());
    }

    #[test]
    fn test_tenure_uses_exit_date() {
        let employee = Employee {
            id: "emp_002".to_string(),
            joining_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            exit_date: Some(NaiveDate::from_ymd_opt(2026, 2, 20).unwrap()),
        };
        let tenure = employee.tenure();
        assert_eq!(tenure.start_date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(tenure.end_date, NaiveDate::from_ymd_opt(2026, 2, 20).unwrap());
    }
}
