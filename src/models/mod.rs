//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod breakdown;
mod employee;
mod period;
mod weekly_off;

pub use audit::{AuditStep, AuditWarning, NEGATIVE_NET_PAY_WARNING};
pub use breakdown::{CompensationBreakdown, ComponentAmount, Deductions, EmployerContributions};
pub use employee::Employee;
pub use period::{DateRange, Holiday, NATIONAL_JURISDICTION, Period, holiday_dates};
pub use weekly_off::WeeklyOffDays;
