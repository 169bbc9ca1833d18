//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module provides the typed configuration objects every calculation
//! takes as explicit input (salary cycle, tax rules, salary template and the
//! holiday calendar), their validation, YAML loading, and an append-only
//! revision history for administrators' edits.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap().into_config();
//! println!("Template: {}", config.template().name);
//! ```

mod history;
mod loader;
mod types;
mod validation;

pub use history::{ConfigHistory, ConfigRevision};
pub use loader::ConfigLoader;
pub use types::{
    BASIC_COMPONENT, CycleType, DEFAULT_STANDARD_DEDUCTION, EndDay, HolidaysConfig, PayrollConfig,
    SalaryCycleConfig, SalaryTemplate, TaxConfig, TaxSlab, TemplateComponent,
};
pub use validation::{ConfigValidation, validate_cycle_config, validate_tax_config};
