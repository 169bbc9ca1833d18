//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::validate_template;
use crate::error::{EngineError, EngineResult};
use crate::models::Holiday;

use super::types::{HolidaysConfig, PayrollConfig, SalaryCycleConfig, SalaryTemplate, TaxConfig};
use super::validation::{validate_cycle_config, validate_tax_config};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates them, and exposes an immutable [`PayrollConfig`] snapshot.
/// Load once per batch; nothing is re-read mid-computation.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── salary_cycle.yaml   # Salary cycle definition
/// ├── tax.yaml            # Statutory deductions and tax slabs
/// ├── template.yaml       # Earnings template (percentages)
/// └── holidays.yaml       # Holiday calendar
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Cycle type: {}", loader.config().salary_cycle().cycle_type);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML or an unknown cycle type
    /// - The salary cycle or tax configuration fails validation
    /// - The salary template's percentages do not sum to 100
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let salary_cycle = Self::load_yaml::<SalaryCycleConfig>(&path.join("salary_cycle.yaml"))?;
        let tax = Self::load_yaml::<TaxConfig>(&path.join("tax.yaml"))?;
        let template = Self::load_yaml::<SalaryTemplate>(&path.join("template.yaml"))?;
        let holidays = Self::load_yaml::<HolidaysConfig>(&path.join("holidays.yaml"))?;

        let loader = Self::from_parts(salary_cycle, tax, template, holidays.holidays)?;
        debug!(
            path = %path.display(),
            cycle_type = %loader.config.salary_cycle().cycle_type,
            holidays = loader.config.holidays().len(),
            "Loaded payroll configuration"
        );
        Ok(loader)
    }

    /// Builds a loader from already-parsed parts, applying the same
    /// validation as [`ConfigLoader::load`].
    pub fn from_parts(
        salary_cycle: SalaryCycleConfig,
        tax: TaxConfig,
        template: SalaryTemplate,
        holidays: Vec<Holiday>,
    ) -> EngineResult<Self> {
        validate_cycle_config(&salary_cycle).into_result("salary_cycle")?;
        validate_tax_config(&tax).into_result("tax")?;

        let template_check = validate_template(&template);
        if !template_check.valid {
            return Err(EngineError::InvalidTemplate {
                total_pct: template_check.total_pct,
            });
        }

        Ok(Self {
            config: PayrollConfig::new(salary_cycle, tax, template, holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the payroll configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
