//! Application state for the Payroll Calculation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::config::{ConfigHistory, ConfigLoader, SalaryCycleConfig};
use crate::models::holiday_dates;

/// Author recorded on the salary cycle revision loaded at startup.
pub const SYSTEM_AUTHOR: &str = "system";

/// Shared application state.
///
/// Holds the payroll configuration loaded at startup and the versioned
/// salary cycle history that `PUT /config/salary-cycle` appends to.
#[derive(Clone)]
pub struct AppState {
    /// The loaded payroll configuration.
    config: Arc<ConfigLoader>,
    /// Saved salary cycle revisions; the latest is the one in force.
    salary_cycle: Arc<RwLock<ConfigHistory<SalaryCycleConfig>>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    ///
    /// The loaded salary cycle becomes revision 1 of the history.
    pub fn new(config: ConfigLoader) -> Self {
        let history = ConfigHistory::new(
            config.config().salary_cycle().clone(),
            SYSTEM_AUTHOR,
            Utc::now(),
        );
        Self {
            config: Arc::new(config),
            salary_cycle: Arc::new(RwLock::new(history)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the salary cycle history.
    pub fn salary_cycle_history(&self) -> &RwLock<ConfigHistory<SalaryCycleConfig>> {
        &self.salary_cycle
    }

    /// Returns a copy of the salary cycle currently in force.
    pub async fn current_salary_cycle(&self) -> SalaryCycleConfig {
        self.salary_cycle.read().await.current().clone()
    }

    /// Returns the configured holiday dates for a jurisdiction (all
    /// configured holidays when `jurisdiction` is `None`).
    pub fn holiday_dates(&self, jurisdiction: Option<&str>) -> HashSet<NaiveDate> {
        holiday_dates(self.config.config().holidays(), jurisdiction)
    }
}
