//! Versioned configuration history.
//!
//! Every save of a configuration appends an immutable [`ConfigRevision`]
//! recording who saved it and when. Earlier revisions are never modified,
//! so a payroll run can always be explained against the rules in force at
//! the time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One saved version of a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigRevision<T> {
    /// Sequential version number, starting at 1.
    pub version: u32,
    /// When this version was saved.
    pub saved_at: DateTime<Utc>,
    /// Who saved this version.
    pub author: String,
    /// The configuration as saved.
    pub config: T,
}

/// An append-only list of configuration revisions.
///
/// A deserialized history must hold at least one revision, numbered 1, 2, 3
/// and so on.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{ConfigHistory, SalaryCycleConfig};
/// use chrono::Utc;
///
/// let mut history = ConfigHistory::new(SalaryCycleConfig::default(), "system", Utc::now());
///
/// let mut edited = SalaryCycleConfig::default();
/// edited.working_days_per_month = 22;
/// history.record(edited, "admin@example.com", Utc::now());
///
/// assert_eq!(history.latest().version, 2);
/// assert_eq!(history.current().working_days_per_month, 22);
/// assert_eq!(history.revision(1).unwrap().config.working_days_per_month, 26);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawHistory<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct ConfigHistory<T> {
    revisions: Vec<ConfigRevision<T>>,
}

#[derive(Deserialize)]
struct RawHistory<T> {
    revisions: Vec<ConfigRevision<T>>,
}

impl<T> TryFrom<RawHistory<T>> for ConfigHistory<T> {
    type Error = String;

    fn try_from(raw: RawHistory<T>) -> Result<Self, Self::Error> {
        if raw.revisions.is_empty() {
            return Err("configuration history must contain at least one revision".to_string());
        }
        for (index, revision) in raw.revisions.iter().enumerate() {
            let expected = index as u32 + 1;
            if revision.version != expected {
                return Err(format!(
                    "revision {} has version {}, expected {}",
                    index, revision.version, expected
                ));
            }
        }
        Ok(Self {
            revisions: raw.revisions,
        })
    }
}

impl<T> ConfigHistory<T> {
    /// Starts a history with an initial revision (version 1).
    pub fn new(initial: T, author: impl Into<String>, saved_at: DateTime<Utc>) -> Self {
        Self {
            revisions: vec![ConfigRevision {
                version: 1,
                saved_at,
                author: author.into(),
                config: initial,
            }],
        }
    }

    /// Appends a new revision and returns it.
    pub fn record(
        &mut self,
        config: T,
        author: impl Into<String>,
        saved_at: DateTime<Utc>,
    ) -> &ConfigRevision<T> {
        let version = self.latest().version + 1;
        self.revisions.push(ConfigRevision {
            version,
            saved_at,
            author: author.into(),
            config,
        });
        self.latest()
    }

    /// Returns the most recent revision.
    pub fn latest(&self) -> &ConfigRevision<T> {
        // Never empty: construction and deserialization both require a revision.
        &self.revisions[self.revisions.len() - 1]
    }

    /// Returns the configuration currently in force.
    pub fn current(&self) -> &T {
        &self.latest().config
    }

    /// Returns a specific version, if it exists.
    pub fn revision(&self, version: u32) -> Option<&ConfigRevision<T>> {
        self.revisions.iter().find(|r| r.version == version)
    }

    /// Returns all revisions, oldest first.
    pub fn revisions(&self) -> &[ConfigRevision<T>] {
        &self.revisions
    }
}
