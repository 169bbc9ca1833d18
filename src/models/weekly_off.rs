//! Weekly off-day sets.
//!
//! Weekdays are indexed 0 (Sunday) through 6 (Saturday), the convention
//! payroll configuration is stored in.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A set of weekdays on which no work is scheduled.
///
/// Defaults to Saturday and Sunday.
///
/// # Example
///
/// ```
/// use payroll_engine::models::WeeklyOffDays;
/// use chrono::Weekday;
///
/// let offs = WeeklyOffDays::from_indices(&[0, 6]).unwrap();
/// assert!(offs.contains(Weekday::Sun));
/// assert!(offs.contains(Weekday::Sat));
/// assert!(!offs.contains(Weekday::Mon));
/// assert_eq!(offs, WeeklyOffDays::default());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WeeklyOffDays {
    mask: u8,
}

impl WeeklyOffDays {
    /// A set with no off-days (every day is a working day).
    pub const NONE: WeeklyOffDays = WeeklyOffDays { mask: 0 };

    /// Builds a set from Sunday-based indices (0 = Sunday, 6 = Saturday).
    ///
    /// Returns an error message naming the first index outside 0–6.
    pub fn from_indices(indices: &[u8]) -> Result<Self, String> {
        let mut mask = 0u8;
        for &index in indices {
            if index > 6 {
                return Err(format!(
                    "weekly off-day index {} is outside 0 (Sunday) to 6 (Saturday)",
                    index
                ));
            }
            mask |= 1 << index;
        }
        Ok(Self { mask })
    }

    /// Builds a set from chrono weekdays.
    pub fn from_weekdays(days: &[Weekday]) -> Self {
        let mask = days
            .iter()
            .fold(0u8, |mask, day| mask | (1 << day.num_days_from_sunday()));
        Self { mask }
    }

    /// Returns true if the given weekday is an off-day.
    pub fn contains(&self, day: Weekday) -> bool {
        self.mask & (1 << day.num_days_from_sunday()) != 0
    }

    /// Returns the Sunday-based indices in ascending order.
    pub fn indices(&self) -> Vec<u8> {
        (0..7).filter(|i| self.mask & (1 << i) != 0).collect()
    }

    /// Returns the number of off-days per week.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns true if no weekday is an off-day.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }
}

impl Default for WeeklyOffDays {
    fn default() -> Self {
        Self::from_weekdays(&[Weekday::Sat, Weekday::Sun])
    }
}

impl fmt::Debug for WeeklyOffDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.indices()).finish()
    }
}

impl TryFrom<Vec<u8>> for WeeklyOffDays {
    type Error = String;

    fn try_from(indices: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_indices(&indices)
    }
}

impl From<WeeklyOffDays> for Vec<u8> {
    fn from(days: WeeklyOffDays) -> Self {
        days.indices()
    }
}
