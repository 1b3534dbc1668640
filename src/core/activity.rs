//! # Activities
//!
//! Workout records the user logs by hand. A record is created once from the
//! add-activity form and never edited afterwards. Storage (one serialized list
//! under the `activities` key) is handled by `storage::activity_log`.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::validation::ValidationError;

pub const ACTIVITIES_KEY: &str = "activities";

/// Sports offered by the activity picker.
pub const SPORTS: [&str; 6] = [
    "Football",
    "Basketball",
    "Tennis",
    "Swimming",
    "Running",
    "Cycling",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub sport: String,
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Stamps a validated draft with its creation time. The id is derived from that time.
    pub fn record(entry: ActivityEntry, created_at: DateTime<Utc>) -> Self {
        Self {
            id: created_at.timestamp_millis().to_string(),
            sport: entry.sport,
            duration_minutes: entry.duration_minutes,
            date: entry.date,
            notes: entry.notes,
            created_at,
        }
    }
}

/// Sorts newest first by creation time.
pub fn sort_newest_first(activities: &mut [Activity]) {
    activities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Raw form contents, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDraft {
    pub sport: String,
    pub duration: String,
    pub date: String,
    pub notes: String,
}

impl Default for ActivityDraft {
    fn default() -> Self {
        Self {
            sport: String::new(),
            duration: String::new(),
            date: today(),
            notes: String::new(),
        }
    }
}

/// A draft that passed validation, ready to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub sport: String,
    pub duration_minutes: u32,
    pub date: NaiveDate,
    pub notes: String,
}

impl ActivityDraft {
    /// Checks required fields first, then the shape of duration and date.
    pub fn validate(&self) -> Result<ActivityEntry, ValidationError> {
        let sport = self.sport.trim();
        let duration = self.duration.trim();
        if sport.is_empty() || duration.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let duration_minutes = duration
            .parse::<u32>()
            .ok()
            .filter(|m| *m > 0)
            .ok_or_else(|| ValidationError::InvalidDuration(duration.to_string()))?;

        let date = self.date.trim();
        let date = if date.is_empty() {
            Local::now().date_naive()
        } else {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| ValidationError::InvalidDate(date.to_string()))?
        };

        Ok(ActivityEntry {
            sport: sport.to_string(),
            duration_minutes,
            date,
            notes: self.notes.trim().to_string(),
        })
    }
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
