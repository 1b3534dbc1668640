//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{TimeZone, Utc};

use crate::core::activity::{Activity, ActivityDraft};
use crate::core::session::{AuthStatus, User};
use crate::core::state::App;

/// An App restored from a stored session, sitting on the home tab.
pub fn signed_in_app() -> App {
    App::new(AuthStatus::Authenticated {
        user: User::from_email("tester@arena.dev"),
        token: "test-token".to_string(),
    })
}

/// A 30-minute activity on 2024-06-01, created at the given UTC hour.
pub fn test_activity(sport: &str, hour: u32) -> Activity {
    let draft = ActivityDraft {
        sport: sport.to_string(),
        duration: "30".to_string(),
        date: "2024-06-01".to_string(),
        notes: String::new(),
    };
    let created_at = Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap();
    Activity::record(draft.validate().unwrap(), created_at)
}
