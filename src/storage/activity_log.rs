//! The activity log: every logged workout, serialized as one JSON list under
//! the `activities` key.
//!
//! Appending is read-modify-write of the whole list. There is no locking; the
//! client is single-user and only one save runs at a time.

use std::sync::Arc;

use log::{info, warn};

use crate::core::activity::{ACTIVITIES_KEY, Activity, sort_newest_first};
use crate::storage::{KeyValueStore, StorageError};

#[derive(Clone)]
pub struct ActivityLog {
    store: Arc<dyn KeyValueStore>,
}

impl ActivityLog {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored records in storage order.
    async fn read_all(&self) -> Result<Vec<Activity>, StorageError> {
        match self.store.get_item(ACTIVITIES_KEY).await? {
            Some(json) => serde_json::from_str(&json).map_err(|e| StorageError::Serialization {
                key: ACTIVITIES_KEY.to_string(),
                message: e.to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Appends one record. Nothing is written if the existing list can't be read.
    pub async fn append(&self, activity: Activity) -> Result<Activity, StorageError> {
        let mut all = self.read_all().await?;
        all.push(activity.clone());

        let json = serde_json::to_string(&all).map_err(|e| StorageError::Serialization {
            key: ACTIVITIES_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.store.set_item(ACTIVITIES_KEY, &json).await?;
        info!("Activity saved: {} ({} total)", activity.id, all.len());
        Ok(activity)
    }

    /// All records, newest first.
    pub async fn list(&self) -> Result<Vec<Activity>, StorageError> {
        let mut all = self.read_all().await?;
        sort_newest_first(&mut all);
        Ok(all)
    }

    /// Like [`list`](Self::list), but a failed read logs and yields an empty list.
    pub async fn load_or_empty(&self) -> Vec<Activity> {
        self.list().await.unwrap_or_else(|e| {
            warn!("Failed to load activities: {}", e);
            Vec::new()
        })
    }
}
