//! Reads and writes the signed-in session (`userToken` + `userData`).

use std::sync::Arc;

use log::{debug, warn};

use crate::core::session::{AuthStatus, TOKEN_KEY, USER_KEY, User};
use crate::storage::{KeyValueStore, StorageError};

#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persists the token and user record after a successful login or registration.
    pub async fn save(&self, token: &str, user: &User) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(user).map_err(|e| StorageError::Serialization {
            key: USER_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.store.set_item(TOKEN_KEY, token).await?;
        self.store.set_item(USER_KEY, &user_json).await?;
        debug!("Session saved for {}", user.email);
        Ok(())
    }

    pub async fn token(&self) -> Result<Option<String>, StorageError> {
        self.store.get_item(TOKEN_KEY).await
    }

    /// Authenticated only when both keys are present and the user record parses.
    /// Any failure along the way reads as signed out.
    pub async fn status(&self) -> AuthStatus {
        let token = match self.store.get_item(TOKEN_KEY).await {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => return AuthStatus::Anonymous,
            Err(e) => {
                warn!("Failed to read session token: {}", e);
                return AuthStatus::Anonymous;
            }
        };

        let user_json = match self.store.get_item(USER_KEY).await {
            Ok(Some(json)) => json,
            Ok(None) => return AuthStatus::Anonymous,
            Err(e) => {
                warn!("Failed to read session user: {}", e);
                return AuthStatus::Anonymous;
            }
        };

        match serde_json::from_str::<User>(&user_json) {
            Ok(user) => AuthStatus::Authenticated { user, token },
            Err(e) => {
                warn!("Stored user record is unreadable: {}", e);
                AuthStatus::Anonymous
            }
        }
    }

    /// Removes token and user record. Failures are logged, not returned.
    pub async fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.store.remove_item(key).await {
                warn!("Failed to remove {}: {}", key, e);
            }
        }
    }
}
