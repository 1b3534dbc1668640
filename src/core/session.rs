//! # Session State
//!
//! The signed-in user as the client knows it: an opaque token plus a minimal
//! user record. The server never returns a profile, so the record is built
//! locally from what the user typed (see [`User::from_email`]).
//!
//! Persisted under two keys of the key-value store:
//!
//! - `userToken`: the token string, stored verbatim
//! - `userData`: the [`User`] record as JSON
//!
//! Reading and writing those keys lives in `storage::session`; this module only
//! holds the types and the form checks that run before any request is sent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::validation::{ValidationError, all_filled};

pub const TOKEN_KEY: &str = "userToken";
pub const USER_KEY: &str = "userData";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub name: String,
}

impl User {
    /// Builds the record stored after login, using the email's local part as the name.
    pub fn from_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            name: display_name_from_email(email),
        }
    }
}

/// The part of an email address before the first `@`, or the whole string if there is none.
pub fn display_name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

/// What the store says about the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated { user: User, token: String },
    Anonymous,
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthStatus::Authenticated { user, .. } => Some(user),
            AuthStatus::Anonymous => None,
        }
    }
}

/// Login form contents.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if all_filled(&[&self.email, &self.password]) {
            Ok(())
        } else {
            Err(ValidationError::MissingFields)
        }
    }
}

/// Registration form contents.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if all_filled(&[&self.name, &self.email, &self.password]) {
            Ok(())
        } else {
            Err(ValidationError::MissingFields)
        }
    }
}

/// New password from the profile screen.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub password: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if all_filled(&[&self.password]) {
            Ok(())
        } else {
            Err(ValidationError::MissingFields)
        }
    }
}

// Actions are logged with {:?}; keep passwords out of the log.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordChange(<redacted>)")
    }
}
