use std::fmt;

use crate::storage::StorageError;

/// Errors from the HTTP gateway. `Display` is the text shown to the user.
#[derive(Debug)]
pub enum ApiError {
    /// Connection failed before a response arrived (DNS, refused, reset).
    Network(String),
    /// The chat request outlived its timeout and was abandoned.
    TimedOut,
    /// Non-success status. `message` is the server's `message` field or the operation's fallback.
    Server { status: u16, message: String },
    /// The body wasn't the JSON shape we expected.
    Parse(String),
    /// A bearer-token call was made with no stored token.
    NotAuthenticated,
    /// Login succeeded but the body carried no token.
    MissingToken,
    /// Persisting the session failed.
    Storage(StorageError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => {
                write!(f, "Network error: {msg}. Check your connection and try again.")
            }
            ApiError::TimedOut => write!(f, "Request timed out. Please try again."),
            ApiError::Server { message, .. } => write!(f, "{message}"),
            ApiError::Parse(msg) => write!(f, "Unexpected response from server: {msg}"),
            ApiError::NotAuthenticated => write!(f, "No authentication token found"),
            ApiError::MissingToken => write!(f, "No token received from server"),
            ApiError::Storage(e) => write!(f, "Could not save to this device: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Storage(e)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::TimedOut
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
