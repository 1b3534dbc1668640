//! Form validation errors, raised before any network or storage call is attempted.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left blank.
    MissingFields,
    /// Duration is not a positive whole number of minutes.
    InvalidDuration(String),
    /// Date is not a calendar date in `YYYY-MM-DD` form.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => write!(f, "Please fill in all required fields"),
            ValidationError::InvalidDuration(value) => {
                write!(f, "Duration must be a whole number of minutes (got \"{value}\")")
            }
            ValidationError::InvalidDate(value) => {
                write!(f, "Date must look like YYYY-MM-DD (got \"{value}\")")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// True when every field holds something other than whitespace.
pub fn all_filled(fields: &[&str]) -> bool {
    fields.iter().all(|f| !f.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filled() {
        assert!(all_filled(&["a", "b"]));
        assert!(!all_filled(&["a", "   "]));
        assert!(!all_filled(&["", "b"]));
        assert!(all_filled(&[]));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill in all required fields"
        );
        assert!(ValidationError::InvalidDuration("abc".into()).to_string().contains("abc"));
    }
}
