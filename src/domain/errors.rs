//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Interactive input recovers from these by asking again, so they never leave the
/// input-collection step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or only whitespace.
    EmptyName,

    /// The provided name contains something other than letters and spaces.
    InvalidName(String),

    /// The provided phone number is not 7 or 10 digits / not in canonical form.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidName(name) => {
                write!(f, "Invalid name (only letters and spaces): {}", name)
            }
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
