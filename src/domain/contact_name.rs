//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's display name.
///
/// Names are made of letters and spaces only and cannot be empty. Surrounding
/// whitespace is trimmed at construction; inner spacing is kept as typed.
///
/// # Example
///
/// ```
/// use contacts_manager::domain::ContactName;
///
/// let name = ContactName::new("  Jane Doe ").unwrap();
/// assert_eq!(name.as_str(), "Jane Doe");
/// assert!(ContactName::new("Bob3").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it is letters and spaces only.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for blank input and
    /// `ValidationError::InvalidName` if any digit or punctuation is present.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim_matches(' ');

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Letters (any script) and plain spaces.
    fn is_valid(name: &str) -> bool {
        name.chars().all(|c| c.is_alphabetic() || c == ' ')
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive equality against raw user input.
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim_matches(' ').to_lowercase()
    }

    /// Case-insensitive substring test.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
