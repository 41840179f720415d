//! Contact record held by the address book.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single address-book entry.
///
/// Both fields are validated value objects, so a `ContactRecord` cannot exist
/// in an unvalidated state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Letters-and-spaces display name
    pub name: ContactName,

    /// Phone number in canonical display form
    pub phone: PhoneNumber,
}

impl ContactRecord {
    /// Create a record from already-validated parts.
    pub fn new(name: ContactName, phone: PhoneNumber) -> Self {
        Self { name, phone }
    }

    /// Validate a name and raw digits in one step.
    pub fn from_raw(name: &str, raw_digits: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phone: PhoneNumber::from_raw_digits(raw_digits)?,
        })
    }
}

/// Renders as the on-disk line: `{name} {phone}`.
impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.phone)
    }
}
