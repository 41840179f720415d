//! PhoneNumber value object and phone formatting.

use super::errors::ValidationError;
use crate::error::FormatError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static LOCAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}-\d{4}$").expect("Failed to compile local phone regex"));

static AREA_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(\d{3}\)-\d{3}-\d{4}$").expect("Failed to compile area-code phone regex")
});

/// True iff `s` is exactly 7 or 10 ASCII decimal digits.
pub fn is_valid_raw_digits(s: &str) -> bool {
    (s.len() == 7 || s.len() == 10) && s.chars().all(|c| c.is_ascii_digit())
}

/// Format raw digits into canonical display form.
///
/// - 7 digits: `555-1234`
/// - 10 digits: `(555)-123-4567`
///
/// # Errors
///
/// Returns `FormatError::NotDigits` if anything but ASCII digits is present and
/// `FormatError::UnsupportedLength` for any other length. Callers are expected to
/// have checked [`is_valid_raw_digits`] first.
pub fn format_raw_digits(raw: &str) -> Result<String, FormatError> {
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(FormatError::NotDigits(raw.to_string()));
    }
    if !is_valid_raw_digits(raw) {
        return Err(FormatError::UnsupportedLength(raw.len()));
    }

    // ASCII only past this point, byte slicing is safe
    match raw.len() {
        7 => Ok(format!("{}-{}", &raw[..3], &raw[3..])),
        _ => Ok(format!("({})-{}-{}", &raw[..3], &raw[3..6], &raw[6..])),
    }
}

/// Which of the two supported shapes a number has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneKind {
    /// 7 digits, `DDD-DDDD`
    Local,
    /// 10 digits, `(DDD)-DDD-DDDD`
    WithAreaCode,
}

/// A phone number held in canonical display form.
///
/// # Example
///
/// ```
/// use contacts_manager::domain::PhoneNumber;
///
/// let phone = PhoneNumber::from_raw_digits("5551234567").unwrap();
/// assert_eq!(phone.as_str(), "(555)-123-4567");
/// assert_eq!(phone.digits_only(), "5551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Build a number from raw digits typed by the user or recovered from a file.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless `raw` is 7 or 10 digits.
    pub fn from_raw_digits(raw: &str) -> Result<Self, ValidationError> {
        format_raw_digits(raw)
            .map(Self)
            .map_err(|_| ValidationError::InvalidPhone(raw.to_string()))
    }

    /// Accept a number that is already in canonical display form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `formatted` is not exactly
    /// `DDD-DDDD` or `(DDD)-DDD-DDDD`.
    pub fn parse_canonical(formatted: &str) -> Result<Self, ValidationError> {
        if LOCAL_RE.is_match(formatted) || AREA_CODE_RE.is_match(formatted) {
            Ok(Self(formatted.to_string()))
        } else {
            Err(ValidationError::InvalidPhone(formatted.to_string()))
        }
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    pub fn kind(&self) -> PhoneKind {
        if self.0.starts_with('(') {
            PhoneKind::WithAreaCode
        } else {
            PhoneKind::Local
        }
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from canonical string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::parse_canonical(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
