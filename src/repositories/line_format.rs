//! Line format of the contact file.
//!
//! Every line is `{name} {phone}` with the phone in canonical form. Older files
//! may split names and numbers with arbitrary punctuation and whitespace; those
//! lines are rebuilt from their word tokens.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{PersistenceError, PersistenceResult};
use crate::models::ContactRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// Any run of non-word characters separates two fields.
static FIELD_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\W+").expect("Failed to compile field separator regex"));

/// Render one record as a file line (no trailing newline).
pub fn encode_line(record: &ContactRecord) -> String {
    format!("{} {}", record.name, record.phone)
}

/// Rebuild a record from one non-empty line of the contact file.
///
/// `line_number` is 1-based and only used for error reporting.
///
/// # Errors
///
/// Returns `PersistenceError::MalformedLine` when the line is neither in
/// canonical form nor a legacy line of 2 to 5 fields that yields a valid name
/// and a 7 or 10 digit number.
pub fn parse_line(line_number: usize, line: &str) -> PersistenceResult<ContactRecord> {
    if let Some(record) = parse_canonical(line) {
        return Ok(record);
    }
    parse_legacy(line).map_err(|reason| PersistenceError::MalformedLine {
        line_number,
        line: line.to_string(),
        reason,
    })
}

fn parse_canonical(line: &str) -> Option<ContactRecord> {
    let (name, phone) = line.trim_end().rsplit_once(' ')?;
    let phone = PhoneNumber::parse_canonical(phone).ok()?;
    let name = ContactName::new(name).ok()?;
    Some(ContactRecord::new(name, phone))
}

fn parse_legacy(line: &str) -> Result<ContactRecord, String> {
    let tokens: Vec<&str> = FIELD_SEPARATOR
        .split(line)
        .filter(|token| !token.is_empty())
        .collect();

    // (name tokens, phone tokens)
    let name_len = match tokens.len() {
        2 | 3 => 1,
        4 | 5 => 2,
        n => return Err(format!("expected 2 to 5 fields, found {}", n)),
    };
    let (name_tokens, phone_tokens) = tokens.split_at(name_len);

    let name = ContactName::new(name_tokens.join(" ")).map_err(|e| e.to_string())?;
    let digits = phone_tokens.concat();
    let phone = PhoneNumber::from_raw_digits(&digits)
        .map_err(|_| format!("phone {:?} is not 7 or 10 digits", digits))?;

    Ok(ContactRecord::new(name, phone))
}
