//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact names and phone numbers.
//! These value objects validate at construction time, so a contact can never hold
//! an unvalidated name or a phone number that is not in canonical form.

pub mod contact_name;
pub mod errors;
pub mod phone;

pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::{format_raw_digits, is_valid_raw_digits, PhoneKind, PhoneNumber};
