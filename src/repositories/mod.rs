//! Persistence of the contact list.
//!
//! [`ContactRepository`] is the seam between the interactive session and
//! storage; [`FileContactRepository`] is the flat-file implementation.

mod file_contact_repository;
pub mod line_format;
mod traits;

pub use file_contact_repository::FileContactRepository;
pub use line_format::{encode_line, parse_line};
pub use traits::{ContactRepository, StorageState};
