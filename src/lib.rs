//! Contacts Manager - a terminal address book backed by a flat text file.
//!
//! Contacts (a name and a phone number) live in memory for the whole session and
//! are written back to disk only when the user chooses Save and Exit.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names and phone numbers, plus phone formatting
//! - **models**: The `ContactRecord` held by the store
//! - **store**: Insertion-ordered in-memory contact store
//! - **repositories**: Persistence seam and the flat-file implementation
//! - **console**: Line-oriented terminal I/O and re-prompting helpers
//! - **menu**: The interactive menu state machine
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod menu;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::Config;
pub use console::{Console, TerminalConsole};
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{AppError, ConfigError, FormatError, PersistenceError};
pub use menu::{MenuController, MenuOption, MenuState, SessionOutcome};
pub use models::ContactRecord;
pub use repositories::{ContactRepository, FileContactRepository, StorageState};
pub use store::{ContactStore, DeleteOutcome};
