//! In-memory contact store.
//!
//! The store owns every record for the lifetime of the session. It never touches
//! the disk; loading and saving go through [`crate::repositories`].

mod contact_store;

pub use contact_store::{ContactStore, DeleteOutcome};
