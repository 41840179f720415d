use crate::error::PersistenceResult;
use crate::models::ContactRecord;

/// What is currently on disk for the contact file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageState {
    /// The data directory itself does not exist.
    MissingDirectory,
    /// The directory exists but the contact file does not.
    MissingFile,
    /// The contact file exists and can be loaded.
    Ready,
}

/// Repository for persisting the contact list.
///
/// Provides abstraction over where contacts are stored, so the menu can be
/// driven against a real file or an in-memory double.
pub trait ContactRepository {
    /// Inspect the directory and file without creating anything.
    fn storage_state(&self) -> StorageState;

    /// Create the data directory (and any missing parents).
    fn create_directory(&self) -> PersistenceResult<()>;

    /// Create an empty contact file.
    fn create_file(&self) -> PersistenceResult<()>;

    /// Read every contact, in file order.
    ///
    /// Only called when [`StorageState::Ready`].
    fn load(&self) -> PersistenceResult<Vec<ContactRecord>>;

    /// Replace the stored contacts with `records`, in order.
    fn save(&self, records: &[ContactRecord]) -> PersistenceResult<()>;

    /// Human-readable location of the data directory.
    fn directory_location(&self) -> String;

    /// Human-readable location of the contact file.
    fn file_location(&self) -> String;
}
