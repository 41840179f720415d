use contacts_manager::error::{PersistenceError, PersistenceResult};
use contacts_manager::models::ContactRecord;
use contacts_manager::repositories::{ContactRepository, StorageState};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Failure to inject into `load` or `save`.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectedFailure {
    Io,
    MalformedLine,
}

#[derive(Debug, Default)]
struct MockState {
    directory_exists: bool,
    file_exists: bool,
    records: Vec<ContactRecord>,
    load_failure: Option<InjectedFailure>,
    save_failure: bool,
}

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// configured with a starting disk state and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    state: Arc<Mutex<MockState>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Neither directory nor file exists.
    pub fn empty_disk() -> Self {
        Self::default()
    }

    /// Directory exists, file does not.
    pub fn without_file() -> Self {
        let repo = Self::default();
        repo.state.lock().unwrap().directory_exists = true;
        repo
    }

    /// Directory and file exist with `records` stored.
    pub fn with_records(records: Vec<ContactRecord>) -> Self {
        let repo = Self::without_file();
        {
            let mut state = repo.state.lock().unwrap();
            state.file_exists = true;
            state.records = records;
        }
        repo
    }

    pub fn fail_load(&self, failure: InjectedFailure) {
        self.state.lock().unwrap().load_failure = Some(failure);
    }

    pub fn fail_save(&self) {
        self.state.lock().unwrap().save_failure = true;
    }

    /// Records currently "on disk".
    pub fn stored(&self) -> Vec<ContactRecord> {
        self.state.lock().unwrap().records.clone()
    }

    pub fn directory_exists(&self) -> bool {
        self.state.lock().unwrap().directory_exists
    }

    pub fn file_exists(&self) -> bool {
        self.state.lock().unwrap().file_exists
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn storage_state(&self) -> StorageState {
        self.increment_call_count("storage_state");
        let state = self.state.lock().unwrap();
        if !state.directory_exists {
            StorageState::MissingDirectory
        } else if !state.file_exists {
            StorageState::MissingFile
        } else {
            StorageState::Ready
        }
    }

    fn create_directory(&self) -> PersistenceResult<()> {
        self.increment_call_count("create_directory");
        self.state.lock().unwrap().directory_exists = true;
        Ok(())
    }

    fn create_file(&self) -> PersistenceResult<()> {
        self.increment_call_count("create_file");
        let mut state = self.state.lock().unwrap();
        state.file_exists = true;
        state.records.clear();
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Vec<ContactRecord>> {
        self.increment_call_count("load");
        let state = self.state.lock().unwrap();
        match state.load_failure {
            Some(InjectedFailure::Io) => Err(PersistenceError::io(
                "mock/contacts.txt",
                io::Error::new(io::ErrorKind::PermissionDenied, "mock read failure"),
            )),
            Some(InjectedFailure::MalformedLine) => Err(PersistenceError::MalformedLine {
                line_number: 1,
                line: "???".to_string(),
                reason: "expected 2 to 5 fields, found 0".to_string(),
            }),
            None => Ok(state.records.clone()),
        }
    }

    fn save(&self, records: &[ContactRecord]) -> PersistenceResult<()> {
        self.increment_call_count("save");
        let mut state = self.state.lock().unwrap();
        if state.save_failure {
            return Err(PersistenceError::io(
                "mock/contacts.txt",
                io::Error::new(io::ErrorKind::Other, "mock write failure"),
            ));
        }
        state.file_exists = true;
        state.records = records.to_vec();
        Ok(())
    }

    fn directory_location(&self) -> String {
        "/mock/data".to_string()
    }

    fn file_location(&self) -> String {
        "/mock/data/contacts.txt".to_string()
    }
}
