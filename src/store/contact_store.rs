//! Insertion-ordered in-memory contact store.

use crate::domain::{ContactName, PhoneNumber};
use crate::models::ContactRecord;
use tracing::{debug, info};

/// Result of [`ContactStore::delete_by_exact_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The first matching record was removed and is returned.
    Deleted(ContactRecord),
    /// No record had that name; the store is unchanged.
    NotFound,
}

/// Insertion-ordered collection of contacts.
///
/// Duplicate names are allowed. Lookups by name are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    records: Vec<ContactRecord>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records` in the given order.
    pub fn from_records(records: Vec<ContactRecord>) -> Self {
        debug!(count = records.len(), "Populating contact store");
        Self { records }
    }

    /// Append a contact. Both parts are validated types, so nothing is checked here.
    pub fn add(&mut self, name: ContactName, phone: PhoneNumber) {
        info!(name = %name, phone = %phone, "Adding contact");
        self.records.push(ContactRecord::new(name, phone));
    }

    /// All records in store order.
    pub fn list_all(&self) -> &[ContactRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose name contains `query`, ignoring case, in store order.
    pub fn find_by_name_substring(&self, query: &str) -> Vec<&ContactRecord> {
        let matches: Vec<&ContactRecord> = self
            .records
            .iter()
            .filter(|record| record.name.contains_ignore_case(query))
            .collect();

        debug!(query = %query, matches = matches.len(), "Searched contacts by name");
        matches
    }

    /// First record whose name equals `name`, ignoring case.
    pub fn find_by_exact_name(&self, name: &str) -> Option<&ContactRecord> {
        self.records
            .iter()
            .find(|record| record.name.eq_ignore_case(name))
    }

    /// Remove the first record (in store order) whose name equals `name`, ignoring case.
    ///
    /// Later records with the same name stay where they are.
    pub fn delete_by_exact_name(&mut self, name: &str) -> DeleteOutcome {
        match self
            .records
            .iter()
            .position(|record| record.name.eq_ignore_case(name))
        {
            Some(index) => {
                let removed = self.records.remove(index);
                info!(name = %removed.name, index, "Deleted contact");
                DeleteOutcome::Deleted(removed)
            }
            None => {
                debug!(name = %name, "No contact to delete");
                DeleteOutcome::NotFound
            }
        }
    }
}
