//! In-memory address book safe for concurrent access.

use super::traits::ContactRepository;
use crate::domain::CreatedDate;
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Contact store guarded by a single exclusive lock.
///
/// Reads take the same lock as writes, so every call observes a fully
/// consistent map and calls are totally ordered. Share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct AddressBook {
    contacts: Mutex<HashMap<String, Contact>>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the address book is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // No operation can panic mid-mutation, so a poisoned map is still whole.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Contact>> {
        self.contacts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContactRepository for AddressBook {
    fn create_contact(
        &self,
        name: &str,
        email: &str,
        address: &str,
        mobile: &str,
        created_at: DateTime<Utc>,
    ) -> String {
        let contact = Contact::new(name, email, address, mobile, created_at);

        let mut contacts = self.lock();
        let replaced = contacts.insert(email.to_string(), contact).is_some();
        debug!(email, replaced, "stored contact");

        email.to_string()
    }

    fn get_contact(&self, email: &str) -> StoreResult<Contact> {
        self.lock()
            .get(email)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(email.to_string()))
    }

    fn delete_contact(&self, email: &str) -> StoreResult<()> {
        let mut contacts = self.lock();
        match contacts.remove(email) {
            Some(_) => {
                debug!(email, "deleted contact");
                Ok(())
            }
            None => Err(StoreError::NotFound(email.to_string())),
        }
    }

    fn delete_all_contacts(&self) {
        let mut contacts = self.lock();
        let removed = contacts.len();
        contacts.clear();
        debug!(removed, "deleted all contacts");
    }

    fn get_all_contacts(&self) -> Vec<Contact> {
        self.lock().values().cloned().collect()
    }

    fn get_contacts_by_created_date(&self, date: CreatedDate) -> Vec<Contact> {
        let contacts = self.lock();
        let matched: Vec<Contact> = contacts
            .values()
            .filter(|contact| date.matches(&contact.created_at))
            .cloned()
            .collect();
        debug!(%date, matched = matched.len(), scanned = contacts.len(), "filtered contacts by date");
        matched
    }
}
