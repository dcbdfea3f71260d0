use address_book::domain::CreatedDate;
use address_book::error::{StoreError, StoreResult};
use address_book::models::Contact;
use address_book::repositories::ContactRepository;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// seeded with contacts carrying arbitrary timestamps and tracks method calls
/// for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<String, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a contact to the mock repository without counting a call.
    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.email.clone(), contact);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Total number of repository calls of any kind.
    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn create_contact(
        &self,
        name: &str,
        email: &str,
        address: &str,
        mobile: &str,
        created_at: DateTime<Utc>,
    ) -> String {
        self.track_call("create_contact");

        let contact = Contact::new(name, email, address, mobile, created_at);
        self.contacts
            .lock()
            .unwrap()
            .insert(email.to_string(), contact);
        email.to_string()
    }

    fn get_contact(&self, email: &str) -> StoreResult<Contact> {
        self.track_call("get_contact");

        let contacts = self.contacts.lock().unwrap();
        contacts
            .get(email)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(email.to_string()))
    }

    fn delete_contact(&self, email: &str) -> StoreResult<()> {
        self.track_call("delete_contact");

        let mut contacts = self.contacts.lock().unwrap();
        contacts
            .remove(email)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(email.to_string()))
    }

    fn delete_all_contacts(&self) {
        self.track_call("delete_all_contacts");

        self.contacts.lock().unwrap().clear();
    }

    fn get_all_contacts(&self) -> Vec<Contact> {
        self.track_call("get_all_contacts");

        self.contacts.lock().unwrap().values().cloned().collect()
    }

    fn get_contacts_by_created_date(&self, date: CreatedDate) -> Vec<Contact> {
        self.track_call("get_contacts_by_created_date");

        self.contacts
            .lock()
            .unwrap()
            .values()
            .filter(|c| date.matches(&c.created_at))
            .cloned()
            .collect()
    }
}
