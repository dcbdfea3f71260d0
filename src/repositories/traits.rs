use crate::domain::CreatedDate;
use crate::error::StoreResult;
use crate::models::Contact;
use chrono::{DateTime, Utc};

/// Repository for managing contacts.
///
/// Every method is synchronous and bounded; implementations must make each
/// call atomic with respect to all others.
pub trait ContactRepository: Send + Sync {
    /// Insert or replace the contact stored under `email`, returning the key.
    fn create_contact(
        &self,
        name: &str,
        email: &str,
        address: &str,
        mobile: &str,
        created_at: DateTime<Utc>,
    ) -> String;

    /// Retrieve a single contact by email.
    fn get_contact(&self, email: &str) -> StoreResult<Contact>;

    /// Delete a single contact by email.
    fn delete_contact(&self, email: &str) -> StoreResult<()>;

    /// Delete every contact.
    fn delete_all_contacts(&self);

    /// Retrieve every contact, in no particular order.
    fn get_all_contacts(&self) -> Vec<Contact>;

    /// Retrieve the contacts created on `date`, in no particular order.
    fn get_contacts_by_created_date(&self, date: CreatedDate) -> Vec<Contact>;
}
