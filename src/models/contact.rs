//! Contact model representing one entry in the address book.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// A contact stored in the address book, keyed by `email`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Display name
    pub name: String,

    /// Email address, used as the unique key
    pub email: String,

    /// Postal address
    pub address: String,

    /// Mobile phone number
    pub mobile: String,

    /// When the contact was stored (serialized as RFC 3339)
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Create a new contact.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        mobile: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
            mobile: mobile.into(),
            created_at,
        }
    }
}

/// Request payload for `POST /contact/`.
///
/// Unknown fields are rejected. `createdAt` is accepted for shape
/// compatibility but the server stamps records with its own clock.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub address: String,
    pub mobile: String,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
}

/// Response payload for `POST /contact/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateContactResponse {
    /// Key the contact was stored under
    pub email: String,
}
