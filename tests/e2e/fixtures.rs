//! Test fixtures and sample payloads.

use address_book::Contact;
use chrono::{TimeZone, Utc};

/// JSON body for creating a contact with every recognized field.
pub fn contact_payload(name: &str, email: &str) -> String {
    serde_json::json!({
        "name": name,
        "email": email,
        "address": "addr",
        "mobile": "123",
        "createdAt": "2020-01-01T00:00:00Z",
    })
    .to_string()
}

/// A stored contact created at the given UTC date and hour.
#[allow(dead_code)]
pub fn contact_created_at(email: &str, y: i32, m: u32, d: u32, hour: u32) -> Contact {
    Contact::new(
        "Sample",
        email,
        "addr",
        "123",
        Utc.with_ymd_and_hms(y, m, d, hour, 0, 0).unwrap(),
    )
}
