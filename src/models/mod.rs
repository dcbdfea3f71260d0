//! Data models for the address book.
//!
//! This module contains the stored contact record and the JSON payloads
//! exchanged on the create route.

pub mod contact;

pub use contact::{Contact, CreateContactRequest, CreateContactResponse};
