//! Address Book - an in-memory contact directory served over HTTP.
//!
//! Contacts are keyed by email address and held in a single exclusively
//! locked map for the lifetime of the process. A small router maps HTTP verbs
//! and URL shapes onto store operations and returns JSON.
//!
//! # Architecture
//!
//! - **models**: The stored contact record and create-route payloads
//! - **domain**: Validated values such as the creation-date filter
//! - **repositories**: The contact store trait and its in-memory implementation
//! - **server**: Routing, request validation and response shaping
//! - **error**: Store, API and configuration error types
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;

pub use config::Config;
pub use domain::CreatedDate;
pub use error::{ApiError, ConfigError, StoreError};
pub use models::{Contact, CreateContactRequest, CreateContactResponse};
pub use repositories::{AddressBook, ContactRepository};
pub use server::router;
