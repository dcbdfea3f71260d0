//! Domain value objects and types.
//!
//! Value objects validate at construction time so invalid data cannot be
//! represented past the router boundary.

pub mod created_date;
pub mod errors;

pub use created_date::CreatedDate;
pub use errors::ValidationError;
