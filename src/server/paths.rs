//! URL path classification and parsing.
//!
//! `/contact/` itself is an exact route on the router. Everything else lands
//! in the fallback, which matches route families by prefix the way a subtree
//! pattern in a request multiplexer does: anything below `/contact/` and
//! anything below `/createdAt/`.

use crate::domain::CreatedDate;
use crate::error::{ApiError, ApiResult};

pub const COLLECTION_PATH: &str = "/contact/";
pub const CREATED_AT_PREFIX: &str = "/createdAt/";

/// Route family of a path that missed the exact `/contact/` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/contact/<key>...`
    Item,
    /// `/createdAt/...`
    CreatedAt,
    /// No route serves this path
    Unknown,
}

impl Route {
    pub fn classify(path: &str) -> Self {
        if path.starts_with(COLLECTION_PATH) {
            Route::Item
        } else if path.starts_with(CREATED_AT_PREFIX) {
            Route::CreatedAt
        } else {
            Route::Unknown
        }
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.trim_matches('/').split('/').collect()
}

/// Extract the contact key from `/contact/<key>`.
///
/// The key is the second path segment, percent-decoded. Anything after it is
/// ignored.
pub fn parse_item_key(path: &str) -> ApiResult<String> {
    let bad_request =
        || ApiError::BadRequest("expect /contact/<email> in contact handler".to_string());

    let parts = segments(path);
    let raw = match parts.get(1) {
        Some(raw) if !raw.is_empty() => *raw,
        _ => return Err(bad_request()),
    };

    urlencoding::decode(raw)
        .map(|key| key.into_owned())
        .map_err(|_| bad_request())
}

/// Parse `/createdAt/<year>/<month>/<day>` into a validated date.
///
/// Every failure produces the same message so callers cannot tell which
/// component was rejected.
pub fn parse_created_date(path: &str) -> ApiResult<CreatedDate> {
    let bad_request = || {
        ApiError::BadRequest(format!(
            "expect /createdAt/<year>/<month>/<day>, got {}",
            path
        ))
    };

    let parts = segments(path);
    match parts.as_slice() {
        [_, year, month, day] => CreatedDate::parse(year, month, day).map_err(|_| bad_request()),
        _ => Err(bad_request()),
    }
}
