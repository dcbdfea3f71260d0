//! HTTP handlers for the address book routes.
//!
//! Each route family accepts every verb and dispatches on the method itself,
//! so verbs outside the accepted set (HEAD included) get a 405 naming the
//! allowed ones.

use super::content_type::require_json;
use super::paths::{self, Route};
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateContactRequest, CreateContactResponse};
use crate::repositories::ContactRepository;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Shared handler state: the one store every request operates on.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ContactRepository>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactRepository>) -> Self {
        Self { store }
    }
}

/// `/contact/`: create, list all, delete all.
pub async fn contact_collection(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    match method {
        Method::POST => create_contact(&state, &uri, &headers, &body),
        Method::GET => get_all_contacts(&state, &uri),
        Method::DELETE => delete_all_contacts(&state, &uri),
        other => Err(ApiError::MethodNotAllowed(format!(
            "expect method GET, DELETE or POST at /contact/, got {}",
            other
        ))),
    }
}

/// Everything below `/contact/` and `/createdAt/`.
pub async fn prefixed_routes(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> ApiResult<Response> {
    match Route::classify(uri.path()) {
        Route::Item => contact_item(&state, method, &uri),
        Route::CreatedAt => created_at(&state, method, &uri),
        Route::Unknown => Err(ApiError::NotFound("404 page not found".to_string())),
    }
}

fn contact_item(state: &AppState, method: Method, uri: &Uri) -> ApiResult<Response> {
    let email = paths::parse_item_key(uri.path())?;

    match method {
        Method::GET => get_contact(state, uri, &email),
        Method::DELETE => delete_contact(state, uri, &email),
        other => Err(ApiError::MethodNotAllowed(format!(
            "expect method GET or DELETE at /contact/<email>, got {}",
            other
        ))),
    }
}

fn create_contact(
    state: &AppState,
    uri: &Uri,
    headers: &HeaderMap,
    body: &[u8],
) -> ApiResult<Response> {
    info!(path = uri.path(), "handling contact create");

    require_json(headers)?;

    let request: CreateContactRequest =
        serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    // Records are stamped with the server clock, not the client's createdAt
    let email = state.store.create_contact(
        &request.name,
        &request.email,
        &request.address,
        &request.mobile,
        Utc::now(),
    );

    Ok(Json(CreateContactResponse { email }).into_response())
}

fn get_contact(state: &AppState, uri: &Uri, email: &str) -> ApiResult<Response> {
    info!(path = uri.path(), "handling get contact");

    let contact = state.store.get_contact(email)?;
    Ok(Json(contact).into_response())
}

fn get_all_contacts(state: &AppState, uri: &Uri) -> ApiResult<Response> {
    info!(path = uri.path(), "handling get all contacts");

    Ok(Json(state.store.get_all_contacts()).into_response())
}

fn delete_contact(state: &AppState, uri: &Uri, email: &str) -> ApiResult<Response> {
    info!(path = uri.path(), "handling delete contact");

    state.store.delete_contact(email)?;
    Ok(StatusCode::OK.into_response())
}

fn delete_all_contacts(state: &AppState, uri: &Uri) -> ApiResult<Response> {
    info!(path = uri.path(), "handling delete all contacts");

    state.store.delete_all_contacts();
    Ok(StatusCode::OK.into_response())
}

fn created_at(state: &AppState, method: Method, uri: &Uri) -> ApiResult<Response> {
    info!(path = uri.path(), "handling contacts by created date");

    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed(format!(
            "expect method GET at /createdAt/<year>/<month>/<day>, got {}",
            method
        )));
    }

    let date = paths::parse_created_date(uri.path())?;
    Ok(Json(state.store.get_contacts_by_created_date(date)).into_response())
}
