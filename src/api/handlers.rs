use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde_json::Value;

use super::AppState;
use super::response::{self, DataBody, MessageBody, respond};
use crate::errors::AppError;
use crate::validation::{validate_contact_patch, validate_new_contact};

type Payload = Result<Json<Value>, JsonRejection>;

fn not_found() -> AppError {
    AppError::NotFound("Contact".to_string())
}

/// Unreadable bodies are reported like any other validation failure.
fn read_payload(payload: Payload) -> Result<Value, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

// GET /api/contacts
pub async fn list_contacts(State(state): State<AppState>) -> Result<Response, AppError> {
    let store = state.store().lock()?;
    let contacts = store.list();

    tracing::debug!(?contacts, "listing contacts");
    respond(StatusCode::OK, &DataBody::new(response::LISTED, contacts))
}

// GET /api/contacts/:id
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let store = state.store().lock()?;
    let contact = store.get_by_id(&id).ok_or_else(not_found)?;

    tracing::debug!(?contact, "returning contact");
    respond(StatusCode::OK, &DataBody::new(response::RETRIEVED, contact))
}

// POST /api/contacts
pub async fn add_contact(
    State(state): State<AppState>,
    payload: Payload,
) -> Result<Response, AppError> {
    let fields = validate_new_contact(&read_payload(payload)?)?;

    let contact = state.store().lock()?.add(fields);

    tracing::info!(id = %contact.id, "contact created");
    respond(StatusCode::CREATED, &contact)
}

// PUT /api/contacts/:id
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Payload,
) -> Result<Response, AppError> {
    let patch = validate_contact_patch(&read_payload(payload)?)?;

    let contact = state
        .store()
        .lock()?
        .update(&id, patch)
        .ok_or_else(not_found)?;

    tracing::info!(id = %contact.id, "contact updated");
    respond(StatusCode::OK, &DataBody::new(response::UPDATED, contact))
}

// DELETE /api/contacts/:id
pub async fn remove_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let contact = state.store().lock()?.remove(&id).ok_or_else(not_found)?;

    tracing::info!(id = %contact.id, "contact deleted");
    respond(StatusCode::OK, &MessageBody::new(response::DELETED))
}

pub async fn route_not_found() -> Result<Response, AppError> {
    respond(StatusCode::NOT_FOUND, &MessageBody::new(response::ROUTE_NOT_FOUND))
}

// Known path, unsupported method
pub async fn method_not_allowed() -> Result<Response, AppError> {
    respond(StatusCode::METHOD_NOT_ALLOWED, &MessageBody::new(response::METHOD_NOT_ALLOWED))
}
