//! JSON API over the same contact service the HTML routes use.

use crate::domain::contact::ContactForm;
use crate::transport::http::handlers::common::api_error;
use crate::transport::http::types::{json_422, ApiResponse, AppState, ContactPayload};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

const EXPECTED_CONTACT: &str = r#"{"name": "...", "email": "...", "phone": "..."}"#;

impl ContactPayload {
    fn into_form(self, old_name: Option<String>) -> ContactForm {
        ContactForm {
            name: self.name,
            email: self.email,
            phone: self.phone,
            old_name,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/contacts",
    responses(
        (status = 200, description = "All contacts in store order", body = ApiResponse),
        (status = 500, description = "Contact store failure", body = ApiResponse)
    )
)]
pub async fn list_contacts_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.with_contacts(|service| service.list()).await {
        Ok(contacts) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({ "contacts": contacts }))),
        )
            .into_response(),
        Err(e) => api_error(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/contacts/{name}",
    params(
        ("name" = String, Path, description = "Contact name (exact match)")
    ),
    responses(
        (status = 200, description = "Contact found", body = ApiResponse),
        (status = 404, description = "No contact with that name", body = ApiResponse)
    )
)]
pub async fn get_contact_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match state.with_contacts(move |service| service.get(&name)).await {
        Ok(contact) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({ "contact": contact }))),
        )
            .into_response(),
        Err(e) => api_error(e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = ContactPayload,
    responses(
        (status = 201, description = "Contact created", body = ApiResponse),
        (status = 400, description = "Validation failed (see data.errors)", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Contact store failure", body = ApiResponse)
    )
)]
pub async fn create_contact_handler(
    State(state): State<AppState>,
    request: Result<Json<ContactPayload>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, EXPECTED_CONTACT).into_response(),
    };

    let form = payload.into_form(None);
    match state.with_contacts(move |service| service.create(form)).await {
        Ok(contact) => (
            StatusCode::CREATED,
            Json(ApiResponse::ok(serde_json::json!({ "contact": contact }))),
        )
            .into_response(),
        Err(e) => api_error(e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/contacts/{name}",
    params(
        ("name" = String, Path, description = "Current name of the contact to replace")
    ),
    request_body = ContactPayload,
    responses(
        (status = 200, description = "Contact updated (moved to the end of the list)", body = ApiResponse),
        (status = 400, description = "Validation failed (see data.errors)", body = ApiResponse),
        (status = 404, description = "No contact with that name", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Contact store failure", body = ApiResponse)
    )
)]
pub async fn update_contact_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    request: Result<Json<ContactPayload>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, EXPECTED_CONTACT).into_response(),
    };

    let form = payload.into_form(Some(name.clone()));
    match state
        .with_contacts(move |service| service.update(&name, form))
        .await
    {
        Ok(contact) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({ "contact": contact }))),
        )
            .into_response(),
        Err(e) => api_error(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/contacts/{name}",
    params(
        ("name" = String, Path, description = "Name of the contact to delete")
    ),
    responses(
        (status = 200, description = "Contact deleted", body = ApiResponse),
        (status = 404, description = "No contact with that name", body = ApiResponse)
    )
)]
pub async fn delete_contact_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let target = name.clone();
    match state.with_contacts(move |service| service.delete(&target)).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({ "deleted": name }))),
        )
            .into_response(),
        Err(e) => api_error(e).into_response(),
    }
}
