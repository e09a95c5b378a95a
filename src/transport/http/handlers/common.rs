use crate::app::contact_service::ServiceError;
use crate::transport::http::types::ApiResponse;
use crate::transport::http::views;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failure of an HTML route.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ServiceError> for PageError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => PageError::NotFound,
            ServiceError::Storage(e) => PageError::Internal(e),
            // Routes handle validation themselves; reaching here is a bug in the caller.
            ServiceError::Validation(errors) => PageError::Internal(anyhow::anyhow!(
                "unhandled validation failure: {:?}",
                errors
            )),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => {
                (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response()
            }
            PageError::Internal(e) => {
                log::error!("Request failed: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::internal_error_page()),
                )
                    .into_response()
            }
        }
    }
}

/// Maps a service failure onto the JSON envelope used by `/api`.
pub fn api_error(err: ServiceError) -> (StatusCode, Json<ApiResponse>) {
    match err {
        ServiceError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse {
                success: false,
                data: Some(serde_json::json!({ "errors": errors })),
                error: Some("Validation failed".to_string()),
            }),
        ),
        ServiceError::NotFound(name) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err(format!("Contact '{}' not found", name))),
        ),
        ServiceError::Storage(e) => {
            log::error!("Contact store failure: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::err(format!("Contact store failure: {}", e))),
            )
        }
    }
}
