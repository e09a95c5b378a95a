use crate::app::contact_service::{ContactService, ServiceResult};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::{Arc, Mutex};
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<Mutex<ContactService>>,
}

impl AppState {
    pub fn new(service: ContactService) -> Self {
        Self {
            contacts: Arc::new(Mutex::new(service)),
        }
    }

    /// Runs `f` against the service on the blocking pool. Store calls do
    /// synchronous file I/O, so they stay off the async workers.
    pub async fn with_contacts<T, F>(&self, f: F) -> ServiceResult<T>
    where
        F: FnOnce(&ContactService) -> ServiceResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let contacts = self.contacts.clone();
        tokio::task::spawn_blocking(move || {
            let service = contacts
                .lock()
                .map_err(|_| anyhow::anyhow!("contact service lock poisoned"))?;
            f(&service)
        })
        .await
        .map_err(|e| anyhow::anyhow!("contact store task failed: {}", e))?
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Request body for `POST /api/contacts` and `PUT /api/contacts/{name}`.
#[derive(Deserialize, Debug, ToSchema)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// One-shot banner flags set by the redirects after add/delete/edit.
#[derive(Deserialize, Debug, Default)]
pub struct FlashQuery {
    pub added: Option<String>,
    pub deleted: Option<String>,
    pub edited: Option<String>,
}

impl FlashQuery {
    pub fn message(&self) -> Option<&'static str> {
        if self.added.is_some() {
            Some("Contact data added successfully!")
        } else if self.deleted.is_some() {
            Some("Contact data deleted successfully!")
        } else if self.edited.is_some() {
            Some("Contact data edited successfully!")
        } else {
            None
        }
    }
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::err(format!(
            "Invalid JSON body: {} (expected: {})",
            err, expected
        ))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::contact_service::ServiceError;
    use crate::domain::contact::ContactForm;

    fn temp_state() -> (AppState, std::path::PathBuf) {
        let dir = std::env::temp_dir().join(format!("contact-state-{}", uuid::Uuid::new_v4()));
        let service = ContactService::open(dir.join("contacts.json")).unwrap();
        (AppState::new(service), dir)
    }

    #[tokio::test]
    async fn with_contacts_runs_service_calls_off_the_runtime() {
        let (state, dir) = temp_state();
        let form = ContactForm {
            name: "Ani".to_string(),
            email: "ani@example.com".to_string(),
            phone: "081234567890".to_string(),
            old_name: None,
        };
        let created = state
            .with_contacts(move |service| service.create(form))
            .await
            .unwrap();
        let listed = state.with_contacts(|service| service.list()).await.unwrap();
        assert_eq!(listed, vec![created]);
        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn with_contacts_passes_service_errors_through() {
        let (state, dir) = temp_state();
        let result = state
            .with_contacts(|service| service.get("Nobody"))
            .await;
        assert!(matches!(result, Err(ServiceError::NotFound(name)) if name == "Nobody"));
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn flash_message_follows_query_flag() {
        let flash = FlashQuery {
            deleted: Some("1".to_string()),
            ..FlashQuery::default()
        };
        assert_eq!(flash.message(), Some("Contact data deleted successfully!"));
        assert_eq!(FlashQuery::default().message(), None);
    }
}
