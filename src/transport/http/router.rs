use crate::domain::contact::{Contact, ValidationError};
use crate::transport::http::handlers::{api, contacts, health, pages};
use crate::transport::http::types::{ApiResponse, AppState, ContactPayload};
use axum::handler::HandlerWithoutStateExt;
use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        api::list_contacts_handler,
        api::get_contact_handler,
        api::create_contact_handler,
        api::update_contact_handler,
        api::delete_contact_handler
    ),
    components(schemas(ApiResponse, ContactPayload, Contact, ValidationError))
)]
pub struct ApiDoc;

/// Builds the full application: HTML pages, JSON API, health check, and the
/// static directory for everything else.
pub fn create_router(app_state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_files = ServeDir::new(static_dir.as_ref())
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(pages::fallback_handler.into_service());

    // Every route answers an unsupported method with the same 404 as an unknown path.
    Router::new()
        .route("/", get(pages::index_handler).fallback(pages::fallback_handler))
        .route("/about", get(pages::about_handler).fallback(pages::fallback_handler))
        .route(
            "/contact",
            get(contacts::list_handler)
                .post(contacts::create_handler)
                .fallback(pages::fallback_handler),
        )
        .route("/contact/add", get(contacts::add_form_handler).fallback(pages::fallback_handler))
        .route(
            "/contact/update",
            get(contacts::update_path_detail_handler)
                .post(contacts::update_handler)
                .fallback(pages::fallback_handler),
        )
        .route(
            "/contact/delete/:name",
            get(contacts::delete_handler).fallback(pages::fallback_handler),
        )
        .route(
            "/contact/edit/:name",
            get(contacts::edit_form_handler).fallback(pages::fallback_handler),
        )
        .route("/contact/:name", get(contacts::detail_handler).fallback(pages::fallback_handler))
        .route("/health", get(health::healthcheck_handler).fallback(pages::fallback_handler))
        .route(
            "/api/contacts",
            get(api::list_contacts_handler)
                .post(api::create_contact_handler)
                .fallback(pages::fallback_handler),
        )
        .route(
            "/api/contacts/:name",
            get(api::get_contact_handler)
                .put(api::update_contact_handler)
                .delete(api::delete_contact_handler)
                .fallback(pages::fallback_handler),
        )
        .fallback_service(static_files)
        .with_state(app_state)
}
