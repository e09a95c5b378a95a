use crate::transport::http::handlers::common::PageError;
use crate::transport::http::types::AppState;
use crate::transport::http::views;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let contacts = state.with_contacts(|service| service.list()).await?;
    Ok(Html(views::home_page(&contacts)))
}

pub async fn about_handler() -> Html<String> {
    Html(views::about_page())
}

/// Last resort when neither a route nor a static file matched, and the method
/// fallback of every route.
pub async fn fallback_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404")
}
