//! HTML routes under `/contact`.

use crate::app::contact_service::ServiceError;
use crate::domain::contact::ContactForm;
use crate::transport::http::handlers::common::PageError;
use crate::transport::http::types::{AppState, FlashQuery};
use crate::transport::http::views;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

pub async fn list_handler(
    State(state): State<AppState>,
    Query(flash): Query<FlashQuery>,
) -> Result<Html<String>, PageError> {
    let contacts = state.with_contacts(|service| service.list()).await?;
    Ok(Html(views::contact_list_page(&contacts, flash.message())))
}

pub async fn add_form_handler() -> Html<String> {
    Html(views::add_contact_page(&ContactForm::default(), &[]))
}

pub async fn create_handler(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, PageError> {
    let submitted = form.clone();
    match state.with_contacts(move |service| service.create(submitted)).await {
        Ok(_) => Ok(Redirect::to("/contact?added=1").into_response()),
        Err(ServiceError::Validation(errors)) => {
            log::debug!("Rejected new contact '{}': {:?}", form.name, errors);
            Ok(Html(views::add_contact_page(&form, &errors)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Redirect, PageError> {
    state.with_contacts(move |service| service.delete(&name)).await?;
    Ok(Redirect::to("/contact?deleted=1"))
}

pub async fn edit_form_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, PageError> {
    let contact = state.with_contacts(move |service| service.get(&name)).await?;
    Ok(Html(views::edit_contact_page(&ContactForm::from(&contact), &[])))
}

pub async fn update_handler(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, PageError> {
    let old_name = form.old_name.clone().unwrap_or_else(|| form.name.clone());
    let (target, submitted) = (old_name.clone(), form.clone());
    match state
        .with_contacts(move |service| service.update(&target, submitted))
        .await
    {
        Ok(_) => Ok(Redirect::to("/contact?edited=1").into_response()),
        Err(ServiceError::Validation(errors)) => {
            log::debug!("Rejected edit of contact '{}': {:?}", old_name, errors);
            Ok(Html(views::edit_contact_page(&form, &errors)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn detail_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, PageError> {
    render_detail(&state, name).await
}

/// `/contact/update` is a POST target; a GET there is the detail page of a
/// contact named "update".
pub async fn update_path_detail_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, PageError> {
    render_detail(&state, "update".to_string()).await
}

async fn render_detail(state: &AppState, name: String) -> Result<Html<String>, PageError> {
    let contact = state.with_contacts(move |service| service.get(&name)).await?;
    Ok(Html(views::detail_page(&contact)))
}
