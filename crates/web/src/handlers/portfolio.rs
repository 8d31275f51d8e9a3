//! Handlers for the portfolio pages and the contact form.

use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{OriginalUri, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use folio_core::error::CoreError;
use folio_core::forms::{MailForm, MailInput};
use folio_core::types::DbId;
use folio_db::models::mail::CreateMail;
use folio_db::repositories::{ContactRepo, ImageRepo, InfoRepo, MailRepo, ProjectRepo, ServiceRepo};
use folio_db::DbPool;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::render;
use crate::routes::paths;
use crate::state::AppState;
use crate::templates::{
    AboutTemplate, AllProjectsTemplate, ContactsTemplate, HomeTemplate, ProjectInfoTemplate,
    ServicesTemplate,
};

// ---------------------------------------------------------------------------
// Contexts
// ---------------------------------------------------------------------------

pub async fn home_context(pool: &DbPool) -> AppResult<HomeTemplate> {
    let projects = ProjectRepo::list_with_category(pool).await?;
    Ok(HomeTemplate { projects })
}

pub async fn about_context(pool: &DbPool) -> AppResult<AboutTemplate> {
    let info = InfoRepo::list(pool).await?;
    Ok(AboutTemplate { info })
}

pub async fn all_projects_context(pool: &DbPool) -> AppResult<AllProjectsTemplate> {
    let projects = ProjectRepo::list_with_category(pool).await?;
    Ok(AllProjectsTemplate { projects })
}

/// One project with its gallery. Unknown ids are a `NotFound`.
pub async fn project_info_context(pool: &DbPool, id: DbId) -> AppResult<ProjectInfoTemplate> {
    let project = ProjectRepo::find_listing_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let images = ImageRepo::list_by_project(pool, project.id).await?;
    Ok(ProjectInfoTemplate { project, images })
}

pub async fn services_context(pool: &DbPool) -> AppResult<ServicesTemplate> {
    let services = ServiceRepo::list(pool).await?;
    Ok(ServicesTemplate { services })
}

pub async fn contacts_context(
    pool: &DbPool,
    form: MailForm,
    sent: bool,
) -> AppResult<ContactsTemplate> {
    let contacts = ContactRepo::list(pool).await?;
    Ok(ContactsTemplate {
        contacts,
        form,
        sent,
    })
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&home_context(&state.pool).await?)
}

/// GET /about
pub async fn about(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&about_context(&state.pool).await?)
}

/// GET /projects
pub async fn all_projects(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&all_projects_context(&state.pool).await?)
}

/// GET /projects/{id}
///
/// A non-numeric id is treated like a missing page rather than a bad request.
pub async fn project_info(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Html<String>> {
    let Ok(Path(id)) = id else {
        return Err(AppError::PageNotFound(uri.path().to_string()));
    };
    render(&project_info_context(&state.pool, id).await?)
}

/// GET /services
pub async fn services(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&services_context(&state.pool).await?)
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ContactsQuery {
    /// Present after the post-submit redirect.
    pub sent: Option<String>,
}

/// GET /contacts
pub async fn create_email_form(
    State(state): State<AppState>,
    Query(query): Query<ContactsQuery>,
) -> AppResult<Html<String>> {
    let page = contacts_context(&state.pool, MailForm::unbound(), query.sent.is_some()).await?;
    render(&page)
}

/// POST /contacts
///
/// A valid submission is stored and answered with a 303 redirect back to
/// the contact page; an invalid one re-renders the page with field errors.
/// A body that cannot be read as a form re-renders an empty form with the
/// rejection's status.
pub async fn create_email(
    State(state): State<AppState>,
    input: Result<Form<MailInput>, FormRejection>,
) -> AppResult<Response> {
    let input = match input {
        Ok(Form(input)) => input,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Contact form body rejected");
            let page = contacts_context(&state.pool, MailForm::unbound(), false).await?;
            return Ok((rejection.status(), render(&page)?).into_response());
        }
    };

    let form = MailForm::bind(input);
    let new_mail = form.cleaned_data().map(CreateMail::from);

    let Some(new_mail) = new_mail else {
        tracing::debug!(fields = ?form.errors().keys().collect::<Vec<_>>(), "Contact form rejected");
        let page = contacts_context(&state.pool, form, false).await?;
        return Ok(render(&page)?.into_response());
    };

    let mail = MailRepo::create(&state.pool, &new_mail).await?;
    tracing::info!(mail_id = mail.id, "Contact request stored");

    // Delivery never blocks or fails the response.
    if let Some(notifier) = state.notifier.clone() {
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(&mail).await {
                tracing::warn!(mail_id = mail.id, error = %e, "Failed to send contact notification");
            }
        });
    }

    Ok(Redirect::to(paths::CONTACTS_SENT).into_response())
}
