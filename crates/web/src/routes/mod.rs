pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{blog, portfolio};
use crate::state::AppState;

/// Route patterns of the public pages.
pub mod paths {
    pub const HOME: &str = "/";
    pub const ABOUT: &str = "/about";
    pub const ALL_PROJECTS: &str = "/projects";
    pub const PROJECT_INFO: &str = "/projects/{id}";
    pub const SERVICES: &str = "/services";
    pub const CONTACTS: &str = "/contacts";
    /// Where a successful contact form submission lands.
    pub const CONTACTS_SENT: &str = "/contacts?sent=1";
    pub const BLOG: &str = "/blog";
    pub const BLOG_DETAIL: &str = "/blog/{id}";
}

/// Build the public site route tree.
///
/// ```text
/// GET  /                  -> home
/// GET  /about             -> about
/// GET  /projects          -> all_projects
/// GET  /projects/{id}     -> project_info
/// GET  /services          -> services
/// GET  /contacts          -> create_email_form
/// POST /contacts          -> create_email
/// GET  /blog              -> all_blogs
/// GET  /blog/{id}         -> blog_detail
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route(paths::HOME, get(portfolio::home))
        .route(paths::ABOUT, get(portfolio::about))
        .route(paths::ALL_PROJECTS, get(portfolio::all_projects))
        .route(paths::PROJECT_INFO, get(portfolio::project_info))
        .route(paths::SERVICES, get(portfolio::services))
        .route(
            paths::CONTACTS,
            get(portfolio::create_email_form).post(portfolio::create_email),
        )
        .route(paths::BLOG, get(blog::all_blogs))
        .route(paths::BLOG_DETAIL, get(blog::blog_detail))
}
