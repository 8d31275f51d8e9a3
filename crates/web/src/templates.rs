//! Page templates and their contexts.
//!
//! Each struct is both the template context and the askama template; the
//! field names are the names the HTML files refer to. Templates live under
//! `crates/web/templates/`.

use askama::Template;
use folio_core::forms::MailForm;
use folio_db::models::blog::Blog;
use folio_db::models::contact::Contact;
use folio_db::models::image::Image;
use folio_db::models::info::Info;
use folio_db::models::project::ProjectListing;
use folio_db::models::service::Service;

/// A renderable page with a stable template path, used in logs and errors.
pub trait PageTemplate: Template {
    const PATH: &'static str;
}

macro_rules! page_path {
    ($ty:ty, $path:literal) => {
        impl PageTemplate for $ty {
            const PATH: &'static str = $path;
        }
    };
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "portfolio/home.html")]
pub struct HomeTemplate {
    pub projects: Vec<ProjectListing>,
}
page_path!(HomeTemplate, "portfolio/home.html");

#[derive(Template)]
#[template(path = "portfolio/about.html")]
pub struct AboutTemplate {
    pub info: Vec<Info>,
}
page_path!(AboutTemplate, "portfolio/about.html");

#[derive(Template)]
#[template(path = "portfolio/all_projects.html")]
pub struct AllProjectsTemplate {
    pub projects: Vec<ProjectListing>,
}
page_path!(AllProjectsTemplate, "portfolio/all_projects.html");

#[derive(Template)]
#[template(path = "portfolio/project_info.html")]
pub struct ProjectInfoTemplate {
    pub project: ProjectListing,
    pub images: Vec<Image>,
}
page_path!(ProjectInfoTemplate, "portfolio/project_info.html");

#[derive(Template)]
#[template(path = "portfolio/services.html")]
pub struct ServicesTemplate {
    pub services: Vec<Service>,
}
page_path!(ServicesTemplate, "portfolio/services.html");

/// Contact page: owner contacts plus the visitor form.
#[derive(Template)]
#[template(path = "portfolio/contacts.html")]
pub struct ContactsTemplate {
    pub contacts: Vec<Contact>,
    pub form: MailForm,
    /// Set after a successful submission redirect.
    pub sent: bool,
}
page_path!(ContactsTemplate, "portfolio/contacts.html");

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "blog/all_blogs.html")]
pub struct AllBlogsTemplate {
    pub blogs: Vec<Blog>,
}
page_path!(AllBlogsTemplate, "blog/all_blogs.html");

#[derive(Template)]
#[template(path = "blog/blog_detail.html")]
pub struct BlogDetailTemplate {
    pub blog: Blog,
}
page_path!(BlogDetailTemplate, "blog/blog_detail.html");

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    /// Machine-readable error code, e.g. `NOT_FOUND`.
    pub code: &'static str,
    pub title: String,
    pub message: String,
}
page_path!(ErrorTemplate, "error.html");
