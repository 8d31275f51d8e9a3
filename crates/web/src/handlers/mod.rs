//! Page handlers. Each view loads its context through a public
//! `*_context` function and renders it with [`render`].

pub mod blog;
pub mod portfolio;

use axum::extract::OriginalUri;
use axum::response::Html;

use crate::error::{AppError, AppResult};
use crate::templates::PageTemplate;

/// Render a page context into an HTML response body.
pub fn render<T: PageTemplate>(page: &T) -> AppResult<Html<String>> {
    tracing::debug!(template = T::PATH, "Rendering page");
    Ok(Html(page.render()?))
}

/// Fallback for URLs that match no route.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::PageNotFound(uri.path().to_string())
}
