use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use folio_core::error::CoreError;

use crate::templates::ErrorTemplate;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce a rendered error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A page template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// No route or record matches the requested URL.
    #[error("Page not found: {0}")]
    PageNotFound(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// HTTP status, error code and the message that is safe to show visitors.
    pub fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Storage(err) => {
                    tracing::error!(error = %err, "Media storage error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(sqlx::Error::RowNotFound) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            ),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }

            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("No page at {path}"),
            ),
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();
        error_page(status, code, message)
    }
}

/// Render `error.html` for `status`, falling back to plain text if the
/// error template itself cannot be rendered.
pub fn error_page(status: StatusCode, code: &'static str, message: String) -> Response {
    let page = ErrorTemplate {
        status: status.as_u16(),
        code,
        title: status
            .canonical_reason()
            .unwrap_or("Error")
            .to_string(),
        message,
    };

    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Error page failed to render");
            (status, page.message).into_response()
        }
    }
}
