//! Blog listing and single-post pages.

use axum::extract::rejection::PathRejection;
use axum::extract::{OriginalUri, Path, State};
use axum::response::Html;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::repositories::BlogRepo;
use folio_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::render;
use crate::state::AppState;
use crate::templates::{AllBlogsTemplate, BlogDetailTemplate};

/// Newest posts first.
pub async fn all_blogs_context(pool: &DbPool) -> AppResult<AllBlogsTemplate> {
    let blogs = BlogRepo::list(pool).await?;
    Ok(AllBlogsTemplate { blogs })
}

pub async fn blog_detail_context(pool: &DbPool, id: DbId) -> AppResult<BlogDetailTemplate> {
    let blog = BlogRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Blog", id }))?;
    Ok(BlogDetailTemplate { blog })
}

/// GET /blog
pub async fn all_blogs(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&all_blogs_context(&state.pool).await?)
}

/// GET /blog/{id}
pub async fn blog_detail(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Html<String>> {
    let Ok(Path(id)) = id else {
        return Err(AppError::PageNotFound(uri.path().to_string()));
    };
    render(&blog_detail_context(&state.pool, id).await?)
}
