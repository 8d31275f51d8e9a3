//! Project gallery image model and DTO.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `images` table. `image` is relative to the media root.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub project_id: DbId,
    pub image: String,
}

/// DTO for attaching an already-stored image to a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateImage {
    pub project_id: DbId,
    pub image: String,
}
