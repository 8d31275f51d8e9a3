use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `info` table: the "about the author" block.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Info {
    pub id: DbId,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInfo {
    pub description: String,
    pub image: String,
}
