//! Site-owner contact details. Visitor submissions live in [`super::mail`].

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    /// Stored as a number, e.g. `89991112233`.
    pub telephone: i64,
    pub email: String,
    pub description: String,
}

/// DTO for creating a new contact entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub telephone: i64,
    pub email: String,
    pub description: String,
}
