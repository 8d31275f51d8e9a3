//! Offered service model and DTO.

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `services` table.
///
/// `price` is free text ("from 100 rubles"), not a number.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub price: String,
}

/// DTO for creating a new service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateService {
    pub title: String,
    pub description: String,
    pub price: String,
}
