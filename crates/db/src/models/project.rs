//! Project entity model and DTOs.

use folio_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::category::Category;

/// A row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub category_id: DbId,
    pub area: String,
    pub date: Date,
    pub description: String,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub category_id: DbId,
    pub area: String,
    pub date: Date,
    pub description: String,
}

/// A project joined with its category, as shown on listing pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListing {
    pub id: DbId,
    pub title: String,
    pub category: Category,
    pub area: String,
    pub date: Date,
    pub description: String,
}

/// Flat join row; `category_*` columns are aliased in the query.
#[derive(Debug, FromRow)]
pub(crate) struct ProjectListingRow {
    pub id: DbId,
    pub title: String,
    pub category_id: DbId,
    pub category_title: String,
    pub area: String,
    pub date: Date,
    pub description: String,
}

impl From<ProjectListingRow> for ProjectListing {
    fn from(row: ProjectListingRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            category: Category {
                id: row.category_id,
                title: row.category_title,
            },
            area: row.area,
            date: row.date,
            description: row.description,
        }
    }
}
