//! Blog post model and DTO.

use std::fmt;

use folio_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `blogs` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Blog {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub date: Date,
}

impl fmt::Display for Blog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// DTO for creating a new blog post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlog {
    pub title: String,
    pub description: String,
    pub image: String,
    pub date: Date,
}
