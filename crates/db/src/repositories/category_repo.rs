//! Repository for the `categories` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::category::{Category, CreateCategory};

const COLUMNS: &str = "id, title";

pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateCategory) -> Result<Category, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("INSERT INTO categories (title) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.title)
            .fetch_one(executor)
            .await
    }

    /// List all categories in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }
}
