//! Repository for the `blogs` table.

use folio_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::blog::{Blog, CreateBlog};

const COLUMNS: &str = "id, title, description, image, date";

pub struct BlogRepo;

impl BlogRepo {
    /// Insert a new blog post, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateBlog) -> Result<Blog, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO blogs (title, description, image, date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.date)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs WHERE id = $1");
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List posts, newest date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Blog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs ORDER BY date DESC, id DESC");
        sqlx::query_as::<_, Blog>(&query).fetch_all(pool).await
    }
}
