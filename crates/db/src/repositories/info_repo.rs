//! Repository for the `info` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::info::{CreateInfo, Info};

const COLUMNS: &str = "id, description, image";

pub struct InfoRepo;

impl InfoRepo {
    pub async fn create<'e, E>(executor: E, input: &CreateInfo) -> Result<Info, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query =
            format!("INSERT INTO info (description, image) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Info>(&query)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_one(executor)
            .await
    }

    /// All info blocks. Usually there is exactly one.
    pub async fn list(pool: &PgPool) -> Result<Vec<Info>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM info ORDER BY id");
        sqlx::query_as::<_, Info>(&query).fetch_all(pool).await
    }
}
