//! Repository for the `images` table.

use folio_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::image::{CreateImage, Image};

const COLUMNS: &str = "id, project_id, image";

pub struct ImageRepo;

impl ImageRepo {
    /// Insert a new image row, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateImage) -> Result<Image, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query =
            format!("INSERT INTO images (project_id, image) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Image>(&query)
            .bind(input.project_id)
            .bind(&input.image)
            .fetch_one(executor)
            .await
    }

    /// List the gallery of one project, in upload order.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Image>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
