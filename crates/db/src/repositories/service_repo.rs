//! Repository for the `services` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::service::{CreateService, Service};

const COLUMNS: &str = "id, title, description, price";

pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateService) -> Result<Service, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO services (title, description, price)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.price)
            .fetch_one(executor)
            .await
    }

    /// List all services in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY id");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }
}
