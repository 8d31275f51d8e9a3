//! Repository for the `contacts` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::contact::{Contact, CreateContact};

const COLUMNS: &str = "id, telephone, email, description";

pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact entry, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateContact) -> Result<Contact, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO contacts (telephone, email, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(input.telephone)
            .bind(&input.email)
            .bind(&input.description)
            .fetch_one(executor)
            .await
    }

    /// List all contact entries in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY id");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }
}
