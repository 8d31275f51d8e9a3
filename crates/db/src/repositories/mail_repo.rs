//! Repository for the `mails` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::mail::{CreateMail, Mail};

const COLUMNS: &str = "id, name, phone_number, contact, memo, created_at";

pub struct MailRepo;

impl MailRepo {
    /// Insert a visitor submission, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateMail) -> Result<Mail, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO mails (name, phone_number, contact, memo)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mail>(&query)
            .bind(&input.name)
            .bind(&input.phone_number)
            .bind(&input.contact)
            .bind(&input.memo)
            .fetch_one(executor)
            .await
    }

    /// List submissions, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Mail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mails ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Mail>(&query).fetch_all(pool).await
    }
}
