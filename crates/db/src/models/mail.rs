//! Visitor-submitted contact requests.

use folio_core::forms::MailInput;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `mails` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Mail {
    pub id: DbId,
    pub name: String,
    pub phone_number: String,
    pub contact: String,
    pub memo: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a mail. Built from a validated `MailForm`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMail {
    pub name: String,
    pub phone_number: String,
    pub contact: String,
    pub memo: String,
}

impl From<&MailInput> for CreateMail {
    fn from(input: &MailInput) -> Self {
        Self {
            name: input.name.clone(),
            phone_number: input.phone_number.clone(),
            contact: input.contact.clone(),
            memo: input.memo.clone(),
        }
    }
}
