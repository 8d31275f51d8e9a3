//! Email notification of new contact requests via SMTP.
//!
//! [`MailNotifier`] wraps the `lettre` async SMTP transport to forward each
//! accepted contact form to the site owner as a plain-text email.
//! Configuration is loaded from environment variables; if `SMTP_HOST` or
//! `MAIL_NOTIFY_TO` is not set, [`EmailConfig::from_env`] returns `None` and
//! no notifier is constructed.

use folio_db::models::mail::Mail;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@folio.local";

/// Configuration for the SMTP notifier.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
    /// Site owner's address that receives the notifications.
    pub notify_to: String,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` or `MAIL_NOTIFY_TO` is not set.
    ///
    /// | Variable         | Required | Default               |
    /// |------------------|----------|-----------------------|
    /// | `SMTP_HOST`      | yes      | none                  |
    /// | `MAIL_NOTIFY_TO` | yes      | none                  |
    /// | `SMTP_PORT`      | no       | `587`                 |
    /// | `SMTP_FROM`      | no       | `noreply@folio.local` |
    /// | `SMTP_USER`      | no       | none                  |
    /// | `SMTP_PASSWORD`  | no       | none                  |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        let notify_to = std::env::var("MAIL_NOTIFY_TO").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
            notify_to,
        })
    }
}

// ---------------------------------------------------------------------------
// MailNotifier
// ---------------------------------------------------------------------------

/// Forwards visitor contact requests to the site owner.
pub struct MailNotifier {
    config: EmailConfig,
}

impl MailNotifier {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Build the notification message for `mail`.
    pub fn compose(&self, mail: &Mail) -> Result<Message, EmailError> {
        let subject = format!("[Folio] New contact request from {}", mail.name);
        let body = format!(
            "Name: {}\nPhone: {}\nContact: {}\nReceived: {}\n\n{}",
            mail.name, mail.phone_number, mail.contact, mail.created_at, mail.memo
        );

        Message::builder()
            .from(self.config.from_address.parse()?)
            .to(self.config.notify_to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))
    }

    /// Send the notification for `mail` over SMTP.
    pub async fn notify(&self, mail: &Mail) -> Result<(), EmailError> {
        let email = self.compose(mail)?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(mail_id = mail.id, to = %self.config.notify_to, "Contact notification sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
