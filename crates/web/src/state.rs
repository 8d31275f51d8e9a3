use std::sync::Arc;

use crate::config::ServerConfig;
use crate::notify::MailNotifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Owner notification for new contact requests; `None` when SMTP is not configured.
    pub notifier: Option<Arc<MailNotifier>>,
}
