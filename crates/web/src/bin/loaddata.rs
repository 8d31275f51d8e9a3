//! Seed the site from a JSON fixture.
//!
//! ```text
//! folio-loaddata <fixture.json>
//! ```
//!
//! Uses the same `DATABASE_URL` and `MEDIA_ROOT` as the server.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::media::LocalStorage;
use folio_web::config::ServerConfig;
use folio_web::fixtures::load_fixture;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(fixture), None) = (args.next(), args.next()) else {
        bail!("usage: folio-loaddata <fixture.json>");
    };
    let fixture = PathBuf::from(fixture);

    let config = ServerConfig::from_env();
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = folio_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    folio_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let storage = LocalStorage::new(&config.media_root);
    tracing::info!(
        fixture = %fixture.display(),
        media_root = %storage.root().display(),
        "Loading fixture"
    );
    let summary = load_fixture(&pool, &storage, &fixture)
        .await
        .with_context(|| format!("Failed to load {}", fixture.display()))?;

    println!(
        "Installed {} categories, {} projects, {} images, {} services, {} info, {} contacts, {} blogs",
        summary.categories,
        summary.projects,
        summary.images,
        summary.services,
        summary.info,
        summary.contacts,
        summary.blogs,
    );
    Ok(())
}
