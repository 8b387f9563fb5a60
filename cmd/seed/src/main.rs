//! Seeds the landing document with the built-in defaults.
//!
//! Safe to re-run: an existing document is overwritten with the
//! defaults, matching an admin re-saving the stock content.

use anyhow::Context;
use configs::Settings;
use domains::ports::LandingRepo;
use secrecy::ExposeSecret;
use services::defaults::default_landing_sections;
use storage_adapters::{connect, PgLandingRepo, MIGRATOR};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load().context("loading settings")?;

    let pool = connect(
        settings.database.url.expose_secret(),
        settings.database.max_connections,
    )
    .await
    .context("connecting to postgres")?;
    MIGRATOR.run(&pool).await.context("running migrations")?;

    let repo = PgLandingRepo::new(pool);
    let existed = repo.find().await?.is_some();

    let document = repo.upsert(&default_landing_sections()).await?;

    if existed {
        info!(updated_at = ?document.updated_at, "landing document already existed; replaced with defaults");
    } else {
        info!("landing document seeded");
    }
    Ok(())
}
