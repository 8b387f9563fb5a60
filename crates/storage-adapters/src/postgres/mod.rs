//! Postgres persistence via sqlx.

use sqlx::postgres::{PgPool, PgPoolOptions};

mod gallery;
mod landing;
mod placement;

pub use gallery::PgGalleryRepo;
pub use landing::PgLandingRepo;
pub use placement::PgPlacementRepo;

/// Embedded migrations, run by the binaries at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}
