//! The singleton landing-content row.
//!
//! The row is keyed by a constant boolean pinned TRUE by a CHECK
//! constraint, so "at most one document" is enforced by the schema rather
//! than by query convention.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domains::landing::{LandingDocument, LandingSections};
use domains::ports::LandingRepo;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

pub struct PgLandingRepo {
    pool: PgPool,
}

impl PgLandingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LandingRepo for PgLandingRepo {
    async fn find(&self) -> anyhow::Result<Option<LandingDocument>> {
        let row = sqlx::query(
            "SELECT content, created_at, updated_at FROM landing_content WHERE singleton",
        )
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    /// One atomic statement, so concurrent saves resolve to
    /// last-write-wins without ever violating the singleton constraint.
    async fn upsert(&self, sections: &LandingSections) -> anyhow::Result<LandingDocument> {
        let row = sqlx::query(
            "INSERT INTO landing_content (singleton, content)
             VALUES (TRUE, $1)
             ON CONFLICT (singleton)
             DO UPDATE SET content = EXCLUDED.content, updated_at = now()
             RETURNING content, created_at, updated_at",
        )
        .bind(Json(sections))
        .fetch_one(&self.pool)
        .await?;

        map_row(&row)
    }
}

fn map_row(row: &PgRow) -> anyhow::Result<LandingDocument> {
    let Json(sections): Json<LandingSections> = row.try_get("content")?;
    Ok(LandingDocument {
        sections,
        created_at: Some(row.try_get::<DateTime<Utc>, _>("created_at")?),
        updated_at: Some(row.try_get::<DateTime<Utc>, _>("updated_at")?),
    })
}
