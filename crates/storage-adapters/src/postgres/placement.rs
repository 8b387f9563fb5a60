//! Placement rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domains::placement::{NewPlacement, Placement, PlacementUpdate};
use domains::ports::PlacementRepo;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub struct PgPlacementRepo {
    pool: PgPool,
}

impl PgPlacementRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlacementRepo for PgPlacementRepo {
    async fn list_newest_first(&self) -> anyhow::Result<Vec<Placement>> {
        let rows = sqlx::query(
            "SELECT id, student_name, course, company, position, is_active,
                    created_at, updated_at
             FROM placements
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    async fn insert(&self, placement: NewPlacement) -> anyhow::Result<Placement> {
        let row = sqlx::query(
            "INSERT INTO placements (id, student_name, course, company, position, is_active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, student_name, course, company, position, is_active,
                       created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(&placement.student_name)
        .bind(&placement.course)
        .bind(&placement.company)
        .bind(&placement.position)
        .bind(placement.is_active)
        .fetch_one(&self.pool)
        .await?;

        map_row(&row)
    }

    async fn update(
        &self,
        id: Uuid,
        update: PlacementUpdate,
    ) -> anyhow::Result<Option<Placement>> {
        let row = sqlx::query(
            "UPDATE placements SET
                 student_name = COALESCE($2, student_name),
                 course       = COALESCE($3, course),
                 company      = COALESCE($4, company),
                 position     = COALESCE($5, position),
                 is_active    = COALESCE($6, is_active),
                 updated_at   = now()
             WHERE id = $1
             RETURNING id, student_name, course, company, position, is_active,
                       created_at, updated_at",
        )
        .bind(id)
        .bind(&update.student_name)
        .bind(&update.course)
        .bind(&update.company)
        .bind(&update.position)
        .bind(update.is_active)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM placements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn map_row(row: &PgRow) -> anyhow::Result<Placement> {
    Ok(Placement {
        id: row.try_get("id")?,
        student_name: row.try_get("student_name")?,
        course: row.try_get("course")?,
        company: row.try_get("company")?,
        position: row.try_get("position")?,
        is_active: row.try_get("is_active")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
    })
}
