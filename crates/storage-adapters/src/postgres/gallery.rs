//! Gallery image rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domains::gallery::{GalleryImage, NewGalleryImage};
use domains::ports::GalleryRepo;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub struct PgGalleryRepo {
    pool: PgPool,
}

impl PgGalleryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GalleryRepo for PgGalleryRepo {
    /// Inserts the whole batch inside one transaction so a mid-batch
    /// failure cannot leave partial rows behind.
    async fn insert_batch(
        &self,
        images: Vec<NewGalleryImage>,
    ) -> anyhow::Result<Vec<GalleryImage>> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(images.len());

        for image in images {
            let row = sqlx::query(
                "INSERT INTO gallery_images (id, url, storage_handle)
                 VALUES ($1, $2, $3)
                 RETURNING id, url, storage_handle, created_at",
            )
            .bind(Uuid::new_v4())
            .bind(&image.url)
            .bind(&image.storage_handle)
            .fetch_one(&mut *tx)
            .await?;

            inserted.push(map_row(&row)?);
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn list_newest_first(&self) -> anyhow::Result<Vec<GalleryImage>> {
        let rows = sqlx::query(
            "SELECT id, url, storage_handle, created_at
             FROM gallery_images
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<GalleryImage>> {
        let row = sqlx::query(
            "SELECT id, url, storage_handle, created_at
             FROM gallery_images
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row).transpose()
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn map_row(row: &PgRow) -> anyhow::Result<GalleryImage> {
    Ok(GalleryImage {
        id: row.try_get("id")?,
        url: row.try_get("url")?,
        storage_handle: row.try_get("storage_handle")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}
