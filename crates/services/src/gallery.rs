//! Gallery orchestration: list, upload, delete.

use std::sync::Arc;

use domains::error::{AppError, Result};
use domains::gallery::{
    is_allowed_image_type, GalleryImage, NewGalleryImage, StoredObject, UploadFile,
    UploadPolicy,
};
use domains::ports::{GalleryRepo, MediaStorage};
use tracing::warn;
use uuid::Uuid;

pub struct GalleryService {
    repo: Arc<dyn GalleryRepo>,
    storage: Arc<dyn MediaStorage>,
    policy: UploadPolicy,
}

impl GalleryService {
    pub fn new(
        repo: Arc<dyn GalleryRepo>,
        storage: Arc<dyn MediaStorage>,
        policy: UploadPolicy,
    ) -> Self {
        Self {
            repo,
            storage,
            policy,
        }
    }

    /// All images, newest first. An empty gallery is an empty list, not an
    /// error.
    pub async fn list(&self) -> Result<Vec<GalleryImage>> {
        self.repo
            .list_newest_first()
            .await
            .map_err(AppError::persistence)
    }

    /// Stores every file, then inserts the metadata batch. All-or-nothing:
    /// any failure deletes the objects already written before returning,
    /// so a partially-succeeded batch can never leave orphaned blobs or
    /// partial rows behind.
    pub async fn upload(&self, files: Vec<UploadFile>) -> Result<Vec<GalleryImage>> {
        self.validate(&files)?;

        let mut stored: Vec<StoredObject> = Vec::with_capacity(files.len());
        for file in &files {
            match self.storage.store(file).await {
                Ok(object) => stored.push(object),
                Err(err) => {
                    self.roll_back(&stored).await;
                    return Err(AppError::storage(err));
                }
            }
        }

        let rows = stored
            .iter()
            .map(|object| NewGalleryImage {
                url: object.url.clone(),
                storage_handle: Some(object.handle.clone()),
            })
            .collect();

        match self.repo.insert_batch(rows).await {
            Ok(images) => Ok(images),
            Err(err) => {
                self.roll_back(&stored).await;
                Err(AppError::persistence(err))
            }
        }
    }

    /// Deletes the record and its stored object. A failing storage delete
    /// is logged and swallowed so a drifted blob cannot make the row
    /// permanently undeletable.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let image = self
            .repo
            .find(id)
            .await
            .map_err(AppError::persistence)?
            .ok_or_else(|| AppError::NotFound("image", id.to_string()))?;

        match &image.storage_handle {
            Some(handle) => {
                if let Err(err) = self.storage.remove(handle).await {
                    warn!(%id, handle, error = %err, "storage delete failed; removing metadata anyway");
                }
            }
            None => warn!(%id, "image has no storage handle; skipping storage delete"),
        }

        let deleted = self.repo.delete(id).await.map_err(AppError::persistence)?;
        if !deleted {
            return Err(AppError::NotFound("image", id.to_string()));
        }
        Ok(())
    }

    /// Rejects the whole batch before any storage write happens.
    fn validate(&self, files: &[UploadFile]) -> Result<()> {
        if files.is_empty() {
            return Err(AppError::Validation("no files uploaded".into()));
        }
        if files.len() > self.policy.max_files {
            return Err(AppError::Validation(format!(
                "too many files: {} exceeds the limit of {}",
                files.len(),
                self.policy.max_files
            )));
        }
        for file in files {
            if !is_allowed_image_type(file.content_type.essence_str()) {
                return Err(AppError::Validation(format!(
                    "'{}' has disallowed type {}; only image files are allowed",
                    file.file_name, file.content_type
                )));
            }
            if file.bytes.len() > self.policy.max_file_bytes {
                return Err(AppError::Validation(format!(
                    "'{}' is {} bytes, above the per-file limit of {} bytes",
                    file.file_name,
                    file.bytes.len(),
                    self.policy.max_file_bytes
                )));
            }
            if !sniffs_as_image(&file.bytes) {
                return Err(AppError::Validation(format!(
                    "'{}' does not look like a supported image",
                    file.file_name
                )));
            }
        }
        Ok(())
    }

    async fn roll_back(&self, stored: &[StoredObject]) {
        for object in stored {
            if let Err(err) = self.storage.remove(&object.handle).await {
                warn!(handle = %object.handle, error = %err, "rollback delete failed; object orphaned");
            }
        }
    }
}

/// Magic-byte check that the payload really is one of the accepted
/// formats, independent of the declared content type.
fn sniffs_as_image(bytes: &[u8]) -> bool {
    matches!(
        image::guess_format(bytes),
        Ok(image::ImageFormat::Jpeg | image::ImageFormat::Png | image::ImageFormat::WebP)
    )
}
