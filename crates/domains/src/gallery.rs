//! Gallery domain: uploaded image assets and their metadata records.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata record for one stored image.
///
/// `created_at` is the sole sort key for listing (newest first). Every
/// record has a matching object in the storage backend until it is
/// deleted; see `GalleryService::delete` for the drift tolerance rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: Uuid,
    /// Absolute URL at which the image is publicly retrievable.
    pub url: String,
    /// Deletion handle understood by the storage backend. Nullable to
    /// tolerate rows whose storage object drifted out from under them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_handle: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Row values for a batch insert, one per stored file.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGalleryImage {
    pub url: String,
    pub storage_handle: Option<String>,
}

/// One file payload received from the admin panel.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: mime::Mime,
    pub bytes: Bytes,
}

/// Normalized result of a storage write: where the object is served from
/// and the handle needed to delete it later. Both storage variants
/// (local disk, remote object store) return this pair.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub url: String,
    pub handle: String,
}

/// Per-call upload limits. The MIME allowlist is fixed; the numeric caps
/// are deployment configuration.
#[derive(Debug, Clone, Copy)]
pub struct UploadPolicy {
    pub max_files: usize,
    pub max_file_bytes: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_files: 20,
            max_file_bytes: 5 * 1024 * 1024,
        }
    }
}

/// MIME types accepted for gallery uploads.
pub const ALLOWED_IMAGE_TYPES: &[&str] =
    &["image/jpeg", "image/jpg", "image/png", "image/webp"];

pub fn is_allowed_image_type(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(content_type))
}
