//! # Port Traits
//!
//! Contracts between the service layer and its collaborators. Adapters in
//! `storage-adapters` implement these; the `testing` feature exposes
//! mockall mocks for external test crates.

use async_trait::async_trait;
use uuid::Uuid;

use crate::gallery::{GalleryImage, NewGalleryImage, StoredObject, UploadFile};
use crate::landing::{LandingDocument, LandingSections};
use crate::placement::{NewPlacement, Placement, PlacementUpdate};

#[cfg(any(test, feature = "testing"))]
use mockall::automock;

/// Metadata persistence for gallery images.
#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait GalleryRepo: Send + Sync {
    /// Inserts the whole batch atomically; either all rows land or none.
    async fn insert_batch(
        &self,
        images: Vec<NewGalleryImage>,
    ) -> anyhow::Result<Vec<GalleryImage>>;

    async fn list_newest_first(&self) -> anyhow::Result<Vec<GalleryImage>>;

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<GalleryImage>>;

    /// Returns false when no row had the given id.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}

/// Persistence for the single landing-content document.
#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait LandingRepo: Send + Sync {
    async fn find(&self) -> anyhow::Result<Option<LandingDocument>>;

    /// Update-if-exists-else-create against the singleton row.
    async fn upsert(&self, sections: &LandingSections) -> anyhow::Result<LandingDocument>;
}

/// Persistence for placement records.
#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait PlacementRepo: Send + Sync {
    async fn list_newest_first(&self) -> anyhow::Result<Vec<Placement>>;

    async fn insert(&self, placement: NewPlacement) -> anyhow::Result<Placement>;

    /// Returns None when no row had the given id.
    async fn update(
        &self,
        id: Uuid,
        update: PlacementUpdate,
    ) -> anyhow::Result<Option<Placement>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}

/// Object storage contract for image binaries. Implementations must keep
/// `store` and `remove` symmetric: the handle returned by `store` is the
/// only token `remove` will ever be called with.
#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Writes the payload and returns its public URL plus deletion handle.
    async fn store(&self, file: &UploadFile) -> anyhow::Result<StoredObject>;

    /// Deletes by handle. Callers decide whether a failure here is fatal.
    async fn remove(&self, handle: &str) -> anyhow::Result<()>;
}
