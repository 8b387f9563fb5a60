//! # storage-adapters
//!
//! Concrete implementations of the `domains` ports: Postgres repositories
//! and the two media-storage variants (local disk and S3-compatible
//! object store).

pub mod postgres;

#[cfg(any(feature = "media-local", feature = "media-s3"))]
mod object_name;

#[cfg(feature = "media-local")]
pub mod media_local;
#[cfg(feature = "media-s3")]
pub mod media_s3;

#[cfg(feature = "media-local")]
pub use media_local::LocalMediaStorage;
#[cfg(feature = "media-s3")]
pub use media_s3::{S3MediaStorage, S3Settings};

pub use postgres::{connect, PgGalleryRepo, PgLandingRepo, PgPlacementRepo, MIGRATOR};
