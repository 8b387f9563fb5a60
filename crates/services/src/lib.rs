//! # services
//!
//! Use-case orchestration for the chalkline backend. Services own
//! validation and failure policy; persistence and object storage go
//! through the ports defined in `domains`.

pub mod defaults;
pub mod gallery;
pub mod landing;
pub mod placement;

pub use gallery::GalleryService;
pub use landing::LandingService;
pub use placement::PlacementService;
