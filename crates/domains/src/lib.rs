//! # domains
//!
//! The central domain models and port definitions for the chalkline
//! content backend.

pub mod error;
pub mod gallery;
pub mod landing;
pub mod placement;
pub mod ports;

// Re-exporting for easier access in other crates
pub use error::*;
pub use gallery::*;
pub use landing::*;
pub use placement::*;
pub use ports::*;
