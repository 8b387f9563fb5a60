//! # api-adapters
//!
//! HTTP adapters over the service layer.

#[cfg(feature = "web-axum")]
pub mod web;

#[cfg(feature = "web-axum")]
pub use web::{router, ApiContext};
