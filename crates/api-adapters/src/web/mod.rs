//! Axum router and shared request context.

pub mod error;
pub mod gallery;
pub mod health;
pub mod landing;
pub mod placements;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use services::{GalleryService, LandingService, PlacementService};

/// Shared state for all handlers.
pub struct ApiContext {
    pub gallery: GalleryService,
    pub landing: LandingService,
    pub placements: PlacementService,
    /// Request body cap for the multipart upload route, sized from the
    /// upload policy by the binary.
    pub upload_body_limit: usize,
}

/// Builds the `/api` surface. Transport-level layers (CORS, tracing,
/// static file serving) are attached by the binary.
pub fn router(ctx: Arc<ApiContext>) -> Router {
    let upload_body_limit = ctx.upload_body_limit;

    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/landing",
            get(landing::get_landing).post(landing::save_landing),
        )
        .route("/api/gallery", get(gallery::list_images))
        .route(
            "/api/gallery/upload",
            post(gallery::upload_images).layer(DefaultBodyLimit::max(upload_body_limit)),
        )
        .route("/api/gallery/{id}", delete(gallery::delete_image))
        .route(
            "/api/placements",
            get(placements::list_placements).post(placements::create_placement),
        )
        .route(
            "/api/placements/{id}",
            patch(placements::update_placement).delete(placements::delete_placement),
        )
        .with_state(ctx)
}
