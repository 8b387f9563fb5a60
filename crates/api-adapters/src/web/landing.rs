//! Landing-content endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use domains::landing::{LandingDocument, LandingPatch};
use serde::Serialize;

use super::error::ApiError;
use super::ApiContext;

#[derive(Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub landing: LandingDocument,
}

pub async fn get_landing(
    State(ctx): State<Arc<ApiContext>>,
) -> Result<Json<LandingDocument>, ApiError> {
    Ok(Json(ctx.landing.get().await?))
}

pub async fn save_landing(
    State(ctx): State<Arc<ApiContext>>,
    Json(patch): Json<LandingPatch>,
) -> Result<Json<SaveResponse>, ApiError> {
    let landing = ctx.landing.save(patch).await?;
    Ok(Json(SaveResponse {
        success: true,
        landing,
    }))
}
