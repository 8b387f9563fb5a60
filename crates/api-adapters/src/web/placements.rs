//! Placement endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use domains::placement::{NewPlacement, Placement, PlacementUpdate};
use serde_json::{json, Value};
use uuid::Uuid;

use super::error::ApiError;
use super::ApiContext;

pub async fn list_placements(
    State(ctx): State<Arc<ApiContext>>,
) -> Result<Json<Vec<Placement>>, ApiError> {
    Ok(Json(ctx.placements.list().await?))
}

pub async fn create_placement(
    State(ctx): State<Arc<ApiContext>>,
    Json(placement): Json<NewPlacement>,
) -> Result<(StatusCode, Json<Placement>), ApiError> {
    let created = ctx.placements.create(placement).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_placement(
    State(ctx): State<Arc<ApiContext>>,
    Path(id): Path<Uuid>,
    Json(update): Json<PlacementUpdate>,
) -> Result<Json<Placement>, ApiError> {
    Ok(Json(ctx.placements.update(id, update).await?))
}

pub async fn delete_placement(
    State(ctx): State<Arc<ApiContext>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    ctx.placements.delete(id).await?;
    Ok(Json(json!({ "message": "Placement deleted successfully" })))
}
