//! Gallery endpoints.

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use domains::gallery::{GalleryImage, UploadFile};
use serde_json::{json, Value};
use uuid::Uuid;

use super::error::ApiError;
use super::ApiContext;

pub async fn list_images(
    State(ctx): State<Arc<ApiContext>>,
) -> Result<Json<Vec<GalleryImage>>, ApiError> {
    Ok(Json(ctx.gallery.list().await?))
}

/// Accepts a multipart form with repeated `images` fields, as submitted
/// by the admin panel.
pub async fn upload_images(
    State(ctx): State<Arc<ApiContext>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Vec<GalleryImage>>), ApiError> {
    let files = collect_image_fields(multipart).await?;
    let created = ctx.gallery.upload(files).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_image(
    State(ctx): State<Arc<ApiContext>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    ctx.gallery.delete(id).await?;
    Ok(Json(json!({ "message": "Image deleted successfully" })))
}

async fn collect_image_fields(mut multipart: Multipart) -> Result<Vec<UploadFile>, ApiError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::bad_request(format!("malformed multipart body: {err}")))?
    {
        if field.name() != Some("images") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .and_then(|ct| ct.parse::<mime::Mime>().ok())
            .unwrap_or_else(|| mime_guess::from_path(&file_name).first_or_octet_stream());
        let bytes = field
            .bytes()
            .await
            .map_err(|err| ApiError::bad_request(format!("failed reading '{file_name}': {err}")))?;

        files.push(UploadFile {
            file_name,
            content_type,
            bytes,
        });
    }

    Ok(files)
}
