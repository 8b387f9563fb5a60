//! HTTP-level gallery tests against the real router with fake ports.


use std::sync::Arc;

use api_adapters::web::{router, ApiContext};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use domains::gallery::UploadPolicy;
use fixtures::{
    gallery_row, jpeg_payload, text_payload, FakeMediaStorage, InMemoryGalleryRepo,
    InMemoryLandingRepo, InMemoryPlacementRepo,
};
use http_body_util::BodyExt;
use serde_json::Value;
use services::{GalleryService, LandingService, PlacementService};
use tower::ServiceExt;
use uuid::Uuid;

fn app(repo: Arc<InMemoryGalleryRepo>, storage: Arc<FakeMediaStorage>) -> Router {
    let ctx = Arc::new(ApiContext {
        gallery: GalleryService::new(repo, storage, UploadPolicy::default()),
        landing: LandingService::new(Arc::new(InMemoryLandingRepo::new())),
        placements: PlacementService::new(Arc::new(InMemoryPlacementRepo::new())),
        upload_body_limit: 64 * 1024 * 1024,
    });
    router(ctx)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Hand-built multipart body with one `images` part per file.
fn multipart_body(parts: &[(&str, &str, Vec<u8>)]) -> (String, Vec<u8>) {
    let boundary = "chalkline-test-boundary";
    let mut body = Vec::new();
    for (name, content_type, bytes) in parts {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"images\"; filename=\"{name}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    (
        format!("multipart/form-data; boundary={boundary}"),
        body,
    )
}

#[tokio::test]
async fn get_gallery_returns_records_newest_first() {
    let repo = Arc::new(InMemoryGalleryRepo::seeded(vec![
        gallery_row(30),
        gallery_row(10),
        gallery_row(20),
    ]));
    let app = app(repo, Arc::new(FakeMediaStorage::new()));

    let response = app
        .oneshot(Request::get("/api/gallery").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert!(records[0]["url"].as_str().unwrap().ends_with("10.jpg"));
    assert!(records[2]["url"].as_str().unwrap().ends_with("30.jpg"));
    assert!(records[0].get("createdAt").is_some());
    assert!(records[0].get("storageHandle").is_some());
}

#[tokio::test]
async fn upload_creates_records_and_returns_201() {
    let repo = Arc::new(InMemoryGalleryRepo::new());
    let app = app(repo.clone(), Arc::new(FakeMediaStorage::new()));

    let (content_type, body) = multipart_body(&[
        ("a.jpg", "image/jpeg", jpeg_payload(1024)),
        ("b.jpg", "image/jpeg", jpeg_payload(1024)),
    ]);

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/gallery/upload")
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created.as_array().unwrap().len(), 2);
    assert_eq!(repo.row_count(), 2);

    let response = app
        .oneshot(Request::get("/api/gallery").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn upload_rejects_non_image_files_with_400() {
    let repo = Arc::new(InMemoryGalleryRepo::new());
    let storage = Arc::new(FakeMediaStorage::new());
    let app = app(repo.clone(), storage.clone());

    let (content_type, body) =
        multipart_body(&[("notes.txt", "text/plain", text_payload())]);

    let response = app
        .oneshot(
            Request::post("/api/gallery/upload")
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("notes.txt"));
    assert_eq!(repo.row_count(), 0);
    assert_eq!(storage.object_count(), 0);
}

#[tokio::test]
async fn upload_with_no_files_is_400() {
    let app = app(
        Arc::new(InMemoryGalleryRepo::new()),
        Arc::new(FakeMediaStorage::new()),
    );

    let (content_type, body) = multipart_body(&[]);
    let response = app
        .oneshot(
            Request::post("/api/gallery/upload")
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_returns_a_confirmation_message() {
    let row = gallery_row(5);
    let id = row.id;
    let repo = Arc::new(InMemoryGalleryRepo::seeded(vec![row]));
    let app = app(repo.clone(), Arc::new(FakeMediaStorage::new()));

    let response = app
        .oneshot(
            Request::delete(format!("/api/gallery/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Image deleted successfully");
    assert_eq!(repo.row_count(), 0);
}

#[tokio::test]
async fn delete_unknown_id_returns_404_json() {
    let app = app(
        Arc::new(InMemoryGalleryRepo::new()),
        Arc::new(FakeMediaStorage::new()),
    );

    let response = app
        .oneshot(
            Request::delete(format!("/api/gallery/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("not found"));
}
