//! # Chalkline Binary
//!
//! Composition root: wires settings, persistence, the media backend, and
//! the HTTP surface together.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use api_adapters::web::{router, ApiContext};
use axum::http::{header, HeaderValue, Method};
use configs::{MediaSettings, Settings};
use domains::gallery::UploadPolicy;
use domains::ports::MediaStorage;
use secrecy::ExposeSecret;
use services::{GalleryService, LandingService, PlacementService};
use storage_adapters::{connect, PgGalleryRepo, PgLandingRepo, PgPlacementRepo, MIGRATOR};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Headroom for multipart boundaries and form field overhead on top of
/// the raw file payloads.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load().context("loading settings")?;

    let pool = connect(
        settings.database.url.expose_secret(),
        settings.database.max_connections,
    )
    .await
    .context("connecting to postgres")?;
    MIGRATOR.run(&pool).await.context("running migrations")?;

    let (media, static_uploads) = build_media(&settings.media).await?;

    let policy = UploadPolicy {
        max_files: settings.uploads.max_files,
        max_file_bytes: settings.uploads.max_file_bytes,
    };

    let ctx = Arc::new(ApiContext {
        gallery: GalleryService::new(
            Arc::new(PgGalleryRepo::new(pool.clone())),
            media,
            policy,
        ),
        landing: LandingService::new(Arc::new(PgLandingRepo::new(pool.clone()))),
        placements: PlacementService::new(Arc::new(PgPlacementRepo::new(pool))),
        upload_body_limit: policy.max_files * policy.max_file_bytes
            + MULTIPART_OVERHEAD_BYTES,
    });

    let mut app = router(ctx)
        .layer(cors_layer(&settings.cors.allowed_origins)?)
        .layer(TraceLayer::new_for_http());

    if let Some((prefix, dir)) = static_uploads {
        app = app.nest_service(&prefix, ServeDir::new(dir));
    }

    let addr = SocketAddr::from((settings.server.host, settings.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("binding listen socket")?;

    info!(%addr, "chalkline listening");
    axum::serve(listener, app)
        .await
        .context("HTTP server exited")?;
    Ok(())
}

/// Builds the configured media backend. Returns the storage port plus,
/// for local disk, the (url prefix, directory) pair to serve statically.
async fn build_media(
    settings: &MediaSettings,
) -> anyhow::Result<(Arc<dyn MediaStorage>, Option<(String, PathBuf)>)> {
    match settings {
        #[cfg(feature = "media-local")]
        MediaSettings::Local {
            root_dir,
            url_prefix,
            public_base_url,
        } => {
            let storage = storage_adapters::LocalMediaStorage::new(
                root_dir.clone(),
                url_prefix.clone(),
                public_base_url.clone(),
            );
            Ok((
                Arc::new(storage),
                Some((url_prefix.clone(), root_dir.clone())),
            ))
        }
        #[cfg(feature = "media-s3")]
        MediaSettings::S3 {
            bucket,
            region,
            key_prefix,
            endpoint_url,
            force_path_style,
            public_base_url,
        } => {
            let storage = storage_adapters::S3MediaStorage::new(storage_adapters::S3Settings {
                bucket: bucket.clone(),
                region: region.clone(),
                key_prefix: key_prefix.clone(),
                endpoint_url: endpoint_url.clone(),
                force_path_style: *force_path_style,
                public_base_url: public_base_url.clone(),
            })
            .await?;
            Ok((Arc::new(storage), None))
        }
        #[allow(unreachable_patterns)]
        _ => anyhow::bail!("configured media backend is not compiled into this binary"),
    }
}

fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid CORS origin")?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}
