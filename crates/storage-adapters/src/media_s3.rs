//! S3-compatible implementation of `MediaStorage`.
//!
//! Works against AWS S3 as well as MinIO/LocalStack via `endpoint_url`
//! and path-style addressing.

use anyhow::Context;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use domains::gallery::{StoredObject, UploadFile};
use domains::ports::MediaStorage;
use tracing::debug;
use uuid::Uuid;

use crate::object_name::extension_for;

#[derive(Debug, Clone)]
pub struct S3Settings {
    pub bucket: String,
    pub region: String,
    /// Folder prefix for uploaded objects (e.g., "gallery").
    pub key_prefix: String,
    /// Custom endpoint for MinIO/LocalStack deployments.
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
    /// Overrides the virtual-hosted URL shape (CDN or custom endpoint).
    pub public_base_url: Option<String>,
}

pub struct S3MediaStorage {
    client: S3Client,
    settings: S3Settings,
}

impl S3MediaStorage {
    pub async fn new(settings: S3Settings) -> anyhow::Result<Self> {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(settings.region.clone()))
            .load()
            .await;

        let mut builder = S3ConfigBuilder::from(&aws_config);
        if let Some(endpoint) = &settings.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }
        if settings.force_path_style {
            builder = builder.force_path_style(true);
        }

        Ok(Self {
            client: S3Client::from_conf(builder.build()),
            settings,
        })
    }
}

#[async_trait]
impl MediaStorage for S3MediaStorage {
    async fn store(&self, file: &UploadFile) -> anyhow::Result<StoredObject> {
        let key = object_key(&self.settings.key_prefix, file);

        self.client
            .put_object()
            .bucket(&self.settings.bucket)
            .key(&key)
            .body(ByteStream::from(file.bytes.to_vec()))
            .content_type(file.content_type.essence_str())
            .send()
            .await
            .with_context(|| format!("uploading object {key}"))?;

        debug!(%key, size_bytes = file.bytes.len(), "object stored");

        Ok(StoredObject {
            url: public_url(&self.settings, &key),
            handle: key,
        })
    }

    async fn remove(&self, handle: &str) -> anyhow::Result<()> {
        self.client
            .delete_object()
            .bucket(&self.settings.bucket)
            .key(handle)
            .send()
            .await
            .with_context(|| format!("deleting object {handle}"))?;

        debug!(key = %handle, "object deleted");
        Ok(())
    }
}

fn object_key(prefix: &str, file: &UploadFile) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("{}.{}", Uuid::new_v4(), extension_for(file))
    } else {
        format!("{}/{}.{}", prefix, Uuid::new_v4(), extension_for(file))
    }
}

fn public_url(settings: &S3Settings, key: &str) -> String {
    match &settings.public_base_url {
        Some(base) => format!("{}/{}", base.trim_end_matches('/'), key),
        None => format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            settings.bucket, settings.region, key
        ),
    }
}
