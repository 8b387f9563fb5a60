//! Local filesystem implementation of `MediaStorage`.
//!
//! Files land in a flat upload directory under a collision-resistant
//! name; the directory is expected to be served read-only under
//! `url_prefix` by the HTTP binary.

use std::path::{Path, PathBuf};

use anyhow::bail;
use async_trait::async_trait;
use domains::gallery::{StoredObject, UploadFile};
use domains::ports::MediaStorage;
use tokio::fs;
use uuid::Uuid;

use crate::object_name::{extension_for, sanitize_stem};

pub struct LocalMediaStorage {
    /// Root directory for all uploads (e.g., "./data/uploads")
    root: PathBuf,
    /// URL prefix the directory is served under (e.g., "/uploads")
    url_prefix: String,
    /// Base public URL used to build absolute image URLs
    /// (e.g., "http://127.0.0.1:5001")
    public_base_url: String,
}

impl LocalMediaStorage {
    pub fn new(
        root: PathBuf,
        url_prefix: impl Into<String>,
        public_base_url: impl Into<String>,
    ) -> Self {
        let url_prefix = url_prefix.into();
        let public_base_url = public_base_url.into();
        Self {
            root,
            url_prefix: format!("/{}", url_prefix.trim_matches('/')),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_name_for(&self, file: &UploadFile) -> String {
        format!(
            "{}-{}.{}",
            Uuid::new_v4(),
            sanitize_stem(&file.file_name),
            extension_for(file)
        )
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(&self, file: &UploadFile) -> anyhow::Result<StoredObject> {
        fs::create_dir_all(&self.root).await?;

        let file_name = self.file_name_for(file);
        fs::write(self.root.join(&file_name), &file.bytes).await?;

        Ok(StoredObject {
            url: format!("{}{}/{}", self.public_base_url, self.url_prefix, file_name),
            handle: file_name,
        })
    }

    async fn remove(&self, handle: &str) -> anyhow::Result<()> {
        // Handles are bare file names; anything else never came from store().
        if handle.is_empty() || handle.contains(['/', '\\']) || handle == ".." {
            bail!("invalid storage handle: {handle}");
        }
        fs::remove_file(self.root.join(handle)).await?;
        Ok(())
    }
}
