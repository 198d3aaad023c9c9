//! Binary object storage for photo uploads.
//!
//! Uploaded bytes are content-addressed by BLAKE3 hash, validated against
//! their magic bytes, and written through a pluggable [`StorageBackend`].
//! The store hands back a retrievable URL; the photo row keeps only that
//! URL, never the bytes.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use tourlog_core::{Error, Result};

/// Storage backend trait for different storage implementations.
///
/// Allows abstracting over filesystem, S3, or other storage providers.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Write data to the specified path.
    async fn write(&self, path: &str, data: &[u8]) -> Result<()>;

    /// Read data from the specified path.
    async fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// Delete data at the specified path.
    async fn delete(&self, path: &str) -> Result<()>;

    /// Check if data exists at the specified path.
    async fn exists(&self, path: &str) -> Result<bool>;
}

/// Filesystem storage backend.
///
/// Stores blobs in a directory hierarchy fanned out by hash prefix.
pub struct FilesystemBackend {
    base_path: PathBuf,
}

impl FilesystemBackend {
    /// Create a new filesystem backend with the given base directory.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }

    /// Validate that the backend can write, read, and delete files.
    ///
    /// Performs a full round-trip at startup to catch filesystem issues
    /// (permission errors, missing directories) early.
    pub async fn validate(&self) -> std::result::Result<(), String> {
        let test_dir = self.base_path.join("blobs/.health-check");
        let test_file = test_dir.join("test.bin");

        fs::create_dir_all(&test_dir)
            .await
            .map_err(|e| format!("create_dir_all({:?}): {}", test_dir, e))?;

        let data = b"storage-health-check";
        fs::write(&test_file, data)
            .await
            .map_err(|e| format!("write({:?}): {}", test_file, e))?;

        let read_data = fs::read(&test_file)
            .await
            .map_err(|e| format!("read({:?}): {}", test_file, e))?;
        if read_data != data {
            return Err("read-back mismatch".to_string());
        }

        fs::remove_file(&test_file)
            .await
            .map_err(|e| format!("remove_file({:?}): {}", test_file, e))?;
        let _ = fs::remove_dir(&test_dir).await; // Best-effort cleanup

        Ok(())
    }
}

#[async_trait]
impl StorageBackend for FilesystemBackend {
    async fn write(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);
        debug!(
            subsystem = "storage",
            component = "fs_backend",
            op = "write",
            storage_path = %path,
            size = data.len(),
            "object_store: write"
        );

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                warn!(parent = %parent.display(), error = %e, "object_store: create_dir_all failed");
                e
            })?;
        }

        // Atomic write: temp file + rename
        let temp_path = full_path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(data).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &full_path).await.map_err(|e| {
            warn!(from = %temp_path.display(), to = %full_path.display(), error = %e, "object_store: rename failed");
            e
        })?;

        Ok(())
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.full_path(path);
        Ok(fs::read(full_path).await?)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let full_path = self.full_path(path);
        if fs::try_exists(&full_path).await? {
            fs::remove_file(full_path).await?;
        }
        Ok(())
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        let full_path = self.full_path(path);
        Ok(fs::try_exists(full_path).await?)
    }
}

/// Configuration for the photo object store.
#[derive(Debug, Clone)]
pub struct ObjectStoreConfig {
    /// Public URL prefix retrievable by clients, e.g. `https://host/blobs`.
    pub public_base_url: String,
}

/// A stored photo blob.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Backend-relative storage path.
    pub path: String,
    /// Retrievable URL for the photo row.
    pub url: String,
    /// MIME type detected from magic bytes.
    pub content_type: String,
}

/// Content-addressed photo blob store over a [`StorageBackend`].
pub struct PhotoStore {
    backend: Box<dyn StorageBackend>,
    config: ObjectStoreConfig,
}

impl PhotoStore {
    /// Create a photo store over the given backend.
    pub fn new(backend: impl StorageBackend + 'static, config: ObjectStoreConfig) -> Self {
        Self {
            backend: Box::new(backend),
            config,
        }
    }

    /// Store uploaded photo bytes and return a retrievable URL.
    ///
    /// The upload is validated against its magic bytes: anything that does
    /// not sniff as an image is rejected before touching the backend.
    /// Identical bytes land on the same path, so re-uploads are free.
    pub async fn put(&self, data: &[u8]) -> Result<StoredObject> {
        if data.is_empty() {
            return Err(Error::InvalidInput("Upload is empty".to_string()));
        }

        let kind = infer::get(data)
            .ok_or_else(|| Error::InvalidInput("Upload has no recognizable file type".to_string()))?;
        if !kind.mime_type().starts_with("image/") {
            return Err(Error::InvalidInput(format!(
                "Upload is not an image: {}",
                kind.mime_type()
            )));
        }

        let hash = blake3::hash(data).to_hex().to_string();
        let path = format!(
            "blobs/{}/{}/{}.{}",
            &hash[0..2],
            &hash[2..4],
            hash,
            kind.extension()
        );

        if !self.backend.exists(&path).await? {
            self.backend.write(&path, data).await?;
        }

        debug!(
            subsystem = "storage",
            component = "photo_store",
            op = "put",
            storage_path = %path,
            content_type = kind.mime_type(),
            size = data.len(),
            "Photo blob stored"
        );

        Ok(StoredObject {
            url: format!("{}/{}", self.config.public_base_url.trim_end_matches('/'), path),
            path,
            content_type: kind.mime_type().to_string(),
        })
    }

    /// Delete a stored blob by its backend-relative path.
    pub async fn remove(&self, path: &str) -> Result<()> {
        self.backend.delete(path).await
    }
}
