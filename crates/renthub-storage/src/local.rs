//! Local filesystem photo store.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use renthub_core::config::storage::StorageConfig;
use renthub_core::error::{AppError, ErrorKind};
use renthub_core::result::AppResult;

/// Stores uploaded photos on the local filesystem.
///
/// Files are written to `<root>/<subdir>/<uuid>.<ext>` and addressed
/// publicly as `<public_prefix>/<subdir>/<uuid>.<ext>`.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    /// Root directory for all stored files.
    root: PathBuf,
    /// Public URL prefix the files are served under.
    public_prefix: String,
}

impl PhotoStore {
    /// Create a new store rooted at the configured upload directory.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.upload_dir);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create upload root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_prefix: config.public_prefix.trim_end_matches('/').to_string(),
        })
    }

    /// Save a file under `subdir`, deriving the stored name from a fresh
    /// UUID plus the original file extension. Returns the public URL path.
    pub async fn save(
        &self,
        subdir: &str,
        original_filename: &str,
        data: Bytes,
    ) -> AppResult<String> {
        let dir = self.root.join(subdir);
        fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create upload directory: {}", dir.display()),
                e,
            )
        })?;

        let file_name = match Path::new(original_filename)
            .extension()
            .and_then(|e| e.to_str())
        {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };
        let path = dir.join(&file_name);

        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {}", path.display()),
                e,
            )
        })?;

        debug!(path = %path.display(), bytes = data.len(), "Stored uploaded file");

        Ok(format!("{}/{subdir}/{file_name}", self.public_prefix))
    }

    /// Remove a stored file by its public URL path, best-effort.
    ///
    /// A file that is already gone is not an error; any other I/O failure
    /// is logged and swallowed so metadata cleanup can proceed.
    pub async fn delete(&self, url_path: &str) {
        let relative = url_path
            .strip_prefix(&self.public_prefix)
            .unwrap_or(url_path)
            .trim_start_matches('/');
        let path = self.root.join(relative);

        match fs::remove_file(&path).await {
            Ok(()) => debug!(path = %path.display(), "Deleted stored file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to delete stored file"),
        }
    }
}
