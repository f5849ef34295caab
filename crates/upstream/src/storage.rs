//! Local-disk object storage for uploaded images.
//!
//! Objects are addressed by a relative, slash-separated path under the store
//! root and served back at `{public_url}/{path}`.

use std::path::{Component, Path, PathBuf};

use uuid::Uuid;
use wardrobe_core::types::{DbId, UserId};

/// Accepted image extensions (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Where an uploaded object ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Public URL the client can fetch.
    pub url: String,
    /// Store-relative path, kept so the object can be deleted later.
    pub path: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid object path '{0}'")]
    InvalidPath(String),

    #[error("Uploaded file is empty")]
    Empty,

    #[error("Unsupported image type '.{0}'")]
    UnsupportedType(String),
}

/// Object store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    public_url: String,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>, public_url: &str) -> Self {
        Self {
            root: root.into(),
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `bytes` at `path`, creating parent directories. Overwrites an
    /// existing object.
    pub async fn upload(&self, bytes: &[u8], path: &str) -> Result<StoredObject, StorageError> {
        if bytes.is_empty() {
            return Err(StorageError::Empty);
        }
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, bytes).await?;

        tracing::debug!(path, size = bytes.len(), "Stored object");

        Ok(StoredObject {
            url: self.public_url_for(path),
            path: path.to_string(),
        })
    }

    /// Remove an object. A missing object is not an error.
    pub async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let target = self.resolve(path)?;
        match tokio::fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn public_url_for(&self, path: &str) -> String {
        format!("{}/{}", self.public_url, path.trim_start_matches('/'))
    }

    /// Map a relative object path onto the store root, rejecting anything
    /// that could escape it.
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let rel = Path::new(path);
        let valid = !path.is_empty()
            && rel
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !valid {
            return Err(StorageError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(rel))
    }
}

/// Lowercase extension of `filename` if it is an accepted image type.
pub fn image_extension(filename: &str) -> Result<String, StorageError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(StorageError::UnsupportedType(ext))
    }
}

/// Object path for an item image. A fresh suffix per upload keeps cached
/// URLs from serving the previous image.
pub fn item_image_path(user_id: UserId, item_id: DbId, ext: &str) -> String {
    format!("{user_id}/items/{item_id}-{}.{ext}", Uuid::new_v4().simple())
}

/// Object path for a profile picture.
pub fn profile_picture_path(user_id: UserId, profile_id: DbId, ext: &str) -> String {
    format!("{user_id}/profiles/{profile_id}-{}.{ext}", Uuid::new_v4().simple())
}
