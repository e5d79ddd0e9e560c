// src/services/uploads.rs
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// An image written to the upload directory.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub path: PathBuf,
    /// URL path the image is served under, e.g. `/uploads/<file>`.
    pub public_path: String,
}

pub fn extension_for(content_type: &str) -> &'static str {
    match content_type.to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" | "image/pjpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/bmp" => "bmp",
        _ => "img",
    }
}

/// Check an upload without touching the disk.
pub fn validate_image(content_type: Option<&str>, len: usize, max_bytes: usize) -> AppResult<()> {
    let content_type = content_type.unwrap_or("application/octet-stream");
    if !content_type.to_ascii_lowercase().starts_with("image/") {
        return Err(AppError::UnsupportedMediaType(content_type.to_string()));
    }
    if len > max_bytes {
        return Err(AppError::PayloadTooLarge { max_bytes });
    }
    Ok(())
}

pub async fn save_image(
    dir: &Path,
    content_type: Option<&str>,
    bytes: &[u8],
    max_bytes: usize,
) -> AppResult<StoredImage> {
    validate_image(content_type, bytes.len(), max_bytes)?;
    let content_type = content_type.unwrap_or_default();

    tokio::fs::create_dir_all(dir).await?;

    let file_name = format!("{}.{}", Uuid::new_v4(), extension_for(content_type));
    let path = dir.join(&file_name);
    tokio::fs::write(&path, bytes).await?;

    tracing::debug!(path = %path.display(), size = bytes.len(), "stored uploaded image");

    Ok(StoredImage {
        path,
        public_path: format!("/uploads/{}", file_name),
    })
}
