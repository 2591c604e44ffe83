use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::Path;
use thiserror::Error;

use crate::backend::models::InlineImage;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
    #[error("not an image file: {0}")]
    UnsupportedType(String),
}

fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// Read a local image file and base64-encode it for an inline request
/// part. Only the mime type is checked, not the size.
pub fn read_image(path: &Path) -> Result<InlineImage, ImageError> {
    let mime_type = mime_type_for(path)
        .ok_or_else(|| ImageError::UnsupportedType(path.display().to_string()))?;
    let bytes = std::fs::read(path)?;
    Ok(InlineImage {
        data: BASE64.encode(bytes),
        mime_type: mime_type.to_string(),
    })
}
