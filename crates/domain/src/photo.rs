use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Uploads above this size are rejected before any state changes.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoKind {
    Png,
    Jpeg,
    Gif,
    WebP,
    Bmp,
    Unsupported,
}

pub fn detect_photo_kind(path: &Path) -> PhotoKind {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return PhotoKind::Unsupported;
    };

    match ext.to_ascii_lowercase().as_str() {
        "png" => PhotoKind::Png,
        "jpg" | "jpeg" => PhotoKind::Jpeg,
        "gif" => PhotoKind::Gif,
        "webp" => PhotoKind::WebP,
        "bmp" => PhotoKind::Bmp,
        _ => PhotoKind::Unsupported,
    }
}

/// Validates an upload before any transition happens. Both checks run
/// against the file name and byte count only; decoding comes later.
pub fn validate_upload(file_name: &str, byte_len: u64) -> Result<(), DomainError> {
    if detect_photo_kind(Path::new(file_name)) == PhotoKind::Unsupported {
        return Err(DomainError::UnsupportedFileType(file_name.to_string()));
    }
    if byte_len > MAX_UPLOAD_BYTES {
        return Err(DomainError::FileTooLarge {
            size: byte_len,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

/// Bounds and quality of the resize step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    pub max_width: u32,
    pub max_height: u32,
    pub quality: u8,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            max_width: 800,
            max_height: 800,
            quality: 80,
        }
    }
}

/// A transformed photo: JPEG bytes as a self-describing data uri, plus
/// the pixel dimensions of the encoded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
}

impl EncodedImage {
    pub fn from_jpeg_bytes(bytes: &[u8], width: u32, height: u32) -> Self {
        Self {
            data_uri: format!("{DATA_URI_PREFIX}{}", BASE64.encode(bytes)),
            width,
            height,
        }
    }

    /// Recovers the raw JPEG payload from a data uri.
    pub fn decode_data_uri(data_uri: &str) -> Result<Vec<u8>, DomainError> {
        let Some(encoded) = data_uri.strip_prefix(DATA_URI_PREFIX) else {
            return Err(DomainError::MalformedDataUri(
                "missing data:image/jpeg;base64 prefix".to_string(),
            ));
        };
        BASE64
            .decode(encoded)
            .map_err(|error| DomainError::MalformedDataUri(error.to_string()))
    }

    pub fn jpeg_bytes(&self) -> Result<Vec<u8>, DomainError> {
        Self::decode_data_uri(&self.data_uri)
    }
}

/// The persisted record of one slot. Field names follow the stored JSON
/// document layout: {imageData, originalName, uploadedAt}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub image_data: String,
    pub original_name: String,
    pub uploaded_at: String,
}
