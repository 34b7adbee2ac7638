//! Avatar images as inline data URLs.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{DashboardError, DashboardResult};

/// Read an image file and encode it as a `data:<mime>;base64,...` URL, the
/// same shape a browser `FileReader.readAsDataURL` produces.
pub fn encode_file(path: &Path) -> DashboardResult<String> {
    let bytes = fs::read(path).map_err(|e| {
        DashboardError::Avatar(format!("failed to read {}: {}", path.display(), e))
    })?;
    Ok(to_data_url(&bytes, mime_for_path(path)))
}

pub fn to_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// MIME type from the file extension; unknown extensions fall back to a
/// generic byte stream.
fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
