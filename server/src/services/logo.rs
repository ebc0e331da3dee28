//! Remote logo retrieval and decoding.

use image::{DynamicImage, ImageFormat};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

/// Errors from fetching and decoding a remote logo image.
#[derive(Debug, thiserror::Error)]
pub enum LogoFetchError {
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Fetch an image over HTTP and decode it according to its declared
/// content type.
///
/// The request is bounded by the client's timeout; the response body is
/// consumed within this call and never outlives it.
pub async fn fetch_logo(client: &Client, url: &str) -> Result<DynamicImage, LogoFetchError> {
    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(LogoFetchError::Status(resp.status()));
    }

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or(v).trim().to_ascii_lowercase())
        .unwrap_or_default();

    let format = format_for_content_type(&content_type)
        .ok_or(LogoFetchError::UnsupportedFormat(content_type))?;

    let bytes = resp.bytes().await?;
    Ok(image::load_from_memory_with_format(&bytes, format)?)
}

/// Map a declared content type onto the closed set of supported formats.
fn format_for_content_type(content_type: &str) -> Option<ImageFormat> {
    match content_type {
        "image/png" => Some(ImageFormat::Png),
        "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_table_covers_supported_types() {
        assert_eq!(format_for_content_type("image/png"), Some(ImageFormat::Png));
        assert_eq!(
            format_for_content_type("image/jpeg"),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            format_for_content_type("image/jpg"),
            Some(ImageFormat::Jpeg)
        );
    }

    #[test]
    fn format_table_rejects_everything_else() {
        assert_eq!(format_for_content_type("image/gif"), None);
        assert_eq!(format_for_content_type("text/html"), None);
        assert_eq!(format_for_content_type(""), None);
    }
}
