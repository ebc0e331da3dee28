//! QR image generation endpoint.

use std::io::Cursor;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use image::{DynamicImage, ImageFormat};
use serde::Deserialize;

use crate::app::SharedState;
use crate::config::LogoFailurePolicy;
use crate::services::logo;

use super::err_text;

/// Pixel size used when the caller does not supply one.
pub const DEFAULT_SIZE: u32 = 256;
/// Accepted pixel size range; values outside are rejected, not clamped.
pub const MIN_SIZE: u32 = 128;
pub const MAX_SIZE: u32 = 2048;

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    text: Option<String>,
    logo: Option<String>,
    size: Option<String>,
}

type ApiResult = Result<Response, (StatusCode, String)>;

/// GET /generate?text=&logo=&size=
///
/// Renders `text` as a QR code of `size` x `size` pixels, compositing the
/// `logo` image centered on top when one is requested, and responds with
/// the PNG bytes.
pub async fn generate_image(
    State(state): State<SharedState>,
    Query(params): Query<GenerateParams>,
) -> ApiResult {
    let config = state.config();

    let size = resolve_size(params.size.as_deref()).map_err(|e| {
        tracing::warn!(size = ?params.size, "Rejected size parameter: {e}");
        err_text(400, e.to_string())
    })?;

    let text = params
        .text
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(&config.default_text);

    let qr_image = image_engine::generate_qr(text, size).map_err(|e| {
        tracing::error!("Failed to generate QR code: {e}");
        err_text(500, format!("Failed to generate QR code: {e}"))
    })?;

    let final_image = match resolve_logo_url(params.logo.as_deref(), &config.default_logo_url) {
        Some(url) => match logo::fetch_logo(state.http(), url).await {
            Ok(logo_image) => {
                DynamicImage::ImageRgba8(image_engine::composite_logo(&qr_image, &logo_image))
            }
            Err(e) => match config.logo_failure_policy {
                LogoFailurePolicy::Fatal => {
                    tracing::error!(url, "Failed to load logo: {e}");
                    return Err(err_text(500, format!("Failed to load logo: {e}")));
                }
                LogoFailurePolicy::Fallback => {
                    tracing::warn!(url, "Failed to load logo, serving plain QR code: {e}");
                    qr_image
                }
            },
        },
        None => qr_image,
    };

    let mut png = Cursor::new(Vec::new());
    final_image
        .write_to(&mut png, ImageFormat::Png)
        .map_err(|e| {
            tracing::error!("Failed to encode PNG response: {e}");
            err_text(500, "Failed to encode PNG response")
        })?;

    let resp = Response::builder()
        .header(header::CONTENT_TYPE, "image/png")
        .body(Body::from(png.into_inner()))
        .map_err(|e| err_text(500, e.to_string()))?;
    Ok(resp)
}

/// Rejected `size` parameter (HTTP 400).
#[derive(Debug, thiserror::Error)]
pub enum InvalidSizeError {
    #[error("size must be an integer, got {0:?}")]
    NotAnInteger(String),
    #[error("size must be between {MIN_SIZE} and {MAX_SIZE}, got {0}")]
    OutOfRange(i64),
}

/// Resolve the pixel size.
///
/// A missing or empty parameter falls back to [`DEFAULT_SIZE`]; an explicit
/// value must parse as an integer inside the accepted range.
fn resolve_size(raw: Option<&str>) -> Result<u32, InvalidSizeError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(DEFAULT_SIZE);
    };

    let value: i64 = raw
        .parse()
        .map_err(|_| InvalidSizeError::NotAnInteger(raw.to_string()))?;
    if value < i64::from(MIN_SIZE) || value > i64::from(MAX_SIZE) {
        return Err(InvalidSizeError::OutOfRange(value));
    }
    Ok(value as u32)
}

/// Resolve the logo URL from the request, falling back to the configured
/// default. Only non-empty values with an HTTP(S) scheme trigger
/// compositing; anything else skips the logo silently.
fn resolve_logo_url<'a>(param: Option<&'a str>, default_url: &'a str) -> Option<&'a str> {
    let url = param.filter(|s| !s.is_empty()).unwrap_or(default_url);
    if url.is_empty() || !url.starts_with("http") {
        return None;
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_size_absent_uses_default() {
        assert_eq!(resolve_size(None).unwrap(), DEFAULT_SIZE);
        assert_eq!(resolve_size(Some("")).unwrap(), DEFAULT_SIZE);
        assert_eq!(resolve_size(Some("  ")).unwrap(), DEFAULT_SIZE);
    }

    #[test]
    fn resolve_size_accepts_range_boundaries() {
        assert_eq!(resolve_size(Some("128")).unwrap(), 128);
        assert_eq!(resolve_size(Some("2048")).unwrap(), 2048);
        assert_eq!(resolve_size(Some("300")).unwrap(), 300);
    }

    #[test]
    fn resolve_size_rejects_out_of_range() {
        assert!(matches!(
            resolve_size(Some("127")),
            Err(InvalidSizeError::OutOfRange(127))
        ));
        assert!(matches!(
            resolve_size(Some("2049")),
            Err(InvalidSizeError::OutOfRange(2049))
        ));
        assert!(matches!(
            resolve_size(Some("100")),
            Err(InvalidSizeError::OutOfRange(100))
        ));
        assert!(matches!(
            resolve_size(Some("3000")),
            Err(InvalidSizeError::OutOfRange(3000))
        ));
        assert!(matches!(
            resolve_size(Some("-5")),
            Err(InvalidSizeError::OutOfRange(-5))
        ));
    }

    #[test]
    fn resolve_size_rejects_non_integer() {
        assert!(matches!(
            resolve_size(Some("abc")),
            Err(InvalidSizeError::NotAnInteger(_))
        ));
        assert!(matches!(
            resolve_size(Some("12.5")),
            Err(InvalidSizeError::NotAnInteger(_))
        ));
    }

    #[test]
    fn resolve_logo_url_prefers_request_parameter() {
        assert_eq!(
            resolve_logo_url(Some("https://a/logo.png"), "https://b/logo.png"),
            Some("https://a/logo.png")
        );
    }

    #[test]
    fn resolve_logo_url_falls_back_to_default() {
        assert_eq!(
            resolve_logo_url(None, "https://b/logo.png"),
            Some("https://b/logo.png")
        );
        assert_eq!(
            resolve_logo_url(Some(""), "https://b/logo.png"),
            Some("https://b/logo.png")
        );
    }

    #[test]
    fn resolve_logo_url_skips_non_http_values() {
        assert_eq!(resolve_logo_url(Some("ftp://a/logo.png"), ""), None);
        assert_eq!(resolve_logo_url(Some("/local/logo.png"), ""), None);
        assert_eq!(resolve_logo_url(None, ""), None);
    }
}
