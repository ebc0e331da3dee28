//! Square resizing for overlay logos.
//!
//! Uses Lanczos3 filtering so small overlays stay free of visible aliasing.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Resize an image to a `side` x `side` square, ignoring its aspect ratio.
///
/// Uses Lanczos3 filtering. Returns the original image unchanged if it is
/// already a square of that size.
pub fn resize_to_square(img: &DynamicImage, side: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    if orig_w == side && orig_h == side {
        debug!(side, "Image already at target square, skipping resize");
        return img.clone();
    }

    debug!(orig_w, orig_h, side, "Resizing image to square");
    img.resize_exact(side, side, FilterType::Lanczos3)
}
