//! Image composition — center a scaled logo over a QR base image.

use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::LOGO_DIVISOR;
use crate::resize::resize_to_square;

/// Composite a logo centered on `base`, scaled to one fifth of the base side.
///
/// The base is copied opaquely into a fresh RGBA canvas, then the scaled
/// logo is alpha-composited over it, so transparent logo pixels leave the
/// QR modules underneath visible. A base narrower than [`LOGO_DIVISOR`]
/// pixels yields a zero-sized logo and the canvas is returned untouched.
pub fn composite_logo(base: &DynamicImage, logo: &DynamicImage) -> RgbaImage {
    let mut canvas = base.to_rgba8();

    let logo_side = base.width() / LOGO_DIVISOR;
    if logo_side == 0 {
        return canvas;
    }

    let scaled = resize_to_square(logo, logo_side);
    // Integer centering; an odd difference lands one pixel off-center.
    let offset_x = (base.width() - scaled.width()) / 2;
    let offset_y = (base.height() - scaled.height()) / 2;

    debug!(logo_side, offset_x, offset_y, "Compositing logo onto base image");
    overlay(&mut canvas, &scaled, offset_x, offset_y);
    canvas
}

/// Overlay `top` image onto `base` at the given position.
///
/// The `top` image is alpha-composited over the base.
pub fn overlay(base: &mut RgbaImage, top: &DynamicImage, x: u32, y: u32) {
    let top_rgba = top.to_rgba8();
    for (dx, dy, pixel) in top_rgba.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x < base.width() && target_y < base.height() {
            let alpha = pixel[3] as f32 / 255.0;
            if alpha > 0.99 {
                base.put_pixel(target_x, target_y, *pixel);
            } else if alpha > 0.01 {
                let bg = base.get_pixel(target_x, target_y);
                let blended = blend_pixel(bg, pixel, alpha);
                base.put_pixel(target_x, target_y, blended);
            }
        }
    }
}

fn blend_pixel(bg: &image::Rgba<u8>, fg: &image::Rgba<u8>, alpha: f32) -> image::Rgba<u8> {
    let inv = 1.0 - alpha;
    image::Rgba([
        (fg[0] as f32 * alpha + bg[0] as f32 * inv) as u8,
        (fg[1] as f32 * alpha + bg[1] as f32 * inv) as u8,
        (fg[2] as f32 * alpha + bg[2] as f32 * inv) as u8,
        255,
    ])
}
