//! QR code rendering at an exact pixel size.

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Luma};
use qrcode::{EcLevel, QrCode};

/// The underlying encoder could not represent the input text.
#[derive(Debug, thiserror::Error)]
#[error("QR encode error: {0}")]
pub struct QrEncodeError(#[from] qrcode::types::QrError);

/// Render `data` as a QR code image of exactly `target_size` pixels per side.
///
/// Error correction is fixed at the medium tier. Empty input is accepted
/// and encodes the empty string.
pub fn generate_qr(data: &str, target_size: u32) -> Result<DynamicImage, QrEncodeError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let scale = (target_size / module_count).max(1);
    let img_size = module_count * scale;

    let mut img = GrayImage::from_pixel(img_size, img_size, Luma([255u8]));

    for (i, color) in modules.iter().enumerate() {
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;

        if *color == qrcode::Color::Dark {
            for dx in 0..scale {
                for dy in 0..scale {
                    img.put_pixel(x * scale + dx, y * scale + dy, Luma([0u8]));
                }
            }
        }
    }

    let img = DynamicImage::ImageLuma8(img);
    if img_size == target_size {
        return Ok(img);
    }

    // The module grid rarely divides the requested size evenly; stretch the
    // rendered grid to the exact dimension without smoothing module edges.
    Ok(img.resize_exact(target_size, target_size, FilterType::Nearest))
}
