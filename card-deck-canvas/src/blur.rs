//! Gaussian blur for soft drop shadows.

use crate::error::{CanvasError, CanvasResult};
use tiny_skia::{IntSize, Pixmap};

/// Blur a pixmap in place with an approximate Gaussian of standard deviation `sigma`.
///
/// The blur runs on premultiplied data, so color never bleeds out of
/// transparent regions. A non-positive or non-finite `sigma` is a no-op.
pub fn gaussian_blur(pixmap: &mut Pixmap, sigma: f32) -> CanvasResult<()> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Ok(());
    }
    let (width, height) = (pixmap.width(), pixmap.height());
    log::debug!(target: "canvas", "gaussianBlur {}x{} sigma={}", width, height, sigma);

    let buffer = image::RgbaImage::from_raw(width, height, pixmap.data().to_vec())
        .ok_or_else(|| CanvasError::BlurError("pixel buffer does not match size".to_string()))?;
    let blurred = image::imageops::fast_blur(&buffer, sigma);

    let size = IntSize::from_wh(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;
    *pixmap = Pixmap::from_vec(blurred.into_raw(), size)
        .ok_or_else(|| CanvasError::BlurError("blurred buffer has wrong length".to_string()))?;
    Ok(())
}
