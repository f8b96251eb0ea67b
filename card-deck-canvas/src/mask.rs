//! Single-channel silhouette masks.

use crate::error::{CanvasError, CanvasResult};
use crate::path::RoundRectParams;
use tiny_skia::{FillRule, Mask, Transform};

/// Coverage mask of a rounded rectangle spanning the whole raster.
///
/// Pixels fully inside are 255, pixels fully outside are 0, and the boundary
/// carries the rasterizer's antialiased coverage.
pub fn rounded_rect_mask(width: u32, height: u32, radius: f32) -> CanvasResult<Mask> {
    log::debug!(target: "canvas", "roundedRectMask {}x{} r={}", width, height, radius);
    let mut mask =
        Mask::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;
    if let Some(path) = RoundRectParams::from_size(width, height, radius).to_path() {
        mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
    }
    Ok(mask)
}

/// Coverage value at `(x, y)`, or 0 outside the mask.
pub fn mask_value(mask: &Mask, x: u32, y: u32) -> u8 {
    if x >= mask.width() || y >= mask.height() {
        return 0;
    }
    mask.data()[(y * mask.width() + x) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(630, 880, 45.0)]
    #[case(158, 220, 11.25)]
    #[case(100, 100, 20.0)]
    fn test_center_inside_corner_outside(#[case] w: u32, #[case] h: u32, #[case] r: f32) {
        let mask = rounded_rect_mask(w, h, r).unwrap();
        assert_eq!(mask_value(&mask, w / 2, h / 2), 255);
        assert_eq!(mask_value(&mask, 0, 0), 0);
        assert_eq!(mask_value(&mask, w - 1, 0), 0);
        assert_eq!(mask_value(&mask, 0, h - 1), 0);
        assert_eq!(mask_value(&mask, w - 1, h - 1), 0);
    }

    #[test]
    fn test_edge_midpoints_inside() {
        let mask = rounded_rect_mask(630, 880, 45.0).unwrap();
        // Pixel-aligned edges are fully covered, allow for rasterizer rounding.
        assert!(mask_value(&mask, 315, 0) > 250);
        assert!(mask_value(&mask, 0, 440) > 250);
        assert!(mask_value(&mask, 629, 440) > 250);
        assert!(mask_value(&mask, 315, 879) > 250);
        assert_eq!(mask_value(&mask, 315, 440), 255);
    }

    #[test]
    fn test_zero_radius_covers_everything() {
        let mask = rounded_rect_mask(32, 16, 0.0).unwrap();
        assert!(mask.data().iter().all(|&v| v > 250));
    }

    #[test]
    fn test_out_of_bounds_is_zero() {
        let mask = rounded_rect_mask(10, 10, 2.0).unwrap();
        assert_eq!(mask_value(&mask, 10, 0), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            rounded_rect_mask(0, 10, 1.0),
            Err(CanvasError::InvalidDimensions { .. })
        ));
    }
}
