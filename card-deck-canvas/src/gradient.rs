//! Background fills: vertical two-color gradient and hard-edged radial wedges.

use crate::error::{CanvasError, CanvasResult};
use crate::style::{RadialFade, Rgb};
use std::f64::consts::PI;
use tiny_skia::Pixmap;

/// Vertical linear gradient from `top` (row 0) toward `bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalGradient {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl VerticalGradient {
    pub fn new(top: Rgb, bottom: Rgb) -> Self {
        Self { top, bottom }
    }

    /// Color of row `y` in a raster `height` rows tall.
    ///
    /// The fraction is `y / height`, so the last row stops one step short of
    /// `bottom`.
    pub fn row_color(&self, y: u32, height: u32) -> Rgb {
        let t = y as f64 / height as f64;
        self.top.lerp(self.bottom, t)
    }

    /// Render the gradient into a new opaque pixmap.
    pub fn render(&self, width: u32, height: u32) -> CanvasResult<Pixmap> {
        log::debug!(target: "canvas", "verticalGradient {}x{} {:?} -> {:?}", width, height, self.top, self.bottom);
        let mut pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;

        let w = width as usize;
        for (y, row) in pixmap.pixels_mut().chunks_exact_mut(w).enumerate() {
            let color = self.row_color(y as u32, height).with_alpha(255).to_premultiplied();
            row.fill(color);
        }
        Ok(pixmap)
    }
}

/// Palette of stops painted as equal-angle wedges around the raster center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WedgePalette {
    stops: Vec<Rgb>,
}

impl WedgePalette {
    /// Create a palette. Returns `None` when fewer than two stops are given,
    /// since the wedge index is scaled by `len - 1`.
    pub fn new(stops: impl Into<Vec<Rgb>>) -> Option<Self> {
        let stops = stops.into();
        (stops.len() >= 2).then_some(Self { stops })
    }

    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    /// Palette index for a normalized angle in [0, 1).
    ///
    /// Only `len - 1` wedges are reachable; the last stop is never selected.
    pub fn index_for_angle(&self, angle: f64) -> usize {
        let n = self.stops.len();
        let idx = (angle * (n - 1) as f64).floor();
        // Float noise can push an angle just below zero to 1.0 after wrapping.
        (idx.max(0.0) as usize).min(n - 2)
    }

    /// Render the wedges into a new pixmap.
    pub fn render(&self, width: u32, height: u32, fade: RadialFade) -> CanvasResult<Pixmap> {
        log::debug!(target: "canvas", "radialWedges {}x{} stops={} fade={:?}", width, height, self.stops.len(), fade);
        let mut pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;

        let (cx, cy) = ((width / 2) as f64, (height / 2) as f64);
        let max_radius = cx.hypot(cy).max(f64::EPSILON);
        let w = width as usize;

        for (y, row) in pixmap.pixels_mut().chunks_exact_mut(w).enumerate() {
            let dy = y as f64 - cy;
            for (x, pixel) in row.iter_mut().enumerate() {
                let dx = x as f64 - cx;
                let angle = normalized_angle(dx, dy);
                let color = self.stops[self.index_for_angle(angle)];
                let alpha = match fade {
                    RadialFade::Flat => 255,
                    RadialFade::Linear => {
                        let radius = dx.hypot(dy) / max_radius;
                        (255.0 * (1.0 - radius)).clamp(0.0, 255.0) as u8
                    }
                };
                *pixel = color.with_alpha(alpha).to_premultiplied();
            }
        }
        Ok(pixmap)
    }
}

/// `atan2(dy, dx)` mapped to [0, 1), with 0 pointing along +x.
pub fn normalized_angle(dx: f64, dy: f64) -> f64 {
    let turn = dy.atan2(dx) / (2.0 * PI);
    let wrapped = turn.rem_euclid(1.0);
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rainbow() -> WedgePalette {
        WedgePalette::new(vec![
            Rgb::new(255, 0, 0),
            Rgb::new(255, 69, 0),
            Rgb::new(255, 165, 0),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 128, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(75, 0, 130),
            Rgb::new(238, 130, 238),
        ])
        .unwrap()
    }

    fn rgb_at(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let p = pixmap.pixel(x, y).unwrap();
        (p.red(), p.green(), p.blue(), p.alpha())
    }

    #[test]
    fn test_row_zero_is_top_color() {
        let g = VerticalGradient::new(Rgb::new(230, 50, 50), Rgb::new(180, 30, 30));
        assert_eq!(g.row_color(0, 880), Rgb::new(230, 50, 50));
    }

    #[test]
    fn test_last_row_approaches_bottom() {
        let g = VerticalGradient::new(Rgb::new(0, 0, 0), Rgb::new(200, 200, 200));
        let last = g.row_color(9, 10);
        assert_eq!(last, Rgb::new(180, 180, 180));
    }

    #[test]
    fn test_gradient_rows_are_uniform() {
        let g = VerticalGradient::new(Rgb::new(50, 120, 230), Rgb::new(30, 90, 200));
        let pixmap = g.render(16, 32).unwrap();
        for y in 0..32 {
            let first = rgb_at(&pixmap, 0, y);
            for x in 1..16 {
                assert_eq!(rgb_at(&pixmap, x, y), first);
            }
            assert_eq!(first.3, 255);
        }
    }

    #[test]
    fn test_palette_needs_two_stops() {
        assert!(WedgePalette::new(vec![Rgb::WHITE]).is_none());
        assert!(WedgePalette::new(vec![Rgb::WHITE, Rgb::BLACK]).is_some());
    }

    #[test]
    fn test_angle_zero_is_due_right() {
        assert_eq!(normalized_angle(10.0, 0.0), 0.0);
        // Just above the +x axis in screen space (negative dy) wraps to near 1.
        let a = normalized_angle(1000.0, -1.0);
        assert!(a > 0.99 && a < 1.0);
        // Straight down (positive dy) is a quarter turn.
        assert!((normalized_angle(0.0, 5.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_index_bounds() {
        let p = rainbow();
        assert_eq!(p.index_for_angle(0.0), 0);
        assert_eq!(p.index_for_angle(0.999_999), 6);
        assert_eq!(p.index_for_angle(1.0), 6);
        assert_eq!(p.index_for_angle(-1e-18), 0);
    }

    #[test]
    fn test_wedges_due_right_and_before_wrap() {
        let p = rainbow();
        let pixmap = p.render(100, 80, RadialFade::Flat).unwrap();
        // Center is (50, 40).
        assert_eq!(rgb_at(&pixmap, 90, 40), (255, 0, 0, 255));
        assert_eq!(rgb_at(&pixmap, 99, 39), (75, 0, 130, 255));
    }

    #[test]
    fn test_flat_wedges_are_opaque() {
        let pixmap = rainbow().render(40, 40, RadialFade::Flat).unwrap();
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 255));
    }

    #[test]
    fn test_linear_fade_darkens_toward_corners() {
        let pixmap = rainbow().render(40, 40, RadialFade::Linear).unwrap();
        assert_eq!(pixmap.pixel(20, 20).unwrap().alpha(), 255);
        assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
        assert!(pixmap.pixel(30, 20).unwrap().alpha() > pixmap.pixel(39, 20).unwrap().alpha());
    }
}
