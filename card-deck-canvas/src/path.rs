//! Path construction helpers.

use tiny_skia::{Path, PathBuilder};

/// Kappa for quarter-ellipse cubic Bezier approximation
const K: f32 = 0.552_284_8;

/// Parameters for a rounded rectangle with one radius shared by all corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRectParams {
    /// X coordinate of the rectangle's left edge.
    pub x: f32,
    /// Y coordinate of the rectangle's top edge.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
    /// Corner radius.
    pub radius: f32,
}

impl RoundRectParams {
    /// Rounded rectangle covering `(0, 0)-(width, height)`.
    pub fn from_size(width: u32, height: u32, radius: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            radius,
        }
    }

    /// Same rectangle moved by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Build the outline. Returns `None` for an empty rectangle.
    pub fn to_path(&self) -> Option<Path> {
        let (x, y, width, height) = (self.x, self.y, self.width, self.height);
        if width <= 0.0 || height <= 0.0 {
            return None;
        }

        let r = self.radius.max(0.0).min(width / 2.0).min(height / 2.0);

        let mut pb = PathBuilder::new();
        pb.move_to(x + r, y);

        // Top edge and top-right corner
        pb.line_to(x + width - r, y);
        if r > 0.0 {
            pb.cubic_to(
                x + width - r + r * K,
                y,
                x + width,
                y + r - r * K,
                x + width,
                y + r,
            );
        }

        // Right edge and bottom-right corner
        pb.line_to(x + width, y + height - r);
        if r > 0.0 {
            pb.cubic_to(
                x + width,
                y + height - r + r * K,
                x + width - r + r * K,
                y + height,
                x + width - r,
                y + height,
            );
        }

        // Bottom edge and bottom-left corner
        pb.line_to(x + r, y + height);
        if r > 0.0 {
            pb.cubic_to(
                x + r - r * K,
                y + height,
                x,
                y + height - r + r * K,
                x,
                y + height - r,
            );
        }

        // Left edge and top-left corner
        pb.line_to(x, y + r);
        if r > 0.0 {
            pb.cubic_to(x, y + r - r * K, x + r - r * K, y, x + r, y);
        }

        pb.close();
        pb.finish()
    }
}
