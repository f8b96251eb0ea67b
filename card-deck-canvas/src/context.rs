//! RGBA layer used to assemble one card.

use crate::blur::gaussian_blur;
use crate::error::{CanvasError, CanvasResult};
use crate::path::RoundRectParams;
use crate::style::Rgba;
use crate::text::{TextRenderer, TextStyle};
use tiny_skia::{FillRule, Mask, Paint, Pixmap, PixmapPaint, Transform};

/// Largest accepted canvas side.
const MAX_DIMENSION: u32 = 32767;

/// An RGBA raster layer. Pixels are stored premultiplied and exported straight.
#[derive(Clone, Debug)]
pub struct CardCanvas {
    /// Width of the canvas in pixels.
    pub(crate) width: u32,
    /// Height of the canvas in pixels.
    pub(crate) height: u32,
    /// Pixel buffer.
    pub(crate) pixmap: Pixmap,
}

impl CardCanvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        let pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            pixmap,
        })
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a reference to the underlying pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Get a mutable reference to the underlying pixmap.
    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    fn check_size(&self, width: u32, height: u32) -> CanvasResult<()> {
        if (width, height) != (self.width, self.height) {
            return Err(CanvasError::SizeMismatch {
                expected: (self.width, self.height),
                actual: (width, height),
            });
        }
        Ok(())
    }

    /// Fill a rounded rectangle with a solid color and blur the result.
    pub fn draw_soft_shadow(
        &mut self,
        shape: &RoundRectParams,
        color: Rgba,
        blur_sigma: f32,
    ) -> CanvasResult<()> {
        log::debug!(target: "canvas", "softShadow {:?} sigma={}", shape, blur_sigma);
        if let Some(path) = shape.to_path() {
            let mut paint = Paint::default();
            paint.set_color_rgba8(color.r, color.g, color.b, color.a);
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
        gaussian_blur(&mut self.pixmap, blur_sigma)
    }

    /// Paint `background` onto this canvas through `mask`.
    ///
    /// Covered pixels take the background, uncovered pixels are left as they are.
    pub fn paste_masked(&mut self, background: &Pixmap, mask: &Mask) -> CanvasResult<()> {
        log::debug!(target: "canvas", "pasteMasked {}x{}", background.width(), background.height());
        self.check_size(background.width(), background.height())?;
        self.check_size(mask.width(), mask.height())?;
        self.pixmap.draw_pixmap(
            0,
            0,
            background.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            Some(mask),
        );
        Ok(())
    }

    /// Draw centered text on this canvas.
    pub fn draw_centered_text(
        &mut self,
        renderer: &mut TextRenderer,
        text: &str,
        style: &TextStyle,
    ) {
        let center = ((self.width / 2) as f32, (self.height / 2) as f32);
        renderer.draw_centered(&mut self.pixmap, text, style, center);
    }

    /// Composite `self` over `below` and return the result.
    pub fn over(&self, below: &CardCanvas) -> CanvasResult<CardCanvas> {
        self.check_size(below.width, below.height)?;
        let mut out = below.clone();
        out.pixmap.draw_pixmap(
            0,
            0,
            self.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        Ok(out)
    }

    /// Scale every pixel by the mask coverage, making uncovered pixels transparent.
    pub fn clip_to(&mut self, mask: &Mask) -> CanvasResult<()> {
        self.check_size(mask.width(), mask.height())?;
        self.pixmap.apply_mask(mask);
        Ok(())
    }

    /// Straight-alpha RGBA of one pixel, or `None` outside the canvas.
    pub fn pixel_rgba(&self, x: u32, y: u32) -> Option<Rgba> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba {
            r: p.red(),
            g: p.green(),
            b: p.blue(),
            a: p.alpha(),
        })
    }

    /// Whole-canvas RGBA bytes with straight alpha.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Export the canvas as PNG data.
    pub fn to_png(&self) -> CanvasResult<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;

            writer.write_image_data(&self.to_rgba8())?;
        }
        Ok(buf)
    }
}
