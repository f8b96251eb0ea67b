//! Card design constants.

use card_deck_canvas::{RadialFade, Rgb};

/// What happens to the drop shadow outside the card silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowClip {
    /// Clip the finished card to the silhouette; corners stay transparent.
    #[default]
    Silhouette,
    /// Keep the blurred shadow wherever it lands on the canvas.
    Canvas,
}

/// Every size, offset and color that shapes a card.
///
/// Lengths are in pixels of the output raster. [`CardDesign::default`] is the
/// reference 630×880 design; [`CardDesign::scaled`] derives a uniformly
/// rescaled one.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDesign {
    pub width: u32,
    pub height: u32,
    pub corner_radius: f32,
    /// Offset of the shadow rectangle from the card origin.
    pub shadow_offset: (f32, f32),
    /// Standard deviation of the shadow blur.
    pub shadow_blur: f32,
    pub shadow_alpha: u8,
    pub number_font_size: f32,
    pub symbol_font_size: f32,
    /// Outline thickness beyond the glyph edge.
    pub text_stroke_width: f32,
    pub text_shadow_offset: f32,
    pub text_shadow_alpha: u8,
    pub text_fill: Rgb,
    /// Outline color of labels on multicolor cards.
    pub wild_stroke: Rgb,
    pub shadow_clip: ShadowClip,
    pub radial_fade: RadialFade,
}

impl Default for CardDesign {
    fn default() -> Self {
        Self {
            width: 630,
            height: 880,
            corner_radius: 45.0,
            shadow_offset: (35.0, 35.0),
            shadow_blur: 45.0,
            shadow_alpha: 80,
            number_font_size: 350.0,
            symbol_font_size: 400.0,
            text_stroke_width: 15.0,
            text_shadow_offset: 4.0,
            text_shadow_alpha: 120,
            text_fill: Rgb::WHITE,
            wild_stroke: Rgb::new(30, 30, 30),
            shadow_clip: ShadowClip::default(),
            radial_fade: RadialFade::default(),
        }
    }
}

impl CardDesign {
    /// Scale every length by `factor`, keeping colors and policies.
    ///
    /// Canvas dimensions are rounded and never drop below one pixel.
    pub fn scaled(&self, factor: f32) -> Self {
        let px = |v: u32| ((v as f32 * factor).round() as u32).max(1);
        Self {
            width: px(self.width),
            height: px(self.height),
            corner_radius: self.corner_radius * factor,
            shadow_offset: (self.shadow_offset.0 * factor, self.shadow_offset.1 * factor),
            shadow_blur: self.shadow_blur * factor,
            number_font_size: self.number_font_size * factor,
            symbol_font_size: self.symbol_font_size * factor,
            text_stroke_width: self.text_stroke_width * factor,
            text_shadow_offset: self.text_shadow_offset * factor,
            ..self.clone()
        }
    }

    /// Canvas center, on the pixel grid.
    pub fn center(&self) -> (f32, f32) {
        ((self.width / 2) as f32, (self.height / 2) as f32)
    }
}
