//! Centered text rendering with drop shadow and outline, using cosmic-text.

use crate::font_config::{FontClass, ResolvedFont, ResolvedFonts};
use crate::style::{Rgb, Rgba};
use cosmic_text::{
    Attrs, Buffer, CacheKeyFlags, Command, Family, FontSystem, Metrics, Shaping, SwashCache,
};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

/// How a centered label is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Which resolved font to use.
    pub class: FontClass,
    /// Font size in pixels.
    pub size_px: f32,
    /// Glyph fill.
    pub fill: Rgb,
    /// Outline color, painted beneath the fill.
    pub stroke: Rgb,
    /// How far the outline extends beyond the glyph edge.
    pub stroke_width: f32,
    /// Color of the two offset shadow copies.
    pub shadow: Rgba,
    /// Shadow copies are drawn at `(-d, -d)` and `(+d, +d)` from the anchor.
    pub shadow_offset: f32,
}

/// Shaped text, as glyph outlines in layout coordinates.
pub struct TextLayout {
    glyphs: Vec<(Path, Transform)>,
    /// Advance width of the widest line.
    pub width: f32,
    /// Top of the first line box.
    pub line_top: f32,
    /// Bottom of the last line box.
    pub line_bottom: f32,
}

impl TextLayout {
    /// Number of glyphs that produced an outline.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Offset that puts the middle of the layout box on `(cx, cy)`.
    pub fn middle_anchor(&self, cx: f32, cy: f32) -> (f32, f32) {
        (
            cx - self.width / 2.0,
            cy - (self.line_top + self.line_bottom) / 2.0,
        )
    }

    fn paths_at(&self, dx: f32, dy: f32) -> impl Iterator<Item = (&Path, Transform)> {
        self.glyphs
            .iter()
            .map(move |(path, t)| (path, t.post_translate(dx, dy)))
    }
}

/// Shapes and paints card labels. Owns the font system and glyph cache so
/// they are reused across cards.
pub struct TextRenderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    text_font: ResolvedFont,
    symbol_font: ResolvedFont,
}

impl TextRenderer {
    pub fn new(fonts: &ResolvedFonts) -> Self {
        let font_system =
            FontSystem::new_with_locale_and_db("en".to_string(), fonts.fontdb.clone());
        Self {
            font_system,
            swash_cache: SwashCache::new(),
            text_font: fonts.font(FontClass::Text).clone(),
            symbol_font: fonts.font(FontClass::Symbol).clone(),
        }
    }

    pub fn font(&self, class: FontClass) -> &ResolvedFont {
        match class {
            FontClass::Text => &self.text_font,
            FontClass::Symbol => &self.symbol_font,
        }
    }

    /// Shape `text` and collect its glyph outlines.
    pub fn layout(&mut self, text: &str, class: FontClass, size_px: f32) -> TextLayout {
        let font = match class {
            FontClass::Text => &self.text_font,
            FontClass::Symbol => &self.symbol_font,
        };
        let family = Family::Name(&font.family);

        let metrics = Metrics::new(size_px, size_px * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        let attrs = Attrs::new()
            .family(family)
            .weight(font.weight)
            .cache_key_flags(CacheKeyFlags::DISABLE_HINTING);
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut glyphs = Vec::new();
        let mut width: f32 = 0.0;
        let mut line_top = f32::MAX;
        let mut line_bottom = f32::MIN;

        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            line_top = line_top.min(run.line_top);
            line_bottom = line_bottom.max(run.line_top + run.line_height);

            for glyph in run.glyphs.iter() {
                let physical_glyph = glyph.physical((0.0, 0.0), 1.0);
                let glyph_x = glyph.x + glyph.font_size * glyph.x_offset;
                let glyph_y = run.line_y + glyph.y - glyph.font_size * glyph.y_offset;

                let Some(commands) = self
                    .swash_cache
                    .get_outline_commands(&mut self.font_system, physical_glyph.cache_key)
                else {
                    continue;
                };
                if let Some(path) = outline_to_path(commands) {
                    glyphs.push((path, Transform::from_translate(glyph_x, glyph_y)));
                }
            }
        }

        if line_top > line_bottom {
            // Nothing was laid out; keep the box degenerate around the origin.
            line_top = 0.0;
            line_bottom = 0.0;
        }

        TextLayout {
            glyphs,
            width,
            line_top,
            line_bottom,
        }
    }

    /// Draw `text` centered on `(cx, cy)` with the style's shadow, outline and fill.
    ///
    /// Missing glyphs are skipped; this never fails.
    pub fn draw_centered(
        &mut self,
        pixmap: &mut Pixmap,
        text: &str,
        style: &TextStyle,
        (cx, cy): (f32, f32),
    ) {
        log::debug!(target: "canvas", "drawCentered \"{}\" {} {} size={}", text, cx, cy, style.size_px);
        let layout = self.layout(text, style.class, style.size_px);
        if layout.glyph_count() == 0 {
            log::warn!("No outlines for {:?}; label left blank", text);
            return;
        }
        let (x, y) = layout.middle_anchor(cx, cy);

        let shadow = paint_for(style.shadow);
        for d in [-style.shadow_offset, style.shadow_offset] {
            for (path, t) in layout.paths_at(x + d, y + d) {
                pixmap.fill_path(path, &shadow, FillRule::Winding, t, None);
            }
        }

        if style.stroke_width > 0.0 {
            let outline = paint_for(style.stroke.into());
            let stroke = Stroke {
                width: style.stroke_width * 2.0,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                ..Stroke::default()
            };
            for (path, t) in layout.paths_at(x, y) {
                pixmap.stroke_path(path, &outline, &stroke, t, None);
            }
        }

        let fill = paint_for(style.fill.into());
        for (path, t) in layout.paths_at(x, y) {
            pixmap.fill_path(path, &fill, FillRule::Winding, t, None);
        }
    }
}

fn paint_for(color: Rgba) -> Paint<'static> {
    let mut paint = Paint {
        anti_alias: true,
        ..Default::default()
    };
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint
}

/// Build a path from glyph outline commands.
///
/// Font outlines have Y pointing up, screen has Y pointing down, so Y is negated.
fn outline_to_path(commands: &[Command]) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for cmd in commands {
        match cmd {
            Command::MoveTo(p) => pb.move_to(p.x, -p.y),
            Command::LineTo(p) => pb.line_to(p.x, -p.y),
            Command::QuadTo(ctrl, end) => pb.quad_to(ctrl.x, -ctrl.y, end.x, -end.y),
            Command::CurveTo(c1, c2, end) => pb.cubic_to(c1.x, -c1.y, c2.x, -c2.y, end.x, -end.y),
            Command::Close => pb.close(),
        }
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_config::FontConfig;

    fn built_in_only() -> ResolvedFonts {
        FontConfig {
            load_system_fonts: false,
            search_dirs: Vec::new(),
            ..FontConfig::default()
        }
        .resolve()
    }

    fn style(stroke_width: f32, shadow_offset: f32) -> TextStyle {
        TextStyle {
            class: FontClass::Text,
            size_px: 60.0,
            fill: Rgb::WHITE,
            stroke: Rgb::new(180, 30, 30),
            stroke_width,
            shadow: Rgb::BLACK.with_alpha(120),
            shadow_offset,
        }
    }

    /// Inclusive bounding box of the pixels matching `pred`.
    fn bbox(pixmap: &Pixmap, pred: impl Fn(Rgba) -> bool) -> Option<(u32, u32, u32, u32)> {
        let mut found: Option<(u32, u32, u32, u32)> = None;
        for y in 0..pixmap.height() {
            for x in 0..pixmap.width() {
                let p = pixmap.pixel(x, y).unwrap().demultiply();
                let rgba = Rgba {
                    r: p.red(),
                    g: p.green(),
                    b: p.blue(),
                    a: p.alpha(),
                };
                if pred(rgba) {
                    found = Some(match found {
                        None => (x, y, x, y),
                        Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                    });
                }
            }
        }
        found
    }

    fn count(pixmap: &Pixmap, color: Rgba) -> usize {
        pixmap
            .pixels()
            .iter()
            .filter(|p| {
                let c = p.demultiply();
                (c.red(), c.green(), c.blue(), c.alpha()) == (color.r, color.g, color.b, color.a)
            })
            .count()
    }

    #[test]
    fn test_middle_anchor_centers_box() {
        let layout = TextLayout {
            glyphs: Vec::new(),
            width: 100.0,
            line_top: 0.0,
            line_bottom: 60.0,
        };
        assert_eq!(layout.middle_anchor(315.0, 440.0), (265.0, 410.0));
    }

    #[test]
    fn test_built_in_face_has_outlines() {
        let mut renderer = TextRenderer::new(&built_in_only());
        let layout = renderer.layout("+4", FontClass::Symbol, 100.0);
        assert_eq!(layout.glyph_count(), 2);
        assert!(layout.width > 0.0);
    }

    #[test]
    fn test_glyphs_are_centered() {
        let mut renderer = TextRenderer::new(&built_in_only());
        let mut pixmap = Pixmap::new(120, 120).unwrap();
        renderer.draw_centered(&mut pixmap, "8", &style(4.0, 1.0), (60.0, 60.0));

        let (x0, _, x1, _) = bbox(&pixmap, |p| p.a > 0).expect("expected painted pixels");
        let mid = (x0 + x1) as f32 / 2.0;
        assert!((mid - 60.0).abs() < 8.0, "ink center {} too far from 60", mid);
    }

    #[test]
    fn test_fill_and_outline_colors() {
        let mut renderer = TextRenderer::new(&built_in_only());
        let mut pixmap = Pixmap::new(120, 120).unwrap();
        renderer.draw_centered(&mut pixmap, "8", &style(4.0, 1.0), (60.0, 60.0));

        assert!(count(&pixmap, Rgb::WHITE.into()) > 50);
        assert!(count(&pixmap, Rgb::new(180, 30, 30).into()) > 50);
        // The outline surrounds the fill on every side.
        let fill = bbox(&pixmap, |p| p == Rgb::WHITE.into()).unwrap();
        let outline = bbox(&pixmap, |p| p == Rgb::new(180, 30, 30).into()).unwrap();
        assert!(outline.0 < fill.0 && outline.1 < fill.1);
        assert!(outline.2 > fill.2 && outline.3 > fill.3);
    }

    #[test]
    fn test_shadow_copies_at_both_offsets() {
        let mut renderer = TextRenderer::new(&built_in_only());
        let mut pixmap = Pixmap::new(120, 120).unwrap();
        renderer.draw_centered(&mut pixmap, "8", &style(0.0, 4.0), (60.0, 60.0));

        // Where only one shadow copy lands, it is black at alpha 120.
        let single_copy = pixmap
            .pixels()
            .iter()
            .map(|p| p.demultiply())
            .filter(|c| c.red() == 0 && c.green() == 0 && c.blue() == 0)
            .filter(|c| (119..=121).contains(&c.alpha()))
            .count();
        assert!(single_copy > 10, "{} single-copy shadow pixels", single_copy);

        // The two copies stretch the ink 4 px beyond the fill on every side.
        let fill = bbox(&pixmap, |p| p.a > 0 && p.r > 128).unwrap();
        let ink = bbox(&pixmap, |p| p.a > 0).unwrap();
        for (outer, inner) in [(fill.0, ink.0), (fill.1, ink.1), (ink.2, fill.2), (ink.3, fill.3)] {
            let spread = outer as i64 - inner as i64;
            assert!((2..=6).contains(&spread), "spread {} in {:?} vs {:?}", spread, ink, fill);
        }
    }
}
