//! Card identities and the compositor that turns one into an image.

use crate::design::{CardDesign, ShadowClip};
use crate::error::{DeckError, DeckResult};
use crate::tables::{self, ColorEntry};
use card_deck_canvas::{
    rounded_rect_mask, CardCanvas, FontClass, FontConfig, ResolvedFonts, Rgb, RoundRectParams,
    TextRenderer, TextStyle, VerticalGradient, WedgePalette,
};
use std::fmt;

/// Kind of card, which decides how its value is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Number,
    Action,
    Wild,
}

/// Face value of a card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardValue {
    Number(u8),
    Label(String),
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardValue::Number(n) => write!(f, "{}", n),
            CardValue::Label(label) => f.write_str(label),
        }
    }
}

/// Identity of one card to render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardSpec {
    pub kind: CardKind,
    /// Key into the color table.
    pub color: String,
    pub value: CardValue,
    /// Zero-based index among identical copies in the deck.
    pub copy: u8,
}

impl CardSpec {
    pub fn number(color: impl Into<String>, number: u8) -> Self {
        Self {
            kind: CardKind::Number,
            color: color.into(),
            value: CardValue::Number(number),
            copy: 0,
        }
    }

    pub fn action(color: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: CardKind::Action,
            color: color.into(),
            value: CardValue::Label(label.into()),
            copy: 0,
        }
    }

    pub fn wild(label: impl Into<String>) -> Self {
        Self {
            kind: CardKind::Wild,
            color: tables::WILD.to_string(),
            value: CardValue::Label(label.into()),
            copy: 0,
        }
    }

    pub fn with_copy(self, copy: u8) -> Self {
        Self { copy, ..self }
    }

    /// Output file name: `{color}_{value}.png`, with `_{n}` appended for the
    /// n-th copy after the first.
    pub fn file_name(&self) -> String {
        if self.copy == 0 {
            format!("{}_{}.png", self.color, self.value)
        } else {
            format!("{}_{}_{}.png", self.color, self.value, self.copy as u32 + 1)
        }
    }

    /// The text drawn in the middle of the card and the font class it needs.
    pub fn label(&self) -> DeckResult<(String, FontClass)> {
        match (self.kind, &self.value) {
            (CardKind::Number, CardValue::Number(n)) if *n <= 9 => {
                Ok((n.to_string(), FontClass::Text))
            }
            (CardKind::Action | CardKind::Wild, CardValue::Label(label)) => {
                Ok((tables::symbol(label)?.to_string(), FontClass::Symbol))
            }
            (kind, value) => Err(DeckError::InvalidValue {
                kind,
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for CardSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} {}", self.kind, self.color, self.value)?;
        if self.copy > 0 {
            write!(f, " (copy {})", self.copy as u32 + 1)?;
        }
        Ok(())
    }
}

/// Renders cards. Holds the design and the shaped-text state reused across cards.
pub struct CardRenderer {
    design: CardDesign,
    text: TextRenderer,
}

impl CardRenderer {
    pub fn new(design: CardDesign, fonts: &ResolvedFonts) -> Self {
        Self {
            design,
            text: TextRenderer::new(fonts),
        }
    }

    /// Renderer with the given design and the default font chains.
    pub fn with_design(design: CardDesign) -> Self {
        Self::new(design, &FontConfig::default().resolve())
    }

    pub fn design(&self) -> &CardDesign {
        &self.design
    }

    pub fn text_renderer(&self) -> &TextRenderer {
        &self.text
    }

    /// Assemble one card: blurred shadow, masked background, centered label.
    pub fn render(&mut self, spec: &CardSpec) -> DeckResult<CardCanvas> {
        log::debug!("Rendering {}", spec);
        let entry = tables::color(&spec.color)?;
        let (label, class) = spec.label()?;
        let d = &self.design;
        let (w, h) = (d.width, d.height);

        let mut shadow = CardCanvas::new(w, h)?;
        shadow.draw_soft_shadow(
            &RoundRectParams::from_size(w, h, d.corner_radius)
                .offset(d.shadow_offset.0, d.shadow_offset.1),
            Rgb::BLACK.with_alpha(d.shadow_alpha),
            d.shadow_blur,
        )?;

        let (background, stroke) = match entry {
            ColorEntry::Solid { main, secondary } => {
                (VerticalGradient::new(main, secondary).render(w, h)?, secondary)
            }
            ColorEntry::Rainbow(stops) => {
                let palette = WedgePalette::new(stops)
                    .ok_or_else(|| DeckError::EmptyPalette(spec.color.clone()))?;
                (palette.render(w, h, d.radial_fade)?, d.wild_stroke)
            }
        };

        let mask = rounded_rect_mask(w, h, d.corner_radius)?;
        let mut card = CardCanvas::new(w, h)?;
        card.paste_masked(&background, &mask)?;

        let style = TextStyle {
            class,
            size_px: match class {
                FontClass::Text => d.number_font_size,
                FontClass::Symbol => d.symbol_font_size,
            },
            fill: d.text_fill,
            stroke,
            stroke_width: d.text_stroke_width,
            shadow: Rgb::BLACK.with_alpha(d.text_shadow_alpha),
            shadow_offset: d.text_shadow_offset,
        };
        card.draw_centered_text(&mut self.text, &label, &style);

        let mut out = card.over(&shadow)?;
        if d.shadow_clip == ShadowClip::Silhouette {
            out.clip_to(&mask)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(CardSpec::number("red", 7).file_name(), "red_7.png");
        assert_eq!(CardSpec::wild("Wild +4").file_name(), "wild_Wild +4.png");
        assert_eq!(
            CardSpec::action("blue", "Draw +2").with_copy(1).file_name(),
            "blue_Draw +2_2.png"
        );
        assert_eq!(CardSpec::wild("Wild").with_copy(3).file_name(), "wild_Wild_4.png");
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            CardSpec::number("green", 0).label().unwrap(),
            ("0".to_string(), FontClass::Text)
        );
        assert_eq!(
            CardSpec::wild("Wild +4").label().unwrap(),
            ("+4".to_string(), FontClass::Symbol)
        );
        assert_eq!(
            CardSpec::action("red", "Reverse").label().unwrap(),
            ("🔄".to_string(), FontClass::Symbol)
        );
    }

    #[test]
    fn test_out_of_range_number() {
        let err = CardSpec::number("red", 10).label().unwrap_err();
        assert!(matches!(err, DeckError::InvalidValue { kind: CardKind::Number, .. }));
    }

    #[test]
    fn test_kind_value_mismatch() {
        let spec = CardSpec {
            kind: CardKind::Number,
            color: "red".into(),
            value: CardValue::Label("Skip".into()),
            copy: 0,
        };
        assert!(spec.label().unwrap_err().is_invalid_spec());
    }

    #[test]
    fn test_unknown_symbol() {
        let err = CardSpec::action("red", "Shuffle").label().unwrap_err();
        assert!(matches!(err, DeckError::UnknownSymbol(ref l) if l == "Shuffle"));
    }

    #[test]
    fn test_display() {
        assert_eq!(CardSpec::number("red", 7).to_string(), "Number red 7");
        assert_eq!(
            CardSpec::wild("Wild").with_copy(2).to_string(),
            "Wild wild Wild (copy 3)"
        );
    }
}
