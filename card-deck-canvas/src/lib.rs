//! Raster primitives for rendering playing cards, built on tiny-skia and cosmic-text.
//!
//! This crate provides the drawing layer of the card renderer. It uses:
//! - `tiny-skia` for paths, masks and compositing
//! - `cosmic-text` for text shaping and glyph outlines
//! - `fontdb` for the font database behind the fallback chain
//! - `image` for the Gaussian blur of drop shadows
//!
//! # Example
//!
//! ```rust,ignore
//! use card_deck_canvas::{rounded_rect_mask, CardCanvas, Rgb, VerticalGradient};
//!
//! let mut card = CardCanvas::new(630, 880)?;
//! let bg = VerticalGradient::new(Rgb::new(230, 50, 50), Rgb::new(180, 30, 30)).render(630, 880)?;
//! card.paste_masked(&bg, &rounded_rect_mask(630, 880, 45.0)?)?;
//! let png_data = card.to_png()?;
//! ```

mod blur;
mod context;
mod error;
mod font_config;
mod gradient;
mod mask;
mod path;
mod style;
mod text;

// Re-export public API
pub use blur::gaussian_blur;
pub use context::CardCanvas;
pub use error::{CanvasError, CanvasResult};
pub use font_config::{
    FontCandidate, FontClass, FontConfig, FontOrigin, ResolvedFont, ResolvedFonts, BUILT_IN_FAMILY,
};
pub use gradient::{normalized_angle, VerticalGradient, WedgePalette};
pub use mask::{mask_value, rounded_rect_mask};
pub use path::RoundRectParams;
pub use style::{RadialFade, Rgb, Rgba};
pub use text::{TextLayout, TextRenderer, TextStyle};
