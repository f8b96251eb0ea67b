//! Static color and symbol tables.

use crate::error::{DeckError, DeckResult};
use card_deck_canvas::Rgb;

/// Background description for one color key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorEntry {
    /// Vertical gradient from `main` to `secondary`; `secondary` also outlines the label.
    Solid { main: Rgb, secondary: Rgb },
    /// Radial wedges over an ordered palette.
    Rainbow(&'static [Rgb]),
}

/// Key of the multicolor entry used by wild cards.
pub const WILD: &str = "wild";

/// Colored suits, in deck order.
pub const SUIT_COLORS: [&str; 4] = ["red", "blue", "green", "yellow"];

/// Action labels dealt in every suit.
pub const ACTION_LABELS: [&str; 3] = ["Skip", "Reverse", "Draw +2"];

/// Wild card labels.
pub const WILD_LABELS: [&str; 2] = ["Wild", "Wild +4"];

const RAINBOW: [Rgb; 8] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 69, 0),
    Rgb::new(255, 165, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 128, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(75, 0, 130),
    Rgb::new(238, 130, 238),
];

const COLORS: [(&str, ColorEntry); 5] = [
    (
        "red",
        ColorEntry::Solid {
            main: Rgb::new(230, 50, 50),
            secondary: Rgb::new(180, 30, 30),
        },
    ),
    (
        "blue",
        ColorEntry::Solid {
            main: Rgb::new(50, 120, 230),
            secondary: Rgb::new(30, 90, 200),
        },
    ),
    (
        "green",
        ColorEntry::Solid {
            main: Rgb::new(50, 180, 90),
            secondary: Rgb::new(30, 140, 70),
        },
    ),
    (
        "yellow",
        ColorEntry::Solid {
            main: Rgb::new(250, 210, 50),
            secondary: Rgb::new(230, 180, 30),
        },
    ),
    (WILD, ColorEntry::Rainbow(&RAINBOW)),
];

const SYMBOLS: [(&str, &str); 5] = [
    ("Skip", "\u{1F6AB}"),
    ("Reverse", "\u{1F504}"),
    ("Draw +2", "+2"),
    ("Wild", "\u{1F4A0}"),
    ("Wild +4", "+4"),
];

/// Look up a color key.
pub fn color(key: &str) -> DeckResult<ColorEntry> {
    COLORS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, entry)| *entry)
        .ok_or_else(|| DeckError::UnknownColor(key.to_string()))
}

/// Look up the glyph drawn for an action or wild label.
pub fn symbol(label: &str) -> DeckResult<&'static str> {
    SYMBOLS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, glyph)| *glyph)
        .ok_or_else(|| DeckError::UnknownSymbol(label.to_string()))
}

/// All color keys, including [`WILD`].
pub fn color_keys() -> impl Iterator<Item = &'static str> {
    COLORS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_entry() {
        assert_eq!(
            color("red").unwrap(),
            ColorEntry::Solid {
                main: Rgb::new(230, 50, 50),
                secondary: Rgb::new(180, 30, 30),
            }
        );
    }

    #[test]
    fn test_wild_has_eight_stops() {
        match color(WILD).unwrap() {
            ColorEntry::Rainbow(stops) => {
                assert_eq!(stops.len(), 8);
                assert_eq!(stops[0], Rgb::new(255, 0, 0));
                assert_eq!(stops[7], Rgb::new(238, 130, 238));
            }
            other => panic!("expected rainbow, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_color() {
        assert!(matches!(color("purple"), Err(DeckError::UnknownColor(k)) if k == "purple"));
        // Keys are case sensitive.
        assert!(color("Red").is_err());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(symbol("Draw +2").unwrap(), "+2");
        assert_eq!(symbol("Wild +4").unwrap(), "+4");
        assert_eq!(symbol("Skip").unwrap(), "🚫");
        assert!(matches!(symbol("Shuffle"), Err(DeckError::UnknownSymbol(_))));
    }

    #[test]
    fn test_every_label_has_a_symbol() {
        for label in ACTION_LABELS.iter().chain(WILD_LABELS.iter()) {
            assert!(symbol(label).is_ok(), "missing symbol for {}", label);
        }
    }

    #[test]
    fn test_every_suit_is_solid() {
        for key in SUIT_COLORS {
            assert!(matches!(color(key).unwrap(), ColorEntry::Solid { .. }));
        }
        assert_eq!(color_keys().count(), 5);
    }
}
