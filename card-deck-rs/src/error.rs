//! Error types for card-deck-rs.

use crate::card::CardKind;
use card_deck_canvas::CanvasError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DeckError.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors that can occur while rendering or writing cards.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Color key missing from the color table.
    #[error("Unknown color key: {0:?}")]
    UnknownColor(String),

    /// Action or wild label missing from the symbol table.
    #[error("Unknown symbol label: {0:?}")]
    UnknownSymbol(String),

    /// Card value does not fit the card kind (e.g. a number above 9).
    #[error("Invalid value for {kind:?} card: {value}")]
    InvalidValue { kind: CardKind, value: String },

    /// A multicolor entry with too few stops to form wedges.
    #[error("Color {0:?} has fewer than two palette stops")]
    EmptyPalette(String),

    /// Directory creation or file write failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raster operation failed.
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

impl DeckError {
    /// Whether this is a data error in a card identity rather than a runtime failure.
    pub fn is_invalid_spec(&self) -> bool {
        matches!(
            self,
            DeckError::UnknownColor(_)
                | DeckError::UnknownSymbol(_)
                | DeckError::InvalidValue { .. }
                | DeckError::EmptyPalette(_)
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeckError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = DeckError::io(
            "uno_deck/red_7.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("uno_deck/red_7.png"), "{}", msg);
        assert!(!err.is_invalid_spec());
    }

    #[test]
    fn test_spec_errors_are_classified() {
        assert!(DeckError::UnknownColor("x".into()).is_invalid_spec());
        assert!(DeckError::UnknownSymbol("x".into()).is_invalid_spec());
        assert!(DeckError::InvalidValue {
            kind: CardKind::Number,
            value: "12".into()
        }
        .is_invalid_spec());
    }
}
