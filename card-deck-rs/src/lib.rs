#![doc = include_str!("../README.md")]

pub mod card;
pub mod deck;
pub mod design;
pub mod error;
pub mod tables;

pub use card::{CardKind, CardRenderer, CardSpec, CardValue};
pub use card_deck_canvas;
pub use deck::{
    enumerate_deck, generate_cards, generate_deck, write_card, DeckOptions, DeckReport,
    FailurePolicy, DEFAULT_OUTPUT_DIR,
};
pub use design::{CardDesign, ShadowClip};
pub use error::{DeckError, DeckResult};
