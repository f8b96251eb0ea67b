//! Deck enumeration and batch output.

use crate::card::{CardRenderer, CardSpec};
use crate::error::{DeckError, DeckResult};
use crate::tables::{ACTION_LABELS, SUIT_COLORS, WILD_LABELS};
use std::fs;
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "uno_deck";

/// Copies of each wild card in the deck.
const WILD_COPIES: u8 = 4;

/// The full 72-card deck in generation order.
///
/// Numbers 0-9 for every suit, then each action label twice per suit, then
/// four copies of each wild label.
pub fn enumerate_deck() -> Vec<CardSpec> {
    let mut deck = Vec::with_capacity(72);
    for color in SUIT_COLORS {
        deck.extend((0..=9).map(|n| CardSpec::number(color, n)));
    }
    for color in SUIT_COLORS {
        for label in ACTION_LABELS {
            deck.extend((0..2).map(|copy| CardSpec::action(color, label).with_copy(copy)));
        }
    }
    for label in WILD_LABELS {
        deck.extend((0..WILD_COPIES).map(|copy| CardSpec::wild(label).with_copy(copy)));
    }
    deck
}

/// What to do when a single card fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Record the failure and continue with the next card.
    Isolate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    pub output_dir: PathBuf,
    pub failure_policy: FailurePolicy,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl DeckOptions {
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct DeckReport {
    /// Files written, in generation order.
    pub written: Vec<PathBuf>,
    /// Cards that failed under [`FailurePolicy::Isolate`].
    pub failures: Vec<(CardSpec, DeckError)>,
}

impl DeckReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render one card and write it into `dir`, returning the written path.
pub fn write_card(
    renderer: &mut CardRenderer,
    spec: &CardSpec,
    dir: &Path,
) -> DeckResult<PathBuf> {
    let canvas = renderer.render(spec)?;
    let png = canvas.to_png()?;
    let path = dir.join(spec.file_name());
    fs::write(&path, png).map_err(|e| DeckError::io(&path, e))?;
    log::info!("Generated {}", path.display());
    Ok(path)
}

/// Render `specs` into `options.output_dir`, creating it if needed.
///
/// Existing files with the same names are overwritten.
pub fn generate_cards(
    options: &DeckOptions,
    renderer: &mut CardRenderer,
    specs: &[CardSpec],
) -> DeckResult<DeckReport> {
    let dir = &options.output_dir;
    fs::create_dir_all(dir).map_err(|e| DeckError::io(dir, e))?;

    let mut report = DeckReport::default();
    for spec in specs {
        match write_card(renderer, spec, dir) {
            Ok(path) => report.written.push(path),
            Err(err) => match options.failure_policy {
                FailurePolicy::Abort => return Err(err),
                FailurePolicy::Isolate => {
                    log::warn!("Skipping {}: {}", spec, err);
                    report.failures.push((spec.clone(), err));
                }
            },
        }
    }
    log::info!("Wrote {} card(s) to {}", report.written.len(), dir.display());
    Ok(report)
}

/// Render the full deck.
pub fn generate_deck(options: &DeckOptions, renderer: &mut CardRenderer) -> DeckResult<DeckReport> {
    generate_cards(options, renderer, &enumerate_deck())
}
